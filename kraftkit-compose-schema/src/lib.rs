//! Options consumed by the compose-file schema loader.
//!
//! The loader itself lives elsewhere; this crate only carries the toggles that
//! switch its stages on or off, the interpolation options, and the project
//! name together with how it was obtained.

pub mod interpolation;
mod options;
mod project;

pub use options::{
    with_resolve_paths, with_skip_interpolation, with_skip_normalization, with_skip_validation,
    LoaderOption, LoaderOptions,
};
pub use project::{normalize_project_name, ProjectName, COMPOSE_PROJECT_NAME};
