//! Loader options and the functional setters accepted by the loader.

use crate::interpolation;
use crate::project::ProjectName;
use std::path::Path;

/// Options supported by the loader. Every toggle defaults to `false`.
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Skip schema validation
    pub skip_validation: bool,
    /// Skip interpolation
    pub skip_interpolation: bool,
    /// Skip normalization
    pub skip_normalization: bool,
    /// Resolve relative paths against the working directory
    pub resolve_paths: bool,
    /// Skip the cross-service consistency check
    pub skip_consistency_check: bool,
    /// Interpolation options
    pub interpolate: Option<interpolation::Options>,
    project: ProjectName,
}

/// Mutates [`LoaderOptions`] before a load, e.g. [`with_skip_validation`].
pub type LoaderOption = fn(&mut LoaderOptions);

impl LoaderOptions {
    /// Defaults with `options` applied in order.
    pub fn with_options(options: &[LoaderOption]) -> Self {
        let mut opts = Self::default();
        for apply in options {
            apply(&mut opts);
        }
        opts
    }

    /// Normalize and store the project name together with its provenance.
    pub fn set_project_name(&mut self, name: &str, imperatively_set: bool) {
        self.project = ProjectName::new(name, imperatively_set);
    }

    /// The project name and whether it was set imperatively.
    pub fn project_name(&self) -> (&str, bool) {
        (self.project.name(), self.project.imperatively_set())
    }

    /// Fill in the project name for `working_dir` unless one was set imperatively.
    ///
    /// Returns the resulting name; empty when nothing could be inferred.
    pub fn resolve_project_name(&mut self, working_dir: &Path) -> &str {
        if !self.project.imperatively_set() {
            if let Some(inferred) = ProjectName::infer(working_dir) {
                self.project = inferred;
            }
        }
        self.project.name()
    }
}

/// Sets the LoaderOptions to skip validation when loading sections
pub fn with_skip_validation(opts: &mut LoaderOptions) {
    opts.skip_validation = true;
}

pub fn with_skip_interpolation(opts: &mut LoaderOptions) {
    opts.skip_interpolation = true;
}

pub fn with_skip_normalization(opts: &mut LoaderOptions) {
    opts.skip_normalization = true;
}

pub fn with_resolve_paths(opts: &mut LoaderOptions) {
    opts.resolve_paths = true;
}
