//! This crate provides the core logic behind `kraft cloud scale`:
//! - Credential resolution from the environment and the kraftkit auth file
//! - Metro resolution (flag, then `KRAFTCLOUD_METRO`)
//! - An autoscale client scoped per metro, with an HTTP implementation
//! - The guarded removal of autoscale policies
//!

mod cloud;
pub mod commands;
pub mod config;
mod error;
mod types;
mod utils;

// Re-exports for a small, focused public API
pub use cloud::auth::{
    AuthConfig, CredentialProvider, DefaultCredentialProvider, EnvCredentialProvider,
    FileCredentialProvider, DEFAULT_AUTH_ENDPOINT,
};
pub use cloud::client::{AutoscaleService, HttpAutoscaleClient, ScopedAutoscaleService};
pub use cloud::{CloudError, CloudResult};
pub use commands::RemoveOptions;
pub use error::{AutoscaleError, AutoscaleResult};
pub use types::{DeletePolicyResponse, DeletedPolicy};
pub use utils::is_uuid;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_uuid_check() {
        assert!(is_uuid("fd1684ea-7970-4994-92d6-61dcc7905f2b"));
        assert!(!is_uuid("my-instance-431342"));
    }
}
