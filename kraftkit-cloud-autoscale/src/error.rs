//! Error types surfaced by the autoscale commands.

use crate::cloud::CloudError;
use thiserror::Error;

/// Errors returned by [`RemoveOptions`](crate::RemoveOptions).
///
/// The first three variants are detected locally and never reach the network.
#[derive(Error, Debug)]
pub enum AutoscaleError {
    #[error("specify service group UUID and policy name")]
    MissingArguments,

    #[error("kraftcloud metro is unset")]
    MetroUnset,

    #[error("specify a valid service group UUID")]
    InvalidUuid(String),

    #[error("could not retrieve credentials: {0}")]
    Credentials(CloudError),

    #[error("could not delete policy: {0}")]
    DeletePolicy(CloudError),
}

impl AutoscaleError {
    /// Whether the failure was caught before any remote collaborator was contacted.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingArguments | Self::MetroUnset | Self::InvalidUuid(_)
        )
    }
}

pub type AutoscaleResult<T> = Result<T, AutoscaleError>;
