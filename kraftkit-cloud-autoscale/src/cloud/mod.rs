//! KraftCloud integration: credentials and the metro-scoped autoscale client.

pub mod auth;
pub mod client;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudError {
    #[error("KraftCloud configuration error: {0}")]
    Config(String),
    #[error("{0}")]
    Credentials(String),
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

pub type CloudResult<T> = Result<T, CloudError>;
