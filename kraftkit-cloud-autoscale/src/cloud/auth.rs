//! KraftCloud credential resolution.
//!
//! Credentials come from the environment (`KRAFTCLOUD_TOKEN`, optionally
//! `KRAFTCLOUD_USER`) or from the kraftkit `auth.json` file. The environment
//! always wins over the file.

use crate::cloud::{CloudError, CloudResult};
use crate::config::{env_value, KRAFTCLOUD_TOKEN, KRAFTCLOUD_USER, KRAFTKIT_CONFIG_DIR};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Registry endpoint KraftCloud tokens are stored under.
pub const DEFAULT_AUTH_ENDPOINT: &str = "index.unikraft.io";

const AUTH_FILE_NAME: &str = "auth.json";

/// Authentication bundle for the KraftCloud API.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub user: Option<String>,
    pub token: String,
    pub endpoint: String,
}

impl AuthConfig {
    pub fn new(user: Option<String>, token: impl Into<String>) -> Self {
        Self {
            user: user.filter(|u| !u.is_empty()),
            token: token.into(),
            endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
        }
    }

    /// Token sent as `Authorization: Bearer <token>`.
    ///
    /// A user-qualified token is sent as `base64(user:token)`.
    pub fn bearer_token(&self) -> String {
        match &self.user {
            Some(user) => STANDARD.encode(format!("{}:{}", user, self.token)),
            None => self.token.clone(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Source of KraftCloud credentials.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn resolve(&self) -> CloudResult<AuthConfig>;
}

fn missing_token() -> CloudError {
    CloudError::Credentials(format!(
        "could not determine kraftcloud user token: try setting `{}`",
        KRAFTCLOUD_TOKEN
    ))
}

/// Reads `KRAFTCLOUD_TOKEN` and `KRAFTCLOUD_USER`.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    fn lookup(&self) -> Option<AuthConfig> {
        let token = env_value(KRAFTCLOUD_TOKEN)?;
        Some(AuthConfig::new(env_value(KRAFTCLOUD_USER), token))
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn resolve(&self) -> CloudResult<AuthConfig> {
        self.lookup().ok_or_else(missing_token)
    }
}

#[derive(Debug, Deserialize)]
struct AuthFile {
    #[serde(default)]
    auth: HashMap<String, AuthEntry>,
}

#[derive(Debug, Deserialize)]
struct AuthEntry {
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    token: String,
}

/// Reads the entry for one endpoint out of a kraftkit `auth.json` file.
#[derive(Debug, Clone)]
pub struct FileCredentialProvider {
    path: Option<PathBuf>,
    endpoint: String,
}

impl FileCredentialProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
        }
    }

    /// Provider for the default file location, if one can be determined.
    pub fn from_default_location() -> Self {
        Self {
            path: default_auth_file(),
            endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    async fn lookup(&self) -> CloudResult<Option<AuthConfig>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CloudError::Credentials(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        let file: AuthFile = serde_json::from_str(&contents).map_err(|e| {
            CloudError::Credentials(format!("Failed to parse {}: {e}", path.display()))
        })?;

        Ok(file
            .auth
            .get(&self.endpoint)
            .filter(|entry| !entry.token.is_empty())
            .map(|entry| AuthConfig {
                user: entry.user.clone().filter(|u| !u.is_empty()),
                token: entry.token.clone(),
                endpoint: self.endpoint.clone(),
            }))
    }
}

#[async_trait]
impl CredentialProvider for FileCredentialProvider {
    async fn resolve(&self) -> CloudResult<AuthConfig> {
        self.lookup().await?.ok_or_else(missing_token)
    }
}

/// Environment first, then the auth file.
#[derive(Debug, Clone)]
pub struct DefaultCredentialProvider {
    env: EnvCredentialProvider,
    file: FileCredentialProvider,
}

impl DefaultCredentialProvider {
    pub fn new() -> Self {
        Self::with_file(FileCredentialProvider::from_default_location())
    }

    pub fn with_file(file: FileCredentialProvider) -> Self {
        Self {
            env: EnvCredentialProvider,
            file,
        }
    }
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialProvider for DefaultCredentialProvider {
    async fn resolve(&self) -> CloudResult<AuthConfig> {
        if let Some(auth) = self.env.lookup() {
            debug!("using credentials from {}", KRAFTCLOUD_TOKEN);
            return Ok(auth);
        }
        if let Some(auth) = self.file.lookup().await? {
            if let Some(path) = self.file.path() {
                debug!("using credentials from {}", path.display());
            }
            return Ok(auth);
        }
        Err(missing_token())
    }
}

/// `$KRAFTKIT_CONFIG_DIR/auth.json`, else the XDG config dir, else `~/.config/kraftkit`.
fn default_auth_file() -> Option<PathBuf> {
    let dir = env_value(KRAFTKIT_CONFIG_DIR)
        .map(PathBuf::from)
        .or_else(|| env_value("XDG_CONFIG_HOME").map(|d| PathBuf::from(d).join("kraftkit")))
        .or_else(|| env_value("HOME").map(|h| PathBuf::from(h).join(".config").join("kraftkit")))?;
    Some(dir.join(AUTH_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::io::Write;

    fn clear_env() {
        env::remove_var(KRAFTCLOUD_TOKEN);
        env::remove_var(KRAFTCLOUD_USER);
    }

    fn auth_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write auth file");
        file
    }

    #[test]
    fn test_bearer_token_without_user_is_raw() {
        let auth = AuthConfig::new(None, "secret");
        assert_eq!(auth.bearer_token(), "secret");
    }

    #[test]
    fn test_bearer_token_with_user_is_encoded() {
        let auth = AuthConfig::new(Some("robot".to_string()), "secret");
        assert_eq!(auth.bearer_token(), STANDARD.encode("robot:secret"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let auth = AuthConfig::new(Some("robot".to_string()), "secret");
        let printed = format!("{auth:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("robot"));
    }

    #[tokio::test]
    #[serial]
    async fn test_env_provider() {
        clear_env();
        env::set_var(KRAFTCLOUD_TOKEN, "tok");
        env::set_var(KRAFTCLOUD_USER, "robot");
        let auth = EnvCredentialProvider.resolve().await.expect("credentials");
        assert_eq!(auth.token, "tok");
        assert_eq!(auth.user.as_deref(), Some("robot"));
        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_env_provider_missing_token() {
        clear_env();
        let err = EnvCredentialProvider.resolve().await.expect_err("no token");
        assert!(err.to_string().contains("KRAFTCLOUD_TOKEN"));
    }

    #[tokio::test]
    async fn test_file_provider_reads_endpoint_entry() {
        let file = auth_file(
            r#"{"auth":{"index.unikraft.io":{"user":"robot","token":"filetok"},"other":{"token":"x"}}}"#,
        );
        let auth = FileCredentialProvider::new(file.path())
            .resolve()
            .await
            .expect("credentials");
        assert_eq!(auth.token, "filetok");
        assert_eq!(auth.user.as_deref(), Some("robot"));
        assert_eq!(auth.endpoint, DEFAULT_AUTH_ENDPOINT);
    }

    #[tokio::test]
    async fn test_file_provider_custom_endpoint() {
        let file = auth_file(r#"{"auth":{"other":{"token":"x"}}}"#);
        let auth = FileCredentialProvider::new(file.path())
            .with_endpoint("other")
            .resolve()
            .await
            .expect("credentials");
        assert_eq!(auth.token, "x");
        assert_eq!(auth.user, None);
    }

    #[tokio::test]
    async fn test_file_provider_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let provider = FileCredentialProvider::new(dir.path().join("auth.json"));
        let err = provider.resolve().await.expect_err("no file");
        assert!(err.to_string().contains("could not determine kraftcloud user token"));
    }

    #[tokio::test]
    async fn test_file_provider_malformed_file() {
        let file = auth_file("{not json");
        let err = FileCredentialProvider::new(file.path())
            .resolve()
            .await
            .expect_err("malformed");
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[tokio::test]
    #[serial]
    async fn test_default_provider_prefers_environment() {
        clear_env();
        env::set_var(KRAFTCLOUD_TOKEN, "envtok");
        let file = auth_file(r#"{"auth":{"index.unikraft.io":{"token":"filetok"}}}"#);
        let provider = DefaultCredentialProvider::with_file(FileCredentialProvider::new(file.path()));
        let auth = provider.resolve().await.expect("credentials");
        assert_eq!(auth.token, "envtok");
        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_default_provider_falls_back_to_file() {
        clear_env();
        let file = auth_file(r#"{"auth":{"index.unikraft.io":{"token":"filetok"}}}"#);
        let provider = DefaultCredentialProvider::with_file(FileCredentialProvider::new(file.path()));
        let auth = provider.resolve().await.expect("credentials");
        assert_eq!(auth.token, "filetok");
    }

    #[test]
    #[serial]
    fn test_default_auth_file_honours_config_dir() {
        env::set_var(KRAFTKIT_CONFIG_DIR, "/tmp/kraftkit-test");
        assert_eq!(
            default_auth_file(),
            Some(PathBuf::from("/tmp/kraftkit-test/auth.json"))
        );
        env::remove_var(KRAFTKIT_CONFIG_DIR);
    }
}
