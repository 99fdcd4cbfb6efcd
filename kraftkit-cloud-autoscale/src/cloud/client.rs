//! KraftCloud autoscale client.
//!
//! A client is created once per invocation and scoped to a metro for each call.

use crate::cloud::auth::AuthConfig;
use crate::cloud::{CloudError, CloudResult};
use crate::types::{ApiResponse, DeletePolicyResponse, PolicyNameRef};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};

const AGENT: &str = concat!("kraftkit/", env!("CARGO_PKG_VERSION"));

/// Autoscale operations bound to a single metro.
#[async_trait]
pub trait ScopedAutoscaleService: Send + Sync {
    /// Delete the policy `name` attached to service group `uuid`.
    async fn delete_policy_by_name(
        &self,
        uuid: &str,
        name: &str,
    ) -> CloudResult<DeletePolicyResponse>;
}

/// Metro-independent autoscale client handle.
pub trait AutoscaleService: Send + Sync {
    fn with_metro(&self, metro: &str) -> Box<dyn ScopedAutoscaleService>;
}

/// [`AutoscaleService`] talking to the KraftCloud REST API.
#[derive(Clone)]
pub struct HttpAutoscaleClient {
    http: reqwest::Client,
    token: String,
}

impl HttpAutoscaleClient {
    pub fn new(auth: &AuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: auth.bearer_token(),
        }
    }
}

impl AutoscaleService for HttpAutoscaleClient {
    fn with_metro(&self, metro: &str) -> Box<dyn ScopedAutoscaleService> {
        Box::new(MetroClient {
            http: self.http.clone(),
            token: self.token.clone(),
            metro: metro.to_string(),
        })
    }
}

struct MetroClient {
    http: reqwest::Client,
    token: String,
    metro: String,
}

/// API base URL for a metro.
///
/// A metro given as a full `http(s)://` URL is used verbatim.
pub(crate) fn metro_base_url(metro: &str) -> CloudResult<String> {
    let metro = metro.trim();
    if metro.starts_with("http://") || metro.starts_with("https://") {
        return Ok(metro.trim_end_matches('/').to_string());
    }
    if metro.is_empty()
        || !metro
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return Err(CloudError::Config(format!("invalid metro '{metro}'")));
    }
    Ok(format!("https://api.{metro}.kraft.cloud/v1"))
}

#[async_trait]
impl ScopedAutoscaleService for MetroClient {
    async fn delete_policy_by_name(
        &self,
        uuid: &str,
        name: &str,
    ) -> CloudResult<DeletePolicyResponse> {
        let base_url = metro_base_url(&self.metro)?;
        let url = format!("{base_url}/services/{uuid}/autoscale/policies");
        let body = serde_json::to_vec(&[PolicyNameRef { name }])
            .map_err(|e| CloudError::Decode(format!("Failed to serialize request: {e}")))?;

        debug!("DELETE {url} (policy '{name}')");
        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, AGENT)
            .body(body)
            .send()
            .await
            .map_err(|e| CloudError::Http(format!("DELETE {url}: {e}")))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CloudError::Http(format!("Failed to read response body: {e}")))?;

        let envelope: ApiResponse<DeletePolicyResponse> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) if !(200..300).contains(&status) => {
                return Err(CloudError::Api {
                    status,
                    message: text.trim().to_string(),
                })
            }
            Err(e) => return Err(CloudError::Decode(e.to_string())),
        };

        envelope.into_result(status)?.check(status)
    }
}
