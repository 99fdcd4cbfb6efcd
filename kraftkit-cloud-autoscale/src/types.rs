//! Wire types of the KraftCloud autoscale API.

use crate::cloud::{CloudError, CloudResult};
use serde::{Deserialize, Serialize};

const STATUS_SUCCESS: &str = "success";

/// Envelope wrapping every KraftCloud API response.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEntry {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request item naming a policy to delete.
#[derive(Debug, Serialize)]
pub(crate) struct PolicyNameRef<'a> {
    pub name: &'a str,
}

/// Result of a successful `delete_policy_by_name` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePolicyResponse {
    #[serde(default)]
    pub policies: Vec<DeletedPolicy>,
}

/// Per-policy outcome reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedPolicy {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning error envelopes into [`CloudError::Api`].
    pub(crate) fn into_result(self, http_status: u16) -> CloudResult<T> {
        let ok_http = (200..300).contains(&http_status);
        if !ok_http || self.status != STATUS_SUCCESS {
            let status = self
                .errors
                .iter()
                .find_map(|e| e.status)
                .unwrap_or(http_status);
            return Err(CloudError::Api {
                status,
                message: self.error_message(),
            });
        }

        self.data
            .ok_or_else(|| CloudError::Decode("response carried no data".to_string()))
    }

    fn error_message(&self) -> String {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_string();
        }
        let details: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.message.as_deref())
            .collect();
        if details.is_empty() {
            format!("unexpected response status '{}'", self.status)
        } else {
            details.join("; ")
        }
    }
}

impl DeletePolicyResponse {
    /// Fail when any policy in the batch was not deleted.
    pub(crate) fn check(self, http_status: u16) -> CloudResult<Self> {
        if let Some(failed) = self.policies.iter().find(|p| p.status != STATUS_SUCCESS) {
            let message = failed
                .message
                .clone()
                .unwrap_or_else(|| format!("policy '{}' was not deleted", failed.name));
            return Err(CloudError::Api {
                status: http_status,
                message,
            });
        }
        Ok(self)
    }
}
