//! Removal of autoscale policies.
//!
//! Runs in two phases like every cloud subcommand: [`RemoveOptions::pre`]
//! checks the arguments and resolves the metro, [`RemoveOptions::run`]
//! resolves credentials and the client (unless already attached) and issues
//! exactly one delete call.

use crate::cloud::auth::{AuthConfig, CredentialProvider};
use crate::cloud::client::{AutoscaleService, HttpAutoscaleClient};
use crate::config::{resolve_setting, KRAFTCLOUD_METRO};
use crate::error::{AutoscaleError, AutoscaleResult};
use crate::utils::is_uuid;
use log::debug;
use std::sync::Arc;

/// Options of `kraft cloud scale remove`.
///
/// `auth` and `client` may be attached up front; otherwise they are resolved
/// on first use and kept for the rest of the invocation.
#[derive(Default)]
pub struct RemoveOptions {
    pub auth: Option<AuthConfig>,
    pub client: Option<Arc<dyn AutoscaleService>>,
    pub metro: String,
}

impl RemoveOptions {
    /// Validate the positional arguments and resolve the metro.
    ///
    /// The metro comes from `metro_flag`, then `KRAFTCLOUD_METRO`.
    pub fn pre(&mut self, args: &[String], metro_flag: Option<&str>) -> AutoscaleResult<()> {
        if args.len() < 2 {
            return Err(AutoscaleError::MissingArguments);
        }

        self.metro =
            resolve_setting(metro_flag, KRAFTCLOUD_METRO).ok_or(AutoscaleError::MetroUnset)?;

        debug!("using metro={}", self.metro);

        Ok(())
    }

    /// Delete the policy `args[1]` of service group `args[0]`.
    pub async fn run(
        &mut self,
        credentials: &dyn CredentialProvider,
        args: &[String],
    ) -> AutoscaleResult<()> {
        let [uuid, name, ..] = args else {
            return Err(AutoscaleError::MissingArguments);
        };
        if self.metro.is_empty() {
            return Err(AutoscaleError::MetroUnset);
        }

        if !is_uuid(uuid) {
            return Err(AutoscaleError::InvalidUuid(uuid.clone()));
        }

        let auth = match self.auth.take() {
            Some(auth) => auth,
            None => credentials
                .resolve()
                .await
                .map_err(AutoscaleError::Credentials)?,
        };

        let client = match &self.client {
            Some(client) => Arc::clone(client),
            None => Arc::new(HttpAutoscaleClient::new(&auth)) as Arc<dyn AutoscaleService>,
        };
        self.auth = Some(auth);
        self.client = Some(Arc::clone(&client));

        let response = client
            .with_metro(&self.metro)
            .delete_policy_by_name(uuid, name)
            .await
            .map_err(AutoscaleError::DeletePolicy)?;

        debug!(
            "deleted {} policy(ies) from service group {}",
            response.policies.len(),
            uuid
        );

        Ok(())
    }
}
