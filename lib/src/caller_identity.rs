use crate::bootstrap_resources::BootstrapResources;
use crate::error::BootstrapError;
use tracing::instrument;
use tracing::log::info;

#[derive(Clone, Debug, PartialEq)]
pub struct CallerIdentity {
    pub account_id: String,
    pub region: String,
}

pub struct CallerIdentityService;

impl CallerIdentityService {
    #[instrument(skip_all)]
    pub async fn resolve(resources: &BootstrapResources) -> Result<CallerIdentity, BootstrapError> {
        let region = resources
            .region
            .clone()
            .ok_or_else(|| BootstrapError::new("No region configured for profile", "Failed to resolve active region"))?;

        let output = resources
            .sts_client
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|error| BootstrapError::from_sdk(&error, "Failed to get caller identity"))?;

        let account_id = output
            .account()
            .map(|account| account.to_string())
            .ok_or_else(|| BootstrapError::new("GetCallerIdentity response has no Account", "Failed to resolve account id"))?;

        info!("Resolved account {account_id} in region {region}");

        Ok(CallerIdentity { account_id, region })
    }
}
