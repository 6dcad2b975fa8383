use crate::aws::{effective_region, load_profile_config, IamClient, SnsClient, StsClient};
use crate::environment::Environment;
use crate::error::BootstrapError;
use std::time::Duration;

pub const DEFAULT_ROLE_PROPAGATION_DELAY_IN_SECONDS: u64 = 7;
pub const DEFAULT_POLICY_PROPAGATION_DELAY_IN_SECONDS: u64 = 2;

#[derive(Clone)]
pub struct BootstrapResources {
    pub sns_client: SnsClient,
    pub iam_client: IamClient,
    pub sts_client: StsClient,
    pub region: Option<String>,
    pub role_propagation_delay_in_seconds: Option<u64>,
    pub policy_propagation_delay_in_seconds: Option<u64>,
}

impl BootstrapResources {
    pub fn new(
        sns_client: SnsClient,
        iam_client: IamClient,
        sts_client: StsClient,
        region: Option<String>,
    ) -> Self {
        Self {
            sns_client,
            iam_client,
            sts_client,
            region,
            role_propagation_delay_in_seconds: None,
            policy_propagation_delay_in_seconds: None,
        }
    }

    /// Resources for the named profile, with delays taken from the environment.
    pub async fn from_profile(profile_name: &str) -> Result<Self, BootstrapError> {
        let aws_config = load_profile_config(profile_name).await;

        let sns_client = SnsClient::new(&aws_config, profile_name).await;
        let iam_client = IamClient::new(&aws_config, profile_name).await;
        let sts_client = StsClient::new(&aws_config, profile_name).await;

        let resources = Self::new(sns_client, iam_client, sts_client, effective_region(&aws_config))
            .with_role_propagation_delay_in_seconds(Environment::u64(
                "ROLE_PROPAGATION_DELAY_IN_SECONDS",
                DEFAULT_ROLE_PROPAGATION_DELAY_IN_SECONDS,
            )?)
            .with_policy_propagation_delay_in_seconds(Environment::u64(
                "POLICY_PROPAGATION_DELAY_IN_SECONDS",
                DEFAULT_POLICY_PROPAGATION_DELAY_IN_SECONDS,
            )?);

        Ok(resources)
    }

    pub fn with_role_propagation_delay_in_seconds(
        self,
        role_propagation_delay_in_seconds: u64,
    ) -> Self {
        Self {
            role_propagation_delay_in_seconds: Some(role_propagation_delay_in_seconds),
            ..self
        }
    }

    pub fn with_policy_propagation_delay_in_seconds(
        self,
        policy_propagation_delay_in_seconds: u64,
    ) -> Self {
        Self {
            policy_propagation_delay_in_seconds: Some(policy_propagation_delay_in_seconds),
            ..self
        }
    }

    pub fn role_propagation_delay(&self) -> Duration {
        Duration::from_secs(self.role_propagation_delay_in_seconds.unwrap_or(DEFAULT_ROLE_PROPAGATION_DELAY_IN_SECONDS))
    }

    pub fn policy_propagation_delay(&self) -> Duration {
        Duration::from_secs(self.policy_propagation_delay_in_seconds.unwrap_or(DEFAULT_POLICY_PROPAGATION_DELAY_IN_SECONDS))
    }
}
