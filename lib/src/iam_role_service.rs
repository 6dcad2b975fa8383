use crate::bootstrap_resources::BootstrapResources;
use crate::error::BootstrapError;
use crate::monitor_role::MonitorRole;
use tracing::instrument;
use tracing::log::info;

pub struct IamRoleService;

impl IamRoleService {
    #[instrument(skip_all, fields(role = role.name))]
    pub async fn create_role(
        resources: &BootstrapResources,
        role: &MonitorRole,
        trust_policy: &str,
    ) -> Result<(), BootstrapError> {
        resources
            .iam_client
            .client
            .create_role()
            .role_name(role.name)
            .assume_role_policy_document(trust_policy)
            .description(role.description)
            .send()
            .await
            .map_err(|error| BootstrapError::from_sdk(&error, &format!("Failed to create role {}", role.name)))?;

        info!("Iam role {} created", role.name);

        Ok(())
    }

    #[instrument(skip_all, fields(role = role.name, policy = role.policy_name))]
    pub async fn put_inline_policy(
        resources: &BootstrapResources,
        role: &MonitorRole,
        policy: &str,
    ) -> Result<(), BootstrapError> {
        resources
            .iam_client
            .client
            .put_role_policy()
            .role_name(role.name)
            .policy_name(role.policy_name)
            .policy_document(policy)
            .send()
            .await
            .map_err(|error| BootstrapError::from_sdk(&error, &format!("Failed to put policy {} on role {}", role.policy_name, role.name)))?;

        info!("Inline policy {} attached to role {}", role.policy_name, role.name);

        Ok(())
    }
}
