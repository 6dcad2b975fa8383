use crate::arn;
use crate::bootstrap_resources::BootstrapResources;
use crate::caller_identity::CallerIdentityService;
use crate::error::BootstrapError;
use crate::iam_role_service::IamRoleService;
use crate::monitor_role::ES_MONITOR_ROLE;
use crate::policy_document::PolicyDocument;
use crate::sns_topic_service::SnsTopicService;
use crate::topic::{ALB_TOPIC, VPC_FLOW_LOG_TOPIC};
use std::io::Write;
use tracing::log::{error, info};

/// Identifiers of everything a successful run provisioned.
#[derive(Clone, Debug, PartialEq)]
pub struct BootstrapReport {
    pub account_id: String,
    pub region: String,
    pub vpc_topic_arn: String,
    pub alb_topic_arn: String,
    pub role_arn: String,
}

pub struct Bootstrap;

impl Bootstrap {
    /// Provisions the monitor topics, role and inline policy, one call after the other.
    ///
    /// Status lines go to `out`. The first failing step writes its error to `out` and ends the run;
    /// resources created before it are left in place.
    pub async fn run<W: Write>(
        resources: &BootstrapResources,
        out: &mut W,
    ) -> Result<BootstrapReport, BootstrapError> {
        info!("Starting es monitor bootstrap...");

        let identity = Self::step(out, CallerIdentityService::resolve(resources).await)?;

        for topic in [VPC_FLOW_LOG_TOPIC, ALB_TOPIC] {
            Self::step(out, SnsTopicService::create(resources, &topic).await)?;
            Self::status(out, &format!("Created {} SNS topic", topic.label))?;
        }

        let trust_policy = Self::step(out, PolicyDocument::trust_policy().to_json())?;

        let vpc_topic_arn = arn::sns_topic(&identity.region, &identity.account_id, VPC_FLOW_LOG_TOPIC.name);
        Self::status(out, &format!("Your VPC RCF SNS Topic is {vpc_topic_arn}"))?;
        let alb_topic_arn = arn::sns_topic(&identity.region, &identity.account_id, ALB_TOPIC.name);
        Self::status(out, &format!("Your ALB RCF SNS Topic is {alb_topic_arn}"))?;

        let publish_policy = Self::step(out, PolicyDocument::publish_policy(&[vpc_topic_arn.clone(), alb_topic_arn.clone()]).to_json())?;

        Self::step(out, IamRoleService::create_role(resources, &ES_MONITOR_ROLE, &trust_policy).await)?;
        Self::status(out, "ES IAM Role created")?;

        tokio::time::sleep(resources.role_propagation_delay()).await;

        Self::step(out, IamRoleService::put_inline_policy(resources, &ES_MONITOR_ROLE, &publish_policy).await)?;
        Self::status(out, "Policy attached to role")?;

        let role_arn = arn::iam_role(&identity.account_id, ES_MONITOR_ROLE.name);

        tokio::time::sleep(resources.policy_propagation_delay()).await;

        Self::status(out, &format!("Your IAM Role for ES Monitors is {role_arn}"))?;

        info!("Es monitor bootstrap finished!");

        Ok(BootstrapReport {
            account_id: identity.account_id,
            region: identity.region,
            vpc_topic_arn,
            alb_topic_arn,
            role_arn,
        })
    }

    fn step<T, W: Write>(
        out: &mut W,
        result: Result<T, BootstrapError>,
    ) -> Result<T, BootstrapError> {
        result.map_err(|bootstrap_error| {
            let description = match &bootstrap_error.message {
                Some(message) => format!("{message} - Cause: {}", bootstrap_error.cause),
                None => bootstrap_error.cause.clone(),
            };

            error!("{description}");
            if let Err(write_error) = writeln!(out, "{description}") {
                error!("Failed to write error to output: {write_error}");
            }

            bootstrap_error
        })
    }

    fn status<W: Write>(
        out: &mut W,
        line: &str,
    ) -> Result<(), BootstrapError> {
        writeln!(out, "{line}").map_err(|error| BootstrapError::new(&error.to_string(), "Failed to write status line"))
    }
}
