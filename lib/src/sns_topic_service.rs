use crate::bootstrap_resources::BootstrapResources;
use crate::error::BootstrapError;
use crate::topic::MonitorTopic;
use tracing::instrument;
use tracing::log::info;

pub struct SnsTopicService;

impl SnsTopicService {
    #[instrument(skip_all, fields(topic = topic.name))]
    pub async fn create(
        resources: &BootstrapResources,
        topic: &MonitorTopic,
    ) -> Result<(), BootstrapError> {
        resources
            .sns_client
            .client
            .create_topic()
            .name(topic.name)
            .set_attributes(Some(topic.attributes()))
            .send()
            .await
            .map_err(|error| BootstrapError::from_sdk(&error, &format!("Failed to create sns topic {}", topic.name)))?;

        info!("Sns topic {} created", topic.name);

        Ok(())
    }
}
