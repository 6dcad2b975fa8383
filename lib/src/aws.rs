use crate::environment::Environment;
use aws_config::default_provider::credentials::DefaultCredentialsChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use std::borrow::Cow;

/// Loads the shared AWS configuration for the named credential profile.
pub async fn load_profile_config(profile_name: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest()).profile_name(profile_name).load().await
}

/// Endpoint override used to point every client at a local emulator.
#[derive(Clone, Debug)]
pub struct LocalEndpoint {
    pub url: String,
    pub region: Option<Region>,
}

impl LocalEndpoint {
    pub fn from_env() -> Option<Self> {
        Environment::optional_string("LOCAL_ENDPOINT").map(|url| Self {
            url,
            region: Environment::optional_string("LOCAL_REGION").map(|region| Region::new(Cow::Owned(region))),
        })
    }
}

/// Region the clients send requests to, honoring the local override.
pub fn effective_region(aws_config: &SdkConfig) -> Option<String> {
    match LocalEndpoint::from_env() {
        Some(LocalEndpoint { region: Some(region), .. }) => Some(region.to_string()),
        _ => aws_config.region().map(|region| region.to_string()),
    }
}

#[derive(Clone)]
pub struct SnsClient {
    pub client: aws_sdk_sns::Client,
}

#[derive(Clone)]
pub struct IamClient {
    pub client: aws_sdk_iam::Client,
}

#[derive(Clone)]
pub struct StsClient {
    pub client: aws_sdk_sts::Client,
}

impl SnsClient {
    pub async fn new(
        aws_config: &SdkConfig,
        profile_name: &str,
    ) -> SnsClient {
        let client = match LocalEndpoint::from_env() {
            None => aws_sdk_sns::Client::new(aws_config),
            Some(local) => aws_sdk_sns::Client::from_conf(
                aws_sdk_sns::config::Builder::from(aws_config)
                    .endpoint_url(local.url)
                    .region(local.region.or_else(|| aws_config.region().cloned()))
                    .credentials_provider(DefaultCredentialsChain::builder().profile_name(profile_name).build().await)
                    .build(),
            ),
        };

        SnsClient { client }
    }
}

impl IamClient {
    pub async fn new(
        aws_config: &SdkConfig,
        profile_name: &str,
    ) -> IamClient {
        let client = match LocalEndpoint::from_env() {
            None => aws_sdk_iam::Client::new(aws_config),
            Some(local) => aws_sdk_iam::Client::from_conf(
                aws_sdk_iam::config::Builder::from(aws_config)
                    .endpoint_url(local.url)
                    .region(local.region.or_else(|| aws_config.region().cloned()))
                    .credentials_provider(DefaultCredentialsChain::builder().profile_name(profile_name).build().await)
                    .build(),
            ),
        };

        IamClient { client }
    }
}

impl StsClient {
    pub async fn new(
        aws_config: &SdkConfig,
        profile_name: &str,
    ) -> StsClient {
        let client = match LocalEndpoint::from_env() {
            None => aws_sdk_sts::Client::new(aws_config),
            Some(local) => aws_sdk_sts::Client::from_conf(
                aws_sdk_sts::config::Builder::from(aws_config)
                    .endpoint_url(local.url)
                    .region(local.region.or_else(|| aws_config.region().cloned()))
                    .credentials_provider(DefaultCredentialsChain::builder().profile_name(profile_name).build().await)
                    .build(),
            ),
        };

        StsClient { client }
    }
}
