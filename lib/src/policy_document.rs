use crate::error::BootstrapError;
use serde::{Deserialize, Serialize};

pub const POLICY_VERSION: &str = "2012-10-17";
pub const SEARCH_SERVICE_PRINCIPAL: &str = "es.amazonaws.com";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub effect: Effect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Principal {
    pub service: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Action {
    Single(String),
    Many(Vec<String>),
}

impl PolicyDocument {
    /// Lets the search service assume the monitor role.
    pub fn trust_policy() -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![PolicyStatement {
                effect: Effect::Allow,
                principal: Some(Principal {
                    service: SEARCH_SERVICE_PRINCIPAL.to_string(),
                }),
                action: Action::Single("sts:AssumeRole".to_string()),
                resource: None,
            }],
        }
    }

    pub fn publish_policy(topic_arns: &[String]) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![PolicyStatement {
                effect: Effect::Allow,
                principal: None,
                action: Action::Many(vec!["sns:Publish".to_string()]),
                resource: Some(topic_arns.to_vec()),
            }],
        }
    }

    pub fn to_json(&self) -> Result<String, BootstrapError> {
        serde_json::to_string(self).map_err(|error| BootstrapError::new(&error.to_string(), "Failed to serialize policy document"))
    }
}
