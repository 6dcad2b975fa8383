pub mod arn;
pub mod aws;
pub mod bootstrap;
pub mod bootstrap_resources;
pub mod caller_identity;
pub mod environment;
pub mod error;
pub mod iam_role_service;
pub mod monitor_role;
pub mod policy_document;
pub mod sns_topic_service;
pub mod topic;
