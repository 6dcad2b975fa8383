//! Resource identifiers built by concatenation, never read back from the creation calls.

const PARTITION: &str = "aws";

pub fn sns_topic(
    region: &str,
    account_id: &str,
    topic_name: &str,
) -> String {
    format!("arn:{PARTITION}:sns:{region}:{account_id}:{topic_name}")
}

pub fn iam_role(
    account_id: &str,
    role_name: &str,
) -> String {
    format!("arn:{PARTITION}:iam::{account_id}:role/{role_name}")
}
