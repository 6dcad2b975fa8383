use std::collections::HashMap;

/// Default SNS managed key.
pub const SNS_DEFAULT_KMS_KEY: &str = "alias/aws/sns";

#[derive(Clone, Debug, PartialEq)]
pub struct MonitorTopic {
    pub name: &'static str,
    pub display_name: &'static str,
    pub kms_master_key_id: &'static str,
    pub label: &'static str,
}

pub const VPC_FLOW_LOG_TOPIC: MonitorTopic = MonitorTopic {
    name: "es-monitor-vpc-rcf",
    display_name: "es-monitor-vpc-rcf",
    kms_master_key_id: SNS_DEFAULT_KMS_KEY,
    label: "VPC Flow log",
};

pub const ALB_TOPIC: MonitorTopic = MonitorTopic {
    name: "es-monitor-alb-rcf",
    display_name: "es-monitor-alb-rcf",
    kms_master_key_id: SNS_DEFAULT_KMS_KEY,
    label: "ALB",
};

impl MonitorTopic {
    pub fn attributes(&self) -> HashMap<String, String> {
        HashMap::from([
            ("KmsMasterKeyId".to_string(), self.kms_master_key_id.to_string()),
            ("DisplayName".to_string(), self.display_name.to_string()),
        ])
    }
}
