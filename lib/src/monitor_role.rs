#[derive(Clone, Debug, PartialEq)]
pub struct MonitorRole {
    pub name: &'static str,
    pub description: &'static str,
    pub policy_name: &'static str,
}

pub const ES_MONITOR_ROLE: MonitorRole = MonitorRole {
    name: "ES-Monitor-SNS",
    description: "Allows Elasticsearch Service monitors to send messages to SNS",
    policy_name: "ES-Monitor-SNS-Policy",
};
