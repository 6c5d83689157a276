use super::{AdminState, OperatingState, Tags};
use std::collections::HashMap;

/// Protocol specific connection properties, keyed by property name
pub type ProtocolProperties = HashMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub parent: String,
    pub description: String,
    pub admin_state: AdminState,
    pub operating_state: OperatingState,
    pub labels: Vec<String>,
    pub location: serde_json::Value,
    pub service_name: String,
    pub profile_name: String,
    pub auto_events: Vec<AutoEvent>,
    pub protocols: HashMap<String, ProtocolProperties>,
    pub tags: Tags,
    pub properties: HashMap<String, serde_json::Value>,
    pub created: i64,
    pub modified: i64,
}

/// Periodic reading schedule for one device resource or command
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AutoEvent {
    pub interval: String,
    pub on_change: bool,
    pub on_change_threshold: f64,
    pub source_name: String,
}
