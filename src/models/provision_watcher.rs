use super::{AdminState, AutoEvent};
use std::collections::HashMap;

/// Matches discovered devices against identifiers and provisions them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProvisionWatcher {
    pub id: String,
    pub name: String,
    pub service_name: String,
    pub labels: Vec<String>,
    pub identifiers: HashMap<String, String>,
    pub blocking_identifiers: HashMap<String, Vec<String>>,
    pub admin_state: AdminState,
    pub discovered_device: DiscoveredDevice,
    pub created: i64,
    pub modified: i64,
}

/// Template applied to devices provisioned by a watcher
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscoveredDevice {
    pub profile_name: String,
    pub admin_state: AdminState,
    pub auto_events: Vec<AutoEvent>,
    pub properties: HashMap<String, serde_json::Value>,
}
