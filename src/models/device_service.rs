use super::AdminState;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceService {
    pub id: String,
    pub name: String,
    pub description: String,
    pub last_connected: i64,
    pub last_reported: i64,
    pub labels: Vec<String>,
    pub base_address: String,
    pub admin_state: AdminState,
    pub properties: HashMap<String, serde_json::Value>,
    pub created: i64,
    pub modified: i64,
}
