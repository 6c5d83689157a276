use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Open-ended key/value metadata attached to many resources
pub type Tags = HashMap<String, serde_json::Value>;

/// Administrative state of a device, device service or provision watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdminState {
    Locked,
    #[default]
    Unlocked,
}

/// Operating state of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperatingState {
    #[default]
    Up,
    Down,
    Unknown,
}

/// Access mode of a device resource or command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum ReadWrite {
    #[default]
    #[serde(rename = "R")]
    Read,
    #[serde(rename = "W")]
    Write,
    #[serde(rename = "RW")]
    ReadWrite,
    #[serde(rename = "WR")]
    WriteRead,
}
