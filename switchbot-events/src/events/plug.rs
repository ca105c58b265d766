//! Plug Mini change reports

use serde::{Deserialize, Serialize};

use crate::values::PowerState;

/// Context shared by the regional Plug Mini variants (`WoPlugUS`,
/// `WoPlugJP`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlugContext {
    pub device_type: String,
    pub device_mac: String,
    pub power_state: PowerState,
    pub time_of_sample: i64,
}
