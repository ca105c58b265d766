//! Robot vacuum cleaner change reports

use serde::{Deserialize, Serialize};

use crate::values::{CleanerOnlineStatus, CleanerWorkingStatus};

/// Context shared by the Robot Vacuum Cleaner S1 (`WoSweeper`) and S1 Plus
/// (`WoSweeperPlus`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweeperContext {
    pub device_type: String,
    pub device_mac: String,
    pub working_status: CleanerWorkingStatus,
    pub online_status: CleanerOnlineStatus,
    /// Remaining battery percentage
    pub battery: u8,
    pub time_of_sample: i64,
}
