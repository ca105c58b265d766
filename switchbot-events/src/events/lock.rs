//! Lock change reports

use serde::{Deserialize, Serialize};

use crate::values::LockState;

/// Context of a Lock change report (`WoLock`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockContext {
    pub device_type: String,
    pub device_mac: String,
    pub lock_state: LockState,
    pub time_of_sample: i64,
}
