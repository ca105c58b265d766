//! Motion and contact sensor change reports

use serde::{Deserialize, Serialize};

use crate::values::{AmbientBrightness, DetectionState, DoorMode};

/// Context of a Motion Sensor change report (`WoPresence`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionSensorContext {
    pub device_type: String,
    pub device_mac: String,
    pub detection_state: DetectionState,
    pub time_of_sample: i64,
}

/// Context of a Contact Sensor change report (`WoContact`)
///
/// `open_state` is vendor-documented as an open set (`open`, `close`,
/// `timeOutNotClose`, possibly more) and is passed through as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSensorContext {
    pub device_type: String,
    pub device_mac: String,
    pub detection_state: DetectionState,
    pub door_mode: DoorMode,
    /// Ambient light level at the time of the report
    pub brightness: AmbientBrightness,
    pub open_state: String,
    pub time_of_sample: i64,
}
