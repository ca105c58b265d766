//! Indoor Cam and Pan/Tilt Cam change reports

use serde::{Deserialize, Serialize};

use crate::values::DetectionState;

/// Context shared by the Indoor Cam (`WoCamera`) and Pan/Tilt Cam
/// (`WoPanTiltCam`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraContext {
    pub device_type: String,
    pub device_mac: String,
    pub detection_state: DetectionState,
    pub time_of_sample: i64,
}
