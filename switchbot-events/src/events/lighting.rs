//! Color Bulb, Strip Light and Ceiling Light change reports

use serde::{Deserialize, Serialize};

use crate::values::PowerState;

/// Context of a Color Bulb change report (`WoBulb`)
///
/// `color` is the vendor's colon-separated `"R:G:B"` string, passed through
/// unparsed; `color_temperature` is in Kelvin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorBulbContext {
    pub device_type: String,
    pub device_mac: String,
    pub power_state: PowerState,
    pub brightness: u8,
    pub color: String,
    pub color_temperature: u32,
    pub time_of_sample: i64,
}

/// Context of a Strip Light change report (`WoStrip`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripLightContext {
    pub device_type: String,
    pub device_mac: String,
    pub power_state: PowerState,
    pub brightness: u8,
    pub color: String,
    pub time_of_sample: i64,
}

/// Context shared by the Ceiling Light (`WoCeiling`) and Ceiling Light Pro
/// (`WoCeilingPro`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CeilingContext {
    pub device_type: String,
    pub device_mac: String,
    pub power_state: PowerState,
    pub brightness: u8,
    pub color_temperature: u32,
    pub time_of_sample: i64,
}
