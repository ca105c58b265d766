//! Meter and Meter Plus change reports

use serde::{Deserialize, Serialize};

use crate::values::TemperatureScale;

/// Context shared by the Meter (`WoMeter`) and Meter Plus (`WoMeterPlus`)
///
/// Temperature is reported in the unit given by `scale` and is never
/// converted here; humidity is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterContext {
    pub device_type: String,
    pub device_mac: String,
    pub temperature: f64,
    pub scale: TemperatureScale,
    pub humidity: u8,
    pub time_of_sample: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_meter_context() {
        let context: MeterContext = serde_json::from_value(json!({
            "deviceType": "WoMeter",
            "deviceMac": "01:00:5e:90:10:00",
            "temperature": 22.5,
            "scale": "CELSIUS",
            "humidity": 31,
            "timeOfSample": 123456789
        }))
        .unwrap();

        assert_eq!(context.temperature, 22.5);
        assert_eq!(context.scale, TemperatureScale::Celsius);
        assert_eq!(context.humidity, 31);
    }

    #[test]
    fn missing_temperature_is_an_error() {
        let err = serde_json::from_value::<MeterContext>(json!({
            "deviceType": "WoMeter",
            "deviceMac": "01:00:5e:90:10:00",
            "scale": "CELSIUS",
            "humidity": 31,
            "timeOfSample": 123456789
        }))
        .unwrap_err();

        assert!(err.to_string().contains("temperature"), "got: {err}");
    }
}
