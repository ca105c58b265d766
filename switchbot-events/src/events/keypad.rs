//! Keypad and Keypad Touch change reports

use serde::{Deserialize, Serialize};

/// Context shared by the Keypad (`WoKeypad`) and Keypad Touch
/// (`WoKeypadTouch`)
///
/// These report passcode management outcomes rather than sensor readings.
/// `event_name` (`createKey`, `deleteKey`, ...), `command_id` and `result`
/// are vendor-defined open sets and are passed through as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeypadContext {
    pub device_type: String,
    pub device_mac: String,
    pub event_name: String,
    pub command_id: String,
    pub result: String,
    pub time_of_sample: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_keypad_context() {
        let context: KeypadContext = serde_json::from_value(json!({
            "deviceType": "WoKeypad",
            "deviceMac": "01:00:5e:90:10:00",
            "eventName": "createKey",
            "commandId": "CMD-1663558451952-01",
            "result": "success",
            "timeOfSample": 123456789
        }))
        .unwrap();

        assert_eq!(context.event_name, "createKey");
        assert_eq!(context.command_id, "CMD-1663558451952-01");
        assert_eq!(context.result, "success");
    }
}
