//! Recorded notification bodies and the per-notification handler
//!
//! The cloud POSTs bodies like these to the registered URL. The example
//! has no public HTTPS endpoint to receive real pushes, so it replays
//! recorded ones through the same handler a receiver would run.

use switchbot_events::EventDecoder;

use crate::display;

/// Recorded change reports covering several device categories, plus one
/// category the decoder does not recognize and one malformed context
pub const RECORDED_BODIES: &[&str] = &[
    r#"{"eventType":"changeReport","eventVersion":"1","context":{"deviceType":"WoLock","deviceMac":"01:00:5e:90:10:00","lockState":"LOCKED","timeOfSample":123456789}}"#,
    r#"{"eventType":"changeReport","eventVersion":"1","context":{"deviceType":"WoMeter","deviceMac":"01:00:5e:90:10:00","temperature":22.5,"scale":"CELSIUS","humidity":31,"timeOfSample":123456789}}"#,
    r#"{"eventType":"changeReport","eventVersion":"1","context":{"deviceType":"WoContact","deviceMac":"01:00:5e:90:10:00","detectionState":"NOT_DETECTED","doorMode":"OUT_DOOR","brightness":"dim","openState":"open","timeOfSample":123456789}}"#,
    r#"{"eventType":"changeReport","eventVersion":"1","context":{"deviceType":"WoSweeper","deviceMac":"01:00:5e:90:10:00","workingStatus":"StandBy","onlineStatus":"online","battery":100,"timeOfSample":123456789}}"#,
    r#"{"eventType":"changeReport","eventVersion":"1","context":{"deviceType":"WoKeypad","deviceMac":"01:00:5e:90:10:00","eventName":"createKey","commandId":"CMD-1663558451952-01","result":"success","timeOfSample":123456789}}"#,
    r#"{"eventType":"changeReport","eventVersion":"1","context":{"deviceType":"WoHub2","deviceMac":"01:00:5e:90:10:00","timeOfSample":123456789}}"#,
    r#"{"eventType":"changeReport","eventVersion":"1","context":{"deviceType":"WoLock","deviceMac":"01:00:5e:90:10:00","timeOfSample":123456789}}"#,
];

/// Handle one inbound notification body, producing a log line
pub fn handle_notification(decoder: &EventDecoder, body: &[u8]) -> String {
    match decoder.decode(body) {
        Ok(event) => display::describe_event(&event),
        Err(err) => format!("undecodable notification: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// The typed bodies all produce a category description
    #[rstest]
    #[case(0, "WoLock")]
    #[case(1, "WoMeter")]
    #[case(2, "WoContact")]
    #[case(3, "WoSweeper")]
    #[case(4, "WoKeypad")]
    fn recorded_bodies_decode(#[case] index: usize, #[case] device_type: &str) {
        let decoder = EventDecoder::new();
        let line = handle_notification(&decoder, RECORDED_BODIES[index].as_bytes());
        assert!(line.starts_with(device_type), "unexpected line: {}", line);
    }

    #[test]
    fn unknown_category_is_reported_not_failed() {
        let decoder = EventDecoder::new();
        let line = handle_notification(&decoder, RECORDED_BODIES[5].as_bytes());
        assert_eq!(line, "unrecognized category WoHub2");
    }

    #[test]
    fn malformed_context_reports_the_error() {
        let decoder = EventDecoder::new();
        let line = handle_notification(&decoder, RECORDED_BODIES[6].as_bytes());
        assert!(line.starts_with("undecodable notification:"), "unexpected line: {}", line);
        assert!(line.contains("lockState"), "error should name the missing field: {}", line);
    }
}
