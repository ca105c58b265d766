//! # Webhook Decode Example
//!
//! Feeds a few notification bodies through the decoder and prints what
//! each one becomes: a typed event, the unrecognized-category sentinel,
//! or a decode error.
//!
//! Run with:
//! ```bash
//! cargo run --example decode
//! ```

use switchbot_events::{EventDecoder, WebhookEvent};

const BODIES: &[&str] = &[
    // Lock bolted.
    r#"{"eventType":"changeReport","eventVersion":"1","context":{"deviceType":"WoLock","deviceMac":"01:00:5e:90:10:00","lockState":"LOCKED","timeOfSample":123456789}}"#,
    // Meter sample.
    r#"{"eventType":"changeReport","eventVersion":"1","context":{"deviceType":"WoMeter","deviceMac":"01:00:5e:90:10:00","temperature":22.5,"scale":"CELSIUS","humidity":31,"timeOfSample":123456789}}"#,
    // A category this crate does not know.
    r#"{"eventType":"changeReport","eventVersion":"1","context":{"deviceType":"WoHub2","deviceMac":"01:00:5e:90:10:00","timeOfSample":123456789}}"#,
    // A context that fails validation.
    r#"{"eventType":"changeReport","eventVersion":"1","context":{"deviceType":"WoLock","deviceMac":"01:00:5e:90:10:00","timeOfSample":123456789}}"#,
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let decoder = EventDecoder::new();

    for body in BODIES {
        match decoder.decode(body.as_bytes()) {
            Ok(WebhookEvent::Lock(event)) => {
                println!("lock {} -> {:?}", event.context.device_mac, event.context.lock_state);
            }
            Ok(WebhookEvent::Meter(event)) => {
                println!(
                    "meter {} -> {}{} at {}% humidity",
                    event.context.device_mac,
                    event.context.temperature,
                    event.context.scale.as_str(),
                    event.context.humidity
                );
            }
            Ok(WebhookEvent::Unrecognized(event)) => {
                println!("skipping unsupported category {:?}", event.device_type);
            }
            Ok(other) => println!("decoded {:?}", other.category()),
            Err(err) => println!("undecodable notification: {err}"),
        }
    }
}
