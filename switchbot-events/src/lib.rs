//! Webhook push-notification decoding for the SwitchBot cloud API
//!
//! SwitchBot delivers device change reports as JSON POST bodies to a
//! webhook URL registered through the management API. This crate turns
//! those raw bodies into typed events: an [`EventDecoder`] resolves the
//! `deviceType` discriminator against its category registry and decodes
//! the context into the matching [`WebhookEvent`] case, validating
//! required fields and closed-set enumerations along the way.
//!
//! Discriminators the registry does not know decode to
//! [`WebhookEvent::Unrecognized`] instead of failing, so ingestion keeps
//! working when the vendor introduces device categories this crate does
//! not cover yet.
//!
//! ```
//! use switchbot_events::{EventDecoder, WebhookEvent};
//!
//! let body = br#"{"eventType":"changeReport","eventVersion":"1",
//!     "context":{"deviceType":"WoLock","deviceMac":"01:00:5e:90:10:00",
//!     "lockState":"LOCKED","timeOfSample":123456789}}"#;
//!
//! let decoder = EventDecoder::new();
//! match decoder.decode(body) {
//!     Ok(WebhookEvent::Lock(event)) => {
//!         println!("{} is {:?}", event.context.device_mac, event.context.lock_state);
//!     }
//!     Ok(WebhookEvent::Unrecognized(event)) => {
//!         println!("skipping unsupported category {:?}", event.device_type);
//!     }
//!     Ok(other) => println!("other change report: {other:?}"),
//!     Err(err) => eprintln!("undecodable notification: {err}"),
//! }
//! ```

pub mod category;
pub mod decoder;
pub mod envelope;
pub mod error;
pub mod event;
pub mod events;
pub mod values;

pub use category::{DeviceCategory, ALL_CATEGORIES};
pub use decoder::EventDecoder;
pub use envelope::NotificationEnvelope;
pub use error::{EventError, EventResult};
pub use event::{Event, UnrecognizedEvent, WebhookEvent};
pub use values::{
    AmbientBrightness, CleanerOnlineStatus, CleanerWorkingStatus, DetectionState, DoorMode,
    LockState, PowerState, TemperatureScale,
};
