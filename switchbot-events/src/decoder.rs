//! Registry-driven decoding of notification bodies

use std::collections::HashMap;

use tracing::warn;

use crate::category::{DeviceCategory, ALL_CATEGORIES};
use crate::envelope::NotificationEnvelope;
use crate::error::{EventError, EventResult};
use crate::event::{UnrecognizedEvent, WebhookEvent};

/// Decodes webhook notification bodies into [`WebhookEvent`]s
///
/// The decoder owns a registry mapping `deviceType` discriminators to
/// device categories. The registry is fixed once the decoder is built;
/// decoding takes `&self` throughout, so a decoder can be shared by
/// reference across threads.
///
/// The vendor's documentation is inconsistent about which discriminator
/// some devices report (the Meter Plus has been documented as both
/// `"WoMeter"` and `"WoMeterPlus"`), so [`EventDecoder::with_category`]
/// can re-point any discriminator at construction time:
///
/// ```
/// use switchbot_events::{DeviceCategory, EventDecoder};
///
/// // Fleet firmware that reports Meter Plus readings as "WoMeter":
/// let decoder = EventDecoder::new()
///     .with_category("WoMeter", DeviceCategory::MeterPlus);
/// ```
#[derive(Debug, Clone)]
pub struct EventDecoder {
    registry: HashMap<String, DeviceCategory>,
}

impl EventDecoder {
    /// Build a decoder with every supported category registered under its
    /// default discriminator
    pub fn new() -> Self {
        let registry = ALL_CATEGORIES
            .iter()
            .map(|category| (category.device_type().to_string(), *category))
            .collect();

        Self { registry }
    }

    /// Add or override one registry entry
    pub fn with_category(
        mut self,
        device_type: impl Into<String>,
        category: DeviceCategory,
    ) -> Self {
        self.registry.insert(device_type.into(), category);
        self
    }

    /// Look up the category registered for a discriminator
    pub fn resolve(&self, device_type: &str) -> Option<DeviceCategory> {
        self.registry.get(device_type).copied()
    }

    /// Decode a raw notification body
    ///
    /// A body whose envelope is not the known change-report pair, or whose
    /// `deviceType` is not in the registry, decodes to
    /// [`WebhookEvent::Unrecognized`] rather than an error; delivery of
    /// notifications for known categories must not break when the vendor
    /// ships a new one. Errors are reserved for malformed bodies and for
    /// contexts that fail their category's validation.
    pub fn decode(&self, body: &[u8]) -> EventResult<WebhookEvent> {
        let envelope = NotificationEnvelope::from_slice(body)?;

        if !envelope.is_change_report() {
            warn!(
                event_type = %envelope.event_type,
                event_version = %envelope.event_version,
                "unrecognized notification envelope"
            );
            return Ok(unrecognized(envelope));
        }

        let device_type = envelope
            .device_type()
            .ok_or(EventError::MissingDeviceType)?
            .to_string();

        match self.resolve(&device_type) {
            Some(category) => category.decode(envelope),
            None => {
                warn!(%device_type, "unrecognized device category");
                Ok(unrecognized(envelope))
            }
        }
    }
}

impl Default for EventDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn unrecognized(envelope: NotificationEnvelope) -> WebhookEvent {
    let device_type = envelope.device_type().map(str::to_string);

    WebhookEvent::Unrecognized(UnrecognizedEvent {
        event_type: envelope.event_type,
        event_version: envelope.event_version,
        device_type,
        context: envelope.context,
    })
}
