//! Device categories known to the decoder
//!
//! Each category corresponds to one `deviceType` discriminator string in
//! the vendor's push payloads. Categories with identical field sets (the
//! two meters, cameras, plugs, cleaners, ceiling lights and keypads) stay
//! separate here so dispatch is always keyed by the vendor's exact
//! discriminator, never by structural shape.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::envelope::NotificationEnvelope;
use crate::error::{EventError, EventResult};
use crate::event::{Event, WebhookEvent};

/// The device categories with typed decode support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceCategory {
    MotionSensor,
    ContactSensor,
    Meter,
    MeterPlus,
    Lock,
    IndoorCam,
    PanTiltCam,
    ColorBulb,
    StripLight,
    PlugMiniUs,
    PlugMiniJp,
    Sweeper,
    SweeperPlus,
    Ceiling,
    CeilingPro,
    Keypad,
    KeypadTouch,
}

/// Every supported category, in registry order
pub const ALL_CATEGORIES: [DeviceCategory; 17] = [
    DeviceCategory::MotionSensor,
    DeviceCategory::ContactSensor,
    DeviceCategory::Meter,
    DeviceCategory::MeterPlus,
    DeviceCategory::Lock,
    DeviceCategory::IndoorCam,
    DeviceCategory::PanTiltCam,
    DeviceCategory::ColorBulb,
    DeviceCategory::StripLight,
    DeviceCategory::PlugMiniUs,
    DeviceCategory::PlugMiniJp,
    DeviceCategory::Sweeper,
    DeviceCategory::SweeperPlus,
    DeviceCategory::Ceiling,
    DeviceCategory::CeilingPro,
    DeviceCategory::Keypad,
    DeviceCategory::KeypadTouch,
];

impl DeviceCategory {
    /// The `deviceType` discriminator this category registers under by
    /// default
    pub fn device_type(&self) -> &'static str {
        match self {
            DeviceCategory::MotionSensor => "WoPresence",
            DeviceCategory::ContactSensor => "WoContact",
            DeviceCategory::Meter => "WoMeter",
            DeviceCategory::MeterPlus => "WoMeterPlus",
            DeviceCategory::Lock => "WoLock",
            DeviceCategory::IndoorCam => "WoCamera",
            DeviceCategory::PanTiltCam => "WoPanTiltCam",
            DeviceCategory::ColorBulb => "WoBulb",
            DeviceCategory::StripLight => "WoStrip",
            DeviceCategory::PlugMiniUs => "WoPlugUS",
            DeviceCategory::PlugMiniJp => "WoPlugJP",
            DeviceCategory::Sweeper => "WoSweeper",
            DeviceCategory::SweeperPlus => "WoSweeperPlus",
            DeviceCategory::Ceiling => "WoCeiling",
            DeviceCategory::CeilingPro => "WoCeilingPro",
            DeviceCategory::Keypad => "WoKeypad",
            DeviceCategory::KeypadTouch => "WoKeypadTouch",
        }
    }

    /// Human-readable category name, as used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            DeviceCategory::MotionSensor => "motion sensor",
            DeviceCategory::ContactSensor => "contact sensor",
            DeviceCategory::Meter => "meter",
            DeviceCategory::MeterPlus => "meter plus",
            DeviceCategory::Lock => "lock",
            DeviceCategory::IndoorCam => "indoor cam",
            DeviceCategory::PanTiltCam => "pan/tilt cam",
            DeviceCategory::ColorBulb => "color bulb",
            DeviceCategory::StripLight => "strip light",
            DeviceCategory::PlugMiniUs => "plug mini (US)",
            DeviceCategory::PlugMiniJp => "plug mini (JP)",
            DeviceCategory::Sweeper => "robot vacuum cleaner",
            DeviceCategory::SweeperPlus => "robot vacuum cleaner plus",
            DeviceCategory::Ceiling => "ceiling light",
            DeviceCategory::CeilingPro => "ceiling light pro",
            DeviceCategory::Keypad => "keypad",
            DeviceCategory::KeypadTouch => "keypad touch",
        }
    }

    /// Decode a resolved envelope's context into this category's event
    /// variant
    pub(crate) fn decode(self, envelope: NotificationEnvelope) -> EventResult<WebhookEvent> {
        match self {
            DeviceCategory::MotionSensor => Ok(WebhookEvent::MotionSensor(typed(self, envelope)?)),
            DeviceCategory::ContactSensor => {
                Ok(WebhookEvent::ContactSensor(typed(self, envelope)?))
            }
            DeviceCategory::Meter => Ok(WebhookEvent::Meter(typed(self, envelope)?)),
            DeviceCategory::MeterPlus => Ok(WebhookEvent::MeterPlus(typed(self, envelope)?)),
            DeviceCategory::Lock => Ok(WebhookEvent::Lock(typed(self, envelope)?)),
            DeviceCategory::IndoorCam => Ok(WebhookEvent::IndoorCam(typed(self, envelope)?)),
            DeviceCategory::PanTiltCam => Ok(WebhookEvent::PanTiltCam(typed(self, envelope)?)),
            DeviceCategory::ColorBulb => Ok(WebhookEvent::ColorBulb(typed(self, envelope)?)),
            DeviceCategory::StripLight => Ok(WebhookEvent::StripLight(typed(self, envelope)?)),
            DeviceCategory::PlugMiniUs => Ok(WebhookEvent::PlugMiniUs(typed(self, envelope)?)),
            DeviceCategory::PlugMiniJp => Ok(WebhookEvent::PlugMiniJp(typed(self, envelope)?)),
            DeviceCategory::Sweeper => Ok(WebhookEvent::Sweeper(typed(self, envelope)?)),
            DeviceCategory::SweeperPlus => Ok(WebhookEvent::SweeperPlus(typed(self, envelope)?)),
            DeviceCategory::Ceiling => Ok(WebhookEvent::Ceiling(typed(self, envelope)?)),
            DeviceCategory::CeilingPro => Ok(WebhookEvent::CeilingPro(typed(self, envelope)?)),
            DeviceCategory::Keypad => Ok(WebhookEvent::Keypad(typed(self, envelope)?)),
            DeviceCategory::KeypadTouch => Ok(WebhookEvent::KeypadTouch(typed(self, envelope)?)),
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn typed<C: DeserializeOwned>(
    category: DeviceCategory,
    envelope: NotificationEnvelope,
) -> EventResult<Event<C>> {
    let context =
        serde_json::from_value(envelope.context).map_err(|source| EventError::Context {
            category,
            source,
        })?;

    Ok(Event {
        event_type: envelope.event_type,
        event_version: envelope.event_version,
        context,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminators_are_unique() {
        for (i, a) in ALL_CATEGORIES.iter().enumerate() {
            for b in &ALL_CATEGORIES[i + 1..] {
                assert_ne!(a.device_type(), b.device_type(), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn display_uses_the_category_name() {
        assert_eq!(DeviceCategory::PanTiltCam.to_string(), "pan/tilt cam");
        assert_eq!(DeviceCategory::MeterPlus.to_string(), "meter plus");
    }
}
