//! Typed webhook events
//!
//! [`WebhookEvent`] is the decoder's output: one case per supported device
//! category plus [`WebhookEvent::Unrecognized`] for notifications the
//! registry cannot place. Matching on it is how callers branch per
//! category; the unrecognized case lets them log and skip without
//! treating an unknown discriminator as a failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::DeviceCategory;
use crate::events::{
    CameraContext, CeilingContext, ColorBulbContext, ContactSensorContext, KeypadContext,
    LockContext, MeterContext, MotionSensorContext, PlugContext, StripLightContext,
    SweeperContext,
};

/// A decoded notification: the envelope pair plus one typed context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event<C> {
    pub event_type: String,
    pub event_version: String,
    pub context: C,
}

pub type MotionSensorEvent = Event<MotionSensorContext>;
pub type ContactSensorEvent = Event<ContactSensorContext>;
pub type MeterEvent = Event<MeterContext>;
pub type MeterPlusEvent = Event<MeterContext>;
pub type LockEvent = Event<LockContext>;
pub type IndoorCamEvent = Event<CameraContext>;
pub type PanTiltCamEvent = Event<CameraContext>;
pub type ColorBulbEvent = Event<ColorBulbContext>;
pub type StripLightEvent = Event<StripLightContext>;
pub type PlugMiniUsEvent = Event<PlugContext>;
pub type PlugMiniJpEvent = Event<PlugContext>;
pub type SweeperEvent = Event<SweeperContext>;
pub type SweeperPlusEvent = Event<SweeperContext>;
pub type CeilingEvent = Event<CeilingContext>;
pub type CeilingProEvent = Event<CeilingContext>;
pub type KeypadEvent = Event<KeypadContext>;
pub type KeypadTouchEvent = Event<KeypadContext>;

/// A notification the registry could not place
///
/// Carries everything that was received so callers can log or persist it.
/// Produced for unknown `deviceType` discriminators and for envelopes
/// whose `eventType`/`eventVersion` pair is not the known change-report
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct UnrecognizedEvent {
    pub event_type: String,
    pub event_version: String,
    /// The discriminator, when the context carried one
    pub device_type: Option<String>,
    /// The undecoded context object
    pub context: Value,
}

/// One decoded webhook notification
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookEvent {
    MotionSensor(MotionSensorEvent),
    ContactSensor(ContactSensorEvent),
    Meter(MeterEvent),
    MeterPlus(MeterPlusEvent),
    Lock(LockEvent),
    IndoorCam(IndoorCamEvent),
    PanTiltCam(PanTiltCamEvent),
    ColorBulb(ColorBulbEvent),
    StripLight(StripLightEvent),
    PlugMiniUs(PlugMiniUsEvent),
    PlugMiniJp(PlugMiniJpEvent),
    Sweeper(SweeperEvent),
    SweeperPlus(SweeperPlusEvent),
    Ceiling(CeilingEvent),
    CeilingPro(CeilingProEvent),
    Keypad(KeypadEvent),
    KeypadTouch(KeypadTouchEvent),
    Unrecognized(UnrecognizedEvent),
}

impl WebhookEvent {
    /// The category this event decoded into, `None` for unrecognized ones
    pub fn category(&self) -> Option<DeviceCategory> {
        match self {
            WebhookEvent::MotionSensor(_) => Some(DeviceCategory::MotionSensor),
            WebhookEvent::ContactSensor(_) => Some(DeviceCategory::ContactSensor),
            WebhookEvent::Meter(_) => Some(DeviceCategory::Meter),
            WebhookEvent::MeterPlus(_) => Some(DeviceCategory::MeterPlus),
            WebhookEvent::Lock(_) => Some(DeviceCategory::Lock),
            WebhookEvent::IndoorCam(_) => Some(DeviceCategory::IndoorCam),
            WebhookEvent::PanTiltCam(_) => Some(DeviceCategory::PanTiltCam),
            WebhookEvent::ColorBulb(_) => Some(DeviceCategory::ColorBulb),
            WebhookEvent::StripLight(_) => Some(DeviceCategory::StripLight),
            WebhookEvent::PlugMiniUs(_) => Some(DeviceCategory::PlugMiniUs),
            WebhookEvent::PlugMiniJp(_) => Some(DeviceCategory::PlugMiniJp),
            WebhookEvent::Sweeper(_) => Some(DeviceCategory::Sweeper),
            WebhookEvent::SweeperPlus(_) => Some(DeviceCategory::SweeperPlus),
            WebhookEvent::Ceiling(_) => Some(DeviceCategory::Ceiling),
            WebhookEvent::CeilingPro(_) => Some(DeviceCategory::CeilingPro),
            WebhookEvent::Keypad(_) => Some(DeviceCategory::Keypad),
            WebhookEvent::KeypadTouch(_) => Some(DeviceCategory::KeypadTouch),
            WebhookEvent::Unrecognized(_) => None,
        }
    }

    /// Whether this is the unrecognized-category sentinel
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, WebhookEvent::Unrecognized(_))
    }
}
