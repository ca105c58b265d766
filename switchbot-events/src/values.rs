//! Closed-set enumerations shared by the device-category contexts
//!
//! Every enumeration here decodes from the vendor's exact wire strings and
//! rejects anything outside the set, so an unexpected value surfaces as a
//! decode error instead of a silently defaulted field.

use serde::{Deserialize, Serialize};

/// Power state reported by switchable devices (plugs, bulbs, lights)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerState {
    On,
    Off,
}

impl PowerState {
    /// Wire representation of this state
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerState::On => "ON",
            PowerState::Off => "OFF",
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, PowerState::On)
    }
}

/// Bolt state reported by the Lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LockState {
    Locked,
    Unlocked,
    /// The bolt did not reach a resting position
    Jammed,
}

impl LockState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LockState::Locked => "LOCKED",
            LockState::Unlocked => "UNLOCKED",
            LockState::Jammed => "JAMMED",
        }
    }
}

/// Motion detection state reported by sensors and cameras
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionState {
    Detected,
    NotDetected,
}

impl DetectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionState::Detected => "DETECTED",
            DetectionState::NotDetected => "NOT_DETECTED",
        }
    }
}

/// Contact sensor mounting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoorMode {
    InDoor,
    OutDoor,
}

impl DoorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoorMode::InDoor => "IN_DOOR",
            DoorMode::OutDoor => "OUT_DOOR",
        }
    }
}

/// Ambient light level reported by the contact sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbientBrightness {
    Dim,
    Bright,
}

impl AmbientBrightness {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmbientBrightness::Dim => "dim",
            AmbientBrightness::Bright => "bright",
        }
    }
}

/// Unit of the temperature field; values are passed through unconverted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
}

impl TemperatureScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "CELSIUS",
            TemperatureScale::Fahrenheit => "FAHRENHEIT",
        }
    }
}

/// Working phase reported by robot vacuum cleaners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CleanerWorkingStatus {
    StandBy,
    Clearing,
    Paused,
    GotoChargeBase,
    Charging,
    ChargeDone,
    Dormant,
    InTrouble,
    InRemoteControl,
    InDustCollecting,
}

impl CleanerWorkingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleanerWorkingStatus::StandBy => "StandBy",
            CleanerWorkingStatus::Clearing => "Clearing",
            CleanerWorkingStatus::Paused => "Paused",
            CleanerWorkingStatus::GotoChargeBase => "GotoChargeBase",
            CleanerWorkingStatus::Charging => "Charging",
            CleanerWorkingStatus::ChargeDone => "ChargeDone",
            CleanerWorkingStatus::Dormant => "Dormant",
            CleanerWorkingStatus::InTrouble => "InTrouble",
            CleanerWorkingStatus::InRemoteControl => "InRemoteControl",
            CleanerWorkingStatus::InDustCollecting => "InDustCollecting",
        }
    }
}

/// Cloud connectivity of a robot vacuum cleaner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanerOnlineStatus {
    Online,
    Offline,
}

impl CleanerOnlineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleanerOnlineStatus::Online => "online",
            CleanerOnlineStatus::Offline => "offline",
        }
    }
}
