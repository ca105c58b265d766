//! Typed context shapes for each supported device category
//!
//! Categories sharing a field set share one context struct (both meters,
//! both cameras, both plugs, both cleaners, both ceiling lights, both
//! keypads); the registry still routes each `deviceType` through its own
//! entry, and the raw discriminator is preserved in `device_type`.

mod camera;
mod cleaner;
mod keypad;
mod lighting;
mod lock;
mod meter;
mod plug;
mod sensor;

pub use camera::CameraContext;
pub use cleaner::SweeperContext;
pub use keypad::KeypadContext;
pub use lighting::{CeilingContext, ColorBulbContext, StripLightContext};
pub use lock::LockContext;
pub use meter::MeterContext;
pub use plug::PlugContext;
pub use sensor::{ContactSensorContext, MotionSensorContext};
