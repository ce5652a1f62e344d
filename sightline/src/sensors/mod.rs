//! Sensor capability interfaces
//!
//! The orchestrator never talks to platform sensor singletons directly.
//! Location and orientation are explicit capabilities passed in by the
//! caller, which keeps acquisition testable with deterministic fakes.

mod location;
mod orientation;

pub use location::{
    LocationSource, PositionError, PositionFix, PositionOptions, DEFAULT_POSITION_TIMEOUT,
};
pub use orientation::{
    AbsoluteOrientationSensor, DeviceOrientationEvents, NoSensor, OrientationCapabilities,
    OrientationError, OrientationSource, Permission,
};
