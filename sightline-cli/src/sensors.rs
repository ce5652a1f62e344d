//! Sensor backends for the CLI.
//!
//! This platform has no live geolocation or orientation hardware, so the
//! capability traits are backed by values supplied on the command line. A
//! missing flag maps to the corresponding capability failure, which makes
//! every library fallback path reachable from a terminal.

use sightline::heading::{OrientationEvent, Quaternion};
use sightline::sensors::{
    AbsoluteOrientationSensor, DeviceOrientationEvents, LocationSource, NoSensor,
    OrientationCapabilities, OrientationError, OrientationSource, Permission, PositionError,
    PositionFix, PositionOptions,
};

/// Location backend fed from `--lat`/`--lon`.
///
/// Without a fix the acquisition fails as unavailable and the library
/// falls back to its default origin.
pub struct CliLocation {
    fix: Option<PositionFix>,
}

impl CliLocation {
    pub fn fixed(latitude: f64, longitude: f64) -> Self {
        Self {
            fix: Some(PositionFix {
                latitude,
                longitude,
            }),
        }
    }

    pub fn unavailable() -> Self {
        Self { fix: None }
    }
}

impl LocationSource for CliLocation {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<PositionFix, PositionError> {
        self.fix.ok_or_else(|| {
            PositionError::Unavailable("no location fix supplied (use --lat/--lon)".to_string())
        })
    }
}

/// Absolute-orientation sensor fed from `--quaternion`.
pub struct CliQuaternionSensor(pub Quaternion);

impl AbsoluteOrientationSensor for CliQuaternionSensor {
    async fn read(&self) -> Result<Quaternion, OrientationError> {
        Ok(self.0)
    }
}

/// Device-orientation event stream fed from `--heading`.
pub struct CliHeadingEvents(pub f64);

impl DeviceOrientationEvents for CliHeadingEvents {
    async fn request_permission(&self) -> Result<Permission, OrientationError> {
        Ok(Permission::Granted)
    }

    async fn next_event(&self) -> Result<OrientationEvent, OrientationError> {
        Ok(OrientationEvent {
            alpha: 0.0,
            compass_heading: Some(self.0),
        })
    }
}

/// The orientation capability set assembled from CLI flags.
pub enum CliOrientation {
    Absolute(OrientationCapabilities<CliQuaternionSensor, NoSensor>),
    Stream(OrientationCapabilities<NoSensor, CliHeadingEvents>),
    Unsupported(OrientationCapabilities<NoSensor, NoSensor>),
}

impl CliOrientation {
    /// Picks the capability set: a quaternion wins over a plain heading,
    /// and neither flag means the platform has no orientation capability.
    pub fn from_flags(quaternion: Option<Quaternion>, heading: Option<f64>) -> Self {
        match (quaternion, heading) {
            (Some(q), _) => {
                Self::Absolute(OrientationCapabilities::absolute(CliQuaternionSensor(q)))
            }
            (None, Some(h)) => Self::Stream(OrientationCapabilities::stream(CliHeadingEvents(h))),
            (None, None) => Self::Unsupported(OrientationCapabilities::none()),
        }
    }
}

impl OrientationSource for CliOrientation {
    async fn current_heading(&self) -> Result<f64, OrientationError> {
        match self {
            CliOrientation::Absolute(capabilities) => capabilities.current_heading().await,
            CliOrientation::Stream(capabilities) => capabilities.current_heading().await,
            CliOrientation::Unsupported(capabilities) => capabilities.current_heading().await,
        }
    }
}
