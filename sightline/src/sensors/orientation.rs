//! Orientation-sensing capability.
//!
//! Two mutually exclusive platform capabilities can provide a compass
//! heading: a fused absolute-orientation sensor reporting a quaternion, or
//! a raw device-orientation event stream (optionally gated behind an
//! asynchronous permission request). [`OrientationCapabilities`] selects
//! between them by probing at call time, preferring the fused sensor.

use thiserror::Error;
use tracing::debug;

use crate::heading::{self, OrientationEvent, Quaternion};

/// Errors that can occur while resolving a heading.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrientationError {
    /// Neither orientation capability exists on this platform.
    #[error("no orientation capability available")]
    Unsupported,

    /// The platform requires a permission grant and it was denied.
    #[error("orientation permission denied")]
    PermissionDenied,

    /// The sensor reported an error.
    #[error("orientation sensor error: {0}")]
    Sensor(String),
}

/// Outcome of an orientation permission request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Permission {
    Granted,
    Denied,
}

/// A fused absolute-orientation sensor exposing a one-shot quaternion
/// reading.
#[allow(async_fn_in_trait)]
pub trait AbsoluteOrientationSensor: Send + Sync {
    /// Takes a single quaternion reading. Resolves or fails exactly once.
    async fn read(&self) -> Result<Quaternion, OrientationError>;
}

/// A raw device-orientation event stream.
#[allow(async_fn_in_trait)]
pub trait DeviceOrientationEvents: Send + Sync {
    /// Requests permission to read orientation events.
    ///
    /// Platforms without an explicit grant step return `Granted`.
    async fn request_permission(&self) -> Result<Permission, OrientationError>;

    /// Waits for the next orientation event. The subscription ends after
    /// one event; no listener is left behind.
    async fn next_event(&self) -> Result<OrientationEvent, OrientationError>;
}

/// Capability interface the orchestrator resolves a heading through.
#[allow(async_fn_in_trait)]
pub trait OrientationSource: Send + Sync {
    /// Resolves the current compass heading in degrees within [0, 360).
    async fn current_heading(&self) -> Result<f64, OrientationError>;
}

/// Placeholder for an absent orientation capability.
///
/// Implements both capability traits by failing with `Unsupported`, so a
/// capability set can be built with only one side present.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSensor;

impl AbsoluteOrientationSensor for NoSensor {
    async fn read(&self) -> Result<Quaternion, OrientationError> {
        Err(OrientationError::Unsupported)
    }
}

impl DeviceOrientationEvents for NoSensor {
    async fn request_permission(&self) -> Result<Permission, OrientationError> {
        Err(OrientationError::Unsupported)
    }

    async fn next_event(&self) -> Result<OrientationEvent, OrientationError> {
        Err(OrientationError::Unsupported)
    }
}

/// The orientation capabilities present on a platform.
///
/// Probing happens at call time: the fused absolute sensor is preferred,
/// the event stream is the fallback, and an empty set resolves to
/// [`OrientationError::Unsupported`].
pub struct OrientationCapabilities<A, D> {
    absolute: Option<A>,
    stream: Option<D>,
}

impl OrientationCapabilities<NoSensor, NoSensor> {
    /// A platform with no orientation capability at all.
    pub fn none() -> Self {
        Self {
            absolute: None,
            stream: None,
        }
    }
}

impl<A: AbsoluteOrientationSensor> OrientationCapabilities<A, NoSensor> {
    /// A platform exposing only the fused absolute-orientation sensor.
    pub fn absolute(sensor: A) -> Self {
        Self {
            absolute: Some(sensor),
            stream: None,
        }
    }
}

impl<D: DeviceOrientationEvents> OrientationCapabilities<NoSensor, D> {
    /// A platform exposing only the device-orientation event stream.
    pub fn stream(events: D) -> Self {
        Self {
            absolute: None,
            stream: Some(events),
        }
    }
}

impl<A: AbsoluteOrientationSensor, D: DeviceOrientationEvents> OrientationCapabilities<A, D> {
    /// A platform exposing both capabilities.
    pub fn both(sensor: A, events: D) -> Self {
        Self {
            absolute: Some(sensor),
            stream: Some(events),
        }
    }
}

impl<A: AbsoluteOrientationSensor, D: DeviceOrientationEvents> OrientationSource
    for OrientationCapabilities<A, D>
{
    async fn current_heading(&self) -> Result<f64, OrientationError> {
        if let Some(sensor) = &self.absolute {
            let quaternion = sensor.read().await?;
            let value = heading::from_quaternion(&quaternion);
            debug!(heading = value, "heading from absolute-orientation sensor");
            return Ok(value);
        }

        if let Some(events) = &self.stream {
            if let Permission::Denied = events.request_permission().await? {
                return Err(OrientationError::PermissionDenied);
            }
            let event = events.next_event().await?;
            let value = heading::from_event(&event);
            debug!(heading = value, "heading from device-orientation event");
            return Ok(value);
        }

        Err(OrientationError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedQuaternion(Quaternion);

    impl AbsoluteOrientationSensor for FixedQuaternion {
        async fn read(&self) -> Result<Quaternion, OrientationError> {
            Ok(self.0)
        }
    }

    struct FixedEvents {
        permission: Permission,
        event: OrientationEvent,
    }

    impl DeviceOrientationEvents for FixedEvents {
        async fn request_permission(&self) -> Result<Permission, OrientationError> {
            Ok(self.permission)
        }

        async fn next_event(&self) -> Result<OrientationEvent, OrientationError> {
            Ok(self.event)
        }
    }

    fn north_quaternion() -> Quaternion {
        Quaternion {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    #[tokio::test]
    async fn test_absolute_sensor_resolves_heading() {
        let capabilities = OrientationCapabilities::absolute(FixedQuaternion(north_quaternion()));
        let heading = capabilities.current_heading().await.unwrap();
        assert!(heading.abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_absolute_sensor_preferred_over_stream() {
        let capabilities = OrientationCapabilities::both(
            FixedQuaternion(north_quaternion()),
            FixedEvents {
                permission: Permission::Granted,
                event: OrientationEvent {
                    alpha: 0.0,
                    compass_heading: Some(90.0),
                },
            },
        );
        // Fused sensor wins: heading is 0, not the stream's 90.
        let heading = capabilities.current_heading().await.unwrap();
        assert!(heading.abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_stream_fallback_uses_compass_heading_field() {
        let capabilities = OrientationCapabilities::stream(FixedEvents {
            permission: Permission::Granted,
            event: OrientationEvent {
                alpha: 10.0,
                compass_heading: Some(42.0),
            },
        });
        assert_eq!(capabilities.current_heading().await.unwrap(), 42.0);
    }

    #[tokio::test]
    async fn test_stream_fallback_converts_alpha() {
        let capabilities = OrientationCapabilities::stream(FixedEvents {
            permission: Permission::Granted,
            event: OrientationEvent {
                alpha: 90.0,
                compass_heading: None,
            },
        });
        assert_eq!(capabilities.current_heading().await.unwrap(), 270.0);
    }

    #[tokio::test]
    async fn test_permission_denied() {
        let capabilities = OrientationCapabilities::stream(FixedEvents {
            permission: Permission::Denied,
            event: OrientationEvent {
                alpha: 0.0,
                compass_heading: None,
            },
        });
        let result = capabilities.current_heading().await;
        assert_eq!(result, Err(OrientationError::PermissionDenied));
    }

    #[tokio::test]
    async fn test_no_capability_is_unsupported() {
        let capabilities = OrientationCapabilities::none();
        let result = capabilities.current_heading().await;
        assert_eq!(result, Err(OrientationError::Unsupported));
    }
}
