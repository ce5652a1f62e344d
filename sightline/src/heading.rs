//! Compass heading conversions
//!
//! Pure conversions from raw orientation readings to a compass heading in
//! degrees clockwise from north, normalized to [0, 360). Two reading kinds
//! exist: a fused absolute-orientation quaternion and a raw
//! device-orientation event carrying `alpha` and, on some platforms, a
//! ready-made compass heading field.

use crate::geo::normalize_degrees;

/// A unit quaternion reported by an absolute-orientation sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// A single device-orientation event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationEvent {
    /// Rotation around the z axis in degrees, counterclockwise.
    pub alpha: f64,

    /// Platform-reported compass heading, when the platform provides one.
    /// Preferred over the `alpha` conversion when present.
    pub compass_heading: Option<f64>,
}

/// Extracts the compass heading from an absolute-orientation quaternion.
///
/// The yaw component is `atan2(2(wz + xy), 1 − 2(y² + z²))`, converted to
/// degrees and normalized to [0, 360).
pub fn from_quaternion(q: &Quaternion) -> f64 {
    let yaw = (2.0 * (q.w * q.z + q.x * q.y)).atan2(1.0 - 2.0 * (q.y * q.y + q.z * q.z));
    normalize_degrees(yaw.to_degrees())
}

/// Converts a device-orientation event to a compass heading.
///
/// Uses the platform compass heading field when present, otherwise
/// `(360 − alpha) mod 360`.
pub fn from_event(event: &OrientationEvent) -> f64 {
    match event.compass_heading {
        Some(heading) => normalize_degrees(heading),
        None => normalize_degrees(360.0 - event.alpha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_identity_quaternion_faces_north() {
        let q = Quaternion {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        };
        assert!((from_quaternion(&q) - 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_quarter_turn_quaternion() {
        // Rotation of 90 degrees around z: q = (0, 0, sin 45, cos 45).
        let half = std::f64::consts::FRAC_PI_4;
        let q = Quaternion {
            x: 0.0,
            y: 0.0,
            z: half.sin(),
            w: half.cos(),
        };
        assert!((from_quaternion(&q) - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_yaw_normalizes() {
        // Rotation of -90 degrees around z normalizes to 270.
        let half = -std::f64::consts::FRAC_PI_4;
        let q = Quaternion {
            x: 0.0,
            y: 0.0,
            z: half.sin(),
            w: half.cos(),
        };
        assert!((from_quaternion(&q) - 270.0).abs() < 1e-6);
    }

    #[test]
    fn test_event_prefers_platform_compass_heading() {
        let event = OrientationEvent {
            alpha: 90.0,
            compass_heading: Some(42.0),
        };
        assert_eq!(from_event(&event), 42.0);
    }

    #[test]
    fn test_event_alpha_conversion() {
        let event = OrientationEvent {
            alpha: 90.0,
            compass_heading: None,
        };
        assert_eq!(from_event(&event), 270.0);
    }

    #[test]
    fn test_event_alpha_zero_wraps_to_zero() {
        let event = OrientationEvent {
            alpha: 0.0,
            compass_heading: None,
        };
        assert_eq!(from_event(&event), 0.0);
    }
}
