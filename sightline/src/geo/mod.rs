//! Geographic coordinate module
//!
//! Provides the validated [`GeoPoint`] type and the geodesic bearing
//! computation used to relate nearby places to the observer's position.

mod types;

pub use types::{GeoError, GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Normalizes an angle in degrees into [0, 360).
#[inline]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Computes the initial great-circle bearing from `origin` to `target`.
///
/// Uses the standard forward-azimuth formula:
///
/// ```text
/// Δλ = λ2 − λ1
/// y = sin(Δλ)·cos(φ2)
/// x = cos(φ1)·sin(φ2) − sin(φ1)·cos(φ2)·cos(Δλ)
/// bearing = (degrees(atan2(y, x)) + 360) mod 360
/// ```
///
/// # Returns
///
/// Bearing in degrees within [0, 360), clockwise from north. Defined for
/// all valid point pairs; a degenerate `origin == target` pair yields 0.
#[inline]
pub fn bearing(origin: GeoPoint, target: GeoPoint) -> f64 {
    let lat1 = origin.latitude().to_radians();
    let lat2 = target.latitude().to_radians();
    let delta_lon = (target.longitude() - origin.longitude()).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}
