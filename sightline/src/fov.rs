//! Field-of-view filtering
//!
//! Decides which bearings fall inside the angular window centered on the
//! device heading, handling windows that wrap through the 0°/360° boundary.

use tracing::debug;

use crate::geo::normalize_degrees;
use crate::poi::Place;

/// Tests whether a bearing lies inside the field-of-view window.
///
/// The window is `[heading − fov, heading + fov]` modulo 360, inclusive on
/// both ends. `fov` is the half-width in degrees and generalizes to any
/// value in (0, 180].
///
/// # Arguments
///
/// * `bearing` - Bearing to test, degrees in [0, 360)
/// * `heading` - Window center, degrees in [0, 360)
/// * `fov` - Half-width of the window in degrees
#[inline]
pub fn is_in_view(bearing: f64, heading: f64, fov: f64) -> bool {
    let min_angle = normalize_degrees(heading - fov);
    let max_angle = normalize_degrees(heading + fov);

    if min_angle > max_angle {
        // Window wraps through 0°.
        bearing >= min_angle || bearing <= max_angle
    } else {
        bearing >= min_angle && bearing <= max_angle
    }
}

/// Narrows places to those whose precomputed bearing is inside the window.
///
/// Preserves the relative input order. An empty result is a valid outcome,
/// not an error.
pub fn filter_visible(places: Vec<Place>, heading: f64, fov: f64) -> Vec<Place> {
    places
        .into_iter()
        .filter(|place| {
            let in_view = is_in_view(place.bearing, heading, fov);
            debug!(
                name = %place.name,
                bearing = format_args!("{:.1}", place.bearing),
                in_view,
                "field-of-view check"
            );
            in_view
        })
        .collect()
}
