//! Geographic coordinate types.

use thiserror::Error;

/// Minimum valid latitude in degrees.
pub const MIN_LAT: f64 = -90.0;

/// Maximum valid latitude in degrees.
pub const MAX_LAT: f64 = 90.0;

/// Minimum valid longitude in degrees.
pub const MIN_LON: f64 = -180.0;

/// Maximum valid longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Errors that can occur when constructing geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    /// Latitude is not finite or outside [-90, 90].
    #[error("invalid latitude: {0} (must be finite and within [-90, 90])")]
    InvalidLatitude(f64),

    /// Longitude is not finite or outside [-180, 180].
    #[error("invalid longitude: {0} (must be finite and within [-180, 180])")]
    InvalidLongitude(f64),
}

/// A validated geographic position.
///
/// Construction goes through [`GeoPoint::new`], which rejects non-finite
/// or out-of-range values rather than clamping them. Once constructed the
/// point is immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a validated geographic point.
    ///
    /// # Arguments
    ///
    /// * `latitude` - Latitude in degrees, finite and within [-90, 90]
    /// * `longitude` - Longitude in degrees, finite and within [-180, 180]
    ///
    /// # Returns
    ///
    /// A `Result` containing the point or an error naming the offending axis.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
