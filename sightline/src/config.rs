//! Configuration for the acquisition pipeline.
//!
//! `CompassConfig` combines the tunables of one fetch-and-filter request:
//! provider endpoint, field-of-view width, radius clamp bounds, the
//! fallback origin, and location acquisition settings.

use std::time::Duration;

use crate::geo::GeoPoint;
use crate::poi::DEFAULT_ENDPOINT;
use crate::sensors::DEFAULT_POSITION_TIMEOUT;

/// Half-width of the field-of-view window in degrees.
pub const DEFAULT_FOV_DEG: f64 = 45.0;

/// Smallest usable search radius in kilometers.
pub const MIN_RADIUS_KM: f64 = 0.1;

/// Largest usable search radius in kilometers.
pub const MAX_RADIUS_KM: f64 = 50.0;

/// Latitude of the fallback origin used when live geolocation fails.
pub const FALLBACK_LATITUDE: f64 = 40.748428;

/// Longitude of the fallback origin used when live geolocation fails.
pub const FALLBACK_LONGITUDE: f64 = -73.985654;

/// Configuration for a [`crate::orchestrator::Compass`].
#[derive(Debug, Clone)]
pub struct CompassConfig {
    /// Overpass endpoint URL.
    pub endpoint: String,

    /// Field-of-view half-width in degrees.
    pub fov_deg: f64,

    /// Origin substituted when live geolocation is unavailable.
    pub fallback_origin: GeoPoint,

    /// Deadline for the location acquisition step.
    pub position_timeout: Duration,

    /// Request a high-accuracy position fix.
    pub high_accuracy: bool,

    /// Lower radius clamp bound in kilometers.
    pub min_radius_km: f64,

    /// Upper radius clamp bound in kilometers.
    pub max_radius_km: f64,
}

impl Default for CompassConfig {
    fn default() -> Self {
        let fallback_origin = GeoPoint::new(FALLBACK_LATITUDE, FALLBACK_LONGITUDE)
            .expect("fallback origin constants are valid coordinates");

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fov_deg: DEFAULT_FOV_DEG,
            fallback_origin,
            position_timeout: DEFAULT_POSITION_TIMEOUT,
            high_accuracy: true,
            min_radius_km: MIN_RADIUS_KM,
            max_radius_km: MAX_RADIUS_KM,
        }
    }
}

impl CompassConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the provider endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the field-of-view half-width.
    pub fn with_fov_deg(mut self, fov_deg: f64) -> Self {
        self.fov_deg = fov_deg;
        self
    }

    /// Sets the fallback origin.
    pub fn with_fallback_origin(mut self, origin: GeoPoint) -> Self {
        self.fallback_origin = origin;
        self
    }

    /// Sets the location acquisition deadline.
    pub fn with_position_timeout(mut self, timeout: Duration) -> Self {
        self.position_timeout = timeout;
        self
    }
}
