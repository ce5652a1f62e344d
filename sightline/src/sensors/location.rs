//! Location-sensing capability.

use std::time::Duration;

use thiserror::Error;

/// Default location acquisition deadline.
pub const DEFAULT_POSITION_TIMEOUT: Duration = Duration::from_secs(10);

/// Options for a single position acquisition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    /// Request the most accurate fix the platform can provide.
    pub high_accuracy: bool,

    /// Deadline for the acquisition. The orchestrator enforces this
    /// deadline regardless of whether the backing sensor honors it.
    pub timeout: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: DEFAULT_POSITION_TIMEOUT,
        }
    }
}

/// A raw position fix as reported by the sensing platform.
///
/// Values are unvalidated; [`crate::geo::GeoPoint::new`] is the single
/// validation gate and decides whether the fix is usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Errors that can occur while acquiring a position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    /// The user or platform denied access to location data.
    #[error("location access denied")]
    Denied,

    /// The acquisition did not complete within the deadline.
    #[error("location request timed out")]
    Timeout,

    /// The device reported an error.
    #[error("location unavailable: {0}")]
    Unavailable(String),

    /// The platform reported coordinates outside the valid range.
    #[error("invalid coordinates reported: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}

/// Capability interface for acquiring the current position.
///
/// Implementations wrap a platform location service; tests inject fakes.
/// Each call is a one-shot acquisition that resolves or fails exactly
/// once, with no subscription left behind.
#[allow(async_fn_in_trait)]
pub trait LocationSource: Send + Sync {
    /// Acquires the current position.
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<PositionFix, PositionError>;
}
