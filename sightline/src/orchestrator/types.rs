//! Result and progress types for the acquisition pipeline.

use thiserror::Error;

use crate::geo::GeoPoint;
use crate::poi::{Place, ProviderError};
use crate::sensors::OrientationError;

/// Loading-state transitions reported through the progress callback.
///
/// A request moves `Idle → Loading → (Succeeded | Failed)`. Input rejected
/// before any I/O never leaves `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// No request outstanding.
    Idle,
    /// Acquisition in flight.
    Loading,
    /// Request completed; `in_view` places survived the filter.
    Succeeded { in_view: usize },
    /// Request aborted with a [`FetchError`].
    Failed,
}

/// The result of a completed fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// Places inside the field of view, in provider order. May be empty.
    pub places: Vec<Place>,

    /// The heading the filter ran against, degrees in [0, 360).
    pub heading: f64,

    /// The origin bearings were computed from (live fix or fallback).
    pub origin: GeoPoint,

    /// Set when a non-fatal failure was recovered (location fallback).
    pub notice: Option<String>,
}

/// Errors that abort a fetch.
///
/// A location failure is deliberately absent: it is recovered with the
/// fallback origin and surfaced through [`FetchOutcome::notice`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The requested radius is not a positive, finite number. Rejected
    /// before any I/O.
    #[error("invalid radius: {0} km (must be a positive, finite number)")]
    InvalidRadius(f64),

    /// The points-of-interest provider failed.
    #[error("points-of-interest query failed: {0}")]
    Provider(#[from] ProviderError),

    /// No heading could be resolved; the result is a failure, not an
    /// empty list.
    #[error("compass heading unavailable: {0}")]
    HeadingUnavailable(#[source] OrientationError),

    /// The request was superseded and its token cancelled.
    #[error("request cancelled")]
    Cancelled,
}
