//! The place record produced by a nearby-places query.

use crate::geo::GeoPoint;

/// Address string used when a feature carries no street tag.
pub const NO_ADDRESS: &str = "No address";

/// A tourist point of interest with its bearing from the request origin.
///
/// Immutable once constructed. The bearing is computed exactly once,
/// against the origin resolved for the request that produced this place;
/// it is not recomputed on later heading changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Display name. Never empty: falls back to the feature's category
    /// tag, then to a positional `"Place N"` label.
    pub name: String,

    /// Geographic position of the feature (its own point, or the
    /// centroid for area features).
    pub position: GeoPoint,

    /// Bearing from the request origin, degrees in [0, 360).
    pub bearing: f64,

    /// Street address, or [`NO_ADDRESS`] when the feature has none.
    pub address: String,
}
