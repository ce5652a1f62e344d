//! Sightline - find tourist places in your field of view
//!
//! This library locates tourist points of interest near a position and
//! narrows them to those inside the device's forward-facing field of
//! view. It combines three ingredients:
//!
//! - a pure geodesic bearing computation ([`geo`]),
//! - a pure angular-window membership test with 0°/360° wraparound
//!   handling ([`fov`]),
//! - an orchestrator that acquires position, nearby places, and compass
//!   heading from injected capabilities and composes them
//!   ([`orchestrator`]).
//!
//! Sensors and the HTTP client are capability traits passed in by the
//! caller, so the whole pipeline runs deterministically under test with
//! fake sensors and a mock provider.

pub mod config;
pub mod fov;
pub mod geo;
pub mod heading;
pub mod orchestrator;
pub mod poi;
pub mod sensors;
pub mod telemetry;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the orchestrator and its result types.
pub use crate::orchestrator::{Compass, FetchError, FetchOutcome, Progress};

// Core domain types.
pub use crate::config::CompassConfig;
pub use crate::geo::{bearing, GeoError, GeoPoint};
pub use crate::poi::Place;

// Pure filtering helpers that are generally useful.
pub use crate::fov::{filter_visible, is_in_view};

/// Crate version, for CLI banners.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
