//! Acquisition orchestrator
//!
//! `Compass` coordinates the three fallible acquisitions behind one
//! user-initiated request — current position, nearby places, compass
//! heading — and merges them through the bearing and field-of-view
//! pipeline.
//!
//! # Failure policy
//!
//! - Location failure is recovered: the request proceeds anchored to the
//!   fallback origin and the reason is surfaced as a non-fatal notice.
//! - Provider failure aborts the request.
//! - Heading failure aborts the request; the caller can tell it apart
//!   from an empty (but successful) result.
//! - A malformed feature only loses that feature, never the batch.
//!
//! # Cancellation
//!
//! Every suspension point honors a `CancellationToken`, so a superseding
//! request can abandon a stale one (cancel-and-replace).

mod types;

pub use types::{FetchError, FetchOutcome, Progress};

use futures::future;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::CompassConfig;
use crate::fov;
use crate::geo::GeoPoint;
use crate::poi::{HttpPost, OverpassProvider};
use crate::sensors::{LocationSource, OrientationSource, PositionError, PositionOptions};

/// Coordinates one fetch-and-filter request over injected capabilities.
///
/// Generic over the location source, orientation source, and HTTP client
/// so tests can drive the whole pipeline with deterministic fakes.
pub struct Compass<L, O, C: HttpPost> {
    location: L,
    orientation: O,
    provider: OverpassProvider<C>,
    config: CompassConfig,
}

impl<L, O, C> Compass<L, O, C>
where
    L: LocationSource,
    O: OrientationSource,
    C: HttpPost,
{
    /// Creates a compass with default configuration.
    pub fn new(location: L, orientation: O, http_client: C) -> Self {
        Self::with_config(location, orientation, http_client, CompassConfig::default())
    }

    /// Creates a compass with custom configuration.
    pub fn with_config(
        location: L,
        orientation: O,
        http_client: C,
        config: CompassConfig,
    ) -> Self {
        let provider = OverpassProvider::new(http_client).with_endpoint(config.endpoint.clone());
        Self {
            location,
            orientation,
            provider,
            config,
        }
    }

    /// Fetches the places currently inside the field of view.
    ///
    /// Convenience wrapper over [`Self::fetch_with_cancellation`] with a
    /// token nobody cancels.
    pub async fn fetch_visible_places(
        &self,
        radius_km: f64,
        on_progress: impl FnMut(Progress),
    ) -> Result<FetchOutcome, FetchError> {
        self.fetch_with_cancellation(radius_km, on_progress, &CancellationToken::new())
            .await
    }

    /// Fetches the places currently inside the field of view, honoring
    /// `cancel` at every suspension point.
    ///
    /// `on_progress` observes the `Loading → (Succeeded | Failed)`
    /// transitions; an invalid radius is rejected before any I/O and
    /// before the `Loading` transition.
    pub async fn fetch_with_cancellation(
        &self,
        radius_km: f64,
        mut on_progress: impl FnMut(Progress),
        cancel: &CancellationToken,
    ) -> Result<FetchOutcome, FetchError> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(FetchError::InvalidRadius(radius_km));
        }

        info!(radius_km, "fetching places within radius");
        on_progress(Progress::Loading);

        let result = self.run(radius_km, cancel).await;
        match &result {
            Ok(outcome) => on_progress(Progress::Succeeded {
                in_view: outcome.places.len(),
            }),
            Err(error) => {
                warn!(%error, "fetch failed");
                on_progress(Progress::Failed);
            }
        }
        result
    }

    async fn run(
        &self,
        radius_km: f64,
        cancel: &CancellationToken,
    ) -> Result<FetchOutcome, FetchError> {
        let (origin, notice) = self.resolve_origin(cancel).await?;

        let clamped_km = radius_km.clamp(self.config.min_radius_km, self.config.max_radius_km);
        if clamped_km != radius_km {
            debug!(requested = radius_km, clamped = clamped_km, "radius clamped");
        }
        // Whole meters; sub-meter precision is noise to the provider.
        let radius_m = (clamped_km * 1000.0).round();

        // The places query and the heading acquisition are independent of
        // each other; only their combination at the end is observable.
        let (places, heading) = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(FetchError::Cancelled),
            joined = future::join(
                self.provider.search(origin, radius_m),
                self.orientation.current_heading(),
            ) => joined,
        };

        let places = places?;
        let heading = heading.map_err(FetchError::HeadingUnavailable)?;

        let total = places.len();
        let visible = fov::filter_visible(places, heading, self.config.fov_deg);
        if visible.is_empty() {
            info!(total, heading = heading.round(), "no places in view");
        } else {
            info!(
                total,
                in_view = visible.len(),
                heading = heading.round(),
                "places in view"
            );
        }

        Ok(FetchOutcome {
            places: visible,
            heading,
            origin,
            notice,
        })
    }

    /// Resolves the request origin, substituting the fallback position on
    /// any location failure.
    async fn resolve_origin(
        &self,
        cancel: &CancellationToken,
    ) -> Result<(GeoPoint, Option<String>), FetchError> {
        let options = PositionOptions {
            high_accuracy: self.config.high_accuracy,
            timeout: self.config.position_timeout,
        };

        // The deadline is enforced here regardless of whether the backing
        // sensor honors options.timeout itself.
        let acquired = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(FetchError::Cancelled),
            result = time::timeout(options.timeout, self.location.current_position(&options)) => {
                result.unwrap_or(Err(PositionError::Timeout))
            }
        };

        let validated = acquired.and_then(|fix| {
            GeoPoint::new(fix.latitude, fix.longitude).map_err(|_| {
                PositionError::InvalidCoordinates {
                    latitude: fix.latitude,
                    longitude: fix.longitude,
                }
            })
        });

        match validated {
            Ok(origin) => {
                debug!(%origin, "resolved live position");
                Ok((origin, None))
            }
            Err(error) => {
                warn!(%error, "geolocation failed, using fallback origin");
                let notice = format!(
                    "Location error: {}. Showing results near the default location.",
                    error
                );
                Ok((self.config.fallback_origin, Some(notice)))
            }
        }
    }
}
