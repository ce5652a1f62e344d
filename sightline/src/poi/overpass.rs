//! Overpass points-of-interest provider.
//!
//! Queries an Overpass API endpoint for tourist features (parks, museums,
//! beaches, attractions, viewpoints) around an origin, and converts the
//! returned elements into [`Place`] records with their bearing from that
//! origin.
//!
//! # Wire Contract
//!
//! A single POST with an Overpass-QL text body. The response is JSON:
//!
//! ```text
//! { "elements": [ { "lat"?, "lon"?, "center"?: {"lat","lon"}, "tags"?: {...} } ] }
//! ```
//!
//! Point features carry their own `lat`/`lon`; area and relation features
//! carry a `center` centroid instead (requested via `out center;`).

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use super::error::ProviderError;
use super::http::{HttpPost, HttpResponse};
use super::place::{Place, NO_ADDRESS};
use crate::geo::{self, GeoPoint};

/// Default public Overpass API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Maximum provider body length echoed into an error message.
const ERROR_BODY_SNIPPET_LEN: usize = 200;

/// Tag predicates selecting tourist features, in query order.
const TAG_FILTERS: [&str; 4] = [
    r#""leisure"="park""#,
    r#""tourism"="museum""#,
    r#""tourism"="beach""#,
    r#""tourism"~"attraction|viewpoint""#,
];

/// Element kinds queried for each tag predicate.
const ELEMENT_KINDS: [&str; 3] = ["node", "way", "relation"];

/// A feature element returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    /// Point latitude, present on node features.
    pub lat: Option<f64>,
    /// Point longitude, present on node features.
    pub lon: Option<f64>,
    /// Centroid, present on way and relation features.
    pub center: Option<Center>,
    /// Feature tags.
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Centroid of an area or relation feature.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

/// Top-level provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

impl OverpassElement {
    /// The element's usable coordinates: its own point, or its centroid.
    fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => self.center.map(|c| (c.lat, c.lon)),
        }
    }

    fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// Builds the Overpass-QL query for tourist features around an origin.
///
/// Queries node, way, and relation elements for each tag predicate within
/// `radius_m` meters, with `out center;` so area features report their
/// centroid.
pub fn build_query(origin: GeoPoint, radius_m: f64) -> String {
    let around = format!(
        "(around:{},{},{})",
        radius_m,
        origin.latitude(),
        origin.longitude()
    );

    let mut query = String::from("[out:json][timeout:25];\n(\n");
    for filter in TAG_FILTERS {
        for kind in ELEMENT_KINDS {
            query.push_str(&format!("  {}[{}]{};\n", kind, filter, around));
        }
    }
    query.push_str(");\nout center;");
    query
}

/// Overpass points-of-interest provider.
///
/// Generic over the HTTP client so tests can inject a mock.
pub struct OverpassProvider<C: HttpPost> {
    http_client: C,
    endpoint: String,
}

impl<C: HttpPost> OverpassProvider<C> {
    /// Creates a provider against the default public endpoint.
    pub fn new(http_client: C) -> Self {
        Self {
            http_client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Overrides the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Queries tourist features around `origin` within `radius_m` meters.
    ///
    /// Elements lacking usable coordinates are skipped; a non-success
    /// status, a non-JSON payload, or a malformed body aborts the whole
    /// query with a [`ProviderError`].
    pub async fn search(
        &self,
        origin: GeoPoint,
        radius_m: f64,
    ) -> Result<Vec<Place>, ProviderError> {
        let query = build_query(origin, radius_m);
        debug!(endpoint = %self.endpoint, radius_m, "querying points of interest");

        let response = self.http_client.post(&self.endpoint, query).await?;
        let parsed = decode_response(&response)?;

        let mut places = Vec::with_capacity(parsed.elements.len());
        for (index, element) in parsed.elements.iter().enumerate() {
            match to_place(index, element, origin) {
                Some(place) => places.push(place),
                None => warn!(
                    feature = index + 1,
                    "skipping feature without usable coordinates"
                ),
            }
        }

        debug!(count = places.len(), "fetched places");
        Ok(places)
    }
}

/// Classifies the raw response and parses its JSON body.
fn decode_response(response: &HttpResponse) -> Result<OverpassResponse, ProviderError> {
    if !response.is_success() {
        return Err(ProviderError::Status {
            status: response.status,
            body: body_snippet(&response.body),
        });
    }

    let is_json = response
        .content_type
        .as_deref()
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);
    if !is_json {
        return Err(ProviderError::NotJson {
            content_type: response
                .content_type
                .clone()
                .unwrap_or_else(|| "missing content type".to_string()),
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| ProviderError::Parse(e.to_string()))
}

/// Converts one element to a `Place`, or `None` when its coordinates are
/// missing or invalid.
///
/// `index` is the element's zero-based position in the response; the
/// positional name fallback is 1-based.
fn to_place(index: usize, element: &OverpassElement, origin: GeoPoint) -> Option<Place> {
    let (lat, lon) = element.coordinates()?;
    let position = GeoPoint::new(lat, lon).ok()?;

    let name = element
        .tag("name")
        .or_else(|| element.tag("tourism"))
        .or_else(|| element.tag("leisure"))
        .map(String::from)
        .unwrap_or_else(|| format!("Place {}", index + 1));

    let address = element
        .tag("addr:street")
        .unwrap_or(NO_ADDRESS)
        .to_string();

    Some(Place {
        name,
        position,
        bearing: geo::bearing(origin, position),
        address,
    })
}

fn body_snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    text.chars().take(ERROR_BODY_SNIPPET_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::super::http::tests::MockHttpClient;
    use super::*;

    fn origin() -> GeoPoint {
        GeoPoint::new(40.748428, -73.985654).unwrap()
    }

    #[test]
    fn test_query_covers_all_kinds_and_filters() {
        let query = build_query(origin(), 1000.0);

        for kind in ELEMENT_KINDS {
            for filter in TAG_FILTERS {
                let clause = format!("{}[{}]", kind, filter);
                assert!(query.contains(&clause), "missing clause: {}", clause);
            }
        }
        assert_eq!(query.matches("around:").count(), 12);
    }

    #[test]
    fn test_query_header_and_output_mode() {
        let query = build_query(origin(), 1000.0);
        assert!(query.starts_with("[out:json][timeout:25];"));
        assert!(query.ends_with("out center;"));
    }

    #[test]
    fn test_query_interpolates_radius_and_origin() {
        let query = build_query(origin(), 2500.0);
        assert!(query.contains("(around:2500,40.748428,-73.985654)"));
    }

    #[tokio::test]
    async fn test_search_converts_node_feature() {
        let mock = MockHttpClient::json(
            r#"{"elements":[{"lat":40.7536,"lon":-73.9832,
                "tags":{"name":"Bryant Park","leisure":"park","addr:street":"6th Avenue"}}]}"#,
        );
        let provider = OverpassProvider::new(mock);

        let places = provider.search(origin(), 1000.0).await.unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Bryant Park");
        assert_eq!(places[0].address, "6th Avenue");
        assert!((0.0..360.0).contains(&places[0].bearing));
    }

    #[tokio::test]
    async fn test_search_uses_centroid_for_area_features() {
        let mock = MockHttpClient::json(
            r#"{"elements":[{"center":{"lat":40.76,"lon":-73.99},
                "tags":{"tourism":"museum"}}]}"#,
        );
        let provider = OverpassProvider::new(mock);

        let places = provider.search(origin(), 1000.0).await.unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].position.latitude(), 40.76);
    }

    #[tokio::test]
    async fn test_search_name_falls_back_to_category() {
        let mock = MockHttpClient::json(
            r#"{"elements":[
                {"lat":40.75,"lon":-73.98,"tags":{"tourism":"viewpoint"}},
                {"lat":40.76,"lon":-73.97,"tags":{"leisure":"park"}},
                {"lat":40.77,"lon":-73.96}
            ]}"#,
        );
        let provider = OverpassProvider::new(mock);

        let places = provider.search(origin(), 1000.0).await.unwrap();
        assert_eq!(places[0].name, "viewpoint");
        assert_eq!(places[1].name, "park");
        assert_eq!(places[2].name, "Place 3");
    }

    #[tokio::test]
    async fn test_search_address_falls_back() {
        let mock =
            MockHttpClient::json(r#"{"elements":[{"lat":40.75,"lon":-73.98,"tags":{}}]}"#);
        let provider = OverpassProvider::new(mock);

        let places = provider.search(origin(), 1000.0).await.unwrap();
        assert_eq!(places[0].address, "No address");
    }

    #[tokio::test]
    async fn test_search_skips_features_without_coordinates() {
        let mock = MockHttpClient::json(
            r#"{"elements":[
                {"tags":{"name":"No coords"}},
                {"lat":95.0,"lon":0.0,"tags":{"name":"Bad latitude"}},
                {"lat":40.75,"lon":-73.98,"tags":{"name":"Kept"}}
            ]}"#,
        );
        let provider = OverpassProvider::new(mock);

        let places = provider.search(origin(), 1000.0).await.unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Kept");
    }

    #[tokio::test]
    async fn test_search_bearing_is_relative_to_origin() {
        // Feature due north of the origin.
        let mock = MockHttpClient::json(
            r#"{"elements":[{"lat":40.8,"lon":-73.985654,"tags":{"name":"North"}}]}"#,
        );
        let provider = OverpassProvider::new(mock);

        let places = provider.search(origin(), 1000.0).await.unwrap();
        assert!(places[0].bearing < 1e-6 || places[0].bearing > 360.0 - 1e-6);
    }

    #[tokio::test]
    async fn test_search_non_success_status_is_fatal() {
        let mock = MockHttpClient::new(Ok(HttpResponse {
            status: 504,
            content_type: Some("application/json".to_string()),
            body: b"gateway timeout".to_vec(),
        }));
        let provider = OverpassProvider::new(mock);

        let result = provider.search(origin(), 1000.0).await;
        assert!(matches!(
            result,
            Err(ProviderError::Status { status: 504, .. })
        ));
    }

    #[tokio::test]
    async fn test_search_non_json_payload_is_fatal() {
        let mock = MockHttpClient::new(Ok(HttpResponse {
            status: 200,
            content_type: Some("text/html".to_string()),
            body: b"<html>rate limited</html>".to_vec(),
        }));
        let provider = OverpassProvider::new(mock);

        let result = provider.search(origin(), 1000.0).await;
        assert!(matches!(result, Err(ProviderError::NotJson { .. })));
    }

    #[tokio::test]
    async fn test_search_missing_content_type_is_fatal() {
        let mock = MockHttpClient::new(Ok(HttpResponse {
            status: 200,
            content_type: None,
            body: b"{}".to_vec(),
        }));
        let provider = OverpassProvider::new(mock);

        let result = provider.search(origin(), 1000.0).await;
        assert!(matches!(result, Err(ProviderError::NotJson { .. })));
    }

    #[tokio::test]
    async fn test_search_malformed_json_is_fatal() {
        let mock = MockHttpClient::json("not json at all");
        let provider = OverpassProvider::new(mock);

        let result = provider.search(origin(), 1000.0).await;
        assert!(matches!(result, Err(ProviderError::Parse(_))));
    }

    #[tokio::test]
    async fn test_search_empty_elements_is_ok() {
        let mock = MockHttpClient::json(r#"{"elements":[]}"#);
        let provider = OverpassProvider::new(mock);

        let places = provider.search(origin(), 1000.0).await.unwrap();
        assert!(places.is_empty());
    }
}
