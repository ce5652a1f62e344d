//! Points-of-interest provider abstraction
//!
//! This module provides the place record type, the HTTP client trait used
//! for dependency injection, and the Overpass provider implementation.

mod error;
mod http;
mod overpass;
mod place;

pub use error::ProviderError;
pub use http::{HttpPost, HttpResponse, ReqwestClient};
pub use overpass::{
    build_query, Center, OverpassElement, OverpassProvider, OverpassResponse, DEFAULT_ENDPOINT,
};
pub use place::{Place, NO_ADDRESS};

#[cfg(test)]
pub use http::tests::MockHttpClient;
