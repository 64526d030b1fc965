//! HTTP client module
//!
//! A thin wrapper over reqwest: base-URL resolution, default query
//! parameters (the static API key), JSON decoding, and status
//! classification. The client makes exactly one attempt per request;
//! retry policies are out of scope for this crate.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
