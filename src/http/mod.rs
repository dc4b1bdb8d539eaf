//! HTTP client module
//!
//! A thin GET-and-decode client: bearer authentication, URL-encoded query
//! parameters, JSON body parsing. There is deliberately no retry, backoff, or
//! rate limiting; any transport failure aborts the run.

mod client;

pub use client::{HttpClient, HttpClientConfig};
