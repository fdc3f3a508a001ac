//! HTTP client module
//!
//! The transport every provider call goes through.
//!
//! # Features
//!
//! - **Authentication**: Bearer token via the auth module
//! - **Automatic Retries**: Transient 5xx, 429 and connect/timeout failures
//! - **Backoff Strategies**: Constant, linear, and exponential backoff

mod client;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, DEFAULT_API_URL,
};
