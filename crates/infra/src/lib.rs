//! # TalentBook Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP adapters for auth, serverless functions and the REST gateway
//! - The shared `HttpClient` transport
//! - API error classification
//! - Configuration loading from environment or file
//!
//! ## Architecture
//! - Implements traits defined in `talentbook-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{
    ApiError, ApiErrorCategory, AuthClient, BackendClient, BackendClientConfig, FunctionsClient,
    RestClient, StaticSessionProvider,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
