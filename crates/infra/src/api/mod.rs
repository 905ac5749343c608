//! Backend API adapters
//!
//! HTTP implementations of the core ports against the hosted backend:
//! auth (`/auth/v1`), serverless functions (`/functions/v1`) and the REST
//! gateway (`/rest/v1`). All of them share one [`BackendClient`], which
//! sends every request exactly once.

pub mod auth;
pub mod client;
pub mod errors;
pub mod functions;
pub mod rest;

pub use auth::{AuthClient, StaticSessionProvider};
pub use client::{extract_error_message, BackendClient, BackendClientConfig};
pub use errors::{ApiError, ApiErrorCategory};
pub use functions::FunctionsClient;
pub use rest::RestClient;
