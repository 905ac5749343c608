//! # TalentBook Domain
//!
//! Business domain types and models for the TalentBook calendar core.
//!
//! This crate contains:
//! - Calendar event and weekend-matrix commit types
//! - Edit snapshots used for optimistic concurrency checks
//! - Session types read from the auth provider
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other TalentBook crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
