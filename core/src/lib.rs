//! # GatherMate Core
//!
//! Core business logic and domain layer for the GatherMate backend.
//! This crate contains the token domain entities, the stateless token
//! service, and the error types that form the foundation of the
//! authentication flow.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
