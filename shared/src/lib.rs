//! Shared utilities and common types for GatherMate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Environment detection

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, JwtConfig};
