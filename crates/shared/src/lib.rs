//! Shared types, errors, and configuration for Nexus.
//!
//! This crate provides common types used across all other crates:
//! - Typed record IDs for type-safe entity references
//! - Amount parsing and display helpers
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, InsightConfig, ServerConfig};
pub use error::{AppError, AppResult};
