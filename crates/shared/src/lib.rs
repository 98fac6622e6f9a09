//! Shared types, errors, and configuration for Changemaker.
//!
//! This crate provides common types used across all other crates:
//! - Fixed-point amount types and minor-unit conversion
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ChangeConfig, ServerConfig};
pub use error::AppError;
