//! Shared errors and configuration for Valora.
//!
//! This crate provides what every other crate needs:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use crate::config::{AppConfig, DatasetConfig, DateOrder, ServerConfig};
pub use crate::error::{AppError, AppResult};
