//! Shared types, errors, and configuration for Clinia.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management for the financial engine

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, EngineConfig, FinancialSettings, SecurityConfig};
pub use error::{AppError, AppResult};
