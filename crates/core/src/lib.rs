//! Core types and shared functionality for the morty workspace.
//!
//! This crate provides:
//! - In-memory response cache partitioned by endpoint
//! - Configuration structures with layered loading

pub mod cache;
pub mod config;

pub use cache::ResponseCache;
pub use config::{AppConfig, ConfigError};
