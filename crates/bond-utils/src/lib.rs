//! Shared utilities for bond-screener-rs
//!
//! This crate provides common functionality used across the workspace,
//! including logging setup and top-level configuration.

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::init_tracing;
