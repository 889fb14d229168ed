//! Configuration for sample-review
//!
//! This crate provides:
//! - Configuration file lookup (TOML, current directory then home)
//! - Review configuration (ReviewConfig) wrapping the diff options

pub mod review_config;

pub use review_config::{OutputFormat, ReviewConfig, CONFIG_FILE};
