//! Configuration module for the submission-packager.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - The ungraded submission policy
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, OptionsConfig, PathsConfig};
pub use modes::UngradedPolicy;
pub use validation::validate_config;
