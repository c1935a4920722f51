//! Packaging module.
//!
//! This module provides:
//! - Packaging statistics
//! - Single assignment packaging (extract, rename, filter, re-zip)
//! - Whole-run packaging into one delivery archive

pub mod assignment;
pub mod run;
pub mod state;

pub use assignment::package_assignment;
pub use run::run_packaging;
pub use state::{AssignmentStats, RunStats};
