//! Submission Packager - rename, filter and bundle downloaded LMS submissions
//!
//! This library turns batches of downloaded submission archives into one
//! anonymised delivery archive.
//!
//! # Features
//!
//! - Grade-prefixed, run-wide unique submission names
//! - Grade tables from JSON, optionally scaled to percentages
//! - Extension allow-list filtering
//! - Removal of LMS-generated junk files
//! - Repackaging into a single zip archive
//!
//! # Example
//!
//! ```
//! use submission_packager::rename::{filter_by_extension, rename, GradeTable};
//!
//! let grades: GradeTable = [("123", "87")].into_iter().collect();
//! let (renamed, next) = rename(&["123-456-Jane Doe-main.py"], &grades, 0)?;
//! assert_eq!(renamed[0].renamed, "87%---0---456---main.py");
//! assert_eq!(next, 1);
//!
//! let kept = filter_by_extension(&["a.py", "a.exe", "a.zip"], &[".py", ".zip"]);
//! assert_eq!(kept, vec!["a.py", "a.zip"]);
//! # Ok::<(), submission_packager::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod package;
pub mod rename;

// Re-exports for convenience
pub use config::{Config, UngradedPolicy};
pub use error::{Error, Result};
pub use package::{package_assignment, run_packaging, AssignmentStats, RunStats};
pub use rename::{
    filter_by_extension, rename, GradeTable, RenameBatch, RenamedSubmission, SubmissionFilename,
    SubmissionRenamer,
};
