//! Submission renaming module.
//!
//! Provides:
//! - Submission filename parsing
//! - Grade tables
//! - Grade-prefixed, sequence-numbered renaming
//! - Extension allow-list filtering

pub mod filename;
pub mod filter;
pub mod grades;
pub mod renamer;

pub use filename::{sanitize_rest, SubmissionFilename};
pub use filter::{filter_by_extension, has_allowed_extension, DEFAULT_ALLOWED_EXTENSIONS};
pub use grades::{grades_path_for, GradeTable, UNGRADED_MARKER};
pub use renamer::{rename, RenameBatch, RenamedSubmission, SubmissionRenamer};
