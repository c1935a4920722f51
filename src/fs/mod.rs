//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Filename validation and sanitizing
//! - Zip archive extraction and creation

pub mod archive;
pub mod naming;
pub mod paths;

pub use archive::{extract_archive, zip_directory};
pub use naming::{sanitize_path_component, validate_component};
pub use paths::{
    assignment_folder, ensure_dir, find_assignment_archives, list_file_names, prepare_work_dir,
    remove_junk_files, remove_stale_file, remove_subdirectories,
};
