//! Configuration structures and loading logic.

use crate::config::modes::UngradedPolicy;
use crate::error::{Error, Result};
use crate::rename::DEFAULT_ALLOWED_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Input, scratch and output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the downloaded assignment archives.
    #[serde(default = "default_input_directory")]
    pub input_directory: PathBuf,

    /// Scratch directory where assignments are extracted and repackaged.
    #[serde(default = "default_work_directory")]
    pub work_directory: PathBuf,

    /// Final combined archive.
    #[serde(default = "default_output_archive")]
    pub output_archive: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_directory: default_input_directory(),
            work_directory: default_work_directory(),
            output_archive: default_output_archive(),
        }
    }
}

/// Packaging options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// File extensions kept in the package.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    /// Site-generated files removed right after extraction.
    #[serde(default = "default_junk_files")]
    pub junk_files: Vec<String>,

    /// How submissions without a grade are handled.
    #[serde(default)]
    pub ungraded_policy: UngradedPolicy,

    /// First sequence number of the run.
    #[serde(default)]
    pub start_sequence: u64,

    /// Maximum score; numeric grades become a percentage of it when set.
    #[serde(default)]
    pub grade_out_of: Option<f64>,

    /// Keep the scratch directory after packaging.
    #[serde(default)]
    pub keep_work_directory: bool,

    /// Whether to show a progress bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            junk_files: default_junk_files(),
            ungraded_policy: UngradedPolicy::default(),
            start_sequence: 0,
            grade_out_of: None,
            keep_work_directory: false,
            show_progress: true,
        }
    }
}

fn default_input_directory() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_work_directory() -> PathBuf {
    PathBuf::from("work")
}

fn default_output_archive() -> PathBuf {
    PathBuf::from("downloads.zip")
}

fn default_allowed_extensions() -> Vec<String> {
    DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_junk_files() -> Vec<String> {
    vec!["index.html".to_string(), "metadata.yml".to_string()]
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
