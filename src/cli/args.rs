//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, UngradedPolicy};

/// Submission packager CLI.
#[derive(Parser, Debug)]
#[command(
    name = "submission-packager",
    version,
    about = "Rename, filter and repackage downloaded submission archives",
    long_about = "Takes the submission archives downloaded from an LMS or Gradescope, renames every \
                  file to '{grade}%---{sequence}---{assignmentId}---{rest}', drops files outside the \
                  extension allow-list and bundles everything into a single archive.\n\n\
                  Grades for 'X.zip' are read from 'X.grades.json' in the same directory."
)]
pub struct Args {
    /// Directory holding the downloaded assignment archives.
    #[arg(short, long = "input")]
    pub input_directory: Option<PathBuf>,

    /// Path of the combined output archive.
    #[arg(short, long = "output")]
    pub output_archive: Option<PathBuf>,

    /// Scratch directory used while repackaging.
    #[arg(short, long = "work-dir")]
    pub work_directory: Option<PathBuf>,

    /// Allowed file extension (repeatable, replaces the configured list).
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// What to do with submissions that have no grade.
    #[arg(long, value_enum)]
    pub ungraded: Option<UngradedPolicyArg>,

    /// Shortcut for `--ungraded skip`.
    #[arg(long, conflicts_with = "ungraded")]
    pub skip_ungraded: bool,

    /// First sequence number of this run.
    #[arg(long)]
    pub start_sequence: Option<u64>,

    /// Maximum score; numeric grades become a whole percentage of it.
    #[arg(long = "out-of")]
    pub grade_out_of: Option<f64>,

    /// Keep the scratch directory after packaging.
    #[arg(long)]
    pub keep_work_dir: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml", env = "SUBMISSION_PACKAGER_CONFIG")]
    pub config: PathBuf,

    /// Hide the progress bar and per-assignment statistics.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI ungraded policy argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UngradedPolicyArg {
    /// Rename with the "NA" grade marker.
    Label,
    /// Leave ungraded submissions out of the package.
    Skip,
}

impl From<UngradedPolicyArg> for UngradedPolicy {
    fn from(arg: UngradedPolicyArg) -> Self {
        match arg {
            UngradedPolicyArg::Label => UngradedPolicy::Label,
            UngradedPolicyArg::Skip => UngradedPolicy::Skip,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        // Override paths if provided
        if let Some(dir) = &self.input_directory {
            config.paths.input_directory = dir.clone();
        }

        if let Some(out) = &self.output_archive {
            config.paths.output_archive = out.clone();
        }

        if let Some(dir) = &self.work_directory {
            config.paths.work_directory = dir.clone();
        }

        // Override options if provided
        if !self.extensions.is_empty() {
            config.options.allowed_extensions = self.extensions.clone();
        }

        if let Some(policy) = self.ungraded {
            config.options.ungraded_policy = policy.into();
        }

        if let Some(start) = self.start_sequence {
            config.options.start_sequence = start;
        }

        if let Some(out_of) = self.grade_out_of {
            config.options.grade_out_of = Some(out_of);
        }

        // Boolean flags (only override if set to non-default)
        if self.skip_ungraded {
            config.options.ungraded_policy = UngradedPolicy::Skip;
        }

        if self.keep_work_dir {
            config.options.keep_work_directory = true;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides() {
        let args = Args::parse_from([
            "submission-packager",
            "-i",
            "gradescope",
            "--ext",
            ".py",
            "--ext",
            ".java",
            "--skip-ungraded",
            "--start-sequence",
            "40",
            "--out-of",
            "130",
            "-q",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.paths.input_directory, PathBuf::from("gradescope"));
        assert_eq!(config.paths.output_archive, PathBuf::from("downloads.zip"));
        assert_eq!(config.options.allowed_extensions, vec![".py", ".java"]);
        assert_eq!(config.options.ungraded_policy, UngradedPolicy::Skip);
        assert_eq!(config.options.start_sequence, 40);
        assert_eq!(config.options.grade_out_of, Some(130.0));
        assert!(!config.options.show_progress);
    }

    #[test]
    fn test_merge_keeps_config_when_unset() {
        let args = Args::parse_from(["submission-packager"]);

        let mut config = Config::default();
        config.options.start_sequence = 7;
        config.options.ungraded_policy = UngradedPolicy::Skip;
        args.merge_into_config(&mut config);

        assert_eq!(config.options.start_sequence, 7);
        assert_eq!(config.options.ungraded_policy, UngradedPolicy::Skip);
        assert!(config.options.show_progress);
    }

    #[test]
    fn test_ungraded_value_enum() {
        let args = Args::parse_from(["submission-packager", "--ungraded", "label"]);
        assert!(matches!(args.ungraded, Some(UngradedPolicyArg::Label)));

        assert!(Args::try_parse_from([
            "submission-packager",
            "--ungraded",
            "label",
            "--skip-ungraded"
        ])
        .is_err());
    }
}
