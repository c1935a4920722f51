//! Whole-run packaging: every assignment archive into one delivery archive.

use crate::config::validation::{validate_output_location, validate_work_directory};
use crate::config::Config;
use crate::error::Result;
use crate::fs::{find_assignment_archives, prepare_work_dir, remove_stale_file, zip_directory};
use crate::output::create_item_bar;
use crate::package::assignment::package_assignment;
use crate::package::state::RunStats;
use crate::rename::SubmissionRenamer;

/// Package every assignment archive in the input directory.
///
/// A failing assignment is logged and counted but does not stop the run.
/// The caller decides what a non-zero `assignments_failed` means.
pub fn run_packaging(config: &Config) -> Result<RunStats> {
    let paths = &config.paths;

    // The work directory is wiped below
    validate_work_directory(&paths.input_directory, &paths.work_directory)?;
    validate_output_location(&paths.work_directory, &paths.output_archive)?;

    prepare_work_dir(&paths.work_directory)?;
    remove_stale_file(&paths.output_archive)?;

    let archives = find_assignment_archives(&paths.input_directory)?;
    if archives.is_empty() {
        tracing::warn!(
            "No assignment archives found in {}",
            paths.input_directory.display()
        );
    } else {
        tracing::info!("Found {} assignment archives", archives.len());
    }

    let mut renamer = SubmissionRenamer::new(config.options.start_sequence)
        .with_policy(config.options.ungraded_policy);
    let mut stats = RunStats::default();

    let bar = config
        .options
        .show_progress
        .then(|| create_item_bar(archives.len() as u64, "Packaging"));

    for archive in &archives {
        match package_assignment(config, &mut renamer, archive, &paths.work_directory) {
            Ok(assignment) => stats.add_assignment_stats(assignment),
            Err(e) => {
                tracing::error!("Failed to package {}: {}", archive.display(), e);
                stats.mark_assignment_failed();
            }
        }
        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    stats.next_sequence = renamer.next_sequence();

    let written = zip_directory(&paths.work_directory, &paths.output_archive)?;
    tracing::info!(
        "Wrote {} assignment archives into {}",
        written,
        paths.output_archive.display()
    );

    if !config.options.keep_work_directory {
        std::fs::remove_dir_all(&paths.work_directory)?;
    }

    Ok(stats)
}
