//! Packaging of a single assignment archive.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::{
    assignment_folder, extract_archive, list_file_names, remove_junk_files,
    remove_subdirectories, validate_component, zip_directory,
};
use crate::package::state::AssignmentStats;
use crate::rename::{filter_by_extension, GradeTable, SubmissionRenamer};

/// Extract, rename, filter and re-zip one assignment archive into `work_dir`.
///
/// The repackaged archive is written to `work_dir/<folder>.zip`. On failure the
/// extraction folder is removed so nothing partial ends up in the package.
pub fn package_assignment(
    config: &Config,
    renamer: &mut SubmissionRenamer,
    archive: &Path,
    work_dir: &Path,
) -> Result<AssignmentStats> {
    let folder = assignment_folder(work_dir, archive)?;
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    tracing::info!("Packaging assignment: {}", name);

    let mut stats = AssignmentStats::new(&name);
    let result = package_into(config, renamer, archive, &folder, &mut stats);

    if folder.exists() {
        if let Err(e) = std::fs::remove_dir_all(&folder) {
            tracing::warn!("Failed to remove {}: {}", folder.display(), e);
        }
    }

    let output = result?;
    tracing::info!(
        "Packaged {}: {} kept, {} discarded -> {}",
        name,
        stats.kept,
        stats.total_removed(),
        output.display()
    );

    Ok(stats)
}

fn package_into(
    config: &Config,
    renamer: &mut SubmissionRenamer,
    archive: &Path,
    folder: &Path,
    stats: &mut AssignmentStats,
) -> Result<PathBuf> {
    let grades = GradeTable::load_for_archive(archive, config.options.grade_out_of)?;

    stats.extracted = extract_archive(archive, folder)? as u64;
    stats.junk_removed = remove_junk_files(folder, &config.options.junk_files)?;
    stats.folders_removed = remove_subdirectories(folder)?;

    // Rename
    let submissions = list_file_names(folder)?;
    let batch = renamer.rename_batch(&submissions, &grades)?;

    for submission in &batch.renamed {
        validate_component(&submission.renamed)?;

        let from = folder.join(&submission.original);
        let to = folder.join(&submission.renamed);
        if to.exists() {
            return Err(Error::InvalidFilename(format!(
                "Renamed submission would overwrite an existing file: '{}'",
                submission.renamed
            )));
        }

        std::fs::rename(&from, &to)?;
        tracing::debug!("Renamed {} -> {}", submission.original, submission.renamed);
    }

    for skipped in &batch.skipped {
        std::fs::remove_file(folder.join(skipped))?;
    }

    stats.renamed = batch.renamed.len() as u64;
    stats.ungraded = batch.ungraded as u64;
    stats.skipped_ungraded = batch.skipped.len() as u64;

    // Filter
    let remaining = list_file_names(folder)?;
    let kept: HashSet<&str> = filter_by_extension(&remaining, &config.options.allowed_extensions)
        .into_iter()
        .collect();

    for filename in &remaining {
        if !kept.contains(filename.as_str()) {
            tracing::debug!("Discarding {}", filename);
            std::fs::remove_file(folder.join(filename))?;
            stats.discarded += 1;
        }
    }
    stats.kept = kept.len() as u64;

    // Repackage
    // Append rather than replace, "hw1.v2" keeps its dot
    let mut output = folder.as_os_str().to_os_string();
    output.push(".zip");
    let output = PathBuf::from(output);
    zip_directory(folder, &output)?;

    Ok(output)
}
