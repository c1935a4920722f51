//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::naming::sanitize_path_component;

/// Create the work directory, or empty it if it already exists.
pub fn prepare_work_dir(path: &Path) -> Result<()> {
    if path.exists() {
        tracing::debug!("Clearing work directory {}", path.display());
        std::fs::remove_dir_all(path)?;
    }
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Remove a previous output archive so a failed run never leaves a stale one.
pub fn remove_stale_file(path: &Path) -> Result<()> {
    if path.is_file() {
        tracing::debug!("Removing stale {}", path.display());
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Assignment archives in the input directory, sorted by name.
pub fn find_assignment_archives(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut archives = Vec::new();

    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if name.ends_with(".zip") {
            archives.push(path);
        }
    }

    archives.sort();
    Ok(archives)
}

/// Upper bound on numbered variants tried for one assignment folder name.
const MAX_FOLDER_SUFFIX: u32 = 1000;

/// Folder inside the work directory where an assignment archive is unpacked.
///
/// Archives whose names sanitize to the same folder get a numeric suffix
/// (`lab_1`, `lab_1_2`, ...), so neither the folder nor its repackaged
/// `<folder>.zip` collides with an earlier assignment in the same run.
pub fn assignment_folder(work_dir: &Path, archive: &Path) -> Result<PathBuf> {
    let stem = archive
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = sanitize_path_component(&stem)?;

    let is_free = |name: &str| {
        !work_dir.join(name).exists() && !work_dir.join(format!("{}.zip", name)).exists()
    };

    if is_free(&base) {
        return Ok(work_dir.join(base));
    }

    for counter in 2..=MAX_FOLDER_SUFFIX {
        let candidate = format!("{}_{}", base, counter);
        if is_free(&candidate) {
            tracing::warn!(
                "Assignment folder {} already used, packaging {} as {}",
                base,
                archive.display(),
                candidate
            );
            return Ok(work_dir.join(candidate));
        }
    }

    Err(Error::InvalidFilename(format!(
        "No free assignment folder name for '{}' in {}",
        base,
        work_dir.display()
    )))
}

/// Names of the regular files directly inside `dir`, sorted.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => tracing::warn!("Ignoring non UTF-8 filename: {:?}", name),
        }
    }

    names.sort();
    Ok(names)
}

/// Delete every subdirectory directly inside `dir`. Returns how many were removed.
///
/// Submissions are expected as a flat list of files.
pub fn remove_subdirectories(dir: &Path) -> Result<u64> {
    let mut removed = 0;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            tracing::warn!("Discarding nested folder {}", entry.path().display());
            std::fs::remove_dir_all(entry.path())?;
            removed += 1;
        }
    }

    Ok(removed)
}

/// Delete the listed junk files from the top level of `dir`. Returns how many existed.
pub fn remove_junk_files<S: AsRef<str>>(dir: &Path, junk_files: &[S]) -> Result<u64> {
    let mut removed = 0;

    for name in junk_files {
        let path = dir.join(name.as_ref());
        if path.is_file() {
            std::fs::remove_file(&path)?;
            tracing::debug!("Removed {}", path.display());
            removed += 1;
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_prepare_work_dir_clears_contents() {
        let dir = tempfile::tempdir().unwrap();
        let work = dir.path().join("work");
        fs::create_dir_all(work.join("nested")).unwrap();
        fs::write(work.join("nested/old.py"), "x").unwrap();

        prepare_work_dir(&work).unwrap();

        assert!(work.is_dir());
        assert_eq!(fs::read_dir(&work).unwrap().count(), 0);
    }

    #[test]
    fn test_find_assignment_archives_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.zip"), "").unwrap();
        fs::write(dir.path().join("a.zip"), "").unwrap();
        fs::write(dir.path().join("a.grades.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("c.zip")).unwrap();

        let found = find_assignment_archives(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.zip", "b.zip"]);
    }

    #[test]
    fn test_assignment_folder() {
        let folder =
            assignment_folder(Path::new("/work"), Path::new("/in/398537_CSCI 1301_597438.zip"))
                .unwrap();
        assert_eq!(folder, PathBuf::from("/work/398537_CSCI 1301_597438"));
    }

    #[test]
    fn test_assignment_folder_avoids_used_names() {
        let dir = tempfile::tempdir().unwrap();
        let work = dir.path();

        // An earlier assignment already repackaged into lab_1.zip
        fs::write(work.join("lab_1.zip"), "").unwrap();
        let folder = assignment_folder(work, Path::new("/in/lab:1.zip")).unwrap();
        assert_eq!(folder, work.join("lab_1_2"));

        // An extraction folder in progress also counts as used
        fs::create_dir(work.join("lab_1_2")).unwrap();
        let folder = assignment_folder(work, Path::new("/in/lab_1.zip")).unwrap();
        assert_eq!(folder, work.join("lab_1_3"));
    }

    #[test]
    fn test_assignment_folder_dotted_stem() {
        let folder =
            assignment_folder(Path::new("/work"), Path::new("/in/Lab 2..final.zip")).unwrap();
        assert_eq!(folder, PathBuf::from("/work/Lab 2..final"));
    }

    #[test]
    fn test_list_and_remove_junk() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "").unwrap();
        fs::write(dir.path().join("1-2-A-a.py"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let removed = remove_junk_files(dir.path(), &["index.html", "metadata.yml"]).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(list_file_names(dir.path()).unwrap(), vec!["1-2-A-a.py"]);

        assert_eq!(remove_subdirectories(dir.path()).unwrap(), 1);
        assert!(!dir.path().join("sub").exists());
    }
}
