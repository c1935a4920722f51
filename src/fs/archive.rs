//! Zip archive extraction and creation.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Error, Result};
use crate::fs::paths::ensure_dir;

/// Extract every entry of `archive` into `dest`. Returns the number of entries.
///
/// Entries whose names would escape `dest` make the whole extraction fail.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(BufReader::new(file))
        .map_err(|e| Error::Archive(format!("{}: {}", archive.display(), e)))?;

    for i in 0..zip.len() {
        let entry = zip.by_index(i)?;
        if entry.enclosed_name().is_none() {
            return Err(Error::InvalidFilename(format!(
                "Archive entry escapes extraction folder: '{}'",
                entry.name()
            )));
        }
    }

    ensure_dir(dest)?;
    let entries = zip.len();
    zip.extract(dest)?;

    tracing::debug!(
        "Extracted {} entries from {} into {}",
        entries,
        archive.display(),
        dest.display()
    );
    Ok(entries)
}

/// Zip every regular file under `dir` into `out`. Returns the number of files written.
///
/// Entry names are relative to `dir`, use `/` separators and are written in sorted order.
pub fn zip_directory(dir: &Path, out: &Path) -> Result<usize> {
    let mut files = Vec::new();
    collect_files(dir, &mut files)?;
    files.sort();

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let mut zip = ZipWriter::new(BufWriter::new(File::create(out)?));
    let opts = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in &files {
        let relative = path
            .strip_prefix(dir)
            .map_err(|_| Error::Archive(format!("{} is outside {}", path.display(), dir.display())))?;
        let entry_name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        zip.start_file(entry_name, opts)?;
        let mut source = File::open(path)?;
        std::io::copy(&mut source, &mut zip)?;
    }

    zip.finish()?;

    tracing::debug!("Wrote {} files into {}", files.len(), out.display());
    Ok(files.len())
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            collect_files(&entry.path(), files)?;
        } else if file_type.is_file() {
            files.push(entry.path());
        }
    }
    Ok(())
}
