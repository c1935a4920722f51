//! Configuration validation logic.

use std::path::{Component, Path, PathBuf};

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_extensions(&config.options.allowed_extensions)?;
    validate_input_directory(&config.paths.input_directory)?;
    validate_work_directory(&config.paths.input_directory, &config.paths.work_directory)?;
    validate_output_location(&config.paths.work_directory, &config.paths.output_archive)?;

    if let Some(out_of) = config.options.grade_out_of {
        validate_out_of(out_of)?;
    }

    Ok(())
}

/// Validate the extension allow-list.
pub fn validate_extensions<S: AsRef<str>>(extensions: &[S]) -> Result<()> {
    if extensions.is_empty() {
        return Err(Error::MissingConfig(
            "allowed_extensions (at least one extension required)".to_string(),
        ));
    }

    // Extension pattern: leading dot, then alphanumerics and a few symbols (c++, c#)
    let extension_pattern = Regex::new(r"^\.[A-Za-z0-9+_#-]+$").unwrap();

    for ext in extensions {
        let ext = ext.as_ref();
        if !extension_pattern.is_match(ext) {
            return Err(Error::ConfigValidation {
                field: "allowed_extensions".to_string(),
                message: format!(
                    "Extension '{}' must start with '.' and contain only letters, digits, '+', '_', '#' or '-'",
                    ext
                ),
            });
        }
    }

    Ok(())
}

/// Validate the input directory.
pub fn validate_input_directory(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(Error::ConfigValidation {
            field: "input_directory".to_string(),
            message: format!("Directory does not exist: {}", path.display()),
        });
    }

    Ok(())
}

/// The work directory is wiped, so it must not overlap the input directory.
pub fn validate_work_directory(input_directory: &Path, work_directory: &Path) -> Result<()> {
    let input = normalize(input_directory);
    let work = normalize(work_directory);

    if input.starts_with(&work) || work.starts_with(&input) {
        return Err(Error::ConfigValidation {
            field: "work_directory".to_string(),
            message: format!(
                "Work directory {} overlaps the input directory {}",
                work_directory.display(),
                input_directory.display()
            ),
        });
    }

    Ok(())
}

/// The output archive must not land in the scratch directory, which is wiped.
pub fn validate_output_location(work_directory: &Path, output_archive: &Path) -> Result<()> {
    if normalize(output_archive).starts_with(normalize(work_directory)) {
        return Err(Error::ConfigValidation {
            field: "output_archive".to_string(),
            message: format!(
                "Output archive {} is inside the work directory {}",
                output_archive.display(),
                work_directory.display()
            ),
        });
    }

    if output_archive.file_name().is_none() {
        return Err(Error::ConfigValidation {
            field: "output_archive".to_string(),
            message: format!("Not a file path: {}", output_archive.display()),
        });
    }

    Ok(())
}

/// Absolute, lexically normalized form of `path` for overlap checks.
///
/// `.` components are dropped and `..` pops its parent. Symlinks are not resolved.
fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Validate the maximum score used for percentage grades.
pub fn validate_out_of(out_of: f64) -> Result<()> {
    if !out_of.is_finite() || out_of <= 0.0 {
        return Err(Error::ConfigValidation {
            field: "grade_out_of".to_string(),
            message: format!("Maximum score must be a positive number (got {})", out_of),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_extensions() {
        assert!(validate_extensions(&[".py", ".c++", ".cs", ".h++"]).is_ok());
    }

    #[test]
    fn test_invalid_extensions() {
        assert!(validate_extensions(&["py"]).is_err());
        assert!(validate_extensions(&[".tar gz"]).is_err());
        assert!(validate_extensions(&["."]).is_err());
        let none: [&str; 0] = [];
        assert!(matches!(
            validate_extensions(&none),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_output_inside_work_directory() {
        assert!(validate_output_location(Path::new("work"), Path::new("work/out.zip")).is_err());
        assert!(validate_output_location(Path::new("work"), Path::new("downloads.zip")).is_ok());
    }

    #[test]
    fn test_output_inside_work_directory_after_normalizing() {
        assert!(
            validate_output_location(Path::new("./work"), Path::new("work/../work/out.zip"))
                .is_err()
        );
    }

    #[test]
    fn test_work_directory_overlapping_input() {
        // Same folder, as in a plain "downloads/" layout
        assert!(validate_work_directory(Path::new("downloads"), Path::new("downloads")).is_err());
        assert!(validate_work_directory(Path::new("downloads"), Path::new("./downloads/")).is_err());
        // Work inside input, and input inside work
        assert!(validate_work_directory(Path::new("downloads"), Path::new("downloads/work")).is_err());
        assert!(validate_work_directory(Path::new("work/in"), Path::new("work")).is_err());
        // Siblings with a shared prefix are fine
        assert!(validate_work_directory(Path::new("downloads"), Path::new("downloads-work")).is_ok());
        assert!(validate_work_directory(Path::new("downloads"), Path::new("work")).is_ok());
    }

    #[test]
    fn test_validate_config_rejects_work_equal_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let downloads = dir.path().join("downloads");
        std::fs::create_dir_all(&downloads).unwrap();
        std::fs::write(downloads.join("hw1.zip"), "").unwrap();

        let mut config = Config::default();
        config.paths.input_directory = downloads.clone();
        config.paths.work_directory = downloads.clone();
        config.paths.output_archive = dir.path().join("downloads.zip");

        match validate_config(&config) {
            Err(Error::ConfigValidation { field, .. }) => assert_eq!(field, "work_directory"),
            other => panic!("expected work_directory rejection, got {other:?}"),
        }
        assert!(downloads.join("hw1.zip").is_file());
    }

    #[test]
    fn test_out_of() {
        assert!(validate_out_of(130.0).is_ok());
        assert!(validate_out_of(0.0).is_err());
        assert!(validate_out_of(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_config_input_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.paths.input_directory = dir.path().to_path_buf();
        config.paths.work_directory = std::env::temp_dir().join("submission-packager-test-work");
        assert!(validate_config(&config).is_ok());

        config.paths.input_directory = dir.path().join("missing");
        assert!(validate_config(&config).is_err());
    }
}
