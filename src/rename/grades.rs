//! Student grade tables.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};

/// Grade marker used when a student has no recorded grade.
pub const UNGRADED_MARKER: &str = "NA";

/// Suffix of the grade file that sits next to an assignment archive.
pub const GRADES_SUFFIX: &str = ".grades.json";

/// Mapping from student ID to grade string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeTable {
    grades: HashMap<String, String>,
}

impl GradeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a grade. Empty grades are treated as missing.
    pub fn insert(&mut self, student_id: impl Into<String>, grade: impl Into<String>) {
        let grade = grade.into();
        if grade.trim().is_empty() {
            return;
        }
        self.grades.insert(student_id.into(), grade);
    }

    /// Look up a student's grade.
    pub fn get(&self, student_id: &str) -> Option<&str> {
        self.grades.get(student_id).map(String::as_str)
    }

    /// Grade for a student, or [`UNGRADED_MARKER`] if none is recorded.
    pub fn grade_or_marker(&self, student_id: &str) -> &str {
        self.get(student_id).unwrap_or(UNGRADED_MARKER)
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Parse a JSON object of `{ "studentId": grade }`.
    ///
    /// Grades may be strings, numbers, or `null`. When `out_of` is given, numeric
    /// grades are converted to a whole percentage of it.
    pub fn from_json_str(content: &str, out_of: Option<f64>) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(entries) = value else {
            return Err(Error::GradeTable {
                path: "<inline>".to_string(),
                message: "expected a JSON object of student ID to grade".to_string(),
            });
        };

        let mut table = Self::new();
        for (student_id, grade) in entries {
            let grade = match grade {
                Value::Null => continue,
                Value::String(s) => match (out_of, s.trim().parse::<f64>()) {
                    (Some(out_of), Ok(points)) => percent_of(points, out_of),
                    _ => s,
                },
                Value::Number(n) => match (n.as_f64(), out_of) {
                    (Some(points), Some(out_of)) => percent_of(points, out_of),
                    (Some(points), None) => format_number(points),
                    (None, _) => n.to_string(),
                },
                other => {
                    return Err(Error::GradeTable {
                        path: "<inline>".to_string(),
                        message: format!("unsupported grade for student '{student_id}': {other}"),
                    })
                }
            };
            table.insert(student_id, grade);
        }

        Ok(table)
    }

    /// Load a grade table from a JSON file.
    pub fn load(path: &Path, out_of: Option<f64>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content, out_of).map_err(|e| match e {
            Error::GradeTable { message, .. } => Error::GradeTable {
                path: path.display().to_string(),
                message,
            },
            Error::Json(e) => Error::GradeTable {
                path: path.display().to_string(),
                message: e.to_string(),
            },
            other => other,
        })
    }

    /// Load the grades that belong to an assignment archive.
    ///
    /// A missing grade file yields an empty table, so every student is ungraded.
    pub fn load_for_archive(archive: &Path, out_of: Option<f64>) -> Result<Self> {
        let path = grades_path_for(archive);
        if !path.is_file() {
            tracing::warn!("No grade file for {}, every submission is ungraded", archive.display());
            return Ok(Self::new());
        }

        let table = Self::load(&path, out_of)?;
        tracing::debug!("Loaded {} grades from {}", table.len(), path.display());
        Ok(table)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GradeTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (student_id, grade) in iter {
            table.insert(student_id, grade);
        }
        table
    }
}

/// Path of the grade file for an archive: `X.zip` -> `X.grades.json`.
pub fn grades_path_for(archive: &Path) -> PathBuf {
    let stem = archive
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    archive.with_file_name(format!("{stem}{GRADES_SUFFIX}"))
}

/// Whole percentage of `points` out of `out_of`, rounding half to even.
pub fn percent_of(points: f64, out_of: f64) -> String {
    format_number((points / out_of * 100.0).round_ties_even())
}

/// Format a number without a trailing `.0` when it is integral.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
