//! Parsing of downloaded submission filenames.

use crate::error::{Error, Result};

/// Delimiter between the fields of a downloaded submission filename.
pub const DELIMITER: char = '-';

/// Minimum number of delimiter-separated segments in a valid filename.
pub const MIN_SEGMENTS: usize = 3;

/// A downloaded submission filename split into its fields.
///
/// The LMS names each entry `studentId-assignmentId-studentName-rest...`.
/// `rest` keeps its inner delimiters and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFilename<'a> {
    pub student_id: &'a str,
    pub assignment_id: &'a str,
    pub student_name: &'a str,
    pub rest: &'a str,
}

impl<'a> SubmissionFilename<'a> {
    /// Split a raw filename into its fields.
    pub fn parse(filename: &'a str) -> Result<Self> {
        let mut parts = filename.splitn(MIN_SEGMENTS + 1, DELIMITER);

        let (Some(student_id), Some(assignment_id), Some(student_name)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::MalformedFilename {
                filename: filename.to_string(),
                expected: MIN_SEGMENTS,
                found: filename.split(DELIMITER).count(),
            });
        };

        Ok(Self {
            student_id,
            assignment_id,
            student_name,
            rest: parts.next().unwrap_or(""),
        })
    }

    /// The tail with path separators replaced, safe to use inside one path component.
    pub fn sanitized_rest(&self) -> String {
        sanitize_rest(self.rest)
    }
}

/// Replace every `/` and `\` with `_`.
pub fn sanitize_rest(rest: &str) -> String {
    rest.chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c => c,
        })
        .collect()
}
