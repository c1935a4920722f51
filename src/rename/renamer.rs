//! Grade-prefixed, sequence-numbered renaming of submission files.

use crate::config::UngradedPolicy;
use crate::error::{Error, Result};
use crate::rename::filename::SubmissionFilename;
use crate::rename::grades::GradeTable;

/// Separator between the fields of a renamed submission.
pub const OUTPUT_SEPARATOR: &str = "---";

/// A submission with its new name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedSubmission {
    /// Name as downloaded.
    pub original: String,
    /// `{grade}%---{sequence}---{assignmentId}---{rest}`.
    pub renamed: String,
    /// Run-wide unique sequence number.
    pub sequence: u64,
    /// Grade used in the name, or "NA".
    pub grade: String,
}

/// Result of renaming one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameBatch {
    /// Renamed submissions in input order.
    pub renamed: Vec<RenamedSubmission>,
    /// Names left out under [`UngradedPolicy::Skip`], in input order.
    pub skipped: Vec<String>,
    /// How many renamed entries carry the ungraded marker.
    pub ungraded: usize,
}

/// Renames submissions while owning the run's sequence counter.
///
/// The counter only moves forward, so names stay unique across every batch
/// renamed through the same instance.
#[derive(Debug, Clone)]
pub struct SubmissionRenamer {
    next_sequence: u64,
    policy: UngradedPolicy,
}

impl Default for SubmissionRenamer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SubmissionRenamer {
    /// Create a renamer whose first assigned sequence number is `start_sequence`.
    pub fn new(start_sequence: u64) -> Self {
        Self {
            next_sequence: start_sequence,
            policy: UngradedPolicy::default(),
        }
    }

    /// Set the ungraded submission policy.
    pub fn with_policy(mut self, policy: UngradedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sequence number the next renamed submission will get.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    pub fn policy(&self) -> UngradedPolicy {
        self.policy
    }

    /// Rename a batch of filenames in input order.
    ///
    /// Every name is parsed before any sequence number is assigned, so a
    /// malformed name leaves the counter untouched. The same holds when the
    /// batch would run the counter past `u64::MAX`.
    pub fn rename_batch<S: AsRef<str>>(
        &mut self,
        filenames: &[S],
        grades: &GradeTable,
    ) -> Result<RenameBatch> {
        let parsed = filenames
            .iter()
            .map(|name| SubmissionFilename::parse(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let needed = match self.policy {
            UngradedPolicy::Label => parsed.len(),
            UngradedPolicy::Skip => parsed
                .iter()
                .filter(|submission| grades.get(submission.student_id).is_some())
                .count(),
        };
        if self.next_sequence.checked_add(needed as u64).is_none() {
            return Err(Error::SequenceExhausted {
                start: self.next_sequence,
                needed,
            });
        }

        let mut batch = RenameBatch::default();
        for (original, submission) in filenames.iter().zip(parsed) {
            let original = original.as_ref();
            let grade = match grades.get(submission.student_id) {
                Some(grade) => grade,
                None if self.policy == UngradedPolicy::Skip => {
                    tracing::debug!("Skipping ungraded submission: {}", original);
                    batch.skipped.push(original.to_string());
                    continue;
                }
                None => {
                    batch.ungraded += 1;
                    grades.grade_or_marker(submission.student_id)
                }
            };

            let sequence = self.next_sequence;
            self.next_sequence += 1;

            batch.renamed.push(RenamedSubmission {
                original: original.to_string(),
                renamed: format_renamed(grade, sequence, &submission),
                sequence,
                grade: grade.to_string(),
            });
        }

        Ok(batch)
    }
}

/// Build the output name for one submission.
pub fn format_renamed(grade: &str, sequence: u64, submission: &SubmissionFilename<'_>) -> String {
    format!(
        "{grade}%{sep}{sequence}{sep}{assignment}{sep}{rest}",
        sep = OUTPUT_SEPARATOR,
        assignment = submission.assignment_id,
        rest = submission.sanitized_rest(),
    )
}

/// Rename a batch starting at `start_sequence`, labelling ungraded students "NA".
///
/// Returns the renamed submissions and the sequence number to continue from.
pub fn rename<S: AsRef<str>>(
    filenames: &[S],
    grades: &GradeTable,
    start_sequence: u64,
) -> Result<(Vec<RenamedSubmission>, u64)> {
    let mut renamer = SubmissionRenamer::new(start_sequence);
    let batch = renamer.rename_batch(filenames, grades)?;
    Ok((batch.renamed, renamer.next_sequence()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::grades::UNGRADED_MARKER;

    fn names(renamed: &[RenamedSubmission]) -> Vec<&str> {
        renamed.iter().map(|r| r.renamed.as_str()).collect()
    }

    #[test]
    fn test_rename_graded_student() {
        let grades: GradeTable = [("123", "87")].into_iter().collect();
        let (renamed, next) = rename(&["123-456-Jane Doe-main.py"], &grades, 0).unwrap();

        assert_eq!(names(&renamed), vec!["87%---0---456---main.py"]);
        assert_eq!(next, 1);
    }

    #[test]
    fn test_rename_missing_grade_uses_marker() {
        let (renamed, next) = rename(&["123-456-Jane Doe-main.py"], &GradeTable::new(), 5).unwrap();

        assert_eq!(names(&renamed), vec!["NA%---5---456---main.py"]);
        assert_eq!(renamed[0].grade, UNGRADED_MARKER);
        assert_eq!(next, 6);
    }

    #[test]
    fn test_sequence_advances_by_batch_length() {
        let files = [
            "1-10-A-a.py",
            "2-10-B-b.py",
            "1-10-A-a.py",
            "3-10-C-c.py",
        ];
        let (renamed, next) = rename(&files, &GradeTable::new(), 40).unwrap();

        assert_eq!(next - 40, files.len() as u64);
        let sequences: Vec<u64> = renamed.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![40, 41, 42, 43]);
        assert!(sequences.windows(2).all(|w| w[0] < w[1]));

        // Identical inputs still get distinct names
        assert_ne!(renamed[0].renamed, renamed[2].renamed);
    }

    #[test]
    fn test_every_missing_student_gets_marker() {
        let grades: GradeTable = [("2", "100")].into_iter().collect();
        let (renamed, _) = rename(&["1-9-A-x.c", "2-9-B-y.c", "3-9-C-z.c"], &grades, 0).unwrap();

        let markers: Vec<&str> = renamed.iter().map(|r| r.grade.as_str()).collect();
        assert_eq!(markers, vec!["NA", "100", "NA"]);
    }

    #[test]
    fn test_rest_is_sanitized_and_keeps_delimiters() {
        let (renamed, _) = rename(&["1-9-A-src/lib\\mod-x.rs"], &GradeTable::new(), 0).unwrap();
        assert_eq!(names(&renamed), vec!["NA%---0---9---src_lib_mod-x.rs"]);
    }

    #[test]
    fn test_three_segments_empty_rest() {
        let (renamed, _) = rename(&["1-9-A"], &GradeTable::new(), 0).unwrap();
        assert_eq!(names(&renamed), vec!["NA%---0---9---"]);
    }

    #[test]
    fn test_malformed_filename_fails() {
        let err = rename(&["1-9-A-ok.py", "broken.py"], &GradeTable::new(), 0).unwrap_err();
        assert!(matches!(err, Error::MalformedFilename { .. }));
    }

    #[test]
    fn test_malformed_batch_leaves_counter_unchanged() {
        let mut renamer = SubmissionRenamer::new(3);
        assert!(renamer
            .rename_batch(&["1-9-A-ok.py", "nope"], &GradeTable::new())
            .is_err());
        assert_eq!(renamer.next_sequence(), 3);
    }

    #[test]
    fn test_sequence_overflow_is_an_error() {
        let err = rename(&["1-2-A-a.py"], &GradeTable::new(), u64::MAX).unwrap_err();
        assert!(matches!(
            err,
            Error::SequenceExhausted {
                start: u64::MAX,
                needed: 1
            }
        ));

        let mut renamer = SubmissionRenamer::new(u64::MAX - 1);
        assert!(renamer
            .rename_batch(&["1-2-A-a.py", "2-2-B-b.py"], &GradeTable::new())
            .is_err());
        assert_eq!(renamer.next_sequence(), u64::MAX - 1);

        // One more still fits
        let batch = renamer
            .rename_batch(&["1-2-A-a.py"], &GradeTable::new())
            .unwrap();
        assert_eq!(batch.renamed[0].sequence, u64::MAX - 1);
        assert_eq!(renamer.next_sequence(), u64::MAX);
    }

    #[test]
    fn test_skipped_submissions_do_not_count_toward_overflow() {
        let mut renamer = SubmissionRenamer::new(u64::MAX).with_policy(UngradedPolicy::Skip);
        let batch = renamer
            .rename_batch(&["1-2-A-a.py"], &GradeTable::new())
            .unwrap();
        assert_eq!(batch.skipped.len(), 1);
        assert_eq!(renamer.next_sequence(), u64::MAX);
    }

    #[test]
    fn test_counter_continues_across_batches() {
        let mut renamer = SubmissionRenamer::new(0);
        let grades: GradeTable = [("1", "90")].into_iter().collect();

        let first = renamer.rename_batch(&["1-7-A-a.py", "2-7-B-b.py"], &grades).unwrap();
        let second = renamer.rename_batch(&["1-8-A-a.py"], &grades).unwrap();

        assert_eq!(first.ungraded, 1);
        assert_eq!(names(&second.renamed), vec!["90%---2---8---a.py"]);
        assert_eq!(renamer.next_sequence(), 3);
    }

    #[test]
    fn test_skip_policy_uses_no_sequence() {
        let mut renamer = SubmissionRenamer::new(0).with_policy(UngradedPolicy::Skip);
        let grades: GradeTable = [("2", "75")].into_iter().collect();

        let batch = renamer
            .rename_batch(&["1-7-A-a.py", "2-7-B-b.py"], &grades)
            .unwrap();

        assert_eq!(batch.skipped, vec!["1-7-A-a.py".to_string()]);
        assert_eq!(names(&batch.renamed), vec!["75%---0---7---b.py"]);
        assert_eq!(batch.ungraded, 0);
        assert_eq!(renamer.next_sequence(), 1);
    }
}
