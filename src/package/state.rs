//! Packaging statistics.

/// Per-assignment packaging counts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssignmentStats {
    pub name: String,

    // Extraction
    pub extracted: u64,
    pub junk_removed: u64,
    pub folders_removed: u64,

    // Renaming
    pub renamed: u64,
    pub ungraded: u64,
    pub skipped_ungraded: u64,

    // Filtering
    pub discarded: u64,
    pub kept: u64,
}

impl AssignmentStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Files removed for any reason.
    pub fn total_removed(&self) -> u64 {
        self.junk_removed + self.skipped_ungraded + self.discarded
    }
}

/// Statistics across all assignments of one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub assignments_processed: u64,
    pub assignments_failed: u64,
    pub extracted: u64,
    pub renamed: u64,
    pub ungraded: u64,
    pub skipped_ungraded: u64,
    pub discarded: u64,
    pub kept: u64,
    /// Sequence number the next run should start from.
    pub next_sequence: u64,
    /// Per-assignment breakdown, in processing order.
    pub assignments: Vec<AssignmentStats>,
}

impl RunStats {
    /// Add statistics from one packaged assignment.
    pub fn add_assignment_stats(&mut self, stats: AssignmentStats) {
        self.extracted += stats.extracted;
        self.renamed += stats.renamed;
        self.ungraded += stats.ungraded;
        self.skipped_ungraded += stats.skipped_ungraded;
        self.discarded += stats.discarded;
        self.kept += stats.kept;
        self.assignments_processed += 1;
        self.assignments.push(stats);
    }

    /// Mark an assignment as failed.
    pub fn mark_assignment_failed(&mut self) {
        self.assignments_failed += 1;
    }
}
