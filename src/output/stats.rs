//! Statistics reporting.

use console::style;

use crate::package::{AssignmentStats, RunStats};

/// Print statistics for a single assignment.
pub fn print_assignment_stats(stats: &AssignmentStats) {
    println!();
    println!("{}", style(format!("Statistics for {}:", stats.name)).bold());
    println!("  Extracted: {}", stats.extracted);
    println!("  Renamed:   {} ({} ungraded)", stats.renamed, stats.ungraded);
    if stats.skipped_ungraded > 0 {
        println!("  Skipped:   {} (ungraded)", stats.skipped_ungraded);
    }
    println!("  Removed:   {} (junk, extension)", stats.junk_removed + stats.discarded);
    println!("  Kept:      {}", stats.kept);
}

/// Print statistics across the whole run.
pub fn print_run_stats(stats: &RunStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Statistics:").bold());
    println!("  Assignments processed: {}", stats.assignments_processed);
    if stats.assignments_failed > 0 {
        println!(
            "  Assignments failed:    {}",
            style(stats.assignments_failed).red()
        );
    }
    println!("  Extracted: {}", stats.extracted);
    println!("  Renamed:   {} ({} ungraded)", stats.renamed, stats.ungraded);
    if stats.skipped_ungraded > 0 {
        println!("  Skipped:   {} (ungraded)", stats.skipped_ungraded);
    }
    println!("  Discarded: {} (extension)", stats.discarded);
    println!("  Kept:      {}", style(stats.kept).green());
    println!("  Next sequence: {}", stats.next_sequence);
    println!("{}", style("═".repeat(50)).dim());
}
