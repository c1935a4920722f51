//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Submission Packager                               ║
║     Rename, filter and bundle graded submissions      ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(
    input_dir: &str,
    output_archive: &str,
    ungraded_policy: &str,
    extension_count: usize,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Input:      {}", input_dir);
    println!("  Output:     {}", output_archive);
    println!("  Ungraded:   {}", ungraded_policy);
    println!("  Extensions: {} allowed", extension_count);
    println!();
}
