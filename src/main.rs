//! Submission Packager - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use submission_packager::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{
        print_assignment_stats, print_banner, print_config_summary, print_error, print_info,
        print_run_stats, print_success, print_warning,
    },
    package::run_packaging,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::SequenceExhausted { .. }
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::AssignmentsFailed(_) => {
                    ExitCode::from(exit_codes::SOME_ASSIGNMENTS_FAILED as u8)
                }
                Error::Archive(_)
                | Error::Zip(_)
                | Error::MalformedFilename { .. }
                | Error::InvalidFilename(_)
                | Error::GradeTable { .. } => ExitCode::from(exit_codes::PACKAGE_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            args.config.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    print_config_summary(
        &config.paths.input_directory.display().to_string(),
        &config.paths.output_archive.display().to_string(),
        &config.options.ungraded_policy.to_string(),
        config.options.allowed_extensions.len(),
    );

    let stats = run_packaging(&config)?;

    if !args.quiet {
        for assignment in &stats.assignments {
            print_assignment_stats(assignment);
        }
    }
    print_run_stats(&stats);

    if stats.assignments_failed > 0 {
        return Err(Error::AssignmentsFailed(stats.assignments_failed));
    }

    print_success(&format!(
        "Packaged {} submissions into {}",
        stats.kept,
        config.paths.output_archive.display()
    ));

    Ok(())
}
