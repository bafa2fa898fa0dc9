//! Implementation of `manual check`.

use std::process::ExitCode;

use manual_config::ConfigWarning;

use crate::cli::context::CommandContext;

/// Exit codes for `manual check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Configuration has warnings.
    pub const WARNINGS: ExitCode = ExitCode::FAILURE;
}

/// Reports the configuration file in use and any validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    println!("Checking configuration...");
    println!();

    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none found)"),
    }
    match &config.directory {
        Some(dir) => println!("Directory: {}", dir.display()),
        None => println!("Directory: (not set)"),
    }
    if let Some(path) = &config.path {
        println!("Sub-path: {path}");
    }
    for include in &config.include {
        let status = if include.is_dir() { "ok" } else { "missing" };
        println!("Include [{status}]: {}", include.display());
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return exit_codes::OK;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    println!();

    print_hints(&warnings);

    exit_codes::WARNINGS
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|warning| match warning {
            ConfigWarning::NoDirectory => {
                "Add `directory = \"...\"` to the [manual] section for saved pages."
            }
            ConfigWarning::IncludeMissing { .. } => {
                "Create the missing directory or remove it from `include`."
            }
            ConfigWarning::IncludeNotDirectory { .. } => {
                "Include paths must point to directories, not files."
            }
            ConfigWarning::PageUrlWithoutPlaceholder { .. } => {
                "Put %page% in [render] page_url where the page name belongs."
            }
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    println!("Hints:");
    for hint in hints {
        println!("  - {hint}");
    }
}
