//! Implementation of `manual ref`.

use std::process::ExitCode;

use crate::cli::{args::RefCommand, context::CommandContext, output::output_reference};

/// Prints a reference glossary merged across include directories.
pub fn run(ctx: &mut CommandContext, cmd: &RefCommand) -> ExitCode {
    let manual = match ctx.manual() {
        Ok(m) => m,
        Err(code) => return code,
    };

    let reference = match manual.reference(&cmd.name) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if reference.is_empty() && !cmd.json {
        eprintln!("error: reference not found: {}", cmd.name);
        return ExitCode::FAILURE;
    }

    output_reference(&reference, cmd.json)
}
