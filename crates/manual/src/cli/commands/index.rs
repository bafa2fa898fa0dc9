//! Implementation of `manual index`.

use std::process::ExitCode;

use crate::cli::{args::IndexCommand, context::CommandContext, output::output_index};

/// Lists every indexed page.
pub fn run(ctx: &mut CommandContext, cmd: &IndexCommand) -> ExitCode {
    let manual = match ctx.manual() {
        Ok(m) => m,
        Err(code) => return code,
    };

    output_index(manual.index(), cmd.json)
}
