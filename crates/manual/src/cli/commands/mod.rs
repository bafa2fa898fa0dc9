//! Command implementations and dispatch.

pub mod check;
pub mod index;
pub mod reference;
pub mod save;
pub mod search;
pub mod show;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Index(cmd) => index::run(ctx, &cmd),
        Commands::Show(cmd) => show::run(ctx, &cmd),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Ref(cmd) => reference::run(ctx, &cmd),
        Commands::Save(cmd) => save::run(ctx, &cmd),
        Commands::Check => check::run(ctx),
    }
}
