//! Implementation of `manual search`.

use std::process::ExitCode;

use crate::cli::{args::SearchCommand, context::CommandContext, output::output_search_results};

/// Searches page content and prints matches, best first.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let query = cmd.query.join(" ");

    let manual = match ctx.manual() {
        Ok(m) => m,
        Err(code) => return code,
    };

    let mut pages = match manual.search_pages(&query) {
        Ok(pages) => pages,
        Err(e) => {
            eprintln!("error: search failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    pages.reverse();
    if let Some(limit) = cmd.limit {
        pages.truncate(limit);
    }

    output_search_results(&query, &pages, cmd.json)
}
