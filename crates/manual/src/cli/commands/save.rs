//! Implementation of `manual save`.

use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use manual_page::Page;
use tracing::info;

use crate::cli::{args::SaveCommand, context::CommandContext};

/// Saves a page with content from `--file` or stdin.
pub fn run(ctx: &mut CommandContext, cmd: &SaveCommand) -> ExitCode {
    let content = match &cmd.file {
        Some(path) => fs::read_to_string(ctx.cwd.join(path)).map_err(|e| {
            eprintln!("error: failed to read {}: {e}", path.display());
        }),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map(|_| content)
                .map_err(|e| eprintln!("error: failed to read stdin: {e}"))
        }
    };
    let Ok(content) = content else {
        return ExitCode::FAILURE;
    };

    let manual = match ctx.manual() {
        Ok(m) => m,
        Err(code) => return code,
    };

    let page = Page::new(cmd.title.as_str())
        .with_path(&cmd.path)
        .with_content(content);

    if let Err(e) = manual.save_page(&page) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    info!(route = %page.route(), "saved page");
    println!("Saved {}", page.route());
    ExitCode::SUCCESS
}
