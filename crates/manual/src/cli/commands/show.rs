//! Implementation of `manual show`.

use std::process::ExitCode;

use manual_linker::PageLinker;
use manual_page::MarkdownDecorator;
use tracing::debug;

use crate::cli::{args::ShowCommand, context::CommandContext};

/// Loads a page and prints it rendered, or raw with `--raw`.
pub fn run(ctx: &mut CommandContext, cmd: &ShowCommand) -> ExitCode {
    let render = ctx.config.render.clone();
    let manual = match ctx.manual() {
        Ok(m) => m,
        Err(code) => return code,
    };

    let page = match manual.get_page(&cmd.name, &cmd.path) {
        Ok(Some(page)) => page,
        Ok(None) => {
            eprintln!("error: page not found: {}", cmd.name);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.raw {
        print!("{}", page.content());
        return ExitCode::SUCCESS;
    }

    let submenu = render.submenu && !cmd.no_submenu;
    let Some(html) = page.parsed_content(&MarkdownDecorator::new(), &render.base_url, submenu)
    else {
        debug!(page = %page.route(), "page has no content");
        return ExitCode::SUCCESS;
    };

    let html = if render.link_titles && !cmd.no_links {
        PageLinker::new(render.page_url, manual.index().names()).process(&html)
    } else {
        html
    };

    println!("{html}");
    ExitCode::SUCCESS
}
