//! Clap argument definitions for the `manual` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "manual")]
#[command(about = "Index, render and search a manual of markdown pages")]
pub struct Cli {
    /// Use this configuration file instead of discovering .manual.toml
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v for info, -vv for debug); MANUAL_LOG overrides it
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `manual index`.
#[derive(Args, Debug, Clone)]
pub struct IndexCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `manual show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// URL-encoded page name, e.g. Getting+Started
    pub name: String,

    /// Path of the page
    #[arg(short = 'p', long, default_value = "/")]
    pub path: String,

    /// Print the markdown source instead of rendered HTML
    #[arg(long)]
    pub raw: bool,

    /// Do not generate the table of contents
    #[arg(long)]
    pub no_submenu: bool,

    /// Do not link page titles
    #[arg(long)]
    pub no_links: bool,
}

/// Arguments for `manual search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search terms, joined with spaces into one query
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum results to print
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `manual ref`.
#[derive(Args, Debug, Clone)]
pub struct RefCommand {
    /// Reference name, without extension
    pub name: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `manual save`.
#[derive(Args, Debug, Clone)]
pub struct SaveCommand {
    /// Page title
    pub title: String,

    /// Path of the page
    #[arg(short = 'p', long, default_value = "/")]
    pub path: String,

    /// Read content from this file instead of stdin
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
}

/// Supported `manual` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List indexed pages
    Index(IndexCommand),

    /// Render a page to HTML
    Show(ShowCommand),

    /// Search page content, best match first
    #[command(after_help = "\
SCORING:
  A page containing the whole query scores 100. Otherwise each query word
  found in the page adds 100 / (words + 1). Matching is case sensitive, and
  a single word must appear literally.

EXAMPLES:
  manual search install
  manual search install guide -n 5
  manual search 'release notes' --json")]
    Search(SearchCommand),

    /// Print a reference glossary
    Ref(RefCommand),

    /// Save a page to the writable directory
    Save(SaveCommand),

    /// Validate configuration and diagnose issues
    Check,
}
