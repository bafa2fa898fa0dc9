//! Rendering and JSON serialization for CLI output.

use std::{collections::BTreeMap, process::ExitCode};

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use manual_index::Index;
use manual_page::Page;
use serde::Serialize;

/// JSON form of an index entry.
#[derive(Serialize)]
struct JsonIndexEntry<'a> {
    /// Canonical page path.
    path: &'a str,
    /// URL-encoded page name.
    name: &'a str,
    /// Whether the page content has been loaded.
    loaded: bool,
}

/// JSON form of a search hit.
#[derive(Serialize)]
struct JsonSearchHit<'a> {
    /// URL-encoded page name.
    name: &'a str,
    /// Page title.
    title: &'a str,
    /// Canonical page path.
    path: &'a str,
    /// Path and name.
    route: String,
}

/// JSON output for `manual search`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The query as searched.
    query: &'a str,
    /// Matching pages, best match first.
    results: Vec<JsonSearchHit<'a>>,
    /// Number of results printed.
    total_matches: usize,
}

/// Serializes `value` as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the index as a table, or as JSON.
pub fn output_index(index: &Index, json: bool) -> ExitCode {
    if json {
        let entries: Vec<_> = index
            .iter()
            .map(|(path, name, entry)| JsonIndexEntry {
                path,
                name,
                loaded: entry.is_loaded(),
            })
            .collect();
        return print_json(&entries);
    }

    if index.is_empty() {
        println!("No pages indexed.");
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Path", "Name"]);
    for (path, name, _) in index.iter() {
        table.add_row(vec![path, name]);
    }
    println!("{table}");
    println!("{} pages", index.len());

    ExitCode::SUCCESS
}

/// Prints search hits, or the JSON form.
pub fn output_search_results(query: &str, pages: &[Page], json: bool) -> ExitCode {
    if json {
        let results: Vec<_> = pages
            .iter()
            .map(|page| JsonSearchHit {
                name: page.name(),
                title: page.title(),
                path: page.path(),
                route: page.route(),
            })
            .collect();
        return print_json(&JsonSearchOutput {
            query,
            total_matches: results.len(),
            results,
        });
    }

    if pages.is_empty() {
        println!("No matches for '{query}'.");
        return ExitCode::SUCCESS;
    }

    for page in pages {
        println!("{}  {}", page.route(), page.title());
    }

    ExitCode::SUCCESS
}

/// Prints a reference glossary as a two-column table, or as JSON.
pub fn output_reference(reference: &BTreeMap<String, String>, json: bool) -> ExitCode {
    if json {
        return print_json(reference);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Term", "Description"]);
    for (term, description) in reference {
        table.add_row(vec![term, description]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}
