//! `routes` subcommand: resolve every content file to its route.

use std::path::Path;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;

use crate::cli::args::RoutesArgs;
use crate::config::SiteOptions;
use crate::log;
use crate::page::{
    PageMeta, derive_page_title, extract_frontmatter, index_build_path, pages_build_path,
};
use crate::route::{RoutePath, resolve_page_route};
use crate::scan::collect_content_files;

/// One resolved source file.
#[derive(Debug, Serialize)]
struct RouteEntry {
    source: String,
    route: RoutePath,
    title: String,
    build_path: String,
}

pub fn run_routes(args: &RoutesArgs, options: &SiteOptions) -> Result<()> {
    let files = collect_content_files(options)?;

    let results: Vec<Result<Option<RouteEntry>, String>> = files
        .par_iter()
        .map(|file| resolve_entry(options, file, args.drafts))
        .collect();

    let mut entries = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for result in results {
        match result {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {} // skipped draft
            Err(message) => {
                failures += 1;
                log!("error"; "{message}");
            }
        }
    }

    if args.json {
        let output = if args.pretty {
            serde_json::to_string_pretty(&entries)?
        } else {
            serde_json::to_string(&entries)?
        };
        println!("{output}");
    } else {
        print_table(&entries, args.build);
    }

    if failures > 0 {
        bail!("failed to resolve {failures} file(s)");
    }
    Ok(())
}

/// Resolve one file into a table entry. Returns `Ok(None)` for skipped
/// drafts.
fn resolve_entry(
    options: &SiteOptions,
    file: &Path,
    include_drafts: bool,
) -> Result<Option<RouteEntry>, String> {
    let route = resolve_page_route(options, file).map_err(|e| e.to_string())?;

    let meta = read_meta(file).map_err(|e| format!("{}: {e:#}", file.display()))?;
    if meta.draft && !include_drafts {
        return Ok(None);
    }

    let source = file
        .strip_prefix(options.pages_dir())
        .unwrap_or(file)
        .to_string_lossy()
        .replace('\\', "/");

    // Index documents produce a manifest, ordinary pages a module
    let name = file
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let build_path = if options.strip_content_extension(&name) == "index" {
        index_build_path(&route)
    } else {
        pages_build_path(&route)
    };

    Ok(Some(RouteEntry {
        source,
        title: derive_page_title(file, &meta),
        build_path,
        route,
    }))
}

fn read_meta(file: &Path) -> Result<PageMeta> {
    let source = std::fs::read_to_string(file).context("read failed")?;
    Ok(extract_frontmatter(&source)?
        .map(|(meta, _)| meta)
        .unwrap_or_default())
}

fn print_table(entries: &[RouteEntry], with_build: bool) {
    let width = entries
        .iter()
        .map(|e| e.route.as_str().len())
        .max()
        .unwrap_or(0);

    for entry in entries {
        if with_build {
            println!(
                "{:<width$}  {}  ({})",
                entry.route.as_str(),
                entry.source,
                entry.build_path,
                width = width
            );
        } else {
            println!("{:<width$}  {}", entry.route.as_str(), entry.source, width = width);
        }
    }
    log!("routes"; "{} page(s)", entries.len());
}
