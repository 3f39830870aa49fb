//! `links` subcommand: rewrite the content links of one document.

use std::path::Path;

use anyhow::{Context, Result, bail};
use pulldown_cmark::{Event, Parser, Tag};

use crate::config::SiteOptions;
use crate::log;
use crate::page::extract_frontmatter;
use crate::route::{RoutePath, resolve_index_route, resolve_page_route, rewrite_link};
use crate::utils::path::normalize_path;

pub fn run_links(file: &Path, options: &SiteOptions) -> Result<()> {
    let file = normalize_path(file);
    let source = std::fs::read_to_string(&file)
        .with_context(|| format!("cannot read `{}`", file.display()))?;
    let body = match extract_frontmatter(&source)? {
        Some((_, body)) => body.to_string(),
        None => source,
    };

    let own_route = document_route(options, &file)?;
    log!("links"; "{} -> {own_route}", file.display());

    let links = extract_links(&body);
    if links.is_empty() {
        log!("links"; "no links found");
        return Ok(());
    }

    let mut failures = 0usize;
    for href in &links {
        match rewrite_link(options, &file, href) {
            Ok(resolved) if resolved == *href => println!("{href}"),
            Ok(resolved) => println!("{href} -> {resolved}"),
            Err(e) => {
                failures += 1;
                log!("error"; "{href}: {e}");
            }
        }
    }

    if failures > 0 {
        bail!("failed to rewrite {failures} link(s)");
    }
    Ok(())
}

/// Route of the document itself: the directory route for an index file,
/// the page route for anything else.
fn document_route(options: &SiteOptions, file: &Path) -> Result<RoutePath> {
    let name = file
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    if options.strip_content_extension(&name) == "index" {
        Ok(resolve_index_route(options, file))
    } else {
        Ok(resolve_page_route(options, file)?)
    }
}

/// Extract link destinations from Markdown content.
fn extract_links(content: &str) -> Vec<String> {
    let parser = Parser::new(content);
    let mut links = Vec::new();

    for event in parser {
        if let Event::Start(Tag::Link { dest_url, .. }) = event {
            links.push(dest_url.to_string());
        }
    }
    links
}
