//! Content link rewriting for index documents.

use std::path::{Path, PathBuf};

use crate::config::SiteOptions;

use super::error::RouteError;
use super::resolve::resolve_page_route;

/// Rewrite a link found in an index document into the route its target
/// will be assigned.
///
/// Absolute and external references (`/...`, `https:`, `http:`, `file:`)
/// pass through untouched; the prefix test runs on a lowercased copy
/// while the original casing is what callers get back. References whose
/// extension is not a recognized content extension are returned as their
/// bare path portion. Everything else resolves relative to the
/// document's directory through the page resolver.
///
/// The query string splits off before the fragment, so when a reference
/// carries both only the query survives reattachment (the fragment rides
/// inside it). This asymmetry is intentional and pinned by tests.
pub fn rewrite_link(
    options: &SiteOptions,
    index_file: &Path,
    raw_href: &str,
) -> Result<String, RouteError> {
    let lowered = raw_href.to_lowercase();
    if lowered.starts_with('/')
        || lowered.starts_with("https:")
        || lowered.starts_with("http:")
        || lowered.starts_with("file:")
    {
        return Ok(raw_href.to_string());
    }

    let (path, query) = match raw_href.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (raw_href, None),
    };
    let (path, fragment) = match path.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (path, None),
    };

    if !options.has_content_extension(path) {
        return Ok(path.to_string());
    }

    let candidate = join_reference(index_file, path);
    let route = resolve_page_route(options, &candidate)?;

    Ok(match (query, fragment) {
        (Some(query), _) => format!("{route}?{query}"),
        (None, Some(fragment)) => format!("{route}#{fragment}"),
        (None, None) => route.to_string(),
    })
}

/// Join a `/`-separated reference onto the document's directory,
/// collapsing `.` and `..` lexically.
fn join_reference(index_file: &Path, reference: &str) -> PathBuf {
    let mut candidate = index_file
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .to_path_buf();

    for segment in reference.replace('\\', "/").split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                candidate.pop();
            }
            segment => candidate.push(segment),
        }
    }
    candidate
}
