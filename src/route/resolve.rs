//! Source file path -> route resolution.

use std::path::Path;

use crate::config::SiteOptions;

use super::error::RouteError;
use super::normalize::normalize;
use super::path::RoutePath;

/// Resolve the canonical route for a content file.
///
/// A file whose basename (content extension stripped) is literally
/// `index` stands for its directory's own page. Only the pages root may
/// contain one; anywhere deeper fails with [`RouteError::NestedIndex`].
/// The `index` token is matched case-sensitively, so `Index.md` is an
/// ordinary page.
pub fn resolve_page_route(
    options: &SiteOptions,
    file_path: &Path,
) -> Result<RoutePath, RouteError> {
    let (parent, stem) = split_source_path(options, file_path);

    if stem == "index" {
        if is_root_dir(&parent) {
            return Ok(normalize("/", options.build.trailing_slash));
        }
        return Err(RouteError::NestedIndex {
            path: file_path.to_path_buf(),
        });
    }

    let skeleton = if is_root_dir(&parent) {
        format!("/{stem}")
    } else {
        format!("/{parent}/{stem}")
    };
    Ok(normalize(&skeleton, options.build.trailing_slash))
}

/// Resolve the route of the directory an index document stands for.
///
/// The file's own basename is ignored entirely; no nesting restriction
/// applies because this names a directory, not a file.
pub fn resolve_index_route(options: &SiteOptions, file_path: &Path) -> RoutePath {
    let (parent, _) = split_source_path(options, file_path);
    let skeleton = if is_root_dir(&parent) {
        "/".to_string()
    } else {
        format!("/{parent}")
    };
    normalize(&skeleton, options.build.trailing_slash)
}

/// Split a source path into `(parent directory, extension-stripped
/// basename)`, both relative to the pages root and `/`-separated.
///
/// A path outside the pages root is used as-is, mirroring plain prefix
/// replacement.
fn split_source_path(options: &SiteOptions, file_path: &Path) -> (String, String) {
    let relative = file_path
        .strip_prefix(options.pages_dir())
        .unwrap_or(file_path);
    let relative = relative.to_string_lossy().replace('\\', "/");
    let relative = relative.trim_start_matches('/');

    let (parent, name) = match relative.rsplit_once('/') {
        Some((parent, name)) => (parent, name),
        None => ("", relative),
    };
    (
        parent.to_string(),
        options.strip_content_extension(name).to_string(),
    )
}

fn is_root_dir(parent: &str) -> bool {
    parent.is_empty() || parent == "."
}
