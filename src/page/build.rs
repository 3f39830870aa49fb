//! Build output locations derived from routes.
//!
//! Pure functions of the already-computed route; the build-output writer
//! relies on these being deterministic.

use crate::route::RoutePath;

/// Build output location for a page module: `pages{route}.js`.
///
/// The root route maps to `pages/index.js`. A policy trailing slash is
/// trimmed before formatting so both policies produce the same location.
pub fn pages_build_path(route: &RoutePath) -> String {
    if route.is_root() {
        return "pages/index.js".to_string();
    }
    format!("pages{}.js", route.as_str().trim_end_matches('/'))
}

/// Build output location for an index manifest: `pages{route}/index.json`.
pub fn index_build_path(route: &RoutePath) -> String {
    format!("pages{}/index.json", route.as_str().trim_end_matches('/'))
}
