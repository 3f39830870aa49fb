//! Route pathname canonicalization.
//!
//! The canonicalizer turns a route skeleton (directory + basename glued
//! together by the resolver) into its final pathname. The steps run in a
//! fixed order; later steps must not reintroduce what earlier steps
//! removed, which is why slugification runs a second time after URL
//! parsing.

use std::sync::OnceLock;

use deunicode::deunicode;
use percent_encoding::percent_decode_str;

use super::path::RoutePath;

/// Canonicalize a route skeleton into its final pathname.
///
/// Idempotent: feeding a canonical route back in returns it unchanged.
/// The result never contains `\`, uppercase letters, spaces, or
/// underscores.
pub fn normalize(skeleton: &str, trailing_slash: bool) -> RoutePath {
    let lowered = skeleton.trim().to_lowercase();
    let hyphenated = lowered.replace(' ', "-").replace('_', "-");
    let slugged = slugify_segments(&hyphenated);
    let canonical = canonicalize_url_path(&slugged);
    // URL parsing can reintroduce encoded characters; slugify again
    let mut route = slugify_segments(&canonical);

    if trailing_slash && !route.ends_with('/') {
        route.push('/');
    }
    RoutePath::from_normalized(route)
}

/// Slugify every non-empty `/`-separated segment independently.
///
/// `.` and `..` are path syntax, not content; they pass through so URL
/// canonicalization can resolve them.
fn slugify_segments(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment {
            "." | ".." => segment.to_string(),
            segment => slugify_segment(segment),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Reduce one segment to `[a-z0-9-]`.
///
/// Transliterates to ASCII where possible, drops anything else, and
/// collapses and trims hyphens. Transliteration may emit interior spaces
/// (`中文` -> `Zhong Wen`); those become hyphens so word boundaries
/// survive.
fn slugify_segment(segment: &str) -> String {
    let ascii = deunicode(segment);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;

    for ch in ascii.chars() {
        match ch.to_ascii_lowercase() {
            c @ ('a'..='z' | '0'..='9') => {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(c);
            }
            '-' | ' ' => pending_hyphen = true,
            _ => {}
        }
    }
    slug
}

/// Canonicalize `.`/`..` segments and percent-encoding via URL parsing
/// against a fixed dummy authority.
fn canonicalize_url_path(path: &str) -> String {
    static BASE: OnceLock<url::Url> = OnceLock::new();
    let base = BASE.get_or_init(|| url::Url::parse("http://x").unwrap());

    match base.join(path) {
        Ok(parsed) => {
            // url crate returns a percent-encoded path, decode it
            percent_decode_str(parsed.path())
                .decode_utf8()
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| parsed.path().to_string())
        }
        // Fallback to simple split if url parsing fails
        Err(_) => path.split(['?', '#']).next().unwrap_or(path).to_string(),
    }
}
