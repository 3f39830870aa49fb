//! Page title derivation.

use std::path::Path;

use super::PageMeta;

/// Derive the display title for a page.
///
/// Uses the explicit frontmatter title when present, otherwise
/// title-cases the file's basename with hyphens and underscores as word
/// separators.
pub fn derive_page_title(file_path: &Path, meta: &PageMeta) -> String {
    if let Some(title) = &meta.title {
        return title.clone();
    }
    let stem = file_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    title_case(&stem)
}

/// `getting-started` -> `Getting Started`
fn title_case(stem: &str) -> String {
    stem.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
