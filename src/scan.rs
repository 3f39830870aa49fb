//! Content file discovery.

use std::path::PathBuf;
use std::sync::LazyLock;

use anyhow::{Result, bail};
use jwalk::WalkDir;
use rustc_hash::FxHashSet;

use crate::config::SiteOptions;
use crate::debug;

/// Names never descended into or picked up, regardless of extension.
static IGNORED_NAMES: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ["node_modules", ".git"].into_iter().collect());

/// Check if a file or directory name is skipped by discovery.
///
/// Dot- and underscore-prefixed names are treated as private (drafts,
/// editor state) on top of the static name set.
fn is_ignored_name(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_') || IGNORED_NAMES.contains(name)
}

/// Enumerate the content files under the pages directory.
///
/// Only files with a recognized content extension survive; the route
/// resolver can assume its inputs were filtered here. Output order is
/// deterministic.
pub fn collect_content_files(options: &SiteOptions) -> Result<Vec<PathBuf>> {
    let pages_dir = options.pages_dir();
    if !pages_dir.is_dir() {
        bail!("pages directory `{}` does not exist", pages_dir.display());
    }

    let walker = WalkDir::new(pages_dir)
        .process_read_dir(|_depth, _path, _state, children| {
            children.retain(|child| {
                child
                    .as_ref()
                    .map_or(true, |entry| !is_ignored_name(&entry.file_name.to_string_lossy()))
            });
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type.is_file() {
            continue;
        }
        if !options.has_content_extension(&entry.file_name.to_string_lossy()) {
            continue;
        }
        files.push(entry.path());
    }
    files.sort();

    debug!("scan"; "{} content file(s) under {}", files.len(), pages_dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_options;
    use std::fs;

    fn touch(path: &std::path::Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(path, "stub").expect("write");
    }

    #[test]
    fn test_collects_only_content_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        touch(&root.join("index.md"));
        touch(&root.join("guide/getting-started.md"));
        touch(&root.join("guide/advanced.mdx"));
        touch(&root.join("guide/diagram.png"));
        touch(&root.join("notes.txt"));

        let options = test_options(root.to_str().expect("utf8 path"), false);
        let files = collect_content_files(&options).expect("scan");

        let names: Vec<String> = files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .expect("under root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(
            names,
            vec!["guide/advanced.mdx", "guide/getting-started.md", "index.md"]
        );
    }

    #[test]
    fn test_skips_ignored_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        touch(&root.join("kept.md"));
        touch(&root.join("node_modules/dep/readme.md"));
        touch(&root.join("_drafts/wip.md"));
        touch(&root.join(".cache/stale.md"));
        touch(&root.join("_private.md"));

        let options = test_options(root.to_str().expect("utf8 path"), false);
        let files = collect_content_files(&options).expect("scan");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("kept.md"));
    }

    #[test]
    fn test_missing_pages_dir_fails() {
        let options = test_options("/no/such/pages/dir", false);
        assert!(collect_content_files(&options).is_err());
    }

    #[test]
    fn test_ignored_name_rules() {
        assert!(is_ignored_name("node_modules"));
        assert!(is_ignored_name(".git"));
        assert!(is_ignored_name(".anything"));
        assert!(is_ignored_name("_drafts"));
        assert!(!is_ignored_name("guide"));
        assert!(!is_ignored_name("page.md"));
    }
}
