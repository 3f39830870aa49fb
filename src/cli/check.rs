//! `check` subcommand: content structure and layout validation.

use std::path::Path;

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::cli::args::CheckArgs;
use crate::config::SiteOptions;
use crate::log;
use crate::page::{extract_frontmatter, validate_layout};
use crate::route::resolve_page_route;
use crate::scan::collect_content_files;

pub fn run_check(args: &CheckArgs, options: &SiteOptions) -> Result<()> {
    let files = collect_content_files(options)?;

    let findings: Vec<String> = files
        .par_iter()
        .flat_map_iter(|file| check_file(options, file))
        .collect();

    if findings.is_empty() {
        log!("check"; "{} file(s), no problems", files.len());
        return Ok(());
    }

    let level = if args.warn_only { "warning" } else { "error" };
    for finding in &findings {
        log!(level; "{finding}");
    }

    if args.warn_only {
        log!("check"; "{} problem(s) found (warn-only)", findings.len());
        Ok(())
    } else {
        bail!("{} problem(s) found", findings.len())
    }
}

/// Collect findings for one file: index placement and layout names.
fn check_file(options: &SiteOptions, file: &Path) -> Vec<String> {
    let mut findings = Vec::new();

    if let Err(e) = resolve_page_route(options, file) {
        findings.push(e.to_string());
    }

    match std::fs::read_to_string(file) {
        Ok(source) => match extract_frontmatter(&source) {
            Ok(Some((meta, _))) => {
                if let Err(e) = validate_layout(options, file, &meta) {
                    findings.push(e.to_string());
                }
            }
            Ok(None) => {}
            Err(e) => findings.push(format!("{}: {e}", file.display())),
        },
        Err(e) => findings.push(format!("{}: {e}", file.display())),
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_options;
    use std::fs;

    #[test]
    fn test_check_file_clean() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("setup.md");
        fs::write(&file, "---\ntitle: Setup\n---\nbody").expect("write");

        let options = test_options(dir.path().to_str().expect("utf8 path"), false);
        assert!(check_file(&options, &file).is_empty());
    }

    #[test]
    fn test_check_file_nested_index() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("guide/index.md");
        fs::create_dir_all(file.parent().expect("parent")).expect("mkdir");
        fs::write(&file, "body").expect("write");

        let options = test_options(dir.path().to_str().expect("utf8 path"), false);
        let findings = check_file(&options, &file);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("index"));
    }

    #[test]
    fn test_check_file_unknown_layout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("setup.md");
        fs::write(&file, "---\nlayout: fancy\n---\nbody").expect("write");

        let options = test_options(dir.path().to_str().expect("utf8 path"), false);
        let findings = check_file(&options, &file);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("fancy"));
    }
}
