//! Layout name validation.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::SiteOptions;

use super::PageMeta;

/// Layout name that never needs registration.
pub const DEFAULT_LAYOUT: &str = "default";

/// A page declared a layout that is not registered in configuration.
///
/// Surfaced to the author like a nested index file: skip-and-report or
/// abort, never retried.
#[derive(Debug, Error)]
#[error("unknown layout `{layout}` in `{path}`: not registered under [layouts] in mdpages.toml")]
pub struct LayoutError {
    pub path: PathBuf,
    pub layout: String,
}

/// Validate a page's declared layout against the registered set.
///
/// Pages without a layout, or with the default layout, always pass.
pub fn validate_layout(
    options: &SiteOptions,
    file_path: &Path,
    meta: &PageMeta,
) -> Result<(), LayoutError> {
    match meta.layout.as_deref() {
        None | Some(DEFAULT_LAYOUT) => Ok(()),
        Some(name) if options.layouts.contains_key(name) => Ok(()),
        Some(name) => Err(LayoutError {
            path: file_path.to_path_buf(),
            layout: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn meta_with_layout(layout: &str) -> PageMeta {
        PageMeta {
            layout: Some(layout.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_layout_passes() {
        let options = test_parse_config("");
        let result = validate_layout(&options, Path::new("/docs/a.md"), &PageMeta::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_layout_passes() {
        let options = test_parse_config("");
        let result = validate_layout(
            &options,
            Path::new("/docs/a.md"),
            &meta_with_layout("default"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_registered_layout_passes() {
        let options = test_parse_config("[layouts]\npost = \"layouts/post.html\"");
        let result = validate_layout(&options, Path::new("/docs/a.md"), &meta_with_layout("post"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_unknown_layout_fails() {
        let options = test_parse_config("[layouts]\npost = \"layouts/post.html\"");
        let err = validate_layout(&options, Path::new("/docs/a.md"), &meta_with_layout("fancy"))
            .expect_err("should fail");
        assert_eq!(err.layout, "fancy");
        assert_eq!(err.path, Path::new("/docs/a.md"));
        assert!(format!("{err}").contains("fancy"));
    }
}
