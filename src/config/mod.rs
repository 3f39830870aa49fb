//! Site options from `mdpages.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                            |
//! |-------------|----------------------------------------------------|
//! | `[build]`   | Pages directory, trailing-slash policy, extensions |
//! | `[layouts]` | Registered layout names and their templates        |
//!
//! Options are built once at startup and passed by shared reference into
//! every route operation; nothing mutates them afterwards.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::cli::Cli;
use crate::debug;
use crate::utils::path::normalize_path;

// ============================================================================
// root options
// ============================================================================

/// Root options structure representing mdpages.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Resolved absolute pages directory (internal use only)
    #[serde(skip)]
    pages_dir: PathBuf,

    /// Build settings
    pub build: BuildConfig,

    /// Registered layouts: name -> template path. Pages naming any other
    /// layout fail validation.
    pub layouts: BTreeMap<String, PathBuf>,
}

/// `[build]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Pages directory (relative to project root).
    pub pages: PathBuf,
    /// Whether every route ends with a trailing slash.
    pub trailing_slash: bool,
    /// Recognized content file extensions, stored lower-cased and
    /// dot-prefixed.
    pub extensions: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            pages: PathBuf::from("pages"),
            trailing_slash: false,
            extensions: vec![".md".to_string(), ".mdx".to_string()],
        }
    }
}

impl SiteOptions {
    /// Load options for the current invocation.
    ///
    /// A missing config file is not an error: defaults apply, rooted at
    /// the current directory.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let options = Self::from_file(&cli.config, cli.pages.as_deref())?;
        if options.config_path.as_os_str().is_empty() {
            debug!("config"; "no config file, using defaults");
        } else {
            debug!("config"; "loaded {}", options.config_path.display());
        }
        debug!("config"; "pages directory: {}", options.pages_dir.display());
        Ok(options)
    }

    /// Load options from a config file path, with an optional pages
    /// directory override.
    pub fn from_file(
        config_path: &Path,
        pages_override: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut options = if config_path.is_file() {
            let raw = fs::read_to_string(config_path)
                .map_err(|e| ConfigError::Io(config_path.to_path_buf(), e))?;
            let mut options: SiteOptions = toml::from_str(&raw)?;
            options.config_path = normalize_path(config_path);
            options.root = options
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            options
        } else {
            let mut options = Self::default();
            options.root = std::env::current_dir()
                .map_err(|e| ConfigError::Io(config_path.to_path_buf(), e))?;
            options
        };

        if let Some(pages) = pages_override {
            options.build.pages = pages.to_path_buf();
        }
        options.finalize()
    }

    /// Validate raw fields and resolve derived paths.
    fn finalize(mut self) -> Result<Self, ConfigError> {
        for ext in &mut self.build.extensions {
            let trimmed = ext.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::Validation(
                    "empty entry in build.extensions".to_string(),
                ));
            }
            let mut lowered = trimmed.to_lowercase();
            if !lowered.starts_with('.') {
                lowered.insert(0, '.');
            }
            *ext = lowered;
        }

        if self.layouts.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "empty layout name under [layouts]".to_string(),
            ));
        }

        self.pages_dir = normalize_path(&self.root.join(&self.build.pages));
        Ok(self)
    }

    /// Absolute root of the pages tree.
    #[inline]
    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    /// Check if a path (or bare file name) ends in a recognized content
    /// extension, case-insensitively.
    pub fn has_content_extension(&self, path: &str) -> bool {
        let lowered = path.to_lowercase();
        self.build
            .extensions
            .iter()
            .any(|ext| lowered.ends_with(ext.as_str()))
    }

    /// Strip a recognized content extension from a file name,
    /// case-insensitively. Unrecognized names are returned unchanged.
    pub fn strip_content_extension<'a>(&self, name: &'a str) -> &'a str {
        let lowered = name.to_lowercase();
        for ext in &self.build.extensions {
            if lowered.ends_with(ext.as_str()) {
                return &name[..name.len() - ext.len()];
            }
        }
        name
    }
}

// ============================================================================
// test helpers
// ============================================================================

/// Parse a TOML snippet into finalized options (tests only).
#[cfg(test)]
pub(crate) fn test_parse_config(input: &str) -> SiteOptions {
    let options: SiteOptions = toml::from_str(input).expect("parse test config");
    options.finalize().expect("finalize test config")
}

/// Options with an explicit pages directory, bypassing the filesystem
/// (tests only).
#[cfg(test)]
pub(crate) fn test_options(pages_dir: &str, trailing_slash: bool) -> SiteOptions {
    let mut options = SiteOptions::default();
    options.build.trailing_slash = trailing_slash;
    options.pages_dir = PathBuf::from(pages_dir);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = test_parse_config("");
        assert_eq!(options.build.pages, PathBuf::from("pages"));
        assert!(!options.build.trailing_slash);
        assert_eq!(options.build.extensions, vec![".md", ".mdx"]);
        assert!(options.layouts.is_empty());
    }

    #[test]
    fn test_build_section_parsing() {
        let options = test_parse_config(
            "[build]\npages = \"content\"\ntrailing_slash = true\nextensions = [\".md\"]",
        );
        assert_eq!(options.build.pages, PathBuf::from("content"));
        assert!(options.build.trailing_slash);
        assert_eq!(options.build.extensions, vec![".md"]);
    }

    #[test]
    fn test_extensions_normalized() {
        let options = test_parse_config("[build]\nextensions = [\"MD\", \".Markdown\"]");
        assert_eq!(options.build.extensions, vec![".md", ".markdown"]);
    }

    #[test]
    fn test_empty_extension_rejected() {
        let options: SiteOptions =
            toml::from_str("[build]\nextensions = [\"\"]").expect("parse test config");
        assert!(matches!(
            options.finalize(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_layouts_parsing() {
        let options = test_parse_config("[layouts]\npost = \"layouts/post.html\"");
        assert_eq!(
            options.layouts.get("post"),
            Some(&PathBuf::from("layouts/post.html"))
        );
    }

    #[test]
    fn test_has_content_extension() {
        let options = test_parse_config("");
        assert!(options.has_content_extension("guide.md"));
        assert!(options.has_content_extension("guide.MDX"));
        assert!(options.has_content_extension("./nested/page.Md"));
        assert!(!options.has_content_extension("image.png"));
        assert!(!options.has_content_extension("readme.txt"));
    }

    #[test]
    fn test_strip_content_extension() {
        let options = test_parse_config("");
        assert_eq!(options.strip_content_extension("guide.md"), "guide");
        assert_eq!(options.strip_content_extension("guide.MDX"), "guide");
        assert_eq!(options.strip_content_extension("image.png"), "image.png");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config_path = dir.path().join("mdpages.toml");
        std::fs::write(&config_path, "[build]\npages = \"docs\"\ntrailing_slash = true\n")
            .expect("write config");

        let options = SiteOptions::from_file(&config_path, None).expect("load");
        assert!(options.build.trailing_slash);
        assert!(options.pages_dir().ends_with("docs"));
        assert_eq!(options.root, dir.path().canonicalize().expect("canon"));
    }

    #[test]
    fn test_from_file_missing_uses_defaults() {
        let options =
            SiteOptions::from_file(Path::new("/no/such/mdpages.toml"), None).expect("load");
        assert_eq!(options.build.extensions, vec![".md", ".mdx"]);
        assert!(options.pages_dir().is_absolute());
    }

    #[test]
    fn test_pages_override() {
        let options = SiteOptions::from_file(
            Path::new("/no/such/mdpages.toml"),
            Some(Path::new("/srv/docs")),
        )
        .expect("load");
        assert_eq!(options.pages_dir(), Path::new("/srv/docs"));
    }
}
