//! Page metadata from Markdown/MDX frontmatter.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::JsonMap;

/// Page metadata from a `---` (YAML-like) or `+++` (TOML) frontmatter
/// block.
///
/// Only `title` and `layout` carry meaning for routing and validation;
/// everything else lands in `extra` for downstream consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    /// Explicit page title (overrides the basename fallback).
    pub title: Option<String>,
    /// Named layout to render with, validated against `[layouts]`.
    pub layout: Option<String>,
    /// Draft status (default: false).
    pub draft: bool,
    /// Additional user-defined fields (raw JSON).
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Extract frontmatter and return `(metadata, body)`.
///
/// Returns `None` when the document carries no frontmatter block.
pub fn extract_frontmatter(content: &str) -> Result<Option<(PageMeta, &str)>> {
    match detect_frontmatter(content) {
        Some((fm, body, true)) => Ok(Some((parse_toml(fm)?, body))),
        Some((fm, body, false)) => Ok(Some((parse_yaml_like(fm), body))),
        None => Ok(None),
    }
}

/// Detect a frontmatter block. Returns `(frontmatter, body, is_toml)`.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start();
    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && let Some(end) = rest.find(&format!("\n{fence}"))
        {
            let fm = rest[..end].trim();
            let body = rest[end + 4..].trim_start_matches('\n');
            return Some((fm, body, is_toml));
        }
    }
    None
}

/// Parse TOML frontmatter.
fn parse_toml(content: &str) -> Result<PageMeta> {
    toml::from_str(content).map_err(|e| anyhow::anyhow!("invalid TOML frontmatter: {e}"))
}

/// Parse simple `key: value` frontmatter lines.
fn parse_yaml_like(content: &str) -> PageMeta {
    let mut meta = PageMeta::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        match key.to_lowercase().as_str() {
            "title" => meta.title = Some(value.to_string()),
            "layout" => meta.layout = Some(value.to_string()),
            "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
            _ => {
                // Custom field -> extra (preserve original key case)
                meta.extra.insert(key.to_string(), parse_scalar(value));
            }
        }
    }
    meta
}

/// Best-effort scalar parsing for unknown frontmatter fields.
fn parse_scalar(value: &str) -> serde_json::Value {
    use serde_json::Value;

    if value.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(n) = value.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(n) = value.parse::<f64>()
        && let Some(n) = serde_json::Number::from_f64(n)
    {
        return Value::Number(n);
    }
    Value::String(value.to_string())
}
