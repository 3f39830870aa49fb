//! Page types: metadata, titles, layout validation, build output paths.

mod build;
mod layout;
mod meta;
mod title;

pub use build::{index_build_path, pages_build_path};
pub use layout::{LayoutError, validate_layout};
pub use meta::{PageMeta, extract_frontmatter};
pub use title::derive_page_title;

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
