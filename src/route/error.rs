//! Route resolution error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from route resolution.
///
/// These are content-authoring mistakes, not transient conditions: the
/// caller either aborts the build or skips and reports the file.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A file named `index` outside the pages root. An index file stands
    /// for its directory's own page, and nesting one would claim a route
    /// the directory itself already owns.
    #[error(
        "nested index file `{path}`: `index` is reserved for the pages root, rename the file after its section"
    )]
    NestedIndex { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_index_display() {
        let err = RouteError::NestedIndex {
            path: PathBuf::from("/docs/guide/index.md"),
        };
        let display = format!("{err}");
        assert!(display.contains("/docs/guide/index.md"));
        assert!(display.contains("reserved"));
    }
}
