//! Route pathname type.

use std::borrow::Borrow;
use std::sync::Arc;

use serde::Serialize;

/// Canonical route pathname assigned to a content file.
///
/// Invariants (the canonicalizer is the only producer):
/// - always starts with `/`, with `/` as the only separator
/// - segments are lower-case slugs (`[a-z0-9-]`)
/// - ends with `/` only for the root or under the trailing-slash policy
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// Wrap an already-canonicalized pathname.
    pub(crate) fn from_normalized(route: String) -> Self {
        Self(Arc::from(route))
    }

    /// Get the route pathname as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the root route.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Get the parent route.
    ///
    /// `/guide/intro` -> `/guide`, `/guide` -> `/`, `/` -> `None`
    #[allow(dead_code)] // Reserved for future use
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.0.trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.rfind('/') {
            Some(0) | None => Some(Self(Arc::from("/"))),
            Some(idx) => Some(Self(Arc::from(&trimmed[..idx]))),
        }
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RoutePath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for RoutePath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for RoutePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(s: &str) -> RoutePath {
        RoutePath::from_normalized(s.to_string())
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", route("/guide/intro")), "/guide/intro");
    }

    #[test]
    fn test_is_root() {
        assert!(route("/").is_root());
        assert!(!route("/guide").is_root());
    }

    #[test]
    fn test_parent() {
        assert_eq!(route("/guide/intro").parent(), Some(route("/guide")));
        assert_eq!(route("/guide").parent(), Some(route("/")));
        assert_eq!(route("/guide/intro/").parent(), Some(route("/guide")));
        assert_eq!(route("/").parent(), None);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&route("/guide/intro")).expect("serialize");
        assert_eq!(json, r#""/guide/intro""#);
    }

    #[test]
    fn test_str_equality() {
        assert_eq!(route("/guide"), "/guide");
        assert_ne!(route("/guide"), "/other");
    }
}
