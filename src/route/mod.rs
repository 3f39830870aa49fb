//! Route derivation: canonical pathnames for content files and links.
//!
//! - [`path`]: the [`RoutePath`] value type
//! - [`normalize`]: pathname canonicalization rules
//! - [`resolve`]: source file path -> route resolution
//! - [`rewrite`]: content link rewriting for index documents

mod error;
mod normalize;
mod path;
mod resolve;
mod rewrite;

pub use error::RouteError;
pub use normalize::normalize;
pub use path::RoutePath;
pub use resolve::{resolve_index_route, resolve_page_route};
pub use rewrite::rewrite_link;
