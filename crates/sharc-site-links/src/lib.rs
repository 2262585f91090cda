//! SHARC Site Links Library
//!
//! Build-time link integrity checks for the site configuration.
//!
//! # Modules
//!
//! - [`source`] - Content sources the checker resolves routes against
//! - [`frontmatter`] - Front matter fields that change page routes
//! - [`markdown`] - Link extraction from markdown documents
//! - [`checker`] - Link checking with per-category failure policy

pub mod checker;
pub mod frontmatter;
pub mod markdown;
pub mod source;

pub use checker::{BrokenLink, LinkChecker, LinkError, LinkKind, LinkReport};
pub use frontmatter::{Frontmatter, parse_frontmatter};
pub use markdown::{extract_links, is_markdown_file_link};
pub use source::{ContentSource, FsContentSource, MarkdownDocument, SourceError, StaticContentSource};
