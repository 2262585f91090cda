//! Front matter fields that decide where a page is served.

use std::path::Path;

use serde::Deserialize;

use crate::source::{Result, SourceError};

/// Routing metadata from a document's YAML front matter.
///
/// Other keys (title, tags, ...) are left to the external generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    /// Replaces the file name part of a doc id.
    #[serde(default)]
    pub id: Option<String>,

    /// Explicit URL slug. Absolute slugs start at the route base.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Split `---` delimited YAML front matter from the body.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content
        .strip_prefix("---\r\n")
        .or_else(|| content.strip_prefix("---\n"))?;

    if let Some(body) = rest.strip_prefix("---") {
        return Some(("", body.trim_start_matches(['\r', '\n'])));
    }

    let closing = rest.find("\n---")?;
    let frontmatter = &rest[..closing];
    let body = rest[closing + "\n---".len()..].trim_start_matches(['\r', '\n']);
    Some((frontmatter, body))
}

/// Parse routing front matter. Documents without front matter get defaults.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<Frontmatter> {
    let Some((yaml, _body)) = split_frontmatter(content) else {
        return Ok(Frontmatter::default());
    };

    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }

    serde_yaml::from_str(yaml).map_err(|e| SourceError::Frontmatter {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
