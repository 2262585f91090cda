//! Content-source presets.
//!
//! A preset is a named bundle of options for the docs, blog and theme
//! content sources. Presets are read from TOML as tables with a `name` key
//! and serialized for the external generator as `[name, options]` pairs.

use serde::{Deserialize, Serialize, Serializer, ser::SerializeTuple};

use crate::config::ReportingSeverity;

/// A named preset and its options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preset {
    /// Preset name (e.g. `classic`).
    pub name: String,

    /// Content-source options carried by the preset.
    #[serde(flatten)]
    pub options: PresetOptions,
}

impl Serialize for Preset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.name)?;
        pair.serialize_element(&self.options)?;
        pair.end()
    }
}

/// Options for each content source a preset configures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct PresetOptions {
    /// Documentation content source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<DocsOptions>,

    /// Blog content source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<BlogOptions>,

    /// Theme customisation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeOptions>,
}

/// Docs content source options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct DocsOptions {
    /// Folder holding the docs, relative to the site directory.
    #[serde(default = "default_docs_path")]
    pub path: String,

    /// URL segment the docs are served under.
    #[serde(default = "default_docs_path")]
    pub route_base_path: String,

    /// Sidebar definition file, resolved by the external generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_path: Option<String>,

    /// Template for "edit this page" links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

/// Blog content source options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct BlogOptions {
    /// Folder holding the blog posts, relative to the site directory.
    #[serde(default = "default_blog_path")]
    pub path: String,

    /// URL segment the blog is served under.
    #[serde(default = "default_blog_path")]
    pub route_base_path: String,

    #[serde(default)]
    pub show_reading_time: bool,

    /// Feed generation settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_options: Option<FeedOptions>,

    /// Template for "edit this page" links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,

    #[serde(default = "default_advisory")]
    pub on_inline_tags: ReportingSeverity,

    #[serde(default = "default_advisory")]
    pub on_inline_authors: ReportingSeverity,

    #[serde(default = "default_advisory")]
    pub on_untruncated_blog_posts: ReportingSeverity,
}

/// Blog feed settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedOptions {
    /// Feed formats to emit.
    #[serde(rename = "type", default = "default_feed_types")]
    pub types: Vec<FeedType>,

    /// Whether to attach XSLT stylesheets to the feeds.
    #[serde(default)]
    pub xslt: bool,
}

/// Feed format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    Rss,
    Atom,
    Json,
}

/// Theme options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct ThemeOptions {
    /// Custom stylesheet, resolved by the external generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

fn default_docs_path() -> String {
    "docs".to_string()
}

fn default_blog_path() -> String {
    "blog".to_string()
}

fn default_advisory() -> ReportingSeverity {
    ReportingSeverity::Warn
}

fn default_feed_types() -> Vec<FeedType> {
    vec![FeedType::Rss, FeedType::Atom]
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            path: default_docs_path(),
            route_base_path: default_docs_path(),
            sidebar_path: None,
            edit_url: None,
        }
    }
}

impl Default for BlogOptions {
    fn default() -> Self {
        Self {
            path: default_blog_path(),
            route_base_path: default_blog_path(),
            show_reading_time: false,
            feed_options: None,
            edit_url: None,
            on_inline_tags: default_advisory(),
            on_inline_authors: default_advisory(),
            on_untruncated_blog_posts: default_advisory(),
        }
    }
}
