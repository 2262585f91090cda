//! Theme configuration: navbar, footer and code highlighting.

use serde::{Deserialize, Serialize};

/// Theme settings consumed by the external generator's theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct ThemeConfig {
    /// Social card image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub navbar: Navbar,

    #[serde(default)]
    pub footer: Footer,

    #[serde(default)]
    pub prism: Prism,
}

/// Top navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Navbar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,

    /// Items in declaration order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// Navbar logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    pub alt: String,
    pub src: String,
}

/// Kind of a navbar item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub enum NavItemKind {
    /// Plain link with `to` or `href`.
    #[default]
    Default,
    /// Link to the first page of a docs sidebar.
    DocSidebar,
    /// Link to a single doc page.
    Doc,
}

/// Side of the navbar an item is rendered on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavItemPosition {
    #[default]
    Left,
    Right,
}

/// A navbar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct NavItem {
    #[serde(rename = "type", default)]
    pub kind: NavItemKind,

    pub label: String,

    #[serde(default)]
    pub position: NavItemPosition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Where a link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Site-internal path, resolved against the base URL.
    Internal(&'a str),
    /// Absolute external URL.
    External(&'a str),
}

/// Pick the single target of a `to`/`href` pair.
///
/// Returns `None` when neither or both are set.
fn link_target<'a>(to: Option<&'a str>, href: Option<&'a str>) -> Option<LinkTarget<'a>> {
    match (to, href) {
        (Some(to), None) => Some(LinkTarget::Internal(to)),
        (None, Some(href)) => Some(LinkTarget::External(href)),
        _ => None,
    }
}

impl NavItem {
    /// Target of a default item. Sidebar and doc items resolve through content.
    pub fn target(&self) -> Option<LinkTarget<'_>> {
        link_target(self.to.as_deref(), self.href.as_deref())
    }
}

/// Footer color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// Page footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub style: FooterStyle,

    /// Link columns in declaration order.
    #[serde(default)]
    pub links: Vec<FooterColumn>,

    /// Copyright line. `{year}` is replaced at load time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Footer {
    /// Find a column by title.
    pub fn column(&self, title: &str) -> Option<&FooterColumn> {
        self.links.iter().find(|c| c.title == title)
    }
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,

    #[serde(default)]
    pub items: Vec<FooterLink>,
}

/// A footer link with exactly one of `to` or `href`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl FooterLink {
    pub fn target(&self) -> Option<LinkTarget<'_>> {
        link_target(self.to.as_deref(), self.href.as_deref())
    }
}

/// Code highlighting themes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct Prism {
    #[serde(default = "default_light_theme")]
    pub theme: PrismTheme,

    #[serde(default = "default_dark_theme")]
    pub dark_theme: PrismTheme,
}

/// Named syntax highlighting theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub enum PrismTheme {
    Github,
    Dracula,
    Duotone,
    NightOwl,
    NightOwlLight,
    OceanicNext,
    Okaidia,
    OneDark,
    OneLight,
    Palenight,
    VsDark,
    VsLight,
}

fn default_light_theme() -> PrismTheme {
    PrismTheme::Github
}

fn default_dark_theme() -> PrismTheme {
    PrismTheme::Dracula
}

impl Default for Prism {
    fn default() -> Self {
        Self {
            theme: default_light_theme(),
            dark_theme: default_dark_theme(),
        }
    }
}
