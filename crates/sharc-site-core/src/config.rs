//! Site configuration management.

use std::{collections::HashSet, fmt, path::Path};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    preset::{BlogOptions, DocsOptions, Preset},
    theme::{LinkTarget, NavItemKind, ThemeConfig},
};

/// Built-in descriptor for the SHARC documentation site.
const SHARC_SITE: &str = include_str!("../sharc.toml");

/// Placeholder in the footer copyright replaced with the current year.
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Prefix for environment overrides, e.g. `SHARC_SITE__BASE_URL`.
const ENV_PREFIX: &str = "SHARC_SITE";

/// How the build reacts to a dangling reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingSeverity {
    /// Drop silently.
    Ignore,
    /// Report and keep going.
    #[default]
    Warn,
    /// Fail the build.
    Throw,
}

impl fmt::Display for ReportingSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Throw => "throw",
        })
    }
}

/// Locale settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct I18nConfig {
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Supported locales in declaration order.
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
}

impl I18nConfig {
    /// Check whether a locale is configured.
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            locales: default_locales(),
        }
    }
}

/// Fully resolved site configuration handed to the external generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub favicon: String,

    /// Production origin (e.g. "https://example.github.io").
    pub url: String,

    /// Path the site is served under. Starts and ends with `/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    // Deployment target. Not validated.
    #[serde(default)]
    pub organization_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub deployment_branch: String,

    /// Whether generated URLs end with `/`.
    #[serde(default)]
    pub trailing_slash: bool,

    #[serde(default = "default_on_broken_links")]
    pub on_broken_links: ReportingSeverity,

    #[serde(default)]
    pub on_broken_markdown_links: ReportingSeverity,

    #[serde(default)]
    pub i18n: I18nConfig,

    /// Presets in declaration order.
    #[serde(default)]
    pub presets: Vec<Preset>,

    #[serde(default)]
    pub theme_config: ThemeConfig,
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_locales() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_on_broken_links() -> ReportingSeverity {
    ReportingSeverity::Throw
}

/// Current calendar year from the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Load the built-in SHARC site configuration.
pub fn load_config() -> Result<SiteConfig> {
    SiteConfig::from_toml_str(SHARC_SITE)
}

impl SiteConfig {
    /// Parse, resolve and validate a TOML descriptor.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with_year(content, current_year())
    }

    /// Like [`SiteConfig::from_toml_str`] with an explicit copyright year.
    pub fn from_toml_str_with_year(content: &str, year: i32) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.finish(year)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        tracing::info!(path = %path.display(), "Loaded site configuration");
        config.finish(current_year())
    }

    /// Load configuration using the config crate, layering `SHARC_SITE__*`
    /// environment variables over the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: SiteConfig = settings.try_deserialize()?;
        config.finish(current_year())
    }

    fn finish(self, year: i32) -> Result<Self> {
        let config = self.resolve(year);
        config.validate()?;
        tracing::debug!(title = %config.title, url = %config.url, "Resolved site configuration");
        Ok(config)
    }

    /// Interpolate `year` into the footer copyright.
    pub fn resolve(mut self, year: i32) -> Self {
        if let Some(copyright) = self.theme_config.footer.copyright.as_mut() {
            *copyright = copyright.replace(YEAR_PLACEHOLDER, &format!("{year:04}"));
        }
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::config("title cannot be empty"));
        }

        if self.url.is_empty() {
            return Err(CoreError::config("url cannot be empty"));
        }

        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(CoreError::config(format!(
                "url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        if !self.base_url.starts_with('/') {
            return Err(CoreError::config(format!(
                "base_url must start with '/', got '{}'",
                self.base_url
            )));
        }

        if !self.base_url.ends_with('/') {
            return Err(CoreError::config(format!(
                "base_url must end with '/', got '{}'",
                self.base_url
            )));
        }

        self.validate_i18n()?;
        self.validate_presets()?;
        self.validate_links()?;

        let host = self
            .url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        if host.contains('/') {
            tracing::warn!(url = %self.url, "url should not contain a path; use base_url instead");
        }

        Ok(())
    }

    fn validate_i18n(&self) -> Result<()> {
        let i18n = &self.i18n;
        if i18n.locales.is_empty() {
            return Err(CoreError::config("i18n.locales cannot be empty"));
        }

        let mut seen = HashSet::new();
        for locale in &i18n.locales {
            if !seen.insert(locale.as_str()) {
                return Err(CoreError::config(format!(
                    "i18n.locales contains duplicate locale '{locale}'"
                )));
            }
        }

        if !i18n.has_locale(&i18n.default_locale) {
            return Err(CoreError::config(format!(
                "i18n.default_locale '{}' is not listed in i18n.locales",
                i18n.default_locale
            )));
        }

        Ok(())
    }

    fn validate_presets(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for preset in &self.presets {
            if !seen.insert(preset.name.as_str()) {
                return Err(CoreError::config(format!(
                    "preset '{}' is declared more than once",
                    preset.name
                )));
            }
        }
        Ok(())
    }

    fn validate_links(&self) -> Result<()> {
        for item in &self.theme_config.navbar.items {
            match item.kind {
                NavItemKind::DocSidebar if item.sidebar_id.is_none() => {
                    return Err(CoreError::config(format!(
                        "navbar item '{}' of type docSidebar needs a sidebar_id",
                        item.label
                    )));
                }
                NavItemKind::Doc if item.doc_id.is_none() => {
                    return Err(CoreError::config(format!(
                        "navbar item '{}' of type doc needs a doc_id",
                        item.label
                    )));
                }
                NavItemKind::Default if item.target().is_none() => {
                    return Err(CoreError::config(format!(
                        "navbar item '{}' needs exactly one of to or href",
                        item.label
                    )));
                }
                _ => {}
            }
        }

        for column in &self.theme_config.footer.links {
            for link in &column.items {
                if link.target().is_none() {
                    return Err(CoreError::config(format!(
                        "footer link '{}' in column '{}' needs exactly one of to or href",
                        link.label, column.title
                    )));
                }
            }
        }

        Ok(())
    }

    /// Site path for `path` under `base_url`, shaped by `trailing_slash`.
    ///
    /// Empty segments are dropped, so the result never contains `//`.
    pub fn route_for(&self, path: &str) -> String {
        let segments: Vec<&str> = self
            .base_url
            .split('/')
            .chain(path.split('/'))
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            return "/".to_string();
        }

        let mut route = format!("/{}", segments.join("/"));
        if self.trailing_slash {
            route.push('/');
        }
        route
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let origin = self.url.trim_end_matches('/');
        format!("{origin}{}", self.route_for(path))
    }

    /// Docs options of the first preset that configures docs.
    pub fn docs_options(&self) -> Option<&DocsOptions> {
        self.presets.iter().find_map(|p| p.options.docs.as_ref())
    }

    /// Blog options of the first preset that configures a blog.
    pub fn blog_options(&self) -> Option<&BlogOptions> {
        self.presets.iter().find_map(|p| p.options.blog.as_ref())
    }

    /// Internal paths declared by navbar and footer links.
    pub fn internal_links(&self) -> Vec<&str> {
        let navbar = self
            .theme_config
            .navbar
            .items
            .iter()
            .filter_map(|item| item.target());
        let footer = self
            .theme_config
            .footer
            .links
            .iter()
            .flat_map(|column| column.items.iter())
            .filter_map(|link| link.target());

        navbar
            .chain(footer)
            .filter_map(|target| match target {
                LinkTarget::Internal(path) => Some(path),
                LinkTarget::External(_) => None,
            })
            .collect()
    }

    /// Serialize in the shape the external generator consumes.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed variant of [`SiteConfig::to_json`].
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
