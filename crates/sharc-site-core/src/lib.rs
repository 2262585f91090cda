//! SHARC Site Core Library
//!
//! Configuration model, loader and validation for the SHARC documentation site.
//! The resolved [`SiteConfig`] is handed to an external static-site generator;
//! this crate never renders pages itself.
//!
//! # Example
//!
//! ```
//! let config = sharc_site_core::load_config().unwrap();
//! assert_eq!(config.url_for("docs/intro"), "https://tentemujin.github.io/docs/intro");
//! ```

pub mod config;
pub mod error;
pub mod preset;
pub mod theme;

pub use config::{I18nConfig, ReportingSeverity, SiteConfig, current_year, load_config};
pub use error::{CoreError, Result};
pub use preset::{BlogOptions, DocsOptions, FeedOptions, FeedType, Preset, PresetOptions, ThemeOptions};
pub use theme::{
    Footer, FooterColumn, FooterLink, FooterStyle, LinkTarget, Logo, NavItem, NavItemKind,
    NavItemPosition, Navbar, Prism, PrismTheme, ThemeConfig,
};
