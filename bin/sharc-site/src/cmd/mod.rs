//! Command implementations.

pub mod check;
pub mod show;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use sharc_site_core::{SiteConfig, load_config};

/// Load the configuration file if one was given, otherwise the built-in site.
pub fn resolve_config(config_path: Option<&Path>) -> Result<SiteConfig> {
    match config_path {
        Some(path) => SiteConfig::load_with_env(path)
            .wrap_err_with(|| format!("Failed to load configuration from {}", path.display())),
        None => load_config().wrap_err("Failed to load built-in configuration"),
    }
}
