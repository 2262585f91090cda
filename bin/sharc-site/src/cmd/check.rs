//! Check command - validate configuration and links

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use sharc_site_core::SiteConfig;
use sharc_site_links::{FsContentSource, LinkChecker, LinkError};

use super::resolve_config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and the links it declares against `site_dir`.
pub fn run(config_path: Option<&Path>, site_dir: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?site_dir, strict, "Checking configuration and links");

    let result = validate(config_path, site_dir);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Collect errors and warnings without printing a summary.
pub fn validate(config_path: Option<&Path>, site_dir: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match resolve_config(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e:#}");
            result.add_error(format!("Configuration error: {e:#}"));
            return result;
        }
    };

    println!("\nChecking configuration values...");
    check_config_values(&config, site_dir, &mut result);

    println!("\nChecking links...");
    check_links(&config, site_dir, &mut result);

    result
}

/// Check configuration values for common issues.
fn check_config_values(config: &SiteConfig, site_dir: &Path, result: &mut ValidationResult) {
    if config.url.starts_with("http://") {
        result.add_warning("url uses http:// instead of https://");
    }

    if let Some(docs) = config.docs_options() {
        if !site_dir.join(&docs.path).is_dir() {
            result.add_warning(format!("Docs folder missing: {}/", docs.path));
        }
    }

    println!("  ✓ Configuration values checked");
}

fn check_links(config: &SiteConfig, site_dir: &Path, result: &mut ValidationResult) {
    let source = match FsContentSource::scan(site_dir, config) {
        Ok(source) => source,
        Err(e) => {
            result.add_error(format!("Failed to scan content: {e}"));
            return;
        }
    };

    match LinkChecker::new(config).check(&source) {
        Ok(report) => {
            println!("  ✓ {} link(s) checked", report.checked);
            for link in report.warnings {
                result.add_warning(format!("Broken link: {link}"));
            }
        }
        Err(LinkError::Broken(links)) => {
            println!("  ✗ {} broken link(s)", links.len());
            for link in links {
                result.add_error(format!("Broken link: {link}"));
            }
        }
    }
}
