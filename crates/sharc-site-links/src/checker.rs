//! Link integrity checks.
//!
//! Navbar and footer links are governed by `on_broken_links`; links between
//! markdown files are governed by `on_broken_markdown_links`. Broken links
//! under `throw` fail the check, `warn` reports them, `ignore` drops them.

use std::{fmt, path::Path};

use percent_encoding::percent_decode_str;
use sharc_site_core::{NavItemKind, ReportingSeverity, SiteConfig};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    markdown::{extract_links, is_markdown_file_link, link_path},
    source::{ContentSource, clean_path, normalize_route},
};

/// Where a broken link was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Navbar,
    Footer,
    Markdown,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Navbar => "navbar",
            Self::Footer => "footer",
            Self::Markdown => "markdown",
        })
    }
}

/// A link whose target does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    pub kind: LinkKind,
    /// Label or file the link was declared in.
    pub origin: String,
    pub target: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.origin, self.target)
    }
}

/// Link check errors.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Broken links under a `throw` policy.
    #[error("{} broken link(s) found:\n{}", .0.len(), list(.0))]
    Broken(Vec<BrokenLink>),
}

fn list(links: &[BrokenLink]) -> String {
    links
        .iter()
        .map(|link| format!("  - {link}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type for link checks.
pub type Result<T> = std::result::Result<T, LinkError>;

/// Outcome of a successful check.
#[derive(Debug, Default)]
pub struct LinkReport {
    /// Number of links inspected.
    pub checked: usize,
    /// Broken links under a `warn` policy.
    pub warnings: Vec<BrokenLink>,
    /// Broken links under an `ignore` policy.
    pub ignored: usize,
}

impl LinkReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Checks configuration links and markdown links against a content source.
#[derive(Debug)]
pub struct LinkChecker<'a> {
    config: &'a SiteConfig,
}

/// Accumulates findings while a check runs.
#[derive(Default)]
struct Findings {
    report: LinkReport,
    fatal: Vec<BrokenLink>,
}

impl Findings {
    fn record(&mut self, link: BrokenLink, severity: ReportingSeverity) {
        match severity {
            ReportingSeverity::Throw => {
                warn!(%link, "Broken link");
                self.fatal.push(link);
            }
            ReportingSeverity::Warn => {
                warn!(%link, "Broken link");
                self.report.warnings.push(link);
            }
            ReportingSeverity::Ignore => {
                debug!(%link, "Ignoring broken link");
                self.report.ignored += 1;
            }
        }
    }
}

impl<'a> LinkChecker<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Run every check. Fails if any link broken under `throw` was found.
    pub fn check(&self, source: &dyn ContentSource) -> Result<LinkReport> {
        let mut findings = Findings::default();

        self.check_navbar(source, &mut findings);
        self.check_footer(source, &mut findings);
        self.check_markdown(source, &mut findings);

        info!(
            checked = findings.report.checked,
            fatal = findings.fatal.len(),
            warnings = findings.report.warnings.len(),
            "Link check finished"
        );

        if findings.fatal.is_empty() {
            Ok(findings.report)
        } else {
            Err(LinkError::Broken(findings.fatal))
        }
    }

    /// Route under the site root for a configured internal path.
    ///
    /// Paths may be written with or without the base URL.
    fn site_route(&self, path: &str) -> String {
        let route = normalize_route(path);
        let base = normalize_route(&self.config.base_url);
        if base == "/" {
            return route;
        }

        match route.strip_prefix(&base) {
            Some("") => "/".to_string(),
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => route,
        }
    }

    fn check_navbar(&self, source: &dyn ContentSource, findings: &mut Findings) {
        let severity = self.config.on_broken_links;

        for item in &self.config.theme_config.navbar.items {
            let missing = match item.kind {
                NavItemKind::DocSidebar => item
                    .sidebar_id
                    .as_deref()
                    .filter(|id| !source.has_sidebar(id))
                    .map(|id| format!("sidebar {id}")),
                NavItemKind::Doc => item
                    .doc_id
                    .as_deref()
                    .filter(|id| !source.has_doc(id))
                    .map(|id| format!("doc {id}")),
                NavItemKind::Default => item
                    .to
                    .as_deref()
                    .filter(|to| !source.has_route(&self.site_route(to)))
                    .map(str::to_string),
            };

            if item.kind != NavItemKind::Default || item.to.is_some() {
                findings.report.checked += 1;
            }

            if let Some(target) = missing {
                findings.record(
                    BrokenLink {
                        kind: LinkKind::Navbar,
                        origin: format!("'{}'", item.label),
                        target,
                    },
                    severity,
                );
            }
        }
    }

    fn check_footer(&self, source: &dyn ContentSource, findings: &mut Findings) {
        let severity = self.config.on_broken_links;

        for column in &self.config.theme_config.footer.links {
            for link in &column.items {
                let Some(to) = link.to.as_deref() else {
                    continue;
                };

                findings.report.checked += 1;
                if !source.has_route(&self.site_route(to)) {
                    findings.record(
                        BrokenLink {
                            kind: LinkKind::Footer,
                            origin: format!("'{}' > '{}'", column.title, link.label),
                            target: to.to_string(),
                        },
                        severity,
                    );
                }
            }
        }
    }

    fn check_markdown(&self, source: &dyn ContentSource, findings: &mut Findings) {
        let severity = self.config.on_broken_markdown_links;

        for document in source.markdown_documents() {
            let dir = document.path.parent().unwrap_or_else(|| Path::new(""));

            for dest in extract_links(&document.body) {
                if !is_markdown_file_link(&dest) {
                    continue;
                }

                findings.report.checked += 1;
                let path = percent_decode_str(link_path(&dest))
                    .decode_utf8_lossy()
                    .into_owned();
                let resolved = match path.strip_prefix('/') {
                    Some(site_relative) => clean_path(Path::new(site_relative)),
                    None => clean_path(&dir.join(&path)),
                };

                if !source.has_document(&resolved) {
                    findings.record(
                        BrokenLink {
                            kind: LinkKind::Markdown,
                            origin: document.path.display().to_string(),
                            target: dest,
                        },
                        severity,
                    );
                }
            }
        }
    }
}
