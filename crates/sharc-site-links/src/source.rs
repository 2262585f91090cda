//! Content sources.
//!
//! A content source answers which routes, sidebars and markdown files exist.
//! [`FsContentSource`] scans a site directory the way the external generator
//! lays it out; [`StaticContentSource`] is an in-memory stand-in.

use std::{
    collections::BTreeSet,
    fs,
    path::{Component, Path, PathBuf},
};

use sharc_site_core::SiteConfig;
use thiserror::Error;
use tracing::{debug, info};

use crate::frontmatter::{Frontmatter, parse_frontmatter};

/// Content scanning errors.
#[derive(Debug, Error)]
pub enum SourceError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Malformed front matter.
    #[error("front matter error in {}: {message}", .path.display())]
    Frontmatter { path: PathBuf, message: String },
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// A markdown file and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    /// Path relative to the site directory, `/`-separated.
    pub path: PathBuf,
    pub body: String,
}

/// What the link checker needs to know about site content.
pub trait ContentSource {
    /// Whether a page is served at `route` (normalized, without base URL).
    fn has_route(&self, route: &str) -> bool;

    /// Whether a doc with this id exists.
    fn has_doc(&self, doc_id: &str) -> bool;

    /// Whether a docs sidebar with this id exists. Sources that cannot tell
    /// report `true`.
    fn has_sidebar(&self, _sidebar_id: &str) -> bool {
        true
    }

    /// Markdown documents whose links should be checked.
    fn markdown_documents(&self) -> &[MarkdownDocument] {
        &[]
    }

    /// Whether a markdown file exists at a site-relative path.
    fn has_document(&self, path: &Path) -> bool;
}

/// Normalize a route: drop query and fragment, collapse slashes, lead with `/`.
pub fn normalize_route(route: &str) -> String {
    let route = route.split(['#', '?']).next().unwrap_or_default();
    let segments: Vec<&str> = route.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Whether any component of a relative path starts with `_`.
///
/// Such files and folders are partials, not pages.
fn is_partial(relative: &Path) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(part) => part.to_str().is_some_and(|p| p.starts_with('_')),
        _ => false,
    })
}

/// Strip an ordering prefix such as `01-` or `2. ` from a docs path segment.
fn strip_number_prefix(segment: &str) -> &str {
    let digits = segment.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return segment;
    }

    let rest = segment[digits..].trim_start();
    let separators = rest.bytes().take_while(|b| matches!(b, b'-' | b'_' | b'.')).count();
    if separators == 0 {
        return segment;
    }

    let name = rest[separators..].trim_start();
    match name.bytes().next() {
        Some(b'-' | b'_' | b'.') | None => segment,
        Some(_) => name,
    }
}

/// Strip a `YYYY-MM-DD-` prefix from a blog post name.
fn strip_date_prefix(stem: &str) -> &str {
    let bytes = stem.as_bytes();
    let is_date = bytes.len() > 11
        && bytes[..10]
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() })
        && bytes[10] == b'-';

    if is_date { &stem[11..] } else { stem }
}

/// Normal components of `relative`'s parent folder.
fn parent_segments(relative: &Path) -> Option<Vec<&str>> {
    relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|component| match component {
                    Component::Normal(part) => Some(part.to_str()),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
        })
        .unwrap_or_else(|| Some(Vec::new()))
}

/// Id and route of a doc file relative to the docs folder.
///
/// Number prefixes are dropped from every segment. Front matter `id`
/// replaces the file name part of the id; `slug` replaces the route, starting
/// at the route base when absolute and at the file's folder otherwise.
/// `index.md`, `README.md` and a file named after its folder serve the
/// folder route.
fn doc_entry(route_base: &str, relative: &Path, fm: &Frontmatter) -> Option<(String, String)> {
    let stem = strip_number_prefix(relative.file_stem()?.to_str()?);
    let dirs: Vec<&str> = parent_segments(relative)?
        .into_iter()
        .map(strip_number_prefix)
        .collect();
    let dir = dirs.join("/");

    let name = fm.id.as_deref().unwrap_or(stem);
    let id = if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    };

    let is_index = stem.eq_ignore_ascii_case("index")
        || stem.eq_ignore_ascii_case("readme")
        || dirs.last() == Some(&stem);

    let route = match fm.slug.as_deref() {
        Some(slug) if slug.starts_with('/') => format!("{route_base}/{slug}"),
        Some(slug) => format!("{route_base}/{dir}/{slug}"),
        None if is_index => format!("{route_base}/{dir}"),
        None => format!("{route_base}/{dir}/{name}"),
    };

    Some((id, normalize_route(&route)))
}

/// Route of a blog post relative to the blog folder.
///
/// `2024-05-01-release.md` and `2024-05-01-release/index.md` both serve
/// `/blog/release`. A front matter `slug` is always relative to the route base.
fn blog_route(route_base: &str, relative: &Path, fm: &Frontmatter) -> Option<String> {
    if let Some(slug) = fm.slug.as_deref() {
        return Some(normalize_route(&format!("{route_base}/{slug}")));
    }

    let stem = relative.file_stem()?.to_str()?;
    let mut segments = parent_segments(relative)?;
    if !stem.eq_ignore_ascii_case("index") {
        segments.push(stem);
    }
    if let Some(last) = segments.last_mut() {
        *last = strip_date_prefix(*last);
    }

    Some(normalize_route(&format!("{route_base}/{}", segments.join("/"))))
}

/// Route of a file under `src/pages`.
fn page_route(relative: &Path) -> Option<String> {
    let stem = relative.file_stem()?.to_str()?;
    let mut segments = parent_segments(relative)?;
    if stem != "index" {
        segments.push(stem);
    }
    Some(normalize_route(&segments.join("/")))
}

fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md" | "mdx")
    )
}

/// Files under `root` accepted by `keep`, skipping partials.
///
/// Returns absolute and root-relative paths in file name order.
fn content_files(root: &Path, keep: fn(&Path) -> bool) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !keep(path) {
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if is_partial(relative) {
            debug!(file = %path.display(), "Skipping partial");
            continue;
        }
        files.push((path.to_path_buf(), relative.to_path_buf()));
    }

    Ok(files)
}

/// Which content folder a markdown file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Docs,
    Blog,
}

/// Content source backed by a site directory on disk.
#[derive(Debug, Default)]
pub struct FsContentSource {
    routes: BTreeSet<String>,
    doc_ids: BTreeSet<String>,
    files: BTreeSet<PathBuf>,
    documents: Vec<MarkdownDocument>,
}

impl FsContentSource {
    /// Scan the docs, blog and pages folders of `site_dir`.
    pub fn scan(site_dir: &Path, config: &SiteConfig) -> Result<Self> {
        let mut source = Self::default();

        if let Some(docs) = config.docs_options() {
            source.scan_markdown(site_dir, &docs.path, &docs.route_base_path, Section::Docs)?;
        }

        if let Some(blog) = config.blog_options() {
            source.routes.insert(normalize_route(&blog.route_base_path));
            source.scan_markdown(site_dir, &blog.path, &blog.route_base_path, Section::Blog)?;
        }

        source.scan_pages(site_dir)?;

        info!(
            routes = source.routes.len(),
            docs = source.doc_ids.len(),
            documents = source.documents.len(),
            "Scanned site content"
        );
        Ok(source)
    }

    fn scan_markdown(
        &mut self,
        site_dir: &Path,
        folder: &str,
        route_base: &str,
        section: Section,
    ) -> Result<()> {
        let root = site_dir.join(folder);
        if !root.is_dir() {
            debug!(folder = %root.display(), "Content folder missing, skipping");
            return Ok(());
        }

        for (path, relative) in content_files(&root, is_markdown)? {
            let site_relative = clean_path(&Path::new(folder).join(&relative));
            let body = fs::read_to_string(&path)?;
            let fm = parse_frontmatter(&body, &site_relative)?;

            let route = match section {
                Section::Docs => doc_entry(route_base, &relative, &fm).map(|(id, route)| {
                    self.doc_ids.insert(id);
                    route
                }),
                Section::Blog => blog_route(route_base, &relative, &fm),
            };
            if let Some(route) = route {
                debug!(%route, file = %path.display(), "Found page");
                self.routes.insert(route);
            }

            self.files.insert(site_relative.clone());
            self.documents.push(MarkdownDocument {
                path: site_relative,
                body,
            });
        }

        Ok(())
    }

    fn scan_pages(&mut self, site_dir: &Path) -> Result<()> {
        let root = site_dir.join("src").join("pages");
        if !root.is_dir() {
            return Ok(());
        }

        let is_page = |path: &Path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("md" | "mdx" | "js" | "jsx" | "ts" | "tsx")
            )
        };
        for (_, relative) in content_files(&root, is_page)? {
            if let Some(route) = page_route(&relative) {
                self.routes.insert(route);
            }
        }

        Ok(())
    }

    /// All discovered routes.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }

    /// All discovered doc ids.
    pub fn doc_ids(&self) -> impl Iterator<Item = &str> {
        self.doc_ids.iter().map(String::as_str)
    }
}

impl ContentSource for FsContentSource {
    fn has_route(&self, route: &str) -> bool {
        self.routes.contains(&normalize_route(route))
    }

    fn has_doc(&self, doc_id: &str) -> bool {
        self.doc_ids.contains(doc_id)
    }

    fn markdown_documents(&self) -> &[MarkdownDocument] {
        &self.documents
    }

    fn has_document(&self, path: &Path) -> bool {
        self.files.contains(&clean_path(path))
    }
}

/// In-memory content source.
#[derive(Debug, Default, Clone)]
pub struct StaticContentSource {
    routes: BTreeSet<String>,
    doc_ids: BTreeSet<String>,
    sidebars: Option<BTreeSet<String>>,
    documents: Vec<MarkdownDocument>,
}

impl StaticContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page route.
    pub fn with_route(mut self, route: &str) -> Self {
        self.routes.insert(normalize_route(route));
        self
    }

    /// Add a doc id.
    pub fn with_doc(mut self, doc_id: &str) -> Self {
        self.doc_ids.insert(doc_id.to_string());
        self
    }

    /// Declare a sidebar. Once any sidebar is declared, unknown ids are missing.
    pub fn with_sidebar(mut self, sidebar_id: &str) -> Self {
        self.sidebars
            .get_or_insert_with(BTreeSet::new)
            .insert(sidebar_id.to_string());
        self
    }

    /// Add a markdown document at a site-relative path.
    pub fn with_document(mut self, path: impl AsRef<Path>, body: impl Into<String>) -> Self {
        self.documents.push(MarkdownDocument {
            path: clean_path(path.as_ref()),
            body: body.into(),
        });
        self
    }
}

impl ContentSource for StaticContentSource {
    fn has_route(&self, route: &str) -> bool {
        self.routes.contains(&normalize_route(route))
    }

    fn has_doc(&self, doc_id: &str) -> bool {
        self.doc_ids.contains(doc_id)
    }

    fn has_sidebar(&self, sidebar_id: &str) -> bool {
        self.sidebars
            .as_ref()
            .is_none_or(|sidebars| sidebars.contains(sidebar_id))
    }

    fn markdown_documents(&self) -> &[MarkdownDocument] {
        &self.documents
    }

    fn has_document(&self, path: &Path) -> bool {
        let path = clean_path(path);
        self.documents.iter().any(|d| d.path == path)
    }
}

/// Lexically resolve `.` and `..` components.
///
/// Leading `..` that would escape the root is kept so the path never matches
/// a scanned file.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();
    let mut escaped = 0usize;

    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::ParentDir => {
                if parts.pop().is_none() {
                    escaped += 1;
                }
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    let mut cleaned = PathBuf::new();
    for _ in 0..escaped {
        cleaned.push("..");
    }
    cleaned.extend(parts);
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_route() {
        assert_eq!(normalize_route("/docs/intro/"), "/docs/intro");
        assert_eq!(normalize_route("docs//intro#setup"), "/docs/intro");
        assert_eq!(normalize_route("/blog?page=2"), "/blog");
        assert_eq!(normalize_route(""), "/");
    }

    fn fm(id: Option<&str>, slug: Option<&str>) -> Frontmatter {
        Frontmatter {
            id: id.map(str::to_string),
            slug: slug.map(str::to_string),
        }
    }

    fn doc(relative: &str, front: &Frontmatter) -> (String, String) {
        doc_entry("docs", Path::new(relative), front).expect("doc entry")
    }

    #[test]
    fn test_doc_entry_from_path() {
        let none = Frontmatter::default();
        assert_eq!(doc("intro.md", &none), ("intro".to_string(), "/docs/intro".to_string()));
        assert_eq!(doc("guide/index.mdx", &none), ("guide/index".to_string(), "/docs/guide".to_string()));
        assert_eq!(doc("guide/README.md", &none).1, "/docs/guide");
        assert_eq!(doc("guide/guide.md", &none).1, "/docs/guide");
        assert_eq!(
            doc("01-basics/02-install.md", &none),
            ("basics/install".to_string(), "/docs/basics/install".to_string())
        );
    }

    #[test]
    fn test_doc_entry_from_frontmatter() {
        assert_eq!(
            doc("intro.md", &fm(None, Some("/getting-started"))),
            ("intro".to_string(), "/docs/getting-started".to_string())
        );
        assert_eq!(
            doc("guide/setup.md", &fm(None, Some("first-steps"))).1,
            "/docs/guide/first-steps"
        );
        assert_eq!(
            doc("guide/setup.md", &fm(Some("install"), None)),
            ("guide/install".to_string(), "/docs/guide/install".to_string())
        );
        assert_eq!(
            doc_entry("docs", Path::new("intro.md"), &fm(None, Some("/"))).map(|e| e.1),
            Some("/docs".to_string())
        );
    }

    #[test]
    fn test_number_prefix() {
        assert_eq!(strip_number_prefix("01-overview"), "overview");
        assert_eq!(strip_number_prefix("2. Setup"), "Setup");
        assert_eq!(strip_number_prefix("3_models"), "models");
        assert_eq!(strip_number_prefix("2024"), "2024");
        assert_eq!(strip_number_prefix("5g-nr"), "5g-nr");
        assert_eq!(strip_number_prefix("01-"), "01-");
        assert_eq!(strip_number_prefix("intro"), "intro");
    }

    #[test]
    fn test_blog_routes() {
        let none = Frontmatter::default();
        assert_eq!(strip_date_prefix("2024-05-01-release"), "release");
        assert_eq!(strip_date_prefix("release-notes"), "release-notes");
        assert_eq!(strip_date_prefix("2024-05-01"), "2024-05-01");
        assert_eq!(
            blog_route("blog", Path::new("2024-05-01-release.md"), &none).as_deref(),
            Some("/blog/release")
        );
        assert_eq!(
            blog_route("blog", Path::new("2021-08-26-welcome/index.md"), &none).as_deref(),
            Some("/blog/welcome")
        );
        assert_eq!(
            blog_route("blog", Path::new("2021-08-26-welcome/index.md"), &fm(None, Some("/hello")))
                .as_deref(),
            Some("/blog/hello")
        );
    }

    #[test]
    fn test_page_route() {
        assert_eq!(page_route(Path::new("index.tsx")).as_deref(), Some("/"));
        assert_eq!(page_route(Path::new("team/index.md")).as_deref(), Some("/team"));
        assert_eq!(page_route(Path::new("markdown-page.md")).as_deref(), Some("/markdown-page"));
    }

    #[test]
    fn test_partials() {
        assert!(is_partial(Path::new("_partial.md")));
        assert!(is_partial(Path::new("_snippets/table.md")));
        assert!(!is_partial(Path::new("guide/intro.md")));
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(
            clean_path(Path::new("docs/guide/../intro.md")),
            PathBuf::from("docs/intro.md")
        );
        assert_eq!(
            clean_path(Path::new("./docs/./intro.md")),
            PathBuf::from("docs/intro.md")
        );
        assert_eq!(clean_path(Path::new("../x.md")), PathBuf::from("../x.md"));
    }

    #[test]
    fn test_static_source_sidebars() {
        let open = StaticContentSource::new();
        assert!(open.has_sidebar("anything"));

        let declared = StaticContentSource::new().with_sidebar("tutorialSidebar");
        assert!(declared.has_sidebar("tutorialSidebar"));
        assert!(!declared.has_sidebar("apiSidebar"));
    }

    #[test]
    fn test_static_source_routes_and_documents() {
        let source = StaticContentSource::new()
            .with_route("/docs/intro/")
            .with_doc("intro")
            .with_document("docs/intro.md", "# Intro");

        assert!(source.has_route("/docs/intro"));
        assert!(source.has_doc("intro"));
        assert!(!source.has_doc("setup"));
        assert!(!source.has_route("/docs/other"));
        assert!(source.has_document(Path::new("docs/./intro.md")));
        assert_eq!(source.markdown_documents().len(), 1);
    }
}
