//! Link checks against a site directory on disk.

use std::{fs, path::Path};

use sharc_site_core::{ReportingSeverity, load_config};
use sharc_site_links::{ContentSource, FsContentSource, LinkChecker, LinkError, LinkKind};

fn write(root: &Path, relative: &str, body: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, body).expect("write file");
}

fn sample_site(root: &Path) {
    write(root, "docs/intro.md", "# SHARC\n\nStart with [installation](./install/index.md).\n");
    write(
        root,
        "docs/install/index.md",
        "# Install\n\nBack to [intro](../intro.md) or the [ITU](https://www.itu.int).\n",
    );
    write(root, "blog/2024-05-01-release.md", "# Release\n\nRead [the intro](/docs/intro.md).\n");
    write(root, "src/pages/index.tsx", "export default function Home() {}\n");
    write(root, "docs/notes.txt", "not content");
}

#[test]
fn test_scan_discovers_routes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    sample_site(dir.path());
    let config = load_config().expect("load config");

    let source = FsContentSource::scan(dir.path(), &config).expect("scan");
    let routes: Vec<&str> = source.routes().collect();

    assert_eq!(
        routes,
        vec!["/", "/blog", "/blog/release", "/docs/install", "/docs/intro"]
    );
    assert_eq!(source.markdown_documents().len(), 3);
    assert!(source.has_document(Path::new("docs/install/index.md")));
    assert!(!source.has_document(Path::new("docs/notes.txt")));
}

#[test]
fn test_sample_site_links_intact() {
    let dir = tempfile::tempdir().expect("create temp dir");
    sample_site(dir.path());
    let config = load_config().expect("load config");

    let source = FsContentSource::scan(dir.path(), &config).expect("scan");
    let report = LinkChecker::new(&config).check(&source).expect("links intact");

    assert!(!report.has_warnings());
    assert_eq!(report.checked, 5);
}

#[test]
fn test_missing_intro_fails_build() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "docs/overview.md", "# Overview\n");
    let config = load_config().expect("load config");
    assert_eq!(config.on_broken_links, ReportingSeverity::Throw);

    let source = FsContentSource::scan(dir.path(), &config).expect("scan");
    let err = LinkChecker::new(&config).check(&source).unwrap_err();

    let LinkError::Broken(links) = &err;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].kind, LinkKind::Footer);
    assert!(err.to_string().contains("/docs/intro"));
}

#[test]
fn test_broken_markdown_link_is_advisory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    sample_site(dir.path());
    write(dir.path(), "docs/models.md", "See [propagation](propagation.md).\n");
    let config = load_config().expect("load config");

    let source = FsContentSource::scan(dir.path(), &config).expect("scan");
    let report = LinkChecker::new(&config).check(&source).expect("advisory only");

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, LinkKind::Markdown);
    assert_eq!(report.warnings[0].origin, "docs/models.md");
}

#[test]
fn test_missing_folders_are_empty() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = load_config().expect("load config");

    let source = FsContentSource::scan(dir.path(), &config).expect("scan");
    assert_eq!(source.routes().collect::<Vec<_>>(), vec!["/blog"]);
    assert!(source.markdown_documents().is_empty());
}

#[test]
fn test_dated_blog_folder_route() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "blog/2021-08-26-welcome/index.md", "# Welcome\n");
    write(dir.path(), "blog/2021-08-26-welcome/team.md", "# Team\n");
    let config = load_config().expect("load config");

    let source = FsContentSource::scan(dir.path(), &config).expect("scan");

    assert!(source.has_route("/blog/welcome"));
    assert!(!source.has_route("/blog/2021-08-26-welcome"));
    assert!(source.has_route("/blog/2021-08-26-welcome/team"));
}

#[test]
fn test_frontmatter_slug_moves_intro() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(
        dir.path(),
        "docs/intro.md",
        "---\ntitle: Introduction\nslug: /getting-started\n---\n# SHARC\n",
    );
    let config = load_config().expect("load config");

    let source = FsContentSource::scan(dir.path(), &config).expect("scan");
    assert!(source.has_route("/docs/getting-started"));
    assert!(!source.has_route("/docs/intro"));
    assert!(source.has_doc("intro"));

    // The footer still points at /docs/intro, which is now gone.
    let LinkError::Broken(links) = LinkChecker::new(&config).check(&source).unwrap_err();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].kind, LinkKind::Footer);
    assert_eq!(links[0].target, "/docs/intro");
}

#[test]
fn test_frontmatter_id_names_doc() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "docs/start.md", "---\nid: intro\n---\n# SHARC\n");
    let config = load_config().expect("load config");

    let source = FsContentSource::scan(dir.path(), &config).expect("scan");
    assert_eq!(source.doc_ids().collect::<Vec<_>>(), vec!["intro"]);
    assert!(source.has_route("/docs/intro"));
    assert!(LinkChecker::new(&config).check(&source).is_ok());
}

#[test]
fn test_number_prefixes_are_dropped() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "docs/01-overview.md", "# Overview\n");
    write(dir.path(), "docs/02-guides/01-install.md", "# Install\n");
    let config = load_config().expect("load config");

    let source = FsContentSource::scan(dir.path(), &config).expect("scan");
    assert!(source.has_route("/docs/overview"));
    assert!(source.has_route("/docs/guides/install"));
    assert_eq!(
        source.doc_ids().collect::<Vec<_>>(),
        vec!["guides/install", "overview"]
    );
}

#[test]
fn test_partials_have_no_route() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "docs/intro.md", "# SHARC\n");
    write(dir.path(), "docs/_partial.md", "Shared text\n");
    write(dir.path(), "docs/_snippets/table.md", "| a |\n");
    let config = load_config().expect("load config");

    let source = FsContentSource::scan(dir.path(), &config).expect("scan");
    assert!(!source.has_route("/docs/_partial"));
    assert!(!source.has_route("/docs/partial"));
    assert!(!source.has_route("/docs/_snippets/table"));
    assert_eq!(source.doc_ids().collect::<Vec<_>>(), vec!["intro"]);
    assert_eq!(source.markdown_documents().len(), 1);
}

#[test]
fn test_invalid_frontmatter_fails_scan() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "docs/intro.md", "---\nslug: [unclosed\n---\n# SHARC\n");
    let config = load_config().expect("load config");

    let err = FsContentSource::scan(dir.path(), &config).unwrap_err();
    assert!(err.to_string().contains("intro.md"));
}
