//! Link extraction from markdown using pulldown-cmark.

use pulldown_cmark::{Event, Options, Parser, Tag};

/// Collect link destinations from a markdown body in document order.
///
/// Reference-style links are resolved by the parser, so only the final
/// destination is returned.
pub fn extract_links(body: &str) -> Vec<String> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    Parser::new_ext(body, options)
        .filter_map(|event| match event {
            Event::Start(Tag::Link { dest_url, .. }) => Some(dest_url.into_string()),
            _ => None,
        })
        .collect()
}

/// Strip the fragment and query from a link destination.
pub fn link_path(dest: &str) -> &str {
    dest.split(['#', '?']).next().unwrap_or_default()
}

/// Whether `dest` points at another markdown file rather than a URL or anchor.
pub fn is_markdown_file_link(dest: &str) -> bool {
    if dest.starts_with('#') || dest.contains("://") || dest.starts_with("mailto:") {
        return false;
    }

    let path = link_path(dest);
    path.ends_with(".md") || path.ends_with(".mdx")
}
