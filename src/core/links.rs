//! Markdown link extraction.

use std::sync::LazyLock;

use regex::Regex;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex"));

static MARKDOWN_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("valid regex"));

const EXTERNAL_PREFIXES: [&str; 4] = ["http://", "https://", "#", "mailto:"];

/// Whether a link points outside the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Web URL, mail link, or in-page fragment.
    External,
    /// Path relative to the package root.
    Internal,
}

/// A `[text](href)` link found in the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownLink {
    pub text: String,
    pub href: String,
}

impl MarkdownLink {
    #[must_use]
    pub fn kind(&self) -> LinkKind {
        if EXTERNAL_PREFIXES.iter().any(|p| self.href.starts_with(p)) {
            LinkKind::External
        } else {
            LinkKind::Internal
        }
    }

    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.kind() == LinkKind::Internal
    }

    /// Final path component of the href.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.href
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.href)
    }
}

/// Extract links in document order, ignoring fenced code blocks.
#[must_use]
pub fn extract_links(body: &str) -> Vec<MarkdownLink> {
    let without_code = CODE_FENCE.replace_all(body, "");
    MARKDOWN_LINK
        .captures_iter(&without_code)
        .map(|caps| MarkdownLink {
            text: caps[1].to_string(),
            href: caps[2].to_string(),
        })
        .collect()
}

/// Extract only package-relative links, in document order.
#[must_use]
pub fn internal_links(body: &str) -> Vec<MarkdownLink> {
    extract_links(body)
        .into_iter()
        .filter(MarkdownLink::is_internal)
        .collect()
}
