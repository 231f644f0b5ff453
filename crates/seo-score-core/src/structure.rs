//! Structural checks over raw body markup.
//!
//! Heading, image, first-paragraph, and link checks run against the
//! markup itself rather than stripped text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::keyword;
use crate::markup;

/// How an anchor's `href` is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Any href that is not `http(s)://…` and not `javascript:`.
    Internal,
    /// `http(s)://…` link to a host other than the serving host.
    Outbound,
    /// `http(s)://…` link back to the serving host; counted as neither.
    SameHost,
    /// `javascript:` pseudo-link or empty href.
    Ignored,
}

/// Structural features of a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StructureReport {
    /// Focus keyword appears in the first `<p>` block.
    pub keyword_in_first_paragraph: bool,
    /// Any `<h1>`–`<h6>` present.
    pub has_headings: bool,
    /// Any `<img>` present.
    pub has_images: bool,
    /// Links classified [`LinkKind::Internal`].
    pub internal_link_count: usize,
    /// Links classified [`LinkKind::Outbound`].
    pub outbound_link_count: usize,
}

/// Run all structural checks on a markup body.
///
/// # Arguments
///
/// * `markup` — Raw body markup.
/// * `focus_keyword` — Keyword to look for in the first paragraph.
/// * `current_host` — Serving host (optionally with port); absolute links
///   to any other host are outbound.
#[tracing::instrument(skip(markup, focus_keyword), fields(text_len = markup.len()))]
pub fn check_structure(markup: &str, focus_keyword: &str, current_host: &str) -> StructureReport {
    let keyword_in_first_paragraph = markup::first_paragraph(markup)
        .is_some_and(|p| keyword::contains_keyword(&markup::strip_tags(p), focus_keyword));

    let mut internal_link_count = 0;
    let mut outbound_link_count = 0;
    for href in markup::hrefs(markup) {
        match classify_href(href, current_host) {
            LinkKind::Internal => internal_link_count += 1,
            LinkKind::Outbound => outbound_link_count += 1,
            LinkKind::SameHost | LinkKind::Ignored => {}
        }
    }

    StructureReport {
        keyword_in_first_paragraph,
        has_headings: markup::has_heading(markup),
        has_images: markup::has_image(markup),
        internal_link_count,
        outbound_link_count,
    }
}

/// Classify one `href` value relative to the serving host.
///
/// Only `http://` and `https://` hrefs are absolute; everything else that
/// is not `javascript:` counts as internal, including `mailto:` and
/// protocol-relative `//host/…` hrefs. An empty `current_host` makes
/// every absolute link outbound.
pub fn classify_href(href: &str, current_host: &str) -> LinkKind {
    let href = href.trim();
    if href.is_empty() {
        return LinkKind::Ignored;
    }

    let lower = href.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        let Ok(url) = Url::parse(href) else {
            tracing::debug!(href, "unparseable absolute link treated as outbound");
            return LinkKind::Outbound;
        };
        return if is_same_host(&url, current_host) {
            LinkKind::SameHost
        } else {
            LinkKind::Outbound
        };
    }

    if lower.starts_with("javascript:") {
        return LinkKind::Ignored;
    }

    LinkKind::Internal
}

/// Compare a URL's host against the serving host.
///
/// `current_host` may carry a port (`example.com:8080`); when it does,
/// the URL must match on both.
fn is_same_host(url: &Url, current_host: &str) -> bool {
    let current = current_host.trim().trim_end_matches('.').to_ascii_lowercase();
    if current.is_empty() {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.trim_end_matches('.').to_ascii_lowercase();

    let (name, port) = split_port(&current);
    host == name && port.is_none_or(|p| url.port_or_known_default() == Some(p))
}

/// Split `host:port`, leaving bare IPv6 literals intact.
fn split_port(host: &str) -> (&str, Option<u16>) {
    match host.rsplit_once(':') {
        Some((name, port)) if !name.contains(':') || name.ends_with(']') => {
            port.parse().map_or((host, None), |p| (name, Some(p)))
        }
        _ => (host, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "blog.example.com";

    #[test]
    fn relative_links_are_internal() {
        for href in ["/about", "contact.html", "../up", "?page=2", "#top"] {
            assert_eq!(classify_href(href, HOST), LinkKind::Internal, "{href}");
        }
    }

    #[test]
    fn non_http_schemes_and_protocol_relative_are_internal() {
        for href in ["mailto:a@b.c", "tel:+1555", "//cdn.other.org/x.js", "ftp://files.example.com"] {
            assert_eq!(classify_href(href, HOST), LinkKind::Internal, "{href}");
        }
    }

    #[test]
    fn other_hosts_are_outbound() {
        assert_eq!(
            classify_href("https://www.rust-lang.org/learn", HOST),
            LinkKind::Outbound
        );
        assert_eq!(classify_href("HTTP://other.org", HOST), LinkKind::Outbound);
    }

    #[test]
    fn same_host_absolute_counts_as_neither() {
        assert_eq!(
            classify_href("https://blog.example.com/posts/1", HOST),
            LinkKind::SameHost
        );
        assert_eq!(
            classify_href("https://BLOG.example.com", "Blog.Example.com"),
            LinkKind::SameHost
        );
    }

    #[test]
    fn host_with_port_must_match_port() {
        assert_eq!(
            classify_href("http://localhost:8080/a", "localhost:8080"),
            LinkKind::SameHost
        );
        assert_eq!(
            classify_href("http://localhost:3000/a", "localhost:8080"),
            LinkKind::Outbound
        );
        assert_eq!(
            classify_href("https://example.com/a", "example.com:443"),
            LinkKind::SameHost
        );
    }

    #[test]
    fn javascript_and_empty_are_ignored() {
        for href in ["javascript:void(0)", "JavaScript:alert(1)", "", "   "] {
            assert_eq!(classify_href(href, HOST), LinkKind::Ignored, "{href}");
        }
    }

    #[test]
    fn empty_host_makes_absolute_links_outbound() {
        assert_eq!(
            classify_href("https://blog.example.com/", ""),
            LinkKind::Outbound
        );
        assert_eq!(classify_href("/local", ""), LinkKind::Internal);
    }

    #[test]
    fn structure_report_counts() {
        let html = r#"<h2>Guide</h2>
            <p>Learn <em>Rust</em> today.</p>
            <img src="/a.png">
            <a href="/docs">Docs</a>
            <a href="https://blog.example.com/x">Self</a>
            <a href="https://crates.io">Crates</a>
            <a href="javascript:void(0)">Menu</a>"#;
        let report = check_structure(html, "rust", HOST);
        assert!(report.keyword_in_first_paragraph);
        assert!(report.has_headings);
        assert!(report.has_images);
        assert_eq!(report.internal_link_count, 1);
        assert_eq!(report.outbound_link_count, 1);
    }

    #[test]
    fn mailto_and_protocol_relative_links_count_internal() {
        let html = r#"<a href="mailto:a@b.c">mail</a>
            <a href="//cdn.other.org/x">cdn</a>
            <a href="https://blog.example.com/x">self</a>"#;
        let report = check_structure(html, "", HOST);
        assert_eq!(report.internal_link_count, 2);
        assert_eq!(report.outbound_link_count, 0);
    }

    #[test]
    fn no_paragraph_means_keyword_not_in_first_paragraph() {
        let html = "<div>rust rust rust</div><h1>Rust</h1>";
        let report = check_structure(html, "rust", HOST);
        assert!(!report.keyword_in_first_paragraph);
    }

    #[test]
    fn keyword_only_in_later_paragraph() {
        let html = "<p>Intro text.</p><p>All about rust.</p>";
        assert!(!check_structure(html, "rust", HOST).keyword_in_first_paragraph);
    }

    #[test]
    fn repeated_checks_are_identical() {
        let html = r#"<p>x</p><a href="/a">a</a><a href="https://o.org">o</a>"#;
        let first = check_structure(html, "x", HOST);
        let second = check_structure(html, "x", HOST);
        assert_eq!(first, second);
    }
}
