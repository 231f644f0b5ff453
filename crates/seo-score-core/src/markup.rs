//! HTML markup utilities.
//!
//! Content bodies arrive as editor-produced HTML fragments. These helpers
//! use pattern matching rather than a full HTML parser: the checks only
//! need tag presence, the first paragraph, and anchor targets, and must
//! never fail on malformed markup.

use regex::Regex;
use std::sync::LazyLock;

/// `<script>` and `<style>` blocks, whose text is never prose.
static SCRIPT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("valid regex")
});

/// HTML comments.
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

/// Any tag, opening or closing.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)</?[A-Za-z!][^>]*>").expect("valid regex"));

/// Whitespace runs.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Tags directly followed by punctuation, as in `<a>guide</a>.`.
static TAGS_BEFORE_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:</?[A-Za-z!][^>]*>)+([.,!?;:])").expect("valid regex")
});

/// First `<p>…</p>` block; captures the inner markup.
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").expect("valid regex"));

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h[1-6](?:\s[^>]*)?/?>").expect("valid regex"));

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img(?:\s[^>]*)?/?>").expect("valid regex"));

/// `href` attribute of an anchor, double- or single-quoted.
static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*?\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});

/// Entities common in editor output, decoded after tag removal.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    // Must stay last so "&amp;lt;" decodes to "&lt;", not "<".
    ("&amp;", "&"),
];

/// Strip markup, returning whitespace-normalized plain text.
///
/// Tags become word boundaries (`<p>a</p><p>b</p>` yields `"a b"`), so
/// adjacent blocks never glue words together. Tags sitting right before
/// punctuation are dropped without a space; spaces the author typed are
/// kept as written.
#[tracing::instrument(skip_all, fields(input_len = markup.len()))]
pub fn strip_tags(markup: &str) -> String {
    let text = SCRIPT_STYLE.replace_all(markup, " ");
    let text = COMMENT.replace_all(&text, " ");
    let text = TAGS_BEFORE_PUNCT.replace_all(&text, "$1");
    let text = TAG.replace_all(&text, " ");

    let mut decoded = text.into_owned();
    for (entity, replacement) in ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, replacement);
        }
    }

    WHITESPACE.replace_all(&decoded, " ").trim().to_string()
}

/// Inner markup of the first `<p>` element, if any.
pub fn first_paragraph(markup: &str) -> Option<&str> {
    PARAGRAPH
        .captures(markup)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Whether the markup contains any `<h1>`–`<h6>` element.
pub fn has_heading(markup: &str) -> bool {
    HEADING.is_match(markup)
}

/// Whether the markup contains any `<img>` element.
pub fn has_image(markup: &str) -> bool {
    IMAGE.is_match(markup)
}

/// `href` values of every anchor in document order, trimmed.
pub fn hrefs(markup: &str) -> Vec<&str> {
    ANCHOR_HREF
        .captures_iter(markup)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().trim())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_tags_and_normalizes_whitespace() {
        let html = "<h1>Title</h1>\n<p>Hello <strong>big</strong>   world.</p><p>Next</p>";
        assert_eq!(strip_tags(html), "Title Hello big world. Next");
    }

    #[test]
    fn strip_rejoins_punctuation_after_inline_tags() {
        let html = "<p>Read the <a href=\"/guide\">guide</a>. Then <em>try</em>!</p>";
        assert_eq!(strip_tags(html), "Read the guide. Then try!");
        assert_eq!(strip_tags("<b><i>done</i></b>!"), "done!");
    }

    #[test]
    fn strip_keeps_author_spaces_before_punctuation() {
        assert_eq!(strip_tags("Wait ! Stop : now"), "Wait ! Stop : now");
        assert_eq!(strip_tags("<p>Wait ! <b>Stop</b> : now</p>"), "Wait ! Stop : now");
    }

    #[test]
    fn strip_drops_scripts_styles_and_comments() {
        let html = "<style>p { color: red; }</style><p>Visible</p>\
                    <script>var hidden = 1;</script><!-- note -->";
        assert_eq!(strip_tags(html), "Visible");
    }

    #[test]
    fn strip_decodes_common_entities() {
        let html = "<p>Fish&nbsp;&amp;&nbsp;chips &lt;3</p>";
        assert_eq!(strip_tags(html), "Fish & chips <3");
    }

    #[test]
    fn strip_leaves_plain_text_alone() {
        assert_eq!(strip_tags("Just words here."), "Just words here.");
        assert_eq!(strip_tags(""), "");
        assert_eq!(strip_tags("   \n\t "), "");
    }

    #[test]
    fn first_paragraph_finds_first_block_only() {
        let html = "<h2>Intro</h2><p class=\"lead\">One\ntwo</p><p>Three</p>";
        assert_eq!(first_paragraph(html), Some("One\ntwo"));
    }

    #[test]
    fn first_paragraph_ignores_pre_and_param_tags() {
        assert_eq!(first_paragraph("<pre>code</pre><param name=x>"), None);
        assert_eq!(first_paragraph("no paragraphs at all"), None);
    }

    #[test]
    fn heading_and_image_detection() {
        assert!(has_heading("<H3 id=\"x\">Section</H3>"));
        assert!(!has_heading("<header>Site</header><hr>"));
        assert!(has_image("<img src=\"a.png\" alt=\"\">"));
        assert!(has_image("<IMG/>"));
        assert!(!has_image("<imgur>nope</imgur>"));
    }

    #[test]
    fn hrefs_handles_both_quote_styles() {
        let html = r#"<a href="/about">About</a> <a class='x' href='https://example.org/'>X</a>
                      <a name="anchor">no href</a>"#;
        assert_eq!(hrefs(html), vec!["/about", "https://example.org/"]);
    }
}
