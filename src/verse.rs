//! Text extractor: pulls the verse out of an item's HTML body.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, Result};

// Case-sensitive, non-greedy, and `.` does not cross newlines.
static BLOCKQUOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<blockquote>.*?</blockquote>").expect("Failed to compile blockquote pattern")
});

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]*>").expect("Failed to compile tag pattern")
});

// Applied in order, so `&amp;lt;` ends up as `<`.
const ENTITIES: [(&str, &str); 5] = [
    ("&apos;", "'"),
    ("&quot;", "\""),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
];

const LINE_BREAKS: [&str; 3] = ["<br>", "<br/>", "<br />"];

/// Returns the first `<blockquote>...</blockquote>` span, tags included.
/// Later blockquotes are ignored.
pub fn extract_blockquote(html: &str) -> Result<&str> {
    BLOCKQUOTE_RE
        .find(html)
        .map(|m| m.as_str())
        .ok_or(AppError::NoBlockquote)
}

/// Decodes the common entities, turns `<br>` variants into newlines, drops
/// every other tag and trims the result.
pub fn strip_html(html: &str) -> String {
    let mut text = html.to_string();

    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }

    for tag in LINE_BREAKS {
        text = text.replace(tag, "\n");
    }

    TAG_RE.replace_all(&text, "").trim().to_string()
}

/// Plain text of the first blockquote in `content_encoded`. An empty
/// blockquote yields an empty string, not an error.
pub fn extract_verse(content_encoded: &str) -> Result<String> {
    let blockquote = extract_blockquote(content_encoded)?;
    Ok(strip_html(blockquote))
}
