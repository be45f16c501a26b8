// ABOUTME: Parses raw content-agent output into LinkedIn and X post segments
// ABOUTME: Ordered strategy chain: labeled markers, separator lines, whole text

use lazy_static::lazy_static;
use regex::Regex;

/// Maximum length of an X post, in characters
pub const X_POST_LIMIT: usize = 280;

lazy_static! {
    static ref LINKEDIN_MARKER: Regex =
        Regex::new(r"(?i)linkedin post:").expect("invalid LinkedIn marker pattern");
    static ref X_MARKER: Regex = Regex::new(r"(?i)x post:").expect("invalid X marker pattern");
    static ref SEPARATOR: Regex =
        Regex::new(r"\n-+\n|___+|##").expect("invalid separator pattern");
}

/// A content-agent reply split into its two platform posts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPosts {
    pub linkedin: String,
    pub x: String,
}

/// Split free-form model output into a LinkedIn post and an X post.
///
/// Strategies are tried in order and the first match wins:
/// 1. literal `LINKEDIN POST:` / `X POST:` markers (any case, in order)
/// 2. separator lines (`---`, `___`, `##`)
/// 3. the whole trimmed text, with the X copy capped at 280 characters
pub fn parse_posts(content: &str) -> ParsedPosts {
    split_on_markers(content)
        .or_else(|| split_on_separators(content))
        .unwrap_or_else(|| whole_text(content))
}

/// Both markers present, LinkedIn first: the LinkedIn post is the text
/// strictly between the markers, the X post is everything after the X marker.
fn split_on_markers(content: &str) -> Option<ParsedPosts> {
    let linkedin_marker = LINKEDIN_MARKER.find(content)?;
    let x_marker = X_MARKER.find(content)?;

    // Out-of-order markers fall through to the separator strategy
    if x_marker.start() < linkedin_marker.end() {
        return None;
    }

    Some(ParsedPosts {
        linkedin: content[linkedin_marker.end()..x_marker.start()]
            .trim()
            .to_string(),
        x: content[x_marker.end()..].trim().to_string(),
    })
}

/// Split on the first obvious separator: a line of hyphens, a run of
/// three-or-more underscores, or a literal `##`.
fn split_on_separators(content: &str) -> Option<ParsedPosts> {
    let mut parts = SEPARATOR.splitn(content, 3);
    let first = parts.next()?;
    let second = parts.next()?;

    Some(ParsedPosts {
        linkedin: first.trim().to_string(),
        x: truncate_chars(second.trim(), X_POST_LIMIT).to_string(),
    })
}

/// Last resort: the entire reply serves as both posts.
fn whole_text(content: &str) -> ParsedPosts {
    let trimmed = content.trim();
    ParsedPosts {
        linkedin: trimmed.to_string(),
        x: truncate_chars(trimmed, X_POST_LIMIT).to_string(),
    }
}

/// Truncate to at most `limit` characters without splitting a codepoint
fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
