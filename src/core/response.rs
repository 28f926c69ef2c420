//! Discord embed text limits
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

/// Discord embed title limit
pub const EMBED_TITLE_LIMIT: usize = 256;
/// Discord embed description limit
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// Truncate text to fit the embed title limit, adding ellipsis if needed.
///
/// Upstream titles (stream titles, meme post titles) are arbitrary user
/// text and regularly exceed Discord's 256-character title limit.
pub fn truncate_embed_title(text: &str) -> String {
    truncate(text, EMBED_TITLE_LIMIT)
}

/// Truncate text to fit the embed description limit, adding ellipsis if needed.
pub fn truncate_embed_description(text: &str) -> String {
    truncate(text, EMBED_DESCRIPTION_LIMIT)
}

/// Truncate at a UTF-8 safe boundary, reserving room for "...".
fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    let mut end = limit - 3;
    while !text.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_unchanged() {
        assert_eq!(truncate_embed_title("hello"), "hello");
    }

    #[test]
    fn test_long_title_truncated() {
        let title = "a".repeat(500);
        let result = truncate_embed_title(&title);
        assert!(result.len() <= EMBED_TITLE_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_exactly_at_limit() {
        let title = "a".repeat(EMBED_TITLE_LIMIT);
        assert_eq!(truncate_embed_title(&title), title);
    }

    #[test]
    fn test_utf8_boundary_safety() {
        // Multi-byte characters around the cut point must not panic
        let title = "世".repeat(200);
        let result = truncate_embed_title(&title);
        assert!(result.len() <= EMBED_TITLE_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_description_limit() {
        let text = "b".repeat(5000);
        let result = truncate_embed_description(&text);
        assert!(result.len() <= EMBED_DESCRIPTION_LIMIT);
        assert!(result.ends_with("..."));
    }
}
