//! Plain-text preview derivation for note cards.
//!
//! # Responsibility
//! - Turn note content with math/markdown markup into a short sanitized
//!   preview string for list views.
//!
//! # Invariants
//! - Truncation happens on a char boundary, never mid code point.
//! - Derivation is pure; nothing here touches stores.

use once_cell::sync::Lazy;
use regex::Regex;

// Block math first so `$$...$$` is not half-eaten by the inline rule.
static BLOCK_MATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\$[^$]*\$\$").expect("valid block math regex"));
static INLINE_MATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$[^$\n]*\$").expect("valid inline math regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\[\]\(\)!]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Default preview length used by list views.
pub const PREVIEW_MAX_CHARS: usize = 100;

/// Derives a sanitized plain-text preview from note content.
///
/// Rules:
/// - `$$...$$` and `$...$` math spans are removed whole.
/// - Markdown symbols are stripped and whitespace collapsed.
/// - The first `max_chars` chars are retained; `None` when nothing remains.
pub fn content_preview(content: &str, max_chars: usize) -> Option<String> {
    let without_block_math = BLOCK_MATH_RE.replace_all(content, " ");
    let without_math = INLINE_MATH_RE.replace_all(&without_block_math, " ");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_math, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(max_chars).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{content_preview, PREVIEW_MAX_CHARS};

    #[test]
    fn preview_strips_inline_and_block_math() {
        let source = "Energy: $$E = mc^2$$ and momentum $p = mv$ explained";
        let text = content_preview(source, PREVIEW_MAX_CHARS).unwrap();
        assert!(!text.contains('$'));
        assert!(text.contains("Energy"));
        assert!(text.contains("explained"));
    }

    #[test]
    fn preview_strips_markdown_and_collapses_whitespace() {
        let source = "# Heading\n\n**bold**   `code`";
        let text = content_preview(source, PREVIEW_MAX_CHARS).unwrap();
        assert_eq!(text, "Heading bold code");
    }

    #[test]
    fn preview_of_markup_only_content_is_none() {
        assert_eq!(content_preview("$$x$$ **", PREVIEW_MAX_CHARS), None);
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let source = "é".repeat(300);
        let text = content_preview(&source, 10).unwrap();
        assert_eq!(text.chars().count(), 10);
    }
}
