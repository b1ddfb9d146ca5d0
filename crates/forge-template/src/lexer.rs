//! Tokenizer for conditional section markers.
//!
//! Splits template source into literal runs and marker tokens:
//! ```text
//! <!-- IF key -->
//! <!-- ENDIF key -->
//! ```
//!
//! A marker that is alone on its line swallows the whole line, including the
//! line terminator, so removing a section never leaves a blank line behind.

use regex::Regex;
use std::sync::LazyLock;

static MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*(IF|ENDIF)\s+([A-Za-z0-9_.-]+)\s*-->").expect("Invalid marker regex")
});

/// A lexical unit of template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text outside any marker.
    Literal(&'a str),
    /// `<!-- IF key -->` on the given 1-based line.
    Open { key: &'a str, line: usize },
    /// `<!-- ENDIF key -->` on the given 1-based line.
    Close { key: &'a str, line: usize },
}

/// Tokenize template source.
///
/// Empty literal runs are not emitted.
///
/// # Example
/// ```
/// use forge_template::lexer::{tokenize, Token};
///
/// let tokens = tokenize("a\n<!-- IF x -->\nb\n<!-- ENDIF x -->\n");
/// assert_eq!(tokens, vec![
///     Token::Literal("a\n"),
///     Token::Open { key: "x", line: 2 },
///     Token::Literal("b\n"),
///     Token::Close { key: "x", line: 4 },
/// ]);
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    let mut line = 1;
    let mut counted_to = 0;

    for caps in MARKER_REGEX.captures_iter(source) {
        let (Some(marker), Some(kind), Some(key)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };

        line += source[counted_to..marker.start()].matches('\n').count();
        counted_to = marker.start();

        let (start, end) = standalone_span(source, marker.start(), marker.end())
            .map(|(s, e)| (s.max(cursor), e))
            .unwrap_or((marker.start(), marker.end()));

        if start > cursor {
            tokens.push(Token::Literal(&source[cursor..start]));
        }

        let key = key.as_str();
        tokens.push(match kind.as_str() {
            "IF" => Token::Open { key, line },
            _ => Token::Close { key, line },
        });

        cursor = end;
    }

    if cursor < source.len() {
        tokens.push(Token::Literal(&source[cursor..]));
    }

    tokens
}

/// The span of the whole line if the marker is its only non-blank content.
fn standalone_span(source: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[end..].find('\n').map_or(source.len(), |i| end + i);

    let before = &source[line_start..start];
    let after = &source[end..line_end];
    if !before.trim().is_empty() || !after.trim().is_empty() {
        return None;
    }

    let consumed_end = if line_end < source.len() {
        line_end + 1
    } else {
        line_end
    };
    Some((line_start, consumed_end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers_is_single_literal() {
        assert_eq!(tokenize("plain text"), vec![Token::Literal("plain text")]);
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_inline_markers_keep_surrounding_text() {
        let tokens = tokenize("Name<!-- IF email --> - mail<!-- ENDIF email -->!");
        assert_eq!(
            tokens,
            vec![
                Token::Literal("Name"),
                Token::Open { key: "email", line: 1 },
                Token::Literal(" - mail"),
                Token::Close { key: "email", line: 1 },
                Token::Literal("!"),
            ]
        );
    }

    #[test]
    fn test_standalone_marker_swallows_indentation_and_newline() {
        let tokens = tokenize("a\n   <!-- IF x -->  \nb\n");
        assert_eq!(
            tokens,
            vec![
                Token::Literal("a\n"),
                Token::Open { key: "x", line: 2 },
                Token::Literal("b\n"),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let tokens = tokenize("a\r\n<!-- IF x -->\r\nb\r\n");
        assert_eq!(
            tokens,
            vec![
                Token::Literal("a\r\n"),
                Token::Open { key: "x", line: 2 },
                Token::Literal("b\r\n"),
            ]
        );
    }

    #[test]
    fn test_marker_at_end_without_newline() {
        let tokens = tokenize("<!-- IF x -->\nb\n<!-- ENDIF x -->");
        assert_eq!(
            tokens,
            vec![
                Token::Open { key: "x", line: 1 },
                Token::Literal("b\n"),
                Token::Close { key: "x", line: 3 },
            ]
        );
    }

    #[test]
    fn test_whitespace_inside_marker_is_insignificant() {
        let tokens = tokenize("<!--IF   x-->");
        assert_eq!(tokens, vec![Token::Open { key: "x", line: 1 }]);
    }

    #[test]
    fn test_lowercase_keyword_is_literal() {
        let tokens = tokenize("<!-- if x -->");
        assert_eq!(tokens, vec![Token::Literal("<!-- if x -->")]);
    }

    #[test]
    fn test_plain_html_comment_is_literal() {
        let tokens = tokenize("<!-- just a note -->");
        assert_eq!(tokens, vec![Token::Literal("<!-- just a note -->")]);
    }
}
