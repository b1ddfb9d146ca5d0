//! Template structure: literal text and nested conditional sections

use crate::error::{Error, MarkerProblem, Result};
use crate::lexer::{Token, tokenize};

/// One piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Text copied to the output as-is (placeholders included).
    Literal(String),
    /// Body kept only when `guard` is truthy in the configuration.
    Section {
        guard: String,
        /// 1-based line of the opening marker.
        line: usize,
        body: Template,
    },
}

/// An ordered sequence of blocks.
///
/// A parsed template is always balanced: every section was opened and closed
/// with the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    blocks: Vec<Block>,
}

struct OpenSection {
    guard: String,
    line: usize,
    blocks: Vec<Block>,
}

impl Template {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Parse template source into a block tree.
    ///
    /// # Errors
    /// `MalformedTemplate` when a section is never closed, a close marker has
    /// no open section, or a close marker names a different key than the
    /// innermost open section.
    ///
    /// # Example
    /// ```
    /// use forge_template::{Block, Template};
    ///
    /// let template = Template::parse("<!-- IF api -->\n## API\n<!-- ENDIF api -->\n").unwrap();
    /// assert!(matches!(&template.blocks()[0], Block::Section { guard, .. } if guard == "api"));
    ///
    /// assert!(Template::parse("<!-- IF api -->\n").is_err());
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let mut root: Vec<Block> = Vec::new();
        let mut stack: Vec<OpenSection> = Vec::new();

        for token in tokenize(source) {
            match token {
                Token::Literal(text) => {
                    let blocks = stack.last_mut().map_or(&mut root, |s| &mut s.blocks);
                    blocks.push(Block::Literal(text.to_string()));
                }
                Token::Open { key, line } => {
                    stack.push(OpenSection {
                        guard: key.to_string(),
                        line,
                        blocks: Vec::new(),
                    });
                }
                Token::Close { key, line } => {
                    let Some(open) = stack.pop() else {
                        return Err(Error::malformed(
                            line,
                            MarkerProblem::UnexpectedClose {
                                key: key.to_string(),
                            },
                        ));
                    };

                    if open.guard != key {
                        return Err(Error::malformed(
                            line,
                            MarkerProblem::Mismatched {
                                expected: open.guard,
                                opened_at: open.line,
                                found: key.to_string(),
                            },
                        ));
                    }

                    let section = Block::Section {
                        guard: open.guard,
                        line: open.line,
                        body: Template::new(open.blocks),
                    };
                    let blocks = stack.last_mut().map_or(&mut root, |s| &mut s.blocks);
                    blocks.push(section);
                }
            }
        }

        if let Some(open) = stack.pop() {
            return Err(Error::malformed(
                open.line,
                MarkerProblem::Unclosed { key: open.guard },
            ));
        }

        Ok(Self::new(root))
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// True when the template holds no conditional sections.
    pub fn is_resolved(&self) -> bool {
        self.blocks
            .iter()
            .all(|block| matches!(block, Block::Literal(_)))
    }

    /// Every guard key, outermost first, without duplicates.
    pub fn guard_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_guards(&mut keys);
        keys
    }

    fn collect_guards(&self, keys: &mut Vec<String>) {
        for block in &self.blocks {
            if let Block::Section { guard, body, .. } = block {
                if !keys.contains(guard) {
                    keys.push(guard.clone());
                }
                body.collect_guards(keys);
            }
        }
    }

    /// Concatenated literal text. Sections contribute nothing, so call this on
    /// a resolved template.
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Literal(text) => Some(text.as_str()),
                Block::Section { .. } => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Block {
        Block::Literal(s.to_string())
    }

    #[test]
    fn test_parse_literal_only() {
        let template = Template::parse("# Title\n").unwrap();
        assert_eq!(template.blocks(), &[lit("# Title\n")]);
        assert!(template.is_resolved());
    }

    #[test]
    fn test_parse_nested_sections() {
        let source = "<!-- IF a -->\nA\n<!-- IF b -->\nB\n<!-- ENDIF b -->\n<!-- ENDIF a -->\n";
        let template = Template::parse(source).unwrap();

        let inner = Template::new(vec![lit("B\n")]);
        let outer = Template::new(vec![
            lit("A\n"),
            Block::Section {
                guard: "b".into(),
                line: 3,
                body: inner,
            },
        ]);
        assert_eq!(
            template.blocks(),
            &[Block::Section {
                guard: "a".into(),
                line: 1,
                body: outer,
            }]
        );
        assert!(!template.is_resolved());
    }

    #[test]
    fn test_unclosed_reports_open_line() {
        let err = Template::parse("x\n<!-- IF a -->\ny\n").unwrap_err();
        match err {
            Error::MalformedTemplate { line, problem } => {
                assert_eq!(line, 2);
                assert_eq!(problem, MarkerProblem::Unclosed { key: "a".into() });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_mismatch_reports_both_keys() {
        let err = Template::parse("<!-- IF a -->\n<!-- ENDIF b -->\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 2"), "{message}");
        assert!(message.contains("'a'"), "{message}");
        assert!(message.contains("ENDIF b"), "{message}");
    }

    #[test]
    fn test_guard_keys_dedup_in_order() {
        let source = "<!-- IF a --><!-- IF b -->x<!-- ENDIF b --><!-- ENDIF a --><!-- IF a -->y<!-- ENDIF a -->";
        let template = Template::parse(source).unwrap();
        assert_eq!(template.guard_keys(), vec!["a", "b"]);
    }

    #[test]
    fn test_text_concatenates_literals() {
        let template = Template::new(vec![lit("a"), lit("b")]);
        assert_eq!(template.text(), "ab");
    }
}
