//! Token data model.
//!
//! A token is a classified span of source text: a byte offset into the
//! original input, a kind tag, and the literal text of the span. A full
//! tokenization covers the input with no gaps and no overlaps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification tags for token spans.
///
/// The set is closed; sub-lexers for embedded script languages reuse the
/// same tags so their output can be spliced into the host stream directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A `%`-to-end-of-line comment (or `#` / `--` inside script blocks).
    CommentSingle,
    /// A `%* ... *%` block comment, including nested ones.
    CommentMultiline,
    /// A reserved word: `#`-directives, aggregates, `not`, script keywords.
    Keyword,
    /// One of the constant keywords `#inf`, `#sup`, `#true`, `#false`.
    KeywordConstant,
    /// An operator cluster such as `..`, `=`, `!=`, `<=`.
    Operator,
    /// Structural punctuation: brackets, rule arrows, terminators.
    Punctuation,
    /// A decimal integer literal.
    NumberInteger,
    /// A `0x`-prefixed hexadecimal literal.
    NumberHex,
    /// A double-quoted (or include-path) string literal, escapes included.
    StringDouble,
    /// A logical variable: capitalized identifier or the `_` wildcard.
    NameVariable,
    /// A plain identifier inside an embedded script block.
    Name,
    /// Plain text: constants/functors, whitespace, unclassified filler.
    Text,
    /// A character no rule recognized. Consumed, never fatal.
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified span of the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Byte offset of the span start in the original input.
    pub offset: usize,
    pub kind: TokenKind,
    /// Literal text of the span. The post-processing label filter may
    /// rewrite this while leaving `offset` untouched.
    pub text: String,
}

impl Token {
    pub fn new(offset: usize, kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            offset,
            kind,
            text: text.into(),
        }
    }

    /// Byte offset one past the end of the span.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}: {:?}", self.kind, self.offset, self.text)
    }
}
