//! The public ASP lexer.
//!
//! [`AspLexer`] binds the static host grammar to a sub-lexer registry and
//! exposes both the lazy raw token stream and the full pipeline
//! (coalescing plus the line-label compatibility filter).

mod grammar;

use crate::engine::{coalesce, Session, StateId};
use crate::filter::rewrite_line_labels;
use crate::sublexer::SublexerRegistry;
use crate::token::Token;

pub use grammar::{grammar, INCLUDE, NESTED_COMMENT, ROOT, SCRIPT};

/// Tokenizer for ASP logic programs.
///
/// The lexer itself is stateless between calls; each call creates one
/// session over the input and discards it afterwards.
pub struct AspLexer {
    registry: SublexerRegistry,
}

impl AspLexer {
    /// A lexer with the built-in `python` and `lua` sub-lexers.
    pub fn new() -> Self {
        Self {
            registry: SublexerRegistry::builtin(),
        }
    }

    /// A lexer with a caller-provided sub-lexer registry.
    pub fn with_registry(registry: SublexerRegistry) -> Self {
        Self { registry }
    }

    /// Lazy raw token stream: one token per rule match, unfiltered.
    pub fn tokens<'a>(&'a self, text: &'a str) -> Session<'a> {
        Session::new(grammar(), &self.registry, text)
    }

    /// Raw stream starting from an explicit state stack (empty slice means
    /// the root state).
    pub fn tokens_from<'a>(&'a self, text: &'a str, stack: &[StateId]) -> Session<'a> {
        Session::with_stack(grammar(), &self.registry, text, stack)
    }

    /// Full tokenization: adjacent same-kind spans merged, line-label
    /// comments rewritten for double-invocation consumers.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = coalesce(self.tokens(text));
        rewrite_line_labels(&mut tokens);
        tokens
    }

    /// [`Self::tokenize`] with an initial state-stack override.
    pub fn tokenize_from(&self, text: &str, stack: &[StateId]) -> Vec<Token> {
        let mut tokens = coalesce(self.tokens_from(text, stack));
        rewrite_line_labels(&mut tokens);
        tokens
    }
}

impl Default for AspLexer {
    fn default() -> Self {
        Self::new()
    }
}
