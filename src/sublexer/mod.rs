//! Sub-lexers for embedded script regions.
//!
//! The host grammar recognizes the frame of a `#script (lang) ... #end.`
//! block itself, then hands the interior text to whichever sub-lexer is
//! registered under the language name. Sub-lexers are external
//! collaborators behind the [`Sublexer`] trait; the two built-in ones cover
//! the script languages the language ships with, and callers may register
//! replacements or additional languages.

mod lua;
mod python;

use std::sync::Arc;

use indexmap::IndexMap;

use crate::engine::{Grammar, Session};
use crate::token::Token;

pub use lua::LuaSublexer;
pub use python::PythonSublexer;

/// A tokenizer for a delimited embedded region.
///
/// `base_offset` is the byte offset of `source` within the original input;
/// implementations must report token offsets relative to the original input
/// so the host can splice their output without adjustment.
pub trait Sublexer: Send + Sync {
    fn tokenize(&self, source: &str, base_offset: usize) -> Vec<Token>;
}

/// Name-keyed registry of sub-lexers, looked up by the grammar's
/// `Embedded(name)` group specs. Insertion order is preserved, matching the
/// priority order of the script-state rules.
#[derive(Clone, Default)]
pub struct SublexerRegistry {
    lexers: IndexMap<&'static str, Arc<dyn Sublexer>>,
}

impl SublexerRegistry {
    /// A registry with no sub-lexers. Embedded regions with no registered
    /// lexer are classified as plain text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in registry: `python` and `lua`.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.register("python", Arc::new(PythonSublexer));
        registry.register("lua", Arc::new(LuaSublexer));
        registry
    }

    pub fn register(&mut self, name: &'static str, lexer: Arc<dyn Sublexer>) {
        self.lexers.insert(name, lexer);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Sublexer> {
        self.lexers.get(name).map(Arc::as_ref)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.lexers.keys().copied()
    }
}

/// Runs a grammar over an embedded region and shifts the resulting offsets
/// into the host's coordinate space.
pub(crate) fn tokenize_region(grammar: &Grammar, source: &str, base_offset: usize) -> Vec<Token> {
    let registry = SublexerRegistry::empty();
    let mut tokens: Vec<Token> = Session::new(grammar, &registry, source).collect();
    for token in &mut tokens {
        token.offset += base_offset;
    }
    tokens
}
