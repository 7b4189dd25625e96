//! Asplex Tokenizer Library
//!
//! This library provides a syntax-highlighting tokenizer for ASP logic
//! programs (the clingo/gringo dialect: facts, rules, constraints,
//! aggregates, and embedded `#script` blocks).

pub mod engine;
pub mod error;
pub mod filter;
pub mod lexer;
pub mod metadata;
pub mod sublexer;
pub mod token;

// Re-export commonly used types
pub use engine::{coalesce, Emission, Grammar, GroupSpec, Rule, Session, State, StateId, Transition};
pub use error::GrammarError;
pub use filter::rewrite_line_labels;
pub use lexer::AspLexer;
pub use sublexer::{Sublexer, SublexerRegistry};
pub use token::{Token, TokenKind};
