//! Error types for grammar construction.
//!
//! Tokenization itself is total and never fails; the only fallible
//! operation in the library is compiling a rule table, which can reject a
//! malformed pattern.

use thiserror::Error;

/// Errors raised while building a grammar's rule tables.
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("invalid rule pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result alias for grammar construction.
pub type GrammarResult<T> = Result<T, GrammarError>;
