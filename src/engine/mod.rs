//! Pushdown regex-dispatch engine.
//!
//! The engine knows nothing about any particular language: it takes a
//! [`Grammar`] (named states, each an ordered list of typed [`Rule`]
//! records) and drives a [`Session`] over an input text. At every step the
//! first rule of the active state whose pattern matches at the cursor wins;
//! the rule's emission spec produces tokens, its transition pushes or pops
//! lexer states, and the cursor advances by the match length.

mod rule;
mod session;

pub use rule::{Emission, Grammar, GroupSpec, Rule, State, StateId, Transition};
pub use session::{coalesce, Session};
