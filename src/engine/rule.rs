//! Typed rule records and state tables.

use regex::Regex;

use crate::error::{GrammarError, GrammarResult};
use crate::token::TokenKind;

/// Index of a state inside its [`Grammar`].
///
/// State 0 is the root state by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(pub usize);

/// What a rule does to the state stack after matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Remain in the current state.
    Stay,
    /// Push the named state; it becomes active. Pushing the current state
    /// again is how nested constructs track their depth.
    Push(StateId),
    /// Pop the current state. Popping the last remaining state is a
    /// defensive no-op, not an error.
    Pop,
}

/// Where a capture group's text goes: a fixed kind, or a named sub-lexer
/// that tokenizes the group's text recursively.
#[derive(Debug, Clone)]
pub enum GroupSpec {
    Kind(TokenKind),
    Embedded(&'static str),
}

/// How a rule turns its match into tokens.
#[derive(Debug, Clone)]
pub enum Emission {
    /// The whole match becomes one token of this kind.
    Kind(TokenKind),
    /// Capture groups 1..=n map positionally onto these specs. Empty
    /// groups emit nothing.
    ByGroups(Vec<GroupSpec>),
}

/// One dispatch rule: an anchored pattern, optional lookaround guards, an
/// emission spec, and a stack transition.
///
/// The `regex` crate has no lookbehind/lookahead, so the grammar's
/// single-character assertions are carried as explicit guard fields checked
/// by the session before the rule is allowed to win.
#[derive(Debug)]
pub struct Rule {
    pattern: Regex,
    not_preceded_by: Option<char>,
    not_followed_by: Option<char>,
    emission: Emission,
    transition: Transition,
}

impl Rule {
    /// Compiles `pattern` anchored at the cursor position.
    pub fn new(pattern: &str, emission: Emission, transition: Transition) -> GrammarResult<Self> {
        let anchored = format!(r"\A(?:{pattern})");
        let compiled = Regex::new(&anchored).map_err(|source| GrammarError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self {
            pattern: compiled,
            not_preceded_by: None,
            not_followed_by: None,
            emission,
            transition,
        })
    }

    /// Whole-match rule that stays in the current state.
    pub fn emit(pattern: &str, kind: TokenKind) -> GrammarResult<Self> {
        Self::new(pattern, Emission::Kind(kind), Transition::Stay)
    }

    /// Whole-match rule that pushes `state`.
    pub fn push(pattern: &str, kind: TokenKind, state: StateId) -> GrammarResult<Self> {
        Self::new(pattern, Emission::Kind(kind), Transition::Push(state))
    }

    /// Whole-match rule that pops the current state. With an empty pattern
    /// this is the zero-width unconditional-fallback idiom: a sub-state
    /// that fails to find its expected construct never dead-ends.
    pub fn pop(pattern: &str, kind: TokenKind) -> GrammarResult<Self> {
        Self::new(pattern, Emission::Kind(kind), Transition::Pop)
    }

    /// Capture-group mapped rule.
    pub fn by_groups(
        pattern: &str,
        groups: Vec<GroupSpec>,
        transition: Transition,
    ) -> GrammarResult<Self> {
        Self::new(pattern, Emission::ByGroups(groups), transition)
    }

    /// Rejects the match when the character just before the cursor is `c`.
    pub fn not_preceded_by(mut self, c: char) -> Self {
        self.not_preceded_by = Some(c);
        self
    }

    /// Rejects the match when the character just after it is `c`.
    pub fn not_followed_by(mut self, c: char) -> Self {
        self.not_followed_by = Some(c);
        self
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub(crate) fn preceding_guard(&self) -> Option<char> {
        self.not_preceded_by
    }

    pub(crate) fn following_guard(&self) -> Option<char> {
        self.not_followed_by
    }

    pub(crate) fn emission(&self) -> &Emission {
        &self.emission
    }

    pub(crate) fn transition(&self) -> Transition {
        self.transition
    }
}

/// A named, ordered list of rules. First match at the cursor wins.
#[derive(Debug)]
pub struct State {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

/// A complete state table. Read-only after construction; safe to share
/// across concurrent sessions.
#[derive(Debug)]
pub struct Grammar {
    states: Vec<State>,
}

impl Grammar {
    pub fn new(states: Vec<State>) -> Self {
        Self { states }
    }

    /// The initial state of every session.
    pub fn root(&self) -> StateId {
        StateId(0)
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }
}
