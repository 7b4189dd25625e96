//! The dispatch loop: one tokenization pass over one input text.

use std::collections::VecDeque;

use regex::Captures;

use super::rule::{Emission, Grammar, GroupSpec, Rule, StateId, Transition};
use crate::sublexer::SublexerRegistry;
use crate::token::{Token, TokenKind};

/// A single lexing pass. Created per input text, discarded afterwards.
///
/// The session is a lazy iterator over tokens. It owns the transient state
/// stack and cursor; the grammar and sub-lexer registry are shared,
/// read-only collaborators. Tokenization is total: every byte of the input
/// is covered by exactly one emitted token, and the pass always terminates.
pub struct Session<'a> {
    grammar: &'a Grammar,
    registry: &'a SublexerRegistry,
    text: &'a str,
    pos: usize,
    stack: Vec<StateId>,
    queue: VecDeque<Token>,
}

impl<'a> Session<'a> {
    pub fn new(grammar: &'a Grammar, registry: &'a SublexerRegistry, text: &'a str) -> Self {
        Self::with_stack(grammar, registry, text, &[])
    }

    /// Starts the session with an explicit initial state stack. An empty
    /// slice means the grammar's root state.
    pub fn with_stack(
        grammar: &'a Grammar,
        registry: &'a SublexerRegistry,
        text: &'a str,
        stack: &[StateId],
    ) -> Self {
        let stack = if stack.is_empty() {
            vec![grammar.root()]
        } else {
            stack.to_vec()
        };
        Self {
            grammar,
            registry,
            text,
            pos: 0,
            stack,
            queue: VecDeque::new(),
        }
    }

    /// Runs one dispatch step: match the first applicable rule of the
    /// active state at the cursor, queue its tokens, apply its transition,
    /// and advance. Unmatched input falls through to a one-character
    /// `Error` token.
    fn step(&mut self) {
        let state_id = self.stack.last().copied().unwrap_or_else(|| self.grammar.root());
        let rest = &self.text[self.pos..];
        let prev = self.text[..self.pos].chars().next_back();

        for rule in &self.grammar.state(state_id).rules {
            if let Some(guard) = rule.preceding_guard() {
                if prev == Some(guard) {
                    continue;
                }
            }
            let Some(caps) = rule.pattern().captures(rest) else {
                continue;
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let len = whole.end();
            if let Some(guard) = rule.following_guard() {
                if rest[len..].starts_with(guard) {
                    continue;
                }
            }
            if len == 0 {
                // A zero-width match must make progress through the stack,
                // otherwise the automaton would spin in place.
                match rule.transition() {
                    Transition::Pop if self.stack.len() > 1 => {}
                    _ => continue,
                }
            }

            self.enqueue(&caps, rule);
            match rule.transition() {
                Transition::Stay => {}
                Transition::Push(id) => {
                    log::trace!("push state {:?} at byte {}", self.grammar.state(id).name, self.pos);
                    self.stack.push(id);
                }
                Transition::Pop => {
                    // Popping the last state is ignored so that truncated
                    // input still yields a best-effort stream.
                    if self.stack.len() > 1 {
                        self.stack.pop();
                    }
                }
            }
            self.pos += len;
            return;
        }

        if let Some(ch) = rest.chars().next() {
            self.queue
                .push_back(Token::new(self.pos, TokenKind::Error, ch.to_string()));
            self.pos += ch.len_utf8();
        }
    }

    fn enqueue(&mut self, caps: &Captures<'_>, rule: &Rule) {
        match rule.emission() {
            Emission::Kind(kind) => {
                if let Some(m) = caps.get(0) {
                    if !m.as_str().is_empty() {
                        self.queue
                            .push_back(Token::new(self.pos + m.start(), *kind, m.as_str()));
                    }
                }
            }
            Emission::ByGroups(groups) => {
                for (i, spec) in groups.iter().enumerate() {
                    let Some(m) = caps.get(i + 1) else {
                        continue;
                    };
                    if m.as_str().is_empty() {
                        continue;
                    }
                    let offset = self.pos + m.start();
                    match spec {
                        GroupSpec::Kind(kind) => {
                            self.queue.push_back(Token::new(offset, *kind, m.as_str()));
                        }
                        GroupSpec::Embedded(name) => match self.registry.get(name) {
                            Some(sub) => {
                                self.queue.extend(sub.tokenize(m.as_str(), offset));
                            }
                            None => {
                                log::debug!("no sub-lexer registered for {:?}", name);
                                self.queue
                                    .push_back(Token::new(offset, TokenKind::Text, m.as_str()));
                            }
                        },
                    }
                }
            }
        }
    }
}

impl Iterator for Session<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(token);
            }
            if self.pos >= self.text.len() {
                return None;
            }
            self.step();
        }
    }
}

/// Merges adjacent tokens of identical kind over contiguous spans, so
/// constructs recognized in chunks (nested comments in particular) surface
/// as one token each.
///
/// Only filler kinds are merged. Structural tokens keep their boundaries:
/// `()` stays two punctuation tokens, `"a""b"` stays two strings.
pub fn coalesce(tokens: impl IntoIterator<Item = Token>) -> Vec<Token> {
    fn mergeable(kind: TokenKind) -> bool {
        matches!(kind, TokenKind::CommentMultiline | TokenKind::Text)
    }

    let mut merged: Vec<Token> = Vec::new();
    for token in tokens {
        match merged.last_mut() {
            Some(prev)
                if prev.kind == token.kind
                    && mergeable(token.kind)
                    && prev.end() == token.offset =>
            {
                prev.text.push_str(&token.text);
            }
            _ => merged.push(token),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rule::State;

    fn toy_grammar() -> Grammar {
        // root recognizes letters and whitespace; `<` enters a bracketed
        // sub-state that pops on `>` and has a zero-width fallback.
        Grammar::new(vec![
            State {
                name: "root",
                rules: vec![
                    Rule::push(r"<", TokenKind::Punctuation, StateId(1)).unwrap(),
                    Rule::emit(r"[a-z]+", TokenKind::Text).unwrap(),
                    Rule::emit(r"\s+", TokenKind::Text).unwrap(),
                    Rule::pop(r"\)", TokenKind::Punctuation).unwrap(),
                ],
            },
            State {
                name: "bracketed",
                rules: vec![
                    Rule::pop(r">", TokenKind::Punctuation).unwrap(),
                    Rule::emit(r"[a-z]+", TokenKind::StringDouble).unwrap(),
                    Rule::pop("", TokenKind::Text).unwrap(),
                ],
            },
        ])
    }

    fn collect(text: &str) -> Vec<Token> {
        let grammar = toy_grammar();
        let registry = SublexerRegistry::empty();
        Session::new(&grammar, &registry, text).collect()
    }

    #[test]
    fn unmatched_input_becomes_error_tokens() {
        let tokens = collect("ab $ cd");
        let texts: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, "ab $ cd");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Error && t.text == "$"));
    }

    #[test]
    fn pop_at_root_is_a_no_op() {
        // `)` pops in root; the session must remain in root and keep going.
        let tokens = collect(")ab");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Punctuation);
        assert_eq!(tokens[1].text, "ab");
    }

    #[test]
    fn zero_width_fallback_pops_without_consuming() {
        // `<1` enters the bracketed state; `1` matches nothing there, so the
        // zero-width rule pops back to root, where it still matches nothing
        // and becomes an error token.
        let tokens = collect("<1ab");
        assert_eq!(tokens[0].text, "<");
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[2].text, "ab");
        assert_eq!(tokens[2].kind, TokenKind::Text);
    }

    #[test]
    fn stack_override_starts_inside_substate() {
        let grammar = toy_grammar();
        let registry = SublexerRegistry::empty();
        let tokens: Vec<Token> =
            Session::with_stack(&grammar, &registry, "ab>cd", &[StateId(0), StateId(1)]).collect();
        assert_eq!(tokens[0].kind, TokenKind::StringDouble);
        assert_eq!(tokens[1].text, ">");
        assert_eq!(tokens[2].kind, TokenKind::Text);
    }

    #[test]
    fn coalesce_merges_adjacent_same_kind_spans() {
        let tokens = vec![
            Token::new(0, TokenKind::Text, "a"),
            Token::new(1, TokenKind::Text, "b"),
            Token::new(2, TokenKind::Error, "$"),
            Token::new(3, TokenKind::Text, "c"),
        ];
        let merged = coalesce(tokens);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].text, "ab");
        assert_eq!(merged[2].text, "c");
    }
}
