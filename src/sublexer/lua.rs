//! Built-in sub-lexer for embedded Lua script blocks.
//!
//! Same scope as the Python one: single-state highlighting classification,
//! pluggable through the registry.

use once_cell::sync::Lazy;

use super::{tokenize_region, Sublexer};
use crate::engine::{Grammar, Rule, State};
use crate::error::GrammarResult;
use crate::token::{Token, TokenKind};

static GRAMMAR: Lazy<Grammar> = Lazy::new(|| build().expect("builtin lua sub-grammar must compile"));

fn build() -> GrammarResult<Grammar> {
    use TokenKind::*;
    Ok(Grammar::new(vec![State {
        name: "root",
        rules: vec![
            Rule::emit(r"(?s)--\[\[.*?\]\]", CommentMultiline)?,
            Rule::emit(r"--.*", CommentSingle)?,
            Rule::emit(r#""(?:\\.|[^"\\\n])*""#, StringDouble)?,
            Rule::emit(r"'(?:\\.|[^'\\\n])*'", StringDouble)?,
            Rule::emit(
                r"(?:and|break|do|else|elseif|end|false|for|function|goto|if|in|local|nil|not|or|repeat|return|then|true|until|while)\b",
                Keyword,
            )?,
            Rule::emit(r"0x[0-9a-fA-F]+", NumberHex)?,
            Rule::emit(r"\d+", NumberInteger)?,
            Rule::emit(r"[A-Za-z_][A-Za-z0-9_]*", Name)?,
            Rule::emit(r"[-+*/%=<>~#^.]+", Operator)?,
            Rule::emit(r"[()\[\]{},:;]", Punctuation)?,
            Rule::emit(r"\s+", Text)?,
            Rule::emit(r"(?s).", Text)?,
        ],
    }]))
}

pub struct LuaSublexer;

impl Sublexer for LuaSublexer {
    fn tokenize(&self, source: &str, base_offset: usize) -> Vec<Token> {
        tokenize_region(&GRAMMAR, source, base_offset)
    }
}
