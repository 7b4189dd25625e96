//! Built-in sub-lexer for embedded Python script blocks.
//!
//! A deliberately small single-state grammar: enough classification for
//! highlighting script interiors (comments, strings, keywords, names,
//! numbers, operators), not a faithful Python tokenizer. Replace it through
//! the registry if more fidelity is needed.

use once_cell::sync::Lazy;

use super::{tokenize_region, Sublexer};
use crate::engine::{Grammar, Rule, State};
use crate::error::GrammarResult;
use crate::token::{Token, TokenKind};

static GRAMMAR: Lazy<Grammar> =
    Lazy::new(|| build().expect("builtin python sub-grammar must compile"));

fn build() -> GrammarResult<Grammar> {
    use TokenKind::*;
    Ok(Grammar::new(vec![State {
        name: "root",
        rules: vec![
            Rule::emit(r"#.*", CommentSingle)?,
            Rule::emit(r#"(?s)""".*?""""#, StringDouble)?,
            Rule::emit(r"(?s)'''.*?'''", StringDouble)?,
            Rule::emit(r#""(?:\\.|[^"\\\n])*""#, StringDouble)?,
            Rule::emit(r"'(?:\\.|[^'\\\n])*'", StringDouble)?,
            Rule::emit(
                r"(?:False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b",
                Keyword,
            )?,
            Rule::emit(r"0x[0-9a-fA-F]+", NumberHex)?,
            Rule::emit(r"\d+", NumberInteger)?,
            Rule::emit(r"[A-Za-z_][A-Za-z0-9_]*", Name)?,
            Rule::emit(r"[-+*/%=<>!&|^~@]+", Operator)?,
            Rule::emit(r"[()\[\]{},:;.]", Punctuation)?,
            Rule::emit(r"\s+", Text)?,
            Rule::emit(r"(?s).", Text)?,
        ],
    }]))
}

pub struct PythonSublexer;

impl Sublexer for PythonSublexer {
    fn tokenize(&self, source: &str, base_offset: usize) -> Vec<Token> {
        tokenize_region(&GRAMMAR, source, base_offset)
    }
}
