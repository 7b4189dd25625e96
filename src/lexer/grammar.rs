//! State tables for the ASP host grammar.
//!
//! Rule order within each state is a contract: dispatch is
//! first-match-wins, and the ambiguous clusters (`:-` vs `:~` vs bare `:`,
//! `.` vs `..`, directive keywords vs operator runs) are disambiguated
//! purely by this ordering plus the single-character lookaround guards.

use once_cell::sync::Lazy;

use crate::engine::{Grammar, GroupSpec, Rule, State, StateId, Transition};
use crate::error::GrammarResult;
use crate::token::TokenKind::*;

pub const ROOT: StateId = StateId(0);
pub const INCLUDE: StateId = StateId(1);
pub const SCRIPT: StateId = StateId(2);
pub const NESTED_COMMENT: StateId = StateId(3);

static GRAMMAR: Lazy<Grammar> = Lazy::new(|| build().expect("builtin ASP grammar must compile"));

/// The shared, read-only ASP state table.
pub fn grammar() -> &'static Grammar {
    &GRAMMAR
}

fn build() -> GrammarResult<Grammar> {
    Ok(Grammar::new(vec![
        State {
            name: "root",
            rules: root_rules()?,
        },
        State {
            name: "include",
            rules: include_rules()?,
        },
        State {
            name: "script",
            rules: script_rules()?,
        },
        State {
            name: "nested-comment",
            rules: nested_comment_rules()?,
        },
    ]))
}

fn root_rules() -> GrammarResult<Vec<Rule>> {
    Ok(vec![
        Rule::push(r"%\*", CommentMultiline, NESTED_COMMENT)?,
        Rule::emit(r"%.*", CommentSingle)?,
        Rule::emit(r"0x[0-9a-fA-F]+", NumberHex)?,
        Rule::emit(r"\d+", NumberInteger)?,
        Rule::emit(r#""(\\n|\\"|\\\\|[^\\"])*""#, StringDouble)?,
        Rule::emit(r":-", Punctuation)?,
        Rule::emit(r"[\[\](){}]", Punctuation)?,
        // Arrow/terminator cluster. Tried in this exact order; the guards
        // keep `:-`/`:~` from firing inside `::-` runs, the terminator dot
        // from eating the first half of a `..` range, and `,`/`;`/`:` from
        // splitting double-character operator runs.
        Rule::emit(r":-", Punctuation)?.not_preceded_by(':'),
        Rule::emit(r":~", Punctuation)?.not_preceded_by(':'),
        Rule::emit(r"\.", Punctuation)?.not_followed_by('.'),
        Rule::emit(r",", Punctuation)?.not_followed_by(';'),
        Rule::emit(r";", Punctuation)?.not_followed_by(';'),
        Rule::emit(r":", Punctuation)?.not_followed_by(':'),
        Rule::emit(r"&[_]*[a-z][a-zA-Z_]*", Keyword)?,
        Rule::emit(r"[/<=>+\-*\\?&@|:;~.!]+", Operator)?,
        Rule::emit(
            r"(?:#count|#sum|#min|#max|#show|#const|#edge|#minimize|#maximize|#defined|#heuristic|#project|#program|#external|#theory|#end|not)\b",
            Keyword,
        )?,
        Rule::push(r"#script", Keyword, SCRIPT)?,
        Rule::push(r"#include\b", Keyword, INCLUDE)?,
        Rule::emit(r"(?:#inf|#sup|#true|#false)\b", KeywordConstant)?,
        Rule::emit(r"[_']*[A-Z][0-9a-zA-Z'_]*", NameVariable)?,
        Rule::emit(r"[_']*[a-z][0-9a-zA-Z'_]*", Text)?,
        // Bare wildcard. Ordered after the identifier rules so `_x` stays
        // one plain identifier instead of a wildcard followed by text.
        Rule::emit(r"_", NameVariable)?,
        Rule::emit(r"\s", Text)?,
    ])
}

fn include_rules() -> GrammarResult<Vec<Rule>> {
    Ok(vec![
        Rule::pop(r#"<(\\>|\\"|\\\\|[^\\>])*>"#, StringDouble)?,
        Rule::pop(r#""(\\n|\\"|\\\\|[^\\"])*""#, StringDouble)?,
        Rule::emit(r"\s", Text)?,
        // No path at the cursor: fall back to normal parsing.
        Rule::pop("", Text)?,
    ])
}

fn script_rules() -> GrammarResult<Vec<Rule>> {
    Ok(vec![
        embedded_script_rule("python")?,
        embedded_script_rule("lua")?,
        // Unknown language: fall back to normal parsing.
        Rule::pop("", Text)?,
    ])
}

/// Matches the whole `( <lang> ) ... #end .` span in one lookahead rule.
/// The interior capture group is delegated to the sub-lexer registered
/// under `lang`; the greedy interior binds to the last `#end` so stray
/// `#end`-looking text inside the script does not cut the block short.
fn embedded_script_rule(lang: &'static str) -> GrammarResult<Rule> {
    Rule::by_groups(
        &format!(r"(?s)(\s*)(\()({lang})(\))(\s*)(.*)(#end)(\s*)(\.)"),
        vec![
            GroupSpec::Kind(Text),
            GroupSpec::Kind(Punctuation),
            GroupSpec::Kind(Text),
            GroupSpec::Kind(Punctuation),
            GroupSpec::Kind(Text),
            GroupSpec::Embedded(lang),
            GroupSpec::Kind(Keyword),
            GroupSpec::Kind(Text),
            GroupSpec::Kind(Punctuation),
        ],
        Transition::Pop,
    )
}

fn nested_comment_rules() -> GrammarResult<Vec<Rule>> {
    Ok(vec![
        Rule::pop(r"\*%", CommentMultiline)?,
        Rule::push(r"%\*", CommentMultiline, NESTED_COMMENT)?,
        Rule::emit(r"[^*%]+", CommentMultiline)?,
        Rule::emit(r"[*%]", CommentMultiline)?,
    ])
}
