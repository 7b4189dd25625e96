//! Line-label rewrite filter.
//!
//! A compatibility shim for a downstream consumer (LaTeX `minted`) that
//! tokenizes every input exactly twice. Script comments of the form
//! `#%\llabel{...}#` carry line labels that must survive both passes:
//!
//! - on the first pass a label comment gets one extra `#` prepended, so it
//!   still tokenizes as a comment the second time around;
//! - on the second pass the doubled prefix is recognized and both leading
//!   `#` characters are stripped.
//!
//! Only `CommentSingle` tokens with the exact literal prefix are touched;
//! token kind and span offset are preserved, the text payload alone
//! changes. Outside this one consumer the filter is a no-op, since `%`-
//! style host comments can never start with `#`.

use crate::token::{Token, TokenKind};

const LABEL_PREFIX: &str = r"#%\llabel{";
const DOUBLED_LABEL_PREFIX: &str = r"##%\llabel{";

/// Rewrites line-label comments in place.
pub fn rewrite_line_labels(tokens: &mut [Token]) {
    for token in tokens {
        if token.kind != TokenKind::CommentSingle {
            continue;
        }
        if token.text.starts_with(LABEL_PREFIX) && token.text.ends_with('#') {
            token.text.insert(0, '#');
        } else if token.text.starts_with(DOUBLED_LABEL_PREFIX) && token.text.ends_with('#') {
            token.text.drain(..2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pass_prepends_one_marker() {
        let mut tokens = vec![Token::new(0, TokenKind::CommentSingle, r"#%\llabel{x}#")];
        rewrite_line_labels(&mut tokens);
        assert_eq!(tokens[0].text, r"##%\llabel{x}#");
        assert_eq!(tokens[0].offset, 0);
    }

    #[test]
    fn second_pass_strips_doubled_marker() {
        let mut tokens = vec![Token::new(0, TokenKind::CommentSingle, r"##%\llabel{x}#")];
        rewrite_line_labels(&mut tokens);
        assert_eq!(tokens[0].text, r"%\llabel{x}#");
    }

    #[test]
    fn other_comments_and_kinds_are_untouched() {
        let mut tokens = vec![
            Token::new(0, TokenKind::CommentSingle, "% plain comment"),
            Token::new(20, TokenKind::CommentSingle, "# script comment"),
            Token::new(40, TokenKind::Text, r"#%\llabel{x}#"),
        ];
        let before = tokens.clone();
        rewrite_line_labels(&mut tokens);
        assert_eq!(tokens, before);
    }
}
