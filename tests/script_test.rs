//! Script block tests
//!
//! The `#script` sub-state delegates the block interior to a registered
//! sub-lexer and splices its tokens back at absolute offsets.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use asplex::{AspLexer, Sublexer, SublexerRegistry, Token, TokenKind};

    fn reconstruct(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn kinds_and_texts(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    #[test]
    fn python_block_is_spliced_in_order() {
        let source = "#script (python) x = 1 #end.";
        let tokens = AspLexer::new().tokenize(source);
        assert_eq!(
            kinds_and_texts(&tokens),
            vec![
                (TokenKind::Keyword, "#script"),
                (TokenKind::Text, " "),
                (TokenKind::Punctuation, "("),
                (TokenKind::Text, "python"),
                (TokenKind::Punctuation, ")"),
                (TokenKind::Text, " "),
                (TokenKind::Name, "x"),
                (TokenKind::Text, " "),
                (TokenKind::Operator, "="),
                (TokenKind::Text, " "),
                (TokenKind::NumberInteger, "1"),
                (TokenKind::Text, " "),
                (TokenKind::Keyword, "#end"),
                (TokenKind::Punctuation, "."),
            ]
        );
        assert_eq!(reconstruct(&tokens), source);
    }

    #[test]
    fn spliced_tokens_keep_absolute_offsets() {
        let source = "#script (python) x = 1 #end.";
        let tokens = AspLexer::new().tokenize(source);
        let mut pos = 0;
        for token in &tokens {
            assert_eq!(token.offset, pos, "gap or overlap at token {:?}", token);
            pos = token.end();
        }
        assert_eq!(pos, source.len());
    }

    #[test]
    fn lua_block_uses_the_lua_sublexer() {
        let source = "#script (lua) local n = 2 #end.";
        let tokens = AspLexer::new().tokenize(source);
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::Keyword && t.text == "local"));
        assert_eq!(reconstruct(&tokens), source);
    }

    #[test]
    fn script_interior_binds_to_the_last_end_marker() {
        // `end` appearing as a lua keyword must not terminate the block.
        let source = "#script (lua) if x then end #end.";
        let tokens = AspLexer::new().tokenize(source);
        assert_eq!(reconstruct(&tokens), source);
        let end_keywords: Vec<usize> = tokens
            .iter()
            .filter(|t| t.text == "#end")
            .map(|t| t.offset)
            .collect();
        assert_eq!(end_keywords.len(), 1);
    }

    #[test]
    fn unknown_language_falls_back_to_root() {
        let source = "#script (ruby) x #end.";
        let tokens = AspLexer::new().tokenize(source);
        assert_eq!(reconstruct(&tokens), source);
        // the frame lexes as ordinary root tokens instead
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::Keyword && t.text == "#end"));
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::Text && t.text == "ruby"));
    }

    #[test]
    fn custom_sublexer_replaces_the_builtin() {
        struct Opaque;
        impl Sublexer for Opaque {
            fn tokenize(&self, source: &str, base_offset: usize) -> Vec<Token> {
                vec![Token::new(base_offset, TokenKind::StringDouble, source)]
            }
        }

        let mut registry = SublexerRegistry::empty();
        registry.register("python", Arc::new(Opaque));

        let source = "#script (python) x = 1 #end.";
        let tokens = AspLexer::with_registry(registry).tokenize(source);
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::StringDouble && t.text == "x = 1 "));
        assert_eq!(reconstruct(&tokens), source);
    }

    #[test]
    fn missing_sublexer_degrades_to_plain_text() {
        // python block with an empty registry: the frame still lexes, the
        // interior is classified as plain text.
        let source = "#script (python) x = 1 #end.";
        let tokens = AspLexer::with_registry(SublexerRegistry::empty()).tokenize(source);
        assert_eq!(reconstruct(&tokens), source);
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::Text && t.text.contains("x = 1")));
    }
}
