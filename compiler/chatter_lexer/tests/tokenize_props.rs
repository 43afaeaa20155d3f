//! Property-based tests for the statement tokenizer and word lexer.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use chatter_lexer::{lex_words, tokenize, WordKind};
use proptest::prelude::*;

/// A statement line that never contains the comment keyword.
fn statement_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 ]{0,20}[a-z0-9?]".prop_filter("no comment keyword", |s| !s.contains("note"))
}

proptest! {
    #[test]
    fn tokens_are_trimmed_and_non_empty(source in "[ a-z\t\n]{0,200}") {
        for token in tokenize(&source) {
            prop_assert!(!token.as_str().is_empty());
            prop_assert_eq!(token.as_str(), token.as_str().trim());
        }
    }

    #[test]
    fn every_statement_line_survives_in_order(
        lines in proptest::collection::vec(statement_strategy(), 0..20)
    ) {
        let source = lines.join("\n");
        let tokens: Vec<String> = tokenize(&source)
            .into_iter()
            .map(|t| t.as_str().to_string())
            .collect();
        let expected: Vec<String> = lines.iter().map(|l| l.trim().to_string()).collect();
        prop_assert_eq!(tokens, expected);
    }

    #[test]
    fn comment_text_never_reaches_tokens(
        code in statement_strategy(),
        comment in "[a-z][a-z ]{0,20}",
    ) {
        let source = format!("note {comment}\n{code} note {comment}");
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].as_str(), code.trim());
    }

    #[test]
    fn word_spans_cover_their_text(line in "[ -~]{0,60}") {
        let words = lex_words(&line);
        for word in words.as_slice() {
            prop_assert_eq!(&line[word.start..word.end], word.text);
            prop_assert!(!word.text.trim().is_empty());
        }
    }

    #[test]
    fn identifiers_are_word_characters(line in "[ -~]{0,60}") {
        for word in lex_words(&line).as_slice() {
            if word.kind == WordKind::Ident {
                prop_assert!(word.text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            }
        }
    }
}
