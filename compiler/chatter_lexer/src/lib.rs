//! Chatter Lexer - statement tokenizer and word lexer.
//!
//! Chatter source is line oriented: every non-empty, non-comment physical
//! line is one statement. Lexing happens in two layers:
//!
//! - [`tokenize`]: source text to statement [`Token`]s, stripping blank lines
//!   and `note` comments.
//! - [`lex_words`]: one statement line to [`Words`], built on `logos`, used by
//!   the evaluator to classify statements.

mod line;
mod word;

pub use line::{tokenize, Token, COMMENT_KEYWORD};
pub use word::{lex_words, Word, WordKind, Words};
