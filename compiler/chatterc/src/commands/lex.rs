//! The `lex` command: show how each line of a script is read.

use chatter_eval::Statement;
use chatter_lexer::tokenize;

use super::read_file;

/// One row per statement: line number, statement kind, text.
pub fn lex_listing(source: &str) -> Vec<String> {
    tokenize(source)
        .iter()
        .map(|token| {
            let kind = Statement::classify(token.as_str()).kind_name();
            format!("{:>4}  {kind:<12} {token}", token.line())
        })
        .collect()
}

pub fn lex_file(path: &str) {
    let content = read_file(path);
    for row in lex_listing(&content) {
        println!("{row}");
    }
}
