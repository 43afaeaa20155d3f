//! The `check` command: find lines the interpreter would not understand.

use chatter_eval::errors::unrecognized_command;
use chatter_eval::Statement;
use chatter_lexer::tokenize;

use super::read_file;

/// Line numbers and messages for every line the interpreter would report
/// as an unrecognized command.
///
/// Besides lines that match no statement shape, this flags an `or if not`
/// whose innermost open block is not a conditional.
pub fn unrecognized_lines(source: &str) -> Vec<(u32, String)> {
    // One entry per open block: whether it is a conditional.
    let mut open_blocks: Vec<bool> = Vec::new();
    let mut problems = Vec::new();

    for token in &tokenize(source) {
        let statement = Statement::classify(token.as_str());
        let misplaced = match statement {
            Statement::Unrecognized => true,
            Statement::ElseMarker => open_blocks.last() != Some(&true),
            Statement::Terminator => {
                open_blocks.pop();
                false
            }
            _ => {
                if statement.opens_block() {
                    open_blocks.push(matches!(statement, Statement::If { .. }));
                }
                false
            }
        };
        if misplaced {
            problems.push((token.line(), unrecognized_command(token.as_str()).to_string()));
        }
    }
    problems
}

pub fn check_file(path: &str) {
    let content = read_file(path);
    let problems = unrecognized_lines(&content);

    if problems.is_empty() {
        println!("No problems found in '{path}'");
        return;
    }

    for (line, message) in &problems {
        eprintln!("{path}:{line}: {message}");
    }
    eprintln!(
        "{} unrecognized line{} in '{path}'",
        problems.len(),
        if problems.len() == 1 { "" } else { "s" }
    );
    std::process::exit(1);
}
