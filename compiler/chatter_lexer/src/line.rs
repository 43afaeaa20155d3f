//! Statement tokenizer: source text to one token per logical line.

use std::fmt;

/// Keyword that starts a comment, matched case-insensitively as a whole word.
pub const COMMENT_KEYWORD: &str = "note";

/// A single trimmed, non-empty, comment-free statement line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    /// 1-based line number in the source text.
    line: u32,
}

impl Token {
    pub fn new(text: impl Into<String>, line: u32) -> Self {
        Token {
            text: text.into(),
            line,
        }
    }

    /// The statement text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The 1-based source line this statement came from.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split source text into statement tokens.
///
/// Lines are trimmed; blank lines, comment lines and trailing inline
/// comments are dropped. Order is preserved.
pub fn tokenize(source: &str) -> Vec<Token> {
    source
        .lines()
        .zip(1u32..)
        .filter_map(|(raw, line)| strip_comment(raw.trim()).map(|text| Token::new(text, line)))
        .collect()
}

/// Returns the code part of an already-trimmed line, or `None` when nothing
/// executable is left.
fn strip_comment(line: &str) -> Option<&str> {
    if line.is_empty() || starts_with_comment(line) {
        return None;
    }
    let code = match inline_comment_start(line) {
        Some(at) => line[..at].trim_end(),
        None => line,
    };
    (!code.is_empty()).then_some(code)
}

fn starts_with_comment(line: &str) -> bool {
    if !starts_with_keyword(line) {
        return false;
    }
    // `notebook is 5` is a statement, `note: ...` and `Note ...` are not.
    line[COMMENT_KEYWORD.len()..]
        .chars()
        .next()
        .map_or(true, |c| !is_word_char(c))
}

/// Byte offset of the whitespace run that precedes the first ` note `.
fn inline_comment_start(line: &str) -> Option<usize> {
    line.char_indices()
        .filter(|&(_, c)| c.is_whitespace())
        .find_map(|(at, _)| {
            let rest = line[at..].trim_start();
            let after = rest.get(COMMENT_KEYWORD.len()..)?;
            let followed_by_space = after.chars().next().is_some_and(char::is_whitespace);
            (starts_with_keyword(rest) && followed_by_space).then_some(at)
        })
}

fn starts_with_keyword(text: &str) -> bool {
    text.get(..COMMENT_KEYWORD.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(COMMENT_KEYWORD))
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests;
