//! Statement classification.
//!
//! The dialect has no grammar beyond a fixed set of sentence shapes, so a
//! statement line is classified by matching its words against those shapes.
//! Matching is case-insensitive for keywords; names are `Ident` words.
//! Captured text borrows from the statement line.
//!
//! Shape precedence follows the order below: `<name> is ...` is tried first,
//! so `loop is 5` binds a variable called `loop`.

use chatter_lexer::{lex_words, Word, Words};

/// Phrase that closes every block.
pub const TERMINATOR: &str = "thats it";

/// Variable bound to the iteration number inside a loop body.
pub const LOOP_VARIABLE: &str = "current";

/// Variable bound by `ask: what is your name?`.
pub const NAME_VARIABLE: &str = "name";

/// A `Whats ...?` question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query<'a> {
    /// `Whats x?`
    Variable(&'a str),
    /// `Whats a plus b?`; any single word (or `divided by`) is taken as the
    /// operator and validated at evaluation time.
    Arithmetic {
        lhs: &'a str,
        operator: &'a str,
        rhs: &'a str,
    },
    /// `Whats f with numbers a and b?`
    Call { function: &'a str, args: [&'a str; 2] },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `thats it`
    Terminator,
    /// `or if not`
    ElseMarker,
    /// `<name> is <value>`
    Assign { name: &'a str, value: &'a str },
    /// `<name> is Whats ...?`
    Bind { name: &'a str, query: Query<'a> },
    /// `Whats ...?`
    Emit(Query<'a>),
    /// `say <text>`
    Say(&'a str),
    /// `loop through numbers <start> to <end>`
    Loop { start: &'a str, end: &'a str },
    /// `repeat <message> forever`
    Repeat { message: &'a str },
    /// `if <a> is greater than <b>`
    If { lhs: &'a str, rhs: &'a str },
    /// `<name> with numbers <p1> and <p2>`
    Define { name: &'a str, params: [&'a str; 2] },
    /// `ask: what is your name?`
    PromptName,
    /// `but dont say it too fast just every <N> seconds`
    SetInterval { seconds: u64 },
    Unrecognized,
}

impl<'a> Statement<'a> {
    /// Classify one statement line.
    pub fn classify(line: &'a str) -> Self {
        classify_words(&lex_words(line))
    }

    /// Whether this statement owns a body closed by [`TERMINATOR`].
    pub fn opens_block(&self) -> bool {
        matches!(
            self,
            Statement::Loop { .. }
                | Statement::Repeat { .. }
                | Statement::If { .. }
                | Statement::Define { .. }
        )
    }

    /// Short lowercase name of the statement kind, for listings.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Terminator => "terminator",
            Statement::ElseMarker => "else",
            Statement::Assign { .. } => "assign",
            Statement::Bind { .. } => "bind",
            Statement::Emit(_) => "query",
            Statement::Say(_) => "say",
            Statement::Loop { .. } => "loop",
            Statement::Repeat { .. } => "repeat",
            Statement::If { .. } => "if",
            Statement::Define { .. } => "define",
            Statement::PromptName => "ask",
            Statement::SetInterval { .. } => "interval",
            Statement::Unrecognized => "unrecognized",
        }
    }
}

/// One position of a sentence shape.
#[derive(Clone, Copy)]
enum Part {
    Kw(&'static str),
    Name,
    Digits,
    Question,
    Colon,
}

use Part::{Colon, Digits, Kw, Name, Question};

impl Part {
    fn accepts(self, word: &Word<'_>) -> bool {
        match self {
            Kw(keyword) => word.is_keyword(keyword),
            Name => word.as_name().is_some(),
            Digits => word.is_digits(),
            Question => word.is_question(),
            Colon => word.is_colon(),
        }
    }

    fn is_capture(self) -> bool {
        matches!(self, Name | Digits)
    }
}

/// Match `words` against a whole shape, returning the captured words.
fn captures<'a>(words: &[Word<'a>], shape: &[Part]) -> Option<Vec<&'a str>> {
    if words.len() != shape.len() {
        return None;
    }
    let mut captured = Vec::new();
    for (word, part) in words.iter().zip(shape) {
        if !part.accepts(word) {
            return None;
        }
        if part.is_capture() {
            captured.push(word.text);
        }
    }
    Some(captured)
}

const LOOP: &[Part] = &[Kw("loop"), Kw("through"), Kw("numbers"), Name, Kw("to"), Name];
const IF: &[Part] = &[Kw("if"), Name, Kw("is"), Kw("greater"), Kw("than"), Name];
const DEFINE: &[Part] = &[Name, Kw("with"), Kw("numbers"), Name, Kw("and"), Name];
const PROMPT_NAME: &[Part] = &[
    Kw("ask"),
    Colon,
    Kw("what"),
    Kw("is"),
    Kw("your"),
    Kw("name"),
    Question,
];
const SET_INTERVAL: &[Part] = &[
    Kw("but"),
    Kw("dont"),
    Kw("say"),
    Kw("it"),
    Kw("too"),
    Kw("fast"),
    Kw("just"),
    Kw("every"),
    Digits,
    Kw("seconds"),
];

const QUERY_VARIABLE: &[Part] = &[Kw("whats"), Name, Question];
const QUERY_ARITHMETIC: &[Part] = &[Kw("whats"), Name, Name, Name, Question];
const QUERY_DIVISION: &[Part] = &[Kw("whats"), Name, Kw("divided"), Kw("by"), Name, Question];
const QUERY_CALL: &[Part] = &[
    Kw("whats"),
    Name,
    Kw("with"),
    Kw("numbers"),
    Name,
    Kw("and"),
    Name,
    Question,
];
const QUERY_CALL_SHORT: &[Part] = &[Kw("whats"), Name, Kw("with"), Name, Kw("and"), Name, Question];

fn classify_words<'a>(words: &Words<'a>) -> Statement<'a> {
    let all = words.as_slice();

    if captures(all, &[Kw("thats"), Kw("it")]).is_some() {
        return Statement::Terminator;
    }
    if captures(all, &[Kw("or"), Kw("if"), Kw("not")]).is_some() {
        return Statement::ElseMarker;
    }

    if let [target, is, rest @ ..] = all {
        let value = words.rest_after(1);
        if let Some(name) = target.as_name().filter(|_| is.is_keyword("is")) {
            if !value.is_empty() {
                return match parse_query(rest) {
                    Some(query) => Statement::Bind { name, query },
                    None => Statement::Assign { name, value },
                };
            }
        }
    }

    if let Some(query) = parse_query(all) {
        return Statement::Emit(query);
    }

    if let [say, ..] = all {
        let text = words.rest_after(0);
        if say.is_keyword("say") && !text.is_empty() {
            return Statement::Say(text);
        }
    }

    if let Some(&[start, end]) = captures(all, LOOP).as_deref() {
        return Statement::Loop { start, end };
    }

    if let [repeat, .., forever] = all {
        let message = words.between(0, all.len() - 1);
        if repeat.is_keyword("repeat") && forever.is_keyword("forever") && !message.is_empty() {
            return Statement::Repeat { message };
        }
    }

    if let Some(&[lhs, rhs]) = captures(all, IF).as_deref() {
        return Statement::If { lhs, rhs };
    }
    if let Some(&[name, p1, p2]) = captures(all, DEFINE).as_deref() {
        return Statement::Define {
            name,
            params: [p1, p2],
        };
    }
    if captures(all, PROMPT_NAME).is_some() {
        return Statement::PromptName;
    }
    if let Some(&[digits]) = captures(all, SET_INTERVAL).as_deref() {
        if let Ok(seconds) = digits.parse() {
            return Statement::SetInterval { seconds };
        }
    }

    Statement::Unrecognized
}

/// Parse a `Whats ...?` question from its words.
fn parse_query<'a>(words: &[Word<'a>]) -> Option<Query<'a>> {
    if let Some(&[name]) = captures(words, QUERY_VARIABLE).as_deref() {
        return Some(Query::Variable(name));
    }
    if let Some(&[lhs, operator, rhs]) = captures(words, QUERY_ARITHMETIC).as_deref() {
        return Some(Query::Arithmetic { lhs, operator, rhs });
    }
    if let Some(&[lhs, rhs]) = captures(words, QUERY_DIVISION).as_deref() {
        return Some(Query::Arithmetic {
            lhs,
            operator: "divided by",
            rhs,
        });
    }
    let call = captures(words, QUERY_CALL).or_else(|| captures(words, QUERY_CALL_SHORT));
    if let Some(&[function, a1, a2]) = call.as_deref() {
        return Some(Query::Call {
            function,
            args: [a1, a2],
        });
    }
    None
}
