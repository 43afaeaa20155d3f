//! Word lexer for a single statement line, using logos.
//!
//! Statement patterns are matched word by word, so the lexer only needs to
//! tell names apart from the two punctuation marks the grammar cares about
//! (`?` ending a question, `:` after `ask`). Every other run of
//! non-whitespace is kept as an opaque `Punct` word so that spans still cover
//! the whole line.

use logos::Logos;

/// Raw word from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawWord {
    #[regex(r"[A-Za-z0-9_]+")]
    Ident,

    #[token("?")]
    Question,

    #[token(":")]
    Colon,

    #[regex(r"[^ \t\r\n\fA-Za-z0-9_?:]+")]
    Punct,
}

/// Classification of a [`Word`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordKind {
    /// `[A-Za-z0-9_]+`: names, keywords and integer literals.
    Ident,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// Anything else.
    Punct,
}

/// A word and its byte span within the statement line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word<'src> {
    pub kind: WordKind,
    pub text: &'src str,
    pub start: usize,
    pub end: usize,
}

impl<'src> Word<'src> {
    /// Case-insensitive keyword comparison.
    #[inline]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == WordKind::Ident && self.text.eq_ignore_ascii_case(keyword)
    }

    /// The word as a name, if it is an identifier.
    #[inline]
    pub fn as_name(&self) -> Option<&'src str> {
        (self.kind == WordKind::Ident).then_some(self.text)
    }

    /// Whether the word is made only of ASCII digits.
    pub fn is_digits(&self) -> bool {
        self.kind == WordKind::Ident && self.text.bytes().all(|b| b.is_ascii_digit())
    }

    #[inline]
    pub fn is_question(&self) -> bool {
        self.kind == WordKind::Question
    }

    #[inline]
    pub fn is_colon(&self) -> bool {
        self.kind == WordKind::Colon
    }
}

/// The words of one statement line, with access to the raw text between them.
#[derive(Clone, Debug)]
pub struct Words<'src> {
    line: &'src str,
    words: Vec<Word<'src>>,
}

impl<'src> Words<'src> {
    /// The line these words were lexed from.
    pub fn line(&self) -> &'src str {
        self.line
    }

    pub fn as_slice(&self) -> &[Word<'src>] {
        &self.words
    }

    /// Raw text after word `index`, leading whitespace removed.
    ///
    /// Returns an empty string when `index` is out of range.
    pub fn rest_after(&self, index: usize) -> &'src str {
        self.words
            .get(index)
            .map_or("", |w| self.line[w.end..].trim_start())
    }

    /// Raw text strictly between words `first` and `last`, trimmed.
    pub fn between(&self, first: usize, last: usize) -> &'src str {
        match (self.words.get(first), self.words.get(last)) {
            (Some(a), Some(b)) if a.end <= b.start => self.line[a.end..b.start].trim(),
            _ => "",
        }
    }
}

/// Lex one statement line into words.
///
/// Never fails: characters logos cannot classify become `Punct` words.
pub fn lex_words(line: &str) -> Words<'_> {
    let mut lexer = RawWord::lexer(line);
    let mut words = Vec::new();
    while let Some(raw) = lexer.next() {
        let kind = match raw {
            Ok(RawWord::Ident) => WordKind::Ident,
            Ok(RawWord::Question) => WordKind::Question,
            Ok(RawWord::Colon) => WordKind::Colon,
            Ok(RawWord::Punct) | Err(()) => WordKind::Punct,
        };
        let span = lexer.span();
        words.push(Word {
            kind,
            text: lexer.slice(),
            start: span.start,
            end: span.end,
        });
    }
    Words { line, words }
}
