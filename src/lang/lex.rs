use super::{token::*, Column, Value};
use tracing::trace;

/// Longest run of digits accepted as a number literal.
const MAX_NUMBER_LEN: usize = 6;

/// Collects every token of `s` up to and including `EndOfInput`.
pub fn lex(s: &str) -> Vec<Token<'_>> {
    let mut cursor = Cursor::new(s);
    let mut tokens = vec![cursor.current()];
    while !cursor.finished() {
        cursor.advance();
        tokens.push(cursor.current());
    }
    tokens
}

fn is_basic_whitespace(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

fn is_basic_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// ## Lexical cursor
///
/// Holds a position into borrowed program text and the classification of
/// the token starting there. Nothing is buffered; moving to a new token
/// re-derives `current` from `next_position`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    position: usize,
    next_position: usize,
    current: Token<'a>,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Cursor<'a> {
        let mut cursor = Cursor {
            text,
            position: 0,
            next_position: 0,
            current: Token::EndOfInput,
        };
        cursor.reset(0);
        cursor
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn current(&self) -> Token<'a> {
        self.current
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn span(&self) -> Column {
        self.position..self.next_position
    }

    pub fn finished(&self) -> bool {
        self.position >= self.text.len() || self.current == Token::EndOfInput
    }

    /// Restarts scanning at `offset` and classifies the token found there.
    /// An offset inside a character moves back to that character's start.
    pub fn reset(&mut self, offset: usize) {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        self.position = offset;
        self.skip_whitespace();
        self.classify_skipping_remarks();
    }

    pub fn advance(&mut self) {
        if self.finished() {
            return;
        }
        self.position = self.next_position;
        self.skip_whitespace();
        self.classify_skipping_remarks();
    }

    /// A remark hides the rest of its line; the line's `Newline` (or the
    /// end of input) becomes the current token instead.
    fn classify_skipping_remarks(&mut self) {
        self.classify();
        while let Token::Word(Word::Rem) = self.current {
            self.position = match self.text[self.position..].find('\n') {
                Some(eol) => self.position + eol,
                None => self.text.len(),
            };
            self.classify();
        }
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while self.position < bytes.len() && is_basic_whitespace(bytes[self.position]) {
            self.position += 1;
        }
    }

    fn classify(&mut self) {
        let (token, len) = Self::token_at(&self.text[self.position..]);
        self.current = token;
        self.next_position = self.position + len;
        trace!(position = self.position, token = %token, "classify");
    }

    fn token_at(s: &'a str) -> (Token<'a>, usize) {
        let bytes = s.as_bytes();
        let first = match bytes.first() {
            None => return (Token::EndOfInput, 0),
            Some(ch) => *ch,
        };
        if is_basic_digit(first) {
            return Self::number(s);
        }
        if let Some(token) = Token::from_char(first) {
            return (token, 1);
        }
        if first == b'"' {
            return Self::string(s);
        }
        if let Some((word, len)) = Word::from_prefix(s) {
            return (Token::Word(word), len);
        }
        if is_basic_alphabetic(first) {
            if let Some(ident) = Ident::from_char(char::from(first)) {
                return (Token::Ident(ident), 1);
            }
        }
        let len = s.chars().next().map_or(1, char::len_utf8);
        (Token::Unknown("UNEXPECTED CHARACTER"), len)
    }

    fn number(s: &'a str) -> (Token<'a>, usize) {
        let digits = s.bytes().take_while(|c| is_basic_digit(*c)).count();
        if digits > MAX_NUMBER_LEN {
            return (Token::Unknown("NUMBER TOO LONG"), digits);
        }
        match s[..digits].parse::<Value>() {
            Ok(n) => (Token::Literal(Literal::Integer(n)), digits),
            Err(_) => (Token::Unknown("MALFORMED NUMBER"), digits),
        }
    }

    fn string(s: &'a str) -> (Token<'a>, usize) {
        match s[1..].find('"') {
            Some(end) => (Token::Literal(Literal::String(&s[1..end + 1])), end + 2),
            None => (Token::Unknown("UNTERMINATED STRING"), s.len()),
        }
    }
}
