pub use super::ident::Ident;
use super::Value;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'a> {
    /// Lexical error; the payload says what was wrong.
    Unknown(&'static str),
    EndOfInput,
    Newline,
    Literal(Literal<'a>),
    Word(Word),
    Operator(Operator),
    Ident(Ident),
    LParen,
    RParen,
    Comma,
    Semicolon,
    Hash,
}

impl<'a> Token<'a> {
    pub fn from_char(ch: u8) -> Option<Token<'static>> {
        use Operator::*;
        Some(match ch {
            b'\n' => Token::Newline,
            b',' => Token::Comma,
            b';' => Token::Semicolon,
            b'+' => Token::Operator(Plus),
            b'-' => Token::Operator(Minus),
            b'&' => Token::Operator(And),
            b'|' => Token::Operator(Or),
            b'*' => Token::Operator(Multiply),
            b'/' => Token::Operator(Divide),
            b'%' => Token::Operator(Modulus),
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'#' => Token::Hash,
            b'<' => Token::Operator(Less),
            b'>' => Token::Operator(Greater),
            b'=' => Token::Operator(Equal),
            _ => return None,
        })
    }

    /// Tokens that close a statement.
    pub fn is_end_of_line(&self) -> bool {
        matches!(self, Token::Newline | Token::EndOfInput)
    }

    /// Human readable name of the token's kind, used in error reports.
    pub fn kind_name(&self) -> &'static str {
        use Token::*;
        match self {
            Unknown(_) => "INVALID TOKEN",
            EndOfInput => "END OF INPUT",
            Newline => "END OF LINE",
            Literal(super::token::Literal::Integer(_)) => "NUMBER",
            Literal(super::token::Literal::String(_)) => "STRING",
            Word(w) => w.spelling(),
            Operator(o) => o.spelling(),
            Ident(_) => "VARIABLE",
            LParen => "(",
            RParen => ")",
            Comma => ",",
            Semicolon => ";",
            Hash => "#",
        }
    }
}

impl<'a> std::fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Literal(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            _ => write!(f, "{}", self.kind_name()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Literal<'a> {
    Integer(Value),
    /// Text between the quotes, borrowed from the program.
    String(&'a str),
}

impl<'a> std::fmt::Display for Literal<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Let,
    Print,
    If,
    Then,
    Else,
    For,
    To,
    Next,
    Goto,
    Gosub,
    Return,
    Call,
    Rem,
    Peek,
    Poke,
    End,
    Input,
    User,
}

impl Word {
    /// Keyword table in match order. The first entry that prefixes the
    /// text wins.
    pub const TABLE: [(&'static str, Word); 18] = [
        ("let", Word::Let),
        ("print", Word::Print),
        ("if", Word::If),
        ("then", Word::Then),
        ("else", Word::Else),
        ("for", Word::For),
        ("to", Word::To),
        ("next", Word::Next),
        ("goto", Word::Goto),
        ("gosub", Word::Gosub),
        ("return", Word::Return),
        ("call", Word::Call),
        ("rem", Word::Rem),
        ("peek", Word::Peek),
        ("poke", Word::Poke),
        ("end", Word::End),
        ("input", Word::Input),
        ("user", Word::User),
    ];

    pub fn from_prefix(s: &str) -> Option<(Word, usize)> {
        let bytes = s.as_bytes();
        Word::TABLE.iter().find_map(|(keyword, word)| {
            let len = keyword.len();
            match bytes.get(..len) {
                Some(head) if head.eq_ignore_ascii_case(keyword.as_bytes()) => Some((*word, len)),
                _ => None,
            }
        })
    }

    pub fn spelling(self) -> &'static str {
        use Word::*;
        match self {
            Let => "LET",
            Print => "PRINT",
            If => "IF",
            Then => "THEN",
            Else => "ELSE",
            For => "FOR",
            To => "TO",
            Next => "NEXT",
            Goto => "GOTO",
            Gosub => "GOSUB",
            Return => "RETURN",
            Call => "CALL",
            Rem => "REM",
            Peek => "PEEK",
            Poke => "POKE",
            End => "END",
            Input => "INPUT",
            User => "USER",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    And,
    Or,
    Multiply,
    Divide,
    Modulus,
    Less,
    Greater,
    Equal,
}

impl Operator {
    pub fn spelling(self) -> &'static str {
        use Operator::*;
        match self {
            Plus => "+",
            Minus => "-",
            And => "&",
            Or => "|",
            Multiply => "*",
            Divide => "/",
            Modulus => "%",
            Less => "<",
            Greater => ">",
            Equal => "=",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}
