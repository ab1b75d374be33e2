use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    column: Column,
    message: &'static str,
    expected: Option<&'static str>,
    found: Option<String>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            column: 0..0,
            message: "",
            expected: None,
            found: None,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn expected(&self) -> Option<&'static str> {
        self.expected
    }

    pub fn found(&self) -> Option<&str> {
        self.found.as_deref()
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error { message, ..self }
    }

    /// Records what the parser wanted and what the cursor held instead.
    pub fn expecting(self, expected: &'static str, found: String) -> Error {
        Error {
            expected: Some(expected),
            found: Some(found),
            ..self
        }
    }

    pub(crate) fn or_line_number(self, line: Option<LineNumber>) -> Error {
        match (self.line_number, line) {
            (None, Some(line)) => self.in_line_number(line),
            _ => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLine = 8,
    DivisionByZero = 11,
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "NEXT WITHOUT FOR",
            2 => "SYNTAX ERROR",
            3 => "RETURN WITHOUT GOSUB",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            8 => "UNDEFINED LINE",
            11 => "DIVISION BY ZERO",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if let (Some(expected), Some(found)) = (self.expected, &self.found) {
            suffix.push_str(&format!("; EXPECTED {}, FOUND {}", expected, found));
        }
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}", self.code)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}", self.code, suffix)
            }
        } else if suffix.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{} IN{}", code_str, suffix)
        }
    }
}
