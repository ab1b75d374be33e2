use super::{Config, Host, LineIndex, Stack, Var};
use crate::error;
use crate::lang::token::{Literal, Token, Word};
use crate::lang::{Cursor, Error, Ident, LineNumber, Value};
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, Error>;

/// Where a RETURN or a repeating NEXT picks up. `None` is the end of the
/// program, for a GOSUB or FOR on the last line.
pub(super) type Resume = Option<LineNumber>;

/// An active `FOR` loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForLoop {
    pub ident: Ident,
    pub bound: Value,
    pub resume: Option<LineNumber>,
}

/// Outcome of a bounded slice of execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The cycle budget ran out before the program finished.
    Running,
    /// END was executed or the text is exhausted.
    Stopped,
}

/// ## BASIC interpreter
///
/// Borrows the program text for its whole lifetime and owns everything
/// else: variables, control-flow stacks, the line index and the host.
/// Each [`step`](#method.step) executes exactly one numbered line.
///
/// ```
/// use basic::mach::Runtime;
///
/// let mut runtime = Runtime::new("10 a=6*7\n20 end\n", ());
/// runtime.run().unwrap();
/// assert_eq!(runtime.variable('a'), 42);
/// ```
pub struct Runtime<'a, H: Host> {
    pub(super) cursor: Cursor<'a>,
    pub(super) program_start: usize,
    pub(super) vars: Var,
    pub(super) gosub_stack: Stack<Resume>,
    pub(super) for_stack: Stack<ForLoop>,
    pub(super) index: LineIndex,
    pub(super) line_number: Option<LineNumber>,
    pub(super) then_branch: bool,
    pub(super) ended: bool,
    pub(super) diagnostics: usize,
    pub(super) host: H,
}

impl<'a, H: Host> Runtime<'a, H> {
    pub fn new(program: &'a str, host: H) -> Runtime<'a, H> {
        Runtime::with_config(program, host, Config::default())
    }

    pub fn with_config(program: &'a str, host: H, config: Config) -> Runtime<'a, H> {
        Runtime {
            cursor: Cursor::new(program),
            program_start: 0,
            vars: Var::new(),
            gosub_stack: Stack::new(config.gosub_depth, "GOSUB STACK OVERFLOW"),
            for_stack: Stack::new(config.for_depth, "FOR STACK OVERFLOW"),
            index: LineIndex::new(),
            line_number: None,
            then_branch: false,
            ended: false,
            diagnostics: 0,
            host,
        }
    }

    /// Rewinds to the first line and forgets all state.
    pub fn restart(&mut self) {
        self.vars.clear();
        self.gosub_stack.clear();
        self.for_stack.clear();
        self.index.clear();
        self.line_number = None;
        self.then_branch = false;
        self.ended = false;
        self.diagnostics = 0;
        self.cursor.reset(self.program_start);
    }

    pub fn is_finished(&self) -> bool {
        self.ended || self.cursor.finished()
    }

    /// Executes one line. Does nothing once the program has finished.
    ///
    /// On error the runtime stays at the offending token; nothing of the
    /// failed line after that point has run.
    pub fn step(&mut self) -> Result<()> {
        if self.is_finished() {
            debug!("program finished");
            return Ok(());
        }
        match self.line_statement() {
            Ok(()) => Ok(()),
            Err(error) => Err(error.or_line_number(self.line_number)),
        }
    }

    /// Executes up to `cycles` lines.
    pub fn execute(&mut self, cycles: usize) -> Result<Event> {
        for _ in 0..cycles {
            if self.is_finished() {
                break;
            }
            self.step()?;
        }
        if self.is_finished() {
            Ok(Event::Stopped)
        } else {
            Ok(Event::Running)
        }
    }

    /// Steps until the program finishes or fails.
    pub fn run(&mut self) -> Result<()> {
        while !self.is_finished() {
            self.step()?;
        }
        Ok(())
    }

    pub fn variable(&self, name: char) -> Value {
        self.vars.get(name)
    }

    pub fn set_variable(&mut self, name: char, value: Value) {
        self.vars.set(name, value)
    }

    /// Number of control-flow diagnostics since the last restart.
    pub fn diagnostics(&self) -> usize {
        self.diagnostics
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.index
    }

    /// The line being executed, or last executed.
    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn gosub_depth(&self) -> usize {
        self.gosub_stack.len()
    }

    /// Active FOR loops, outermost first.
    pub fn for_loops(&self) -> std::slice::Iter<'_, ForLoop> {
        self.for_stack.iter()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn line_statement(&mut self) -> Result<()> {
        let position = self.cursor.position();
        let line_number = self.line_number_literal()?;
        self.line_number = Some(line_number);
        self.index.record(line_number, position);
        debug!(line = line_number, position, "line");
        match self.cursor.current() {
            Token::Newline => {
                self.cursor.advance();
                Ok(())
            }
            Token::EndOfInput => Ok(()),
            _ => self.statement(),
        }
    }

    pub(super) fn accept(&mut self, token: Token) -> Result<()> {
        if self.cursor.current() != token {
            return Err(self.unexpected(token.kind_name()));
        }
        self.cursor.advance();
        Ok(())
    }

    /// Consumes the end of a statement. After a taken THEN branch an ELSE
    /// also ends the statement and the rest of the line is skipped.
    pub(super) fn end_of_statement(&mut self) -> Result<()> {
        if self.then_branch {
            if let Token::Word(Word::Else) = self.cursor.current() {
                self.skip_to_end_of_line();
            }
        }
        match self.cursor.current() {
            Token::Newline => {
                self.cursor.advance();
                Ok(())
            }
            Token::EndOfInput => Ok(()),
            _ => Err(self.unexpected("END OF LINE")),
        }
    }

    pub(super) fn skip_to_end_of_line(&mut self) {
        while !self.cursor.current().is_end_of_line() {
            self.cursor.advance();
        }
    }

    pub(super) fn line_number_literal(&mut self) -> Result<LineNumber> {
        match self.cursor.current() {
            Token::Literal(Literal::Integer(n)) => {
                self.cursor.advance();
                Ok(n as LineNumber)
            }
            _ => Err(self.unexpected("LINE NUMBER")),
        }
    }

    pub(super) fn ident(&mut self) -> Result<Ident> {
        match self.cursor.current() {
            Token::Ident(ident) => {
                self.cursor.advance();
                Ok(ident)
            }
            _ => Err(self.unexpected("VARIABLE")),
        }
    }

    /// The number of the line the cursor sits on, if any.
    pub(super) fn following_line(&self) -> Resume {
        match self.cursor.current() {
            Token::Literal(Literal::Integer(n)) => Some(n as LineNumber),
            _ => None,
        }
    }

    pub(super) fn unexpected(&self, expected: &'static str) -> Error {
        let found = self.cursor.current();
        let span = self.cursor.span();
        let error = match found {
            Token::Unknown(message) => error!(SyntaxError, ..&span; message),
            _ => error!(SyntaxError, ..&span),
        };
        error.expecting(expected, found.to_string())
    }

    pub(super) fn diagnose(&mut self, error: Error) {
        let error = error.or_line_number(self.line_number);
        warn!(%error, "control flow");
        self.diagnostics += 1;
        self.host.diagnostic(&error);
    }

    /// Where `resume` continues: the start of its line, or the end of the
    /// text. Nothing moves.
    pub(super) fn locate_resume(&self, resume: Resume) -> Result<usize> {
        match resume {
            Some(line) => self.locate_line(line),
            None => {
                debug!("resume past the last line");
                Ok(self.cursor.text().len())
            }
        }
    }

    pub(super) fn jump_to_line(&mut self, line: LineNumber) -> Result<()> {
        let position = self.locate_line(line)?;
        self.cursor.reset(position);
        Ok(())
    }

    /// Finds the start of `line`. Lines already executed come from the
    /// index; others are found by rescanning the program line by line on
    /// a scratch cursor. The rescan does not add to the index.
    pub(super) fn locate_line(&self, line: LineNumber) -> Result<usize> {
        if let Some(position) = self.index.lookup(line) {
            debug!(line, position, "jump via index");
            return Ok(position);
        }
        debug!(line, "jump via rescan");
        let mut scan = self.cursor.clone();
        scan.reset(self.program_start);
        loop {
            if let Token::Literal(Literal::Integer(n)) = scan.current() {
                if n as LineNumber == line {
                    return Ok(scan.position());
                }
            }
            while !scan.current().is_end_of_line() {
                scan.advance();
            }
            if scan.current() == Token::EndOfInput {
                return Err(error!(UndefinedLine));
            }
            scan.advance();
        }
    }
}
