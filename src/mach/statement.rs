use super::runtime::ForLoop;
use super::{Host, Operation, Runtime};
use crate::error;
use crate::lang::token::{Literal, Operator, Token, Word};
use crate::lang::{Error, Value};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// PRINT and USER share one item grammar and differ only in where the
/// items go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Print,
    User,
}

impl Channel {
    fn begin<H: Host>(self, host: &mut H) {
        match self {
            Channel::Print => host.print_begin(),
            Channel::User => host.user_begin(),
        }
    }
    fn number<H: Host>(self, host: &mut H, value: Value) {
        match self {
            Channel::Print => host.print_number(value),
            Channel::User => host.user_number(value),
        }
    }
    fn string<H: Host>(self, host: &mut H, text: &str) {
        match self {
            Channel::Print => host.print_string(text),
            Channel::User => host.user_string(text),
        }
    }
    fn separator<H: Host>(self, host: &mut H, separator: char) {
        match self {
            Channel::Print => host.print_separator(separator),
            Channel::User => host.user_separator(separator),
        }
    }
    fn end<H: Host>(self, host: &mut H) {
        match self {
            Channel::Print => host.print_end(),
            Channel::User => host.user_end(),
        }
    }
}

impl<'a, H: Host> Runtime<'a, H> {
    pub(super) fn statement(&mut self) -> Result<()> {
        match self.cursor.current() {
            Token::Word(Word::Print) => self.print_statement(Channel::Print),
            Token::Word(Word::User) => self.print_statement(Channel::User),
            Token::Word(Word::If) => self.if_statement(),
            Token::Word(Word::Goto) => self.goto_statement(),
            Token::Word(Word::Gosub) => self.gosub_statement(),
            Token::Word(Word::Return) => self.return_statement(),
            Token::Word(Word::For) => self.for_statement(),
            Token::Word(Word::Next) => self.next_statement(),
            Token::Word(Word::Input) => self.input_statement(),
            Token::Word(Word::Peek) => self.peek_statement(),
            Token::Word(Word::Poke) => self.poke_statement(),
            Token::Word(Word::End) => self.end_statement(),
            Token::Word(Word::Let) => {
                self.cursor.advance();
                self.let_statement()
            }
            Token::Ident(_) => self.let_statement(),
            _ => Err(self.unexpected("STATEMENT")),
        }
    }

    fn print_statement(&mut self, channel: Channel) -> Result<()> {
        self.cursor.advance();
        channel.begin(&mut self.host);
        let items = self.print_items(channel);
        channel.end(&mut self.host);
        items?;
        self.end_of_statement()
    }

    fn print_items(&mut self, channel: Channel) -> Result<()> {
        loop {
            match self.cursor.current() {
                Token::Literal(Literal::String(s)) => {
                    channel.string(&mut self.host, s);
                    self.cursor.advance();
                }
                Token::Comma => {
                    channel.separator(&mut self.host, ',');
                    self.cursor.advance();
                }
                Token::Semicolon => {
                    if channel == Channel::User {
                        channel.separator(&mut self.host, ';');
                    }
                    self.cursor.advance();
                }
                Token::Ident(_) | Token::Literal(Literal::Integer(_)) | Token::LParen => {
                    let value = self.expr()?;
                    channel.number(&mut self.host, value);
                }
                _ => break,
            }
            if self.cursor.current().is_end_of_line() {
                break;
            }
        }
        Ok(())
    }

    fn if_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::If))?;
        let condition = self.relation()?;
        self.accept(Token::Word(Word::Then))?;
        debug!(condition, "if");
        if condition != 0 {
            self.then_branch = true;
            let result = self.statement();
            self.then_branch = false;
            return result;
        }
        loop {
            match self.cursor.current() {
                Token::Word(Word::Else) => {
                    self.cursor.advance();
                    return self.statement();
                }
                Token::Newline => {
                    self.cursor.advance();
                    return Ok(());
                }
                Token::EndOfInput => return Ok(()),
                _ => self.cursor.advance(),
            }
        }
    }

    fn goto_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Goto))?;
        let line = self.line_number_literal()?;
        self.jump_to_line(line)
    }

    fn gosub_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Gosub))?;
        let line = self.line_number_literal()?;
        let target = self.locate_line(line)?;
        self.end_of_statement()?;
        let resume = self.following_line();
        match self.gosub_stack.push(resume) {
            Ok(()) => {
                debug!(line, depth = self.gosub_stack.len(), "gosub");
                self.cursor.reset(target);
            }
            Err(error) => self.diagnose(error),
        }
        Ok(())
    }

    fn return_statement(&mut self) -> Result<()> {
        let span = self.cursor.span();
        self.accept(Token::Word(Word::Return))?;
        let resume = match self.gosub_stack.last().copied() {
            Some(resume) => resume,
            None => {
                self.diagnose(error!(ReturnWithoutGosub, ..&span));
                return self.end_of_statement();
            }
        };
        let target = self.locate_resume(resume)?;
        self.gosub_stack.pop();
        debug!(?resume, depth = self.gosub_stack.len(), "return");
        self.cursor.reset(target);
        Ok(())
    }

    fn for_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::For))?;
        let ident = self.ident()?;
        self.accept(Token::Operator(Operator::Equal))?;
        let start = self.expr()?;
        self.accept(Token::Word(Word::To))?;
        let bound = self.expr()?;
        self.end_of_statement()?;
        self.vars.store(ident, start);
        let for_loop = ForLoop {
            ident,
            bound,
            resume: self.following_line(),
        };
        match self.for_stack.push(for_loop) {
            Ok(()) => debug!(%ident, start, bound, "for"),
            Err(error) => self.diagnose(error),
        }
        Ok(())
    }

    fn next_statement(&mut self) -> Result<()> {
        let span = self.cursor.span();
        self.accept(Token::Word(Word::Next))?;
        let ident = self.ident()?;
        let for_loop = match self.for_stack.last().copied() {
            Some(for_loop) if for_loop.ident == ident => for_loop,
            _ => {
                self.diagnose(error!(NextWithoutFor, ..&span));
                return self.end_of_statement();
            }
        };
        let value = Operation::sum(self.vars.fetch(ident), 1).map_err(|e| e.in_column(&span))?;
        if value <= for_loop.bound {
            let target = self.locate_resume(for_loop.resume)?;
            debug!(%ident, value, "next");
            self.vars.store(ident, value);
            self.cursor.reset(target);
            Ok(())
        } else {
            self.vars.store(ident, value);
            self.for_stack.pop();
            self.end_of_statement()
        }
    }

    fn input_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Input))?;
        let prompt = self.expr()?;
        self.accept(Token::Comma)?;
        let ident = self.ident()?;
        self.end_of_statement()?;
        if let Some(value) = self.host.input(prompt) {
            self.vars.store(ident, value);
        }
        Ok(())
    }

    fn peek_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Peek))?;
        let address = self.expr()?;
        self.accept(Token::Comma)?;
        let ident = self.ident()?;
        self.end_of_statement()?;
        if let Some(value) = self.host.peek(address) {
            self.vars.store(ident, value);
        }
        Ok(())
    }

    fn poke_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Poke))?;
        let address = self.expr()?;
        self.accept(Token::Comma)?;
        let value = self.expr()?;
        self.end_of_statement()?;
        self.host.poke(address, value);
        Ok(())
    }

    fn end_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::End))?;
        debug!("end");
        self.ended = true;
        Ok(())
    }

    fn let_statement(&mut self) -> Result<()> {
        let ident = self.ident()?;
        self.accept(Token::Operator(Operator::Equal))?;
        let value = self.expr()?;
        self.vars.store(ident, value);
        debug!(%ident, value, "let");
        self.end_of_statement()
    }
}
