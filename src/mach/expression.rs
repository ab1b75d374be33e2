use super::{Host, Operation, Runtime};
use crate::lang::token::{Literal, Operator, Token};
use crate::lang::{Error, Value};
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

// relation := expr (('<' | '>' | '=') expr)*
// expr     := term (('+' | '-' | '&' | '|') term)*
// term     := factor (('*' | '/' | '%') factor)*
// factor   := NUMBER | '(' expr ')' | VARIABLE

fn relational(token: Token) -> Option<Operator> {
    use Operator::*;
    match token {
        Token::Operator(op) => match op {
            Less | Greater | Equal => Some(op),
            _ => None,
        },
        _ => None,
    }
}

fn additive(token: Token) -> Option<Operator> {
    use Operator::*;
    match token {
        Token::Operator(op) => match op {
            Plus | Minus | And | Or => Some(op),
            _ => None,
        },
        _ => None,
    }
}

fn multiplicative(token: Token) -> Option<Operator> {
    use Operator::*;
    match token {
        Token::Operator(op) => match op {
            Multiply | Divide | Modulus => Some(op),
            _ => None,
        },
        _ => None,
    }
}

impl<'a, H: Host> Runtime<'a, H> {
    /// Comparisons yield 0 or 1 and chain left to right, so `1<2<3` is
    /// `(1<2)<3`.
    pub(super) fn relation(&mut self) -> Result<Value> {
        let mut lhs = self.expr()?;
        while let Some(op) = relational(self.cursor.current()) {
            lhs = self.apply(op, lhs, Self::expr)?;
        }
        trace!(value = lhs, "relation");
        Ok(lhs)
    }

    pub(super) fn expr(&mut self) -> Result<Value> {
        let mut lhs = self.term()?;
        while let Some(op) = additive(self.cursor.current()) {
            lhs = self.apply(op, lhs, Self::term)?;
        }
        trace!(value = lhs, "expr");
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Value> {
        let mut lhs = self.factor()?;
        while let Some(op) = multiplicative(self.cursor.current()) {
            lhs = self.apply(op, lhs, Self::factor)?;
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Value> {
        match self.cursor.current() {
            Token::Literal(Literal::Integer(n)) => {
                self.cursor.advance();
                Ok(n)
            }
            Token::LParen => {
                self.cursor.advance();
                let value = self.expr()?;
                self.accept(Token::RParen)?;
                Ok(value)
            }
            Token::Ident(ident) => {
                self.cursor.advance();
                Ok(self.vars.fetch(ident))
            }
            _ => Err(self.unexpected("EXPRESSION")),
        }
    }

    /// Consumes the operator at the cursor, parses the right operand with
    /// `operand` and combines the two.
    fn apply(
        &mut self,
        op: Operator,
        lhs: Value,
        operand: fn(&mut Self) -> Result<Value>,
    ) -> Result<Value> {
        let span = self.cursor.span();
        self.cursor.advance();
        let rhs = operand(self)?;
        Operation::binary(op, lhs, rhs).map_err(|e| e.in_column(&span))
    }
}
