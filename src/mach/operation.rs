use crate::error;
use crate::lang::token::Operator;
use crate::lang::{Error, Value};

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: Value, rhs: Value) -> Result<Value> {
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            And => Ok(lhs & rhs),
            Or => Ok(lhs | rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Modulus => Operation::remainder(lhs, rhs),
            Less => Ok((lhs < rhs) as Value),
            Greater => Ok((lhs > rhs) as Value),
            Equal => Ok((lhs == rhs) as Value),
        }
    }

    pub fn sum(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn divide(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn remainder(lhs: Value, rhs: Value) -> Result<Value> {
        match lhs.checked_rem(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }
}
