//! Numeric primitives: `+ - * / %`.
//!
//! All integer arithmetic is checked; overflow is an error value.

use crate::errors::{
    division_by_zero, integer_overflow, missing_arguments, type_mismatch, EvalError,
};
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Arith {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Arith {
    fn name(self) -> &'static str {
        match self {
            Arith::Add => "+",
            Arith::Sub => "-",
            Arith::Mul => "*",
            Arith::Div => "/",
            Arith::Rem => "%",
        }
    }

    fn apply(self, acc: i64, rhs: i64) -> Result<i64, EvalError> {
        let (result, operation) = match self {
            Arith::Add => (acc.checked_add(rhs), "addition"),
            Arith::Sub => (acc.checked_sub(rhs), "subtraction"),
            Arith::Mul => (acc.checked_mul(rhs), "multiplication"),
            Arith::Div | Arith::Rem if rhs == 0 => return Err(division_by_zero()),
            Arith::Div => (acc.checked_div(rhs), "division"),
            Arith::Rem => (acc.checked_rem(rhs), "remainder"),
        };
        result.ok_or_else(|| integer_overflow(operation))
    }
}

/// Left fold over the arguments; `-` with one argument negates.
///
/// Every argument is type-checked before any arithmetic happens.
pub(super) fn fold(op: Arith, args: Value) -> Result<Value, EvalError> {
    let numbers = args
        .cells()
        .iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.as_number()
                .ok_or_else(|| type_mismatch(op.name(), index, "Number", arg.type_name()))
        })
        .collect::<Result<Vec<i64>, EvalError>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(missing_arguments(op.name()));
    };

    if op == Arith::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| integer_overflow("negation"));
    }

    rest.iter()
        .try_fold(first, |acc, &rhs| op.apply(acc, rhs))
        .map(Value::Number)
}
