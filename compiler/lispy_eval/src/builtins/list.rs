//! List primitives: `list`, `head`, `tail`, `eval`, `join`.

use super::{expect_qexprs, single_qexpr};
use crate::environment::Environment;
use crate::errors::{empty_list, type_mismatch, EvalError};
use crate::eval::evaluate;
use crate::value::Value;

/// The argument list itself, retagged as literal.
pub(super) fn list(args: Value) -> Value {
    args.into_qexpr()
}

/// `{a b c}` to `{a}`.
pub(super) fn head(args: Value) -> Result<Value, EvalError> {
    let mut list = single_qexpr("head", args)?;
    if let Some(cells) = list.cells_mut() {
        if cells.is_empty() {
            return Err(empty_list("head"));
        }
        cells.truncate(1);
    }
    Ok(list)
}

/// `{a b c}` to `{b c}`.
pub(super) fn tail(args: Value) -> Result<Value, EvalError> {
    let mut list = single_qexpr("tail", args)?;
    if list.pop(0).is_none() {
        return Err(empty_list("tail"));
    }
    Ok(list)
}

/// Evaluate a `QExpr` as if it were an `SExpr`.
pub(super) fn eval(env: &Environment, args: Value) -> Result<Value, EvalError> {
    let list = single_qexpr("eval", args)?;
    Ok(evaluate(env, list.into_sexpr()))
}

/// Concatenate every `QExpr` argument, in order.
pub(super) fn join(args: Value) -> Result<Value, EvalError> {
    expect_qexprs("join", &args)?;
    args.into_cells()
        .into_iter()
        .enumerate()
        .try_fold(Value::qexpr(Vec::new()), |joined, (index, source)| {
            let got = source.type_name();
            joined
                .join(source)
                .ok_or_else(|| type_mismatch("join", index, "Q-Expression", got))
        })
}
