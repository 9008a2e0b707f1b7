//! The reduction engine.

use crate::apply::apply;
use crate::environment::Environment;
use crate::errors::non_function_application;
use crate::stack::ensure_sufficient_stack;
use crate::value::{Cells, Value};

/// Reduce `value` to its final value in `env`.
///
/// Symbols resolve through the environment chain, S-expressions are
/// reduced, and every other variant (including `QExpr`) is returned as is.
pub fn evaluate(env: &Environment, value: Value) -> Value {
    match value {
        Value::Symbol(name) => env.get(&name).unwrap_or_else(Value::Error),
        Value::SExpr(cells) => ensure_sufficient_stack(|| evaluate_sexpr(env, cells)),
        other => other,
    }
}

/// Evaluate all children left to right, then apply.
///
/// The first error in left-to-right order wins, even if later children
/// also failed; all other children are dropped.
fn evaluate_sexpr(env: &Environment, cells: Cells) -> Value {
    let cells: Cells = cells.into_iter().map(|cell| evaluate(env, cell)).collect();
    let mut expr = Value::SExpr(cells);

    if let Some(index) = expr.cells().iter().position(Value::is_error) {
        return expr.take(index).unwrap_or_else(Value::unit);
    }

    match expr.len() {
        0 => return expr,
        1 => return expr.take(0).unwrap_or_else(Value::unit),
        _ => {}
    }

    match expr.pop(0) {
        Some(Value::Function(function)) => apply(env, function, expr),
        Some(other) => Value::Error(non_function_application(other.type_name())),
        None => expr,
    }
}
