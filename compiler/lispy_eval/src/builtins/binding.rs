//! Binding primitives: `def`, `=`, and `\`.

use super::{expect_count, expect_qexprs};
use crate::environment::Environment;
use crate::errors::{binding_count_mismatch, missing_arguments, type_mismatch, EvalError};
use crate::value::{Closure, Value};

/// Where `bind` stores its symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Scope {
    /// `def`: the root frame, whatever the call depth.
    Global,
    /// `=`: the current frame.
    Local,
}

impl Scope {
    fn function(self) -> &'static str {
        match self {
            Scope::Global => "def",
            Scope::Local => "=",
        }
    }
}

/// Collect the names in a `QExpr` of symbols.
fn symbol_names(function: &'static str, argument: usize, list: Value) -> Result<Vec<String>, EvalError> {
    list.into_cells()
        .into_iter()
        .map(|cell| match cell {
            Value::Symbol(name) => Ok(name),
            other => Err(type_mismatch(function, argument, "Symbol", other.type_name())),
        })
        .collect()
}

/// `def {a b} 1 2` / `= {a b} 1 2`.
pub(super) fn bind(env: &Environment, scope: Scope, mut args: Value) -> Result<Value, EvalError> {
    let function = scope.function();
    let symbols = match args.pop(0) {
        None => return Err(missing_arguments(function)),
        Some(list @ Value::QExpr(_)) => list,
        Some(other) => {
            return Err(type_mismatch(function, 0, "Q-Expression", other.type_name()));
        }
    };
    let names = symbol_names(function, 0, symbols)?;

    if names.len() != args.len() {
        return Err(binding_count_mismatch(function, names.len(), args.len()));
    }

    for (name, value) in names.into_iter().zip(args.into_cells()) {
        match scope {
            Scope::Global => env.define_global(name, value),
            Scope::Local => env.put(name, value),
        }
    }
    Ok(Value::unit())
}

/// `\ {formals} {body}`.
pub(super) fn lambda(args: Value) -> Result<Value, EvalError> {
    expect_count("\\", &args, 2)?;
    expect_qexprs("\\", &args)?;

    let mut cells = args.into_cells().into_iter();
    let (Some(formals), Some(body)) = (cells.next(), cells.next()) else {
        return Err(missing_arguments("\\"));
    };
    let formals = symbol_names("\\", 0, formals)?;
    Ok(Value::closure(Closure::new(formals, body.into_cells())))
}
