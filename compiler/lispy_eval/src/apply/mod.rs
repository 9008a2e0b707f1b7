//! Function application and closure argument binding.

use std::collections::VecDeque;
use std::mem;

use crate::environment::Environment;
use crate::errors::{malformed_lambda, too_many_arguments, EvalError};
use crate::eval::evaluate;
use crate::value::{Closure, Function, Value, REST_MARKER};

/// Apply `function` to the argument list `args` (an `SExpr`).
///
/// Builtins are dispatched directly. Closures bind formals to arguments;
/// when every formal is bound the body runs, otherwise the partially bound
/// closure is returned.
pub fn apply(env: &Environment, function: Function, args: Value) -> Value {
    match function {
        Function::Builtin(builtin) => builtin.call(env, args),
        Function::Closure(closure) => call_closure(env, closure, args).into(),
    }
}

/// Which kind of binding the next formal performs.
enum Binding {
    /// An ordinary formal takes exactly one argument.
    Positional(String),
    /// `& name` takes all remaining arguments as a `QExpr`.
    Rest(String),
}

/// Pop the next formal, recognising `& name`.
///
/// `&` must be followed by exactly one formal and nothing else.
fn next_binding(formals: &mut VecDeque<String>) -> Result<Option<Binding>, EvalError> {
    let Some(formal) = formals.pop_front() else {
        return Ok(None);
    };
    if formal != REST_MARKER {
        return Ok(Some(Binding::Positional(formal)));
    }
    match (formals.pop_front(), formals.is_empty()) {
        (Some(rest), true) if rest != REST_MARKER => Ok(Some(Binding::Rest(rest))),
        _ => Err(malformed_lambda("'&' not followed by a single symbol")),
    }
}

#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(formals = closure.formals.len(), args = args.len())
)]
fn call_closure(env: &Environment, mut closure: Closure, args: Value) -> Result<Value, EvalError> {
    let expected = closure.formals.len();
    let mut args: VecDeque<Value> = args.into_cells().into();
    let given = args.len();
    let mut formals: VecDeque<String> = mem::take(&mut closure.formals).into();

    while !args.is_empty() {
        match next_binding(&mut formals)? {
            None => return Err(too_many_arguments(expected, given)),
            Some(Binding::Positional(name)) => {
                if let Some(arg) = args.pop_front() {
                    tracing::trace!(%name, "bind");
                    closure.frame.put(name, arg);
                }
            }
            Some(Binding::Rest(name)) => {
                tracing::trace!(%name, count = args.len(), "bind rest");
                let rest = Value::qexpr(args.drain(..).collect());
                closure.frame.put(name, rest);
            }
        }
    }

    // Arguments ran out on `& name`: the rest list is empty.
    if formals.front().is_some_and(|formal| formal == REST_MARKER) {
        if let Some(Binding::Rest(name)) = next_binding(&mut formals)? {
            closure.frame.put(name, Value::qexpr(Vec::new()));
        }
    }

    if !formals.is_empty() {
        closure.formals = formals.into();
        return Ok(Value::closure(closure));
    }

    let Closure { body, mut frame, .. } = closure;
    frame.set_parent(Some(env.clone()));
    let call_env = Environment::from_frame(frame);
    Ok(evaluate(&call_env, Value::sexpr(body)))
}
