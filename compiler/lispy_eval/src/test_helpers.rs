//! Shared fixtures for unit tests.

use lispy_parse::parse;

use crate::{evaluate, install_builtins, read, Environment, ErrorCategory, Value};

/// A root environment with every builtin installed.
pub(crate) fn global_env() -> Environment {
    let env = Environment::new();
    install_builtins(&env);
    env
}

/// Read `source` as one S-expression and evaluate it in `env`.
pub(crate) fn eval_in(env: &Environment, source: &str) -> Value {
    let tree = parse(source).unwrap_or_else(|err| panic!("parse {source:?}: {err}"));
    evaluate(env, read(&tree))
}

/// Evaluate `source` in a fresh global environment.
pub(crate) fn eval_str(source: &str) -> Value {
    eval_in(&global_env(), source)
}

pub(crate) fn num(n: i64) -> Value {
    Value::number(n)
}

pub(crate) fn q(cells: Vec<Value>) -> Value {
    Value::qexpr(cells)
}

/// The category of an error value; panics on anything else.
pub(crate) fn category(value: &Value) -> ErrorCategory {
    match value {
        Value::Error(err) => err.category(),
        other => panic!("expected an error value, got {other}"),
    }
}
