//! The interpreter: a root environment plus source-text entry points.

mod builder;

pub use builder::InterpreterBuilder;

use lispy_parse::{parse, ParseError};

use crate::builtins;
use crate::environment::Environment;
use crate::errors::EvalError;
use crate::eval::evaluate;
use crate::reader::read;
use crate::value::Value;

/// Failure to turn source text into values.
///
/// Evaluation errors are values and never show up here; only text that
/// does not parse, or a prelude that evaluates to an error, does.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("prelude {index} failed: {error}")]
    Prelude {
        index: usize,
        #[source]
        error: EvalError,
    },
}

/// Whether dropping the interpreter tears down its root environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EnvOwnership {
    /// Created by the interpreter; cleared on drop.
    Owned,
    /// Supplied by the caller, who keeps it alive.
    Borrowed,
}

/// Owns a root environment and evaluates source text against it.
pub struct Interpreter {
    env: Environment,
    ownership: EnvOwnership,
}

impl Interpreter {
    /// A fresh root environment with every builtin installed.
    pub fn new() -> Self {
        let env = Environment::new();
        builtins::install(&env);
        Interpreter {
            env,
            ownership: EnvOwnership::Owned,
        }
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The root environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Evaluate an already-read value in the root environment.
    pub fn eval(&self, value: Value) -> Value {
        evaluate(&self.env, value)
    }

    /// Evaluate every top-level expression of `source`, in order.
    ///
    /// An expression that evaluates to an error does not stop the rest;
    /// each result is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn eval_source(&self, source: &str) -> Result<Vec<Value>, SourceError> {
        let exprs = read(&parse(source)?).into_cells();
        tracing::debug!(count = exprs.len(), "top-level expressions");
        Ok(exprs.into_iter().map(|expr| self.eval(expr)).collect())
    }

    /// Evaluate `source` as a single S-expression, the way a REPL line is.
    ///
    /// `+ 1 2` is one application here, while `eval_source` would see three
    /// separate expressions.
    pub fn eval_line(&self, source: &str) -> Result<Value, SourceError> {
        let tree = parse(source)?;
        Ok(self.eval(read(&tree)))
    }

    fn from_parts(env: Environment, ownership: EnvOwnership) -> Self {
        Interpreter { env, ownership }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Drop for Interpreter {
    fn drop(&mut self) {
        if self.ownership == EnvOwnership::Owned {
            tracing::trace!("tear down root environment");
            self.env.clear();
        }
    }
}
