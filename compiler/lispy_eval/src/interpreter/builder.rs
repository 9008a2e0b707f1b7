//! `InterpreterBuilder` for creating interpreters with a prelude or a
//! caller-supplied environment.

use super::{EnvOwnership, Interpreter, SourceError};
use crate::builtins;
use crate::environment::Environment;
use crate::value::Value;

/// Builder for [`Interpreter`].
///
/// Defaults match [`Interpreter::new`]: a fresh root environment with the
/// builtins installed and no prelude.
pub struct InterpreterBuilder {
    env: Option<Environment>,
    builtins: bool,
    preludes: Vec<String>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            env: None,
            builtins: true,
            preludes: Vec::new(),
        }
    }

    /// Evaluate in `env` instead of a fresh root environment.
    ///
    /// The caller keeps ownership: dropping the interpreter leaves `env`'s
    /// bindings in place.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Whether to install the builtin registry.
    #[must_use]
    pub fn builtins(mut self, install: bool) -> Self {
        self.builtins = install;
        self
    }

    /// Append source text to evaluate when the interpreter is built.
    ///
    /// Preludes run in the order they were added.
    #[must_use]
    pub fn prelude(mut self, source: impl Into<String>) -> Self {
        self.preludes.push(source.into());
        self
    }

    /// Build the interpreter and run its preludes.
    ///
    /// Fails on the first prelude that does not parse or whose top-level
    /// expressions produce an error value.
    pub fn build(self) -> Result<Interpreter, SourceError> {
        let (env, ownership) = match self.env {
            Some(env) => (env, EnvOwnership::Borrowed),
            None => (Environment::new(), EnvOwnership::Owned),
        };
        if self.builtins {
            builtins::install(&env);
        }

        let interpreter = Interpreter::from_parts(env, ownership);
        for (index, source) in self.preludes.iter().enumerate() {
            tracing::debug!(index, "running prelude");
            for result in interpreter.eval_source(source)? {
                if let Value::Error(error) = result {
                    return Err(SourceError::Prelude { index, error });
                }
            }
        }
        Ok(interpreter)
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        InterpreterBuilder::new()
    }
}
