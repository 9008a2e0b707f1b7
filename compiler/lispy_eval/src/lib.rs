#![deny(clippy::arithmetic_side_effects)]
//! Lispy Eval - the evaluation core of the Lispy language.
//!
//! # Architecture
//!
//! - [`Value`]: the tagged recursive runtime value. List forms own their
//!   elements outright; extracting one is a move.
//! - [`Environment`]: a frame of bindings with an optional parent, shared by
//!   reference (`Rc<RefCell<_>>`) along the scope chain.
//! - [`read`]: adapter from a generic parse tree ([`SyntaxNode`]) to a
//!   `Value` tree.
//! - [`evaluate`]: the single recursive reduction entry point.
//! - [`apply`]: builtin dispatch and closure binding (partial application,
//!   `&` rest arguments).
//! - [`Builtin`]: the closed set of primitives, installed into the root
//!   environment by [`install_builtins`].
//! - [`Interpreter`]: owns a root environment and evaluates source text.
//!
//! Errors are values: every fallible operation returns `Value::Error`.

mod apply;
mod builtins;
mod environment;
pub mod errors;
mod eval;
mod interpreter;
mod reader;
mod stack;
#[cfg(test)]
mod test_helpers;
mod value;

pub use apply::apply;
pub use builtins::{install as install_builtins, Builtin};
pub use environment::{Environment, Frame};
pub use errors::{ErrorCategory, EvalError};
pub use eval::evaluate;
pub use interpreter::{Interpreter, InterpreterBuilder, SourceError};
pub use reader::{read, SyntaxNode};
pub use stack::ensure_sufficient_stack;
pub use value::{Cells, Closure, Function, Value, REST_MARKER};
