//! Lispy command-line driver.
//!
//! The binary is a thin shell over these modules:
//!
//! - [`cli`]: hand-parsed command line.
//! - [`run`]: loading files and `-e` expressions into an interpreter.
//! - [`repl`]: the line-at-a-time read-eval-print loop.
//! - [`diagnostic`]: rendering parse errors against their source.
//! - [`tracing_setup`]: opt-in logging controlled by `LISPY_LOG`.

pub mod cli;
pub mod diagnostic;
pub mod repl;
pub mod run;
pub mod tracing_setup;
