//! Driving an interpreter from files and `-e` expressions.

use std::io::{self, Write};

use lispy_eval::{Interpreter, SourceError, Value};

use crate::cli::Options;
use crate::diagnostic::report_parse_error;
use crate::repl;

/// A failure that ends the run with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("{message}")]
    Read { path: String, message: String },

    #[error("{name}: {error}")]
    Source {
        name: String,
        #[source]
        error: SourceError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What a read failure says to the user.
fn describe_read_error(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

/// Report a source error against the text it came from.
fn source_error(name: &str, source: &str, error: SourceError) -> DriverError {
    if let SourceError::Parse(parse) = &error {
        report_parse_error(name, source, parse);
    }
    DriverError::Source {
        name: name.to_string(),
        error,
    }
}

/// Evaluate every expression of `source`, writing error results to
/// `diagnostics`. Other results are discarded, as when loading a library.
pub fn load_source<W: Write>(
    interp: &Interpreter,
    name: &str,
    source: &str,
    diagnostics: &mut W,
) -> Result<(), DriverError> {
    let results = interp
        .eval_source(source)
        .map_err(|error| source_error(name, source, error))?;
    for result in results.iter().filter(|result| result.is_error()) {
        writeln!(diagnostics, "{name}: {result}")?;
    }
    Ok(())
}

pub fn load_file<W: Write>(
    interp: &Interpreter,
    path: &str,
    diagnostics: &mut W,
) -> Result<(), DriverError> {
    let source = std::fs::read_to_string(path).map_err(|err| DriverError::Read {
        path: path.to_string(),
        message: describe_read_error(path, &err),
    })?;
    tracing::debug!(path, len = source.len(), "loading file");
    load_source(interp, path, &source, diagnostics)
}

/// Evaluate `expr` as one line and print its result to `out`.
pub fn eval_expr<W: Write>(interp: &Interpreter, expr: &str, out: &mut W) -> Result<Value, DriverError> {
    let value = interp
        .eval_line(expr)
        .map_err(|error| source_error("<expr>", expr, error))?;
    writeln!(out, "{value}")?;
    Ok(value)
}

/// Run the driver: files, then expressions, then (maybe) the REPL.
pub fn run(options: &Options) -> Result<(), DriverError> {
    let interp = Interpreter::new();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    for path in &options.files {
        load_file(&interp, path, &mut stderr)?;
    }
    for expr in &options.exprs {
        eval_expr(&interp, expr, &mut stdout)?;
    }
    drop(stderr);

    if options.wants_repl() {
        let stdin = io::stdin();
        let interactive = io::IsTerminal::is_terminal(&stdin);
        repl::run_repl(&interp, stdin.lock(), &mut stdout, interactive)?;
    }
    Ok(())
}
