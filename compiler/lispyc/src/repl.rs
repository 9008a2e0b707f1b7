//! The read-eval-print loop.

use std::io::{self, BufRead, Write};

use lispy_eval::{Interpreter, SourceError};

use crate::diagnostic::report_parse_error;

pub const PROMPT: &str = "lispy> ";

/// Read lines from `input` until end of input, evaluating each as one
/// S-expression and printing the result to `out`.
///
/// With `interactive` set, a banner and a prompt are written too. A line
/// that fails to parse is reported and the loop carries on.
pub fn run_repl<R: BufRead, W: Write>(
    interp: &Interpreter,
    input: R,
    out: &mut W,
    interactive: bool,
) -> io::Result<()> {
    if interactive {
        writeln!(out, "Lispy Version {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "Press Ctrl+D to exit")?;
        writeln!(out)?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match interp.eval_line(&line) {
            Ok(value) => writeln!(out, "{value}")?,
            Err(SourceError::Parse(err)) => report_parse_error("<stdin>", &line, &err),
            Err(err) => writeln!(out, "Error: {err}")?,
        }
    }

    if interactive {
        writeln!(out)?;
    }
    Ok(())
}
