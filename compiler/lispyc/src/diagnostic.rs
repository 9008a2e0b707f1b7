//! Parse-error rendering with source snippets.

use std::io;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use lispy_parse::ParseError;

/// The label drawn under the offending text.
fn label_message(err: &ParseError) -> String {
    match err {
        ParseError::UnexpectedChar { .. } => "not part of any token".to_string(),
        ParseError::UnclosedDelimiter { .. } => "opened here and never closed".to_string(),
        ParseError::UnexpectedCloser { .. } => "nothing to close".to_string(),
        ParseError::MismatchedCloser { expected, .. } => format!("expected '{expected}' here"),
    }
}

/// Write a report for `err` against `source` to `out`.
///
/// `name` identifies the source (a file path, or `<expr>` for `-e`).
pub fn write_parse_error<W: io::Write>(
    out: W,
    name: &str,
    source: &str,
    err: &ParseError,
    color: bool,
) -> io::Result<()> {
    let span = err.span();
    Report::build(ReportKind::Error, (), span.start)
        .with_config(Config::default().with_color(color))
        .with_message(format!("{name}: {err}"))
        .with_label(
            Label::new(span.range())
                .with_message(label_message(err))
                .with_color(Color::Red),
        )
        .finish()
        .write(Source::from(source.to_string()), out)
}

/// Render `err` to stderr, coloured when stderr is a terminal.
pub fn report_parse_error(name: &str, source: &str, err: &ParseError) {
    let color = io::IsTerminal::is_terminal(&io::stderr());
    if write_parse_error(io::stderr(), name, source, err, color).is_err() {
        eprintln!("{name}: {err}");
    }
}
