//! Parse errors.

use crate::span::Span;

/// Failure to turn source text into a parse tree.
///
/// Every variant carries the span of the offending text so the driver
/// can point at it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected character '{ch}'")]
    UnexpectedChar { ch: char, span: Span },

    #[error("unclosed '{open}'")]
    UnclosedDelimiter { open: char, span: Span },

    #[error("unexpected '{closer}' with no matching opener")]
    UnexpectedCloser { closer: char, span: Span },

    #[error("expected '{expected}' to close the list, found '{found}'")]
    MismatchedCloser {
        expected: char,
        found: char,
        span: Span,
    },
}

impl ParseError {
    /// Source span the error refers to.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedChar { span, .. }
            | ParseError::UnclosedDelimiter { span, .. }
            | ParseError::UnexpectedCloser { span, .. }
            | ParseError::MismatchedCloser { span, .. } => *span,
        }
    }
}
