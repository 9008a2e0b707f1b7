//! Lispy Parse - source text to generic parse tree.
//!
//! The evaluator never sees source text. This crate turns text into a
//! [`ParseNode`] tree whose shape mirrors the grammar:
//!
//! ```text
//! number : /-?[0-9]+/
//! symbol : /[a-zA-Z0-9_+\-*\/\\=<>!&%]+/
//! sexpr  : '(' <expr>* ')'
//! qexpr  : '{' <expr>* '}'
//! expr   : <number> | <symbol> | <sexpr> | <qexpr>
//! lispy  : /^/ <expr>* /$/
//! ```
//!
//! The root node is tagged [`tag::ROOT`]; list nodes keep their delimiter
//! characters as `char` children and the root keeps its two `regex`
//! anchors, so a reader has to skip them explicitly.

mod error;
mod lexer;
mod parser;
mod span;
mod tree;

pub use error::ParseError;
pub use lexer::{lex, Token, TokenKind};
pub use parser::parse;
pub use span::Span;
pub use tree::{tag, ParseNode};
