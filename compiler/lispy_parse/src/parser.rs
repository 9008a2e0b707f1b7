//! Parser from tokens to a [`ParseNode`] tree.
//!
//! Nesting is tracked with an explicit stack of open lists rather than
//! recursion, so arbitrarily deep input cannot overflow the call stack
//! while parsing.

use crate::error::ParseError;
use crate::lexer::{lex, Token, TokenKind};
use crate::span::Span;
use crate::tree::{tag, ParseNode};

/// The two list forms of the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Delimiter {
    Paren,
    Brace,
}

impl Delimiter {
    fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Brace => '{',
        }
    }

    fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Brace => '}',
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Delimiter::Paren => tag::SEXPR,
            Delimiter::Brace => tag::QEXPR,
        }
    }
}

/// A list whose closing delimiter has not been seen yet.
struct OpenList {
    delimiter: Delimiter,
    node: ParseNode,
}

impl OpenList {
    fn new(delimiter: Delimiter, span: Span) -> Self {
        let mut node = ParseNode::branch(delimiter.tag(), span);
        node.children
            .push(ParseNode::leaf(tag::CHAR, delimiter.open().to_string(), span));
        OpenList { delimiter, node }
    }

    fn close(mut self, span: Span) -> ParseNode {
        self.node.children.push(ParseNode::leaf(
            tag::CHAR,
            self.delimiter.close().to_string(),
            span,
        ));
        self.node.span = self.node.span.merge(span);
        self.node
    }
}

/// Parse source text into a tree rooted at a [`tag::ROOT`] node.
///
/// The root's children are the opening anchor, every top-level expression
/// in order, and the closing anchor.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<ParseNode, ParseError> {
    let tokens = lex(source)?;
    let mut root = ParseNode::branch(tag::ROOT, Span::new(0, source.len()));
    root.children
        .push(ParseNode::leaf(tag::REGEX, String::new(), Span::point(0)));

    let mut open: Vec<OpenList> = Vec::new();

    for token in tokens {
        let Token { kind, span } = token;
        match kind {
            TokenKind::LParen => open.push(OpenList::new(Delimiter::Paren, span)),
            TokenKind::LBrace => open.push(OpenList::new(Delimiter::Brace, span)),
            TokenKind::RParen | TokenKind::RBrace => {
                let found = if kind == TokenKind::RParen { ')' } else { '}' };
                let Some(list) = open.pop() else {
                    return Err(ParseError::UnexpectedCloser {
                        closer: found,
                        span,
                    });
                };
                if list.delimiter.close() != found {
                    return Err(ParseError::MismatchedCloser {
                        expected: list.delimiter.close(),
                        found,
                        span,
                    });
                }
                let node = list.close(span);
                attach(&mut open, &mut root, node);
            }
            TokenKind::Number => {
                let leaf = ParseNode::leaf(tag::NUMBER, token.text(source), span);
                attach(&mut open, &mut root, leaf);
            }
            TokenKind::Symbol => {
                let leaf = ParseNode::leaf(tag::SYMBOL, token.text(source), span);
                attach(&mut open, &mut root, leaf);
            }
            TokenKind::Comment => {}
        }
    }

    if let Some(list) = open.pop() {
        return Err(ParseError::UnclosedDelimiter {
            open: list.delimiter.open(),
            span: list.node.span,
        });
    }

    root.children.push(ParseNode::leaf(
        tag::REGEX,
        String::new(),
        Span::point(source.len()),
    ));
    Ok(root)
}

/// Append a finished node to the innermost open list, or to the root.
fn attach(open: &mut [OpenList], root: &mut ParseNode, node: ParseNode) {
    match open.last_mut() {
        Some(list) => list.node.children.push(node),
        None => root.children.push(node),
    }
}

#[cfg(test)]
mod tests;
