//! The generic parse tree handed to the evaluator's reader.

use std::fmt;

use crate::span::Span;

/// Node tags.
pub mod tag {
    /// Root of a parsed input.
    pub const ROOT: &str = ">";
    pub const NUMBER: &str = "number";
    pub const SYMBOL: &str = "symbol";
    pub const SEXPR: &str = "sexpr";
    pub const QEXPR: &str = "qexpr";
    /// Delimiter character inside a list node.
    pub const CHAR: &str = "char";
    /// Start/end anchor of the root node.
    pub const REGEX: &str = "regex";
}

/// A node in the parse tree: a tag, literal text, and ordered children.
///
/// Leaves (`number`, `symbol`, `char`, `regex`) carry their text in
/// `contents` and have no children. List nodes and the root have empty
/// `contents`.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseNode {
    pub tag: &'static str,
    pub contents: String,
    pub span: Span,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Create a leaf node.
    pub fn leaf(tag: &'static str, contents: impl Into<String>, span: Span) -> Self {
        ParseNode {
            tag,
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    /// Create an interior node with no children yet.
    pub fn branch(tag: &'static str, span: Span) -> Self {
        ParseNode {
            tag,
            contents: String::new(),
            span,
            children: Vec::new(),
        }
    }

    /// Whether this node has the given tag.
    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Whether this node is an expression rather than a delimiter or anchor.
    #[inline]
    pub fn is_expr(&self) -> bool {
        !self.is(tag::CHAR) && !self.is(tag::REGEX)
    }
}

/// Nested children are released from a worklist, so dropping a deep tree
/// does not recurse once per level.
impl Drop for ParseNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Debug for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            write!(f, "{} {:?} @ {}", self.tag, self.contents, self.span)
        } else {
            write!(f, "{} @ {} ", self.tag, self.span)?;
            f.debug_list().entries(&self.children).finish()
        }
    }
}
