//! Reader: generic parse tree to `Value` tree.
//!
//! The reader only needs a tag, literal text and ordered children from each
//! node, so it works against the [`SyntaxNode`] trait rather than a concrete
//! parser type. Tags are matched by containment, which lets compound tags
//! such as `expr|number|regex` read the same as `number`.

use lispy_parse::ParseNode;

use crate::errors::invalid_number;
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

/// What the reader requires of a parse-tree node.
pub trait SyntaxNode: Sized {
    fn tag(&self) -> &str;
    fn contents(&self) -> &str;
    fn children(&self) -> &[Self];

    /// Whether the node carries a value. Delimiters and anchors do not.
    fn is_value(&self) -> bool {
        !matches!(self.contents(), "(" | ")" | "{" | "}") && self.tag() != "regex"
    }
}

impl SyntaxNode for ParseNode {
    fn tag(&self) -> &str {
        self.tag
    }

    fn contents(&self) -> &str {
        &self.contents
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn is_value(&self) -> bool {
        self.is_expr()
    }
}

/// Convert a parse tree into a value tree.
///
/// `number` and `symbol` leaves become `Number` and `Symbol`; `qexpr`
/// nodes become `QExpr`; `sexpr` nodes and the root become `SExpr`.
/// A number too large for `i64` reads as an `Error` value.
pub fn read<N: SyntaxNode>(node: &N) -> Value {
    let tag = node.tag();
    if tag.contains("number") {
        return read_number(node.contents());
    }
    if tag.contains("symbol") {
        return Value::symbol(node.contents());
    }

    let cells: Vec<Value> = ensure_sufficient_stack(|| {
        node.children()
            .iter()
            .filter(|child| child.is_value())
            .map(read)
            .collect()
    });

    if tag.contains("qexpr") {
        Value::qexpr(cells)
    } else {
        Value::sexpr(cells)
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Error(invalid_number(text)),
    }
}

#[cfg(test)]
mod tests;
