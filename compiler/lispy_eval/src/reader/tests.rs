use super::*;
use crate::ErrorCategory;
use lispy_parse::parse;
use pretty_assertions::assert_eq;

fn read_str(source: &str) -> Value {
    read(&parse(source).unwrap())
}

#[test]
fn test_root_reads_as_sexpr() {
    assert_eq!(
        read_str("+ 1 2"),
        Value::sexpr(vec![Value::symbol("+"), Value::number(1), Value::number(2)])
    );
    assert_eq!(read_str(""), Value::unit());
}

#[test]
fn test_nested_forms() {
    assert_eq!(
        read_str("(head {1 -2 x})"),
        Value::sexpr(vec![Value::sexpr(vec![
            Value::symbol("head"),
            Value::qexpr(vec![Value::number(1), Value::number(-2), Value::symbol("x")]),
        ])])
    );
}

#[test]
fn test_out_of_range_number() {
    let value = read_str("99999999999999999999");
    let Value::SExpr(cells) = value else {
        panic!("expected an S-expression");
    };
    match &cells[0] {
        Value::Error(err) => assert_eq!(err.category(), ErrorCategory::InvalidNumber),
        other => panic!("expected an error, got {other}"),
    }
}

#[test]
fn test_extreme_numbers() {
    assert_eq!(
        read_str("-9223372036854775808 9223372036854775807"),
        Value::sexpr(vec![Value::number(i64::MIN), Value::number(i64::MAX)])
    );
}

/// A parse tree in the compound-tag style of other grammar engines.
struct Node {
    tag: &'static str,
    contents: &'static str,
    children: Vec<Node>,
}

impl SyntaxNode for Node {
    fn tag(&self) -> &str {
        self.tag
    }

    fn contents(&self) -> &str {
        self.contents
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

fn leaf(tag: &'static str, contents: &'static str) -> Node {
    Node {
        tag,
        contents,
        children: Vec::new(),
    }
}

#[test]
fn test_compound_tags() {
    let tree = Node {
        tag: ">",
        contents: "",
        children: vec![
            leaf("regex", ""),
            Node {
                tag: "expr|qexpr|>",
                contents: "",
                children: vec![
                    leaf("char", "{"),
                    leaf("expr|number|regex", "3"),
                    leaf("expr|symbol|regex", "tail"),
                    leaf("char", "}"),
                ],
            },
            leaf("regex", ""),
        ],
    };
    assert_eq!(
        read(&tree),
        Value::sexpr(vec![Value::qexpr(vec![
            Value::number(3),
            Value::symbol("tail"),
        ])])
    );
}
