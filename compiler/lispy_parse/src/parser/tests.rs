use super::*;
use pretty_assertions::assert_eq;

fn tags(node: &ParseNode) -> Vec<&'static str> {
    node.children.iter().map(|child| child.tag).collect()
}

fn exprs(node: &ParseNode) -> impl Iterator<Item = &ParseNode> {
    node.children.iter().filter(|child| child.is_expr())
}

#[test]
fn test_root_has_anchors() {
    let root = parse("").unwrap();
    assert!(root.is(tag::ROOT));
    assert_eq!(tags(&root), vec![tag::REGEX, tag::REGEX]);
    assert_eq!(exprs(&root).count(), 0);
}

#[test]
fn test_top_level_expressions() {
    let root = parse("+ 1 -2").unwrap();
    assert_eq!(
        tags(&root),
        vec![tag::REGEX, tag::SYMBOL, tag::NUMBER, tag::NUMBER, tag::REGEX]
    );
    let contents: Vec<&str> = exprs(&root).map(|n| n.contents.as_str()).collect();
    assert_eq!(contents, vec!["+", "1", "-2"]);
}

#[test]
fn test_nested_lists_keep_delimiters() {
    let root = parse("(head {1 2})").unwrap();
    let sexpr = exprs(&root).next().unwrap();
    assert!(sexpr.is(tag::SEXPR));
    assert_eq!(
        tags(sexpr),
        vec![tag::CHAR, tag::SYMBOL, tag::QEXPR, tag::CHAR]
    );
    assert_eq!(sexpr.children[0].contents, "(");
    assert_eq!(sexpr.children[3].contents, ")");
    assert_eq!(sexpr.span, Span::new(0, 12));

    let qexpr = &sexpr.children[2];
    assert_eq!(qexpr.children.first().unwrap().contents, "{");
    assert_eq!(qexpr.children.last().unwrap().contents, "}");
    assert_eq!(exprs(qexpr).count(), 2);
    assert_eq!(qexpr.span, Span::new(6, 11));
}

#[test]
fn test_deep_nesting_does_not_recurse() {
    let depth = 5_000;
    let source = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    let root = parse(&source).unwrap();

    let mut node = exprs(&root).next().unwrap();
    let mut seen = 1;
    while let Some(inner) = exprs(node).next() {
        node = inner;
        seen += 1;
    }
    assert_eq!(seen, depth);
}

#[test]
fn test_deep_tree_drops_without_recursion() {
    let depth = 200_000;
    let source = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
    let root = parse(&source).unwrap();
    assert_eq!(exprs(&root).count(), 1);
    drop(root);
}

#[test]
fn test_unclosed_delimiter() {
    let err = parse("(+ 1 {2 3}").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnclosedDelimiter {
            open: '(',
            span: Span::new(0, 1),
        }
    );
}

#[test]
fn test_unexpected_closer() {
    let err = parse("1 2)").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedCloser {
            closer: ')',
            span: Span::new(3, 4),
        }
    );
}

#[test]
fn test_mismatched_closer() {
    let err = parse("{1 2)").unwrap_err();
    assert_eq!(
        err,
        ParseError::MismatchedCloser {
            expected: '}',
            found: ')',
            span: Span::new(4, 5),
        }
    );
    assert_eq!(err.span(), Span::new(4, 5));
}

#[test]
fn test_comments_are_skipped() {
    let root = parse("; header\n(+ 1 2) ; trailing").unwrap();
    assert_eq!(exprs(&root).count(), 1);
}
