use super::*;
use crate::ErrorCategory;
use pretty_assertions::assert_eq;

#[test]
fn test_put_get() {
    let env = Environment::new();
    env.put("x", Value::number(42));
    assert_eq!(env.get("x"), Ok(Value::number(42)));
}

#[test]
fn test_unbound_symbol() {
    let env = Environment::new();
    let err = env.get("missing").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::UnboundSymbol);
    assert_eq!(err.to_string(), "unbound symbol 'missing'");
}

#[test]
fn test_put_overwrites_in_same_frame() {
    let env = Environment::new();
    env.put("x", Value::number(1));
    env.put("x", Value::number(2));
    assert_eq!(env.get("x"), Ok(Value::number(2)));
    assert_eq!(env.frame().len(), 1);
}

#[test]
fn test_lookup_walks_parents() {
    let root = Environment::new();
    root.put("x", Value::number(1));
    let middle = Environment::with_parent(&root);
    let leaf = Environment::with_parent(&middle);
    assert_eq!(leaf.get("x"), Ok(Value::number(1)));
    assert_eq!(leaf.depth(), 3);
}

#[test]
fn test_child_shadows_parent() {
    let root = Environment::new();
    root.put("x", Value::number(1));
    let child = Environment::with_parent(&root);
    child.put("x", Value::number(2));

    assert_eq!(child.get("x"), Ok(Value::number(2)));
    assert_eq!(root.get("x"), Ok(Value::number(1)));
}

#[test]
fn test_put_never_assigns_to_parent() {
    let root = Environment::new();
    root.put("x", Value::number(10));
    let child = Environment::with_parent(&root);
    child.put("x", Value::number(20));

    assert!(child.has_local("x"));
    assert_eq!(root.get("x"), Ok(Value::number(10)));
}

#[test]
fn test_define_global_reaches_root() {
    let root = Environment::new();
    let child = Environment::with_parent(&root);
    let grandchild = Environment::with_parent(&child);

    grandchild.define_global("g", Value::number(7));

    assert!(root.has_local("g"));
    assert!(!grandchild.has_local("g"));
    assert_eq!(grandchild.get("g"), Ok(Value::number(7)));
    assert!(grandchild.root().ptr_eq(&root));
}

#[test]
fn test_get_returns_independent_copy() {
    let env = Environment::new();
    env.put("xs", Value::qexpr(vec![Value::number(1)]));

    let mut copy = env.get("xs").unwrap();
    if let Some(cells) = copy.cells_mut() {
        cells.push(Value::number(2));
    }
    assert_eq!(env.get("xs"), Ok(Value::qexpr(vec![Value::number(1)])));
}

#[test]
fn test_deep_copy_keeps_parent() {
    let root = Environment::new();
    let env = Environment::with_parent(&root);
    env.put("x", Value::number(1));

    let copy = env.deep_copy();
    copy.put("x", Value::number(2));

    assert!(!copy.ptr_eq(&env));
    assert_eq!(env.get("x"), Ok(Value::number(1)));
    assert_eq!(copy.get("x"), Ok(Value::number(2)));
    assert!(copy.parent().is_some_and(|p| p.ptr_eq(&root)));
}

#[test]
fn test_clone_shares_frame() {
    let env = Environment::new();
    let alias = env.clone();
    alias.put("x", Value::number(3));
    assert_eq!(env.get("x"), Ok(Value::number(3)));
}

#[test]
fn test_later_root_bindings_visible_to_children() {
    let root = Environment::new();
    let child = Environment::with_parent(&root);
    assert!(child.get("late").is_err());
    root.put("late", Value::number(5));
    assert_eq!(child.get("late"), Ok(Value::number(5)));
}

#[test]
fn test_clear() {
    let env = Environment::new();
    env.put("a", Value::number(1));
    env.put("b", Value::number(2));
    env.clear();
    assert!(env.frame().is_empty());
}

#[test]
fn test_frame_parent_roundtrip() {
    let root = Environment::new();
    let mut frame = Frame::new();
    assert!(frame.parent().is_none());
    frame.set_parent(Some(root.clone()));
    frame.put("y", Value::number(9));

    let env = Environment::from_frame(frame);
    assert!(env.parent().is_some_and(|p| p.ptr_eq(&root)));
    let snapshot = env.frame();
    let names: Vec<&str> = snapshot.names().collect();
    assert_eq!(names, vec!["y"]);
}
