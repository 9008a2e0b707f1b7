use super::*;
use crate::errors::division_by_zero;
use crate::Builtin;
use pretty_assertions::assert_eq;

fn num(n: i64) -> Value {
    Value::number(n)
}

fn q(cells: Vec<Value>) -> Value {
    Value::qexpr(cells)
}

#[test]
fn test_display_terminals() {
    assert_eq!(num(-42).to_string(), "-42");
    assert_eq!(Value::symbol("head").to_string(), "head");
    assert_eq!(
        Value::error(division_by_zero()).to_string(),
        "Error: division by zero"
    );
    assert_eq!(Value::builtin(Builtin::Add).to_string(), "<function>");
}

#[test]
fn test_display_lists() {
    let value = Value::sexpr(vec![
        Value::symbol("+"),
        num(1),
        q(vec![num(2), q(vec![])]),
    ]);
    assert_eq!(value.to_string(), "(+ 1 {2 {}})");
    assert_eq!(Value::unit().to_string(), "()");
}

#[test]
fn test_display_closure() {
    let closure = Closure::new(
        vec!["x".into(), "y".into()],
        vec![Value::symbol("+"), Value::symbol("x"), Value::symbol("y")],
    );
    assert_eq!(Value::closure(closure).to_string(), "(\\ {x y} {+ x y})");
}

#[test]
fn test_pop_shifts_left() {
    let mut list = q(vec![num(1), num(2), num(3)]);
    assert_eq!(list.pop(1), Some(num(2)));
    assert_eq!(list, q(vec![num(1), num(3)]));
    assert_eq!(list.pop(5), None);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_pop_on_terminal() {
    let mut n = num(1);
    assert_eq!(n.pop(0), None);
    assert_eq!(n, num(1));
}

#[test]
fn test_take_discards_container() {
    let list = Value::sexpr(vec![num(1), num(2), num(3)]);
    assert_eq!(list.take(2), Some(num(3)));
}

#[test]
fn test_join_keeps_destination_tag() {
    let joined = q(vec![num(1)]).join(q(vec![num(2), num(3)])).unwrap();
    assert_eq!(joined, q(vec![num(1), num(2), num(3)]));

    let joined = Value::sexpr(vec![]).join(q(vec![num(4)])).unwrap();
    assert_eq!(joined, Value::sexpr(vec![num(4)]));
}

#[test]
fn test_join_rejects_terminal_values() {
    assert_eq!(q(vec![]).join(num(1)), None);
    assert_eq!(num(1).join(q(vec![num(2)])), None);
}

#[test]
fn test_retag() {
    assert_eq!(Value::sexpr(vec![num(1)]).into_qexpr(), q(vec![num(1)]));
    assert_eq!(q(vec![num(1)]).into_sexpr(), Value::sexpr(vec![num(1)]));
    assert_eq!(num(7).into_qexpr(), num(7));
}

#[test]
fn test_clone_is_structural() {
    let original = q(vec![num(1), q(vec![num(2)])]);
    let mut copy = original.clone();
    if let Some(cells) = copy.cells_mut() {
        cells.push(num(3));
    }
    assert_eq!(original.len(), 2);
    assert_eq!(copy.len(), 3);
}

#[test]
fn test_type_names() {
    assert_eq!(num(1).type_name(), "Number");
    assert_eq!(Value::symbol("x").type_name(), "Symbol");
    assert_eq!(Value::unit().type_name(), "S-Expression");
    assert_eq!(q(vec![]).type_name(), "Q-Expression");
    assert_eq!(Value::builtin(Builtin::Head).type_name(), "Function");
    assert_eq!(Value::error(division_by_zero()).type_name(), "Error");
}

fn nested_qexpr(depth: usize) -> Value {
    let mut value = q(vec![]);
    for _ in 0..depth {
        value = q(vec![value]);
    }
    value
}

#[test]
fn test_deep_list_prints_and_drops() {
    let depth = 200_000;
    let text = nested_qexpr(depth).to_string();
    assert_eq!(text.len(), 2 * (depth + 1));
    assert!(text.starts_with("{{{"));
    assert!(text.ends_with("}}}"));
}

#[test]
fn test_deep_list_moves_through_retag() {
    let list = nested_qexpr(200_000).into_sexpr().into_qexpr();
    assert_eq!(list.len(), 1);
    drop(list);
}
