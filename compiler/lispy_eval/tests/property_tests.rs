//! Property-based tests for the reader and evaluator.
//!
//! Literal-only input (numbers and Q-expressions) must print back in its
//! canonical form whatever whitespace it was written with.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lispy_eval::{Interpreter, Value};
use proptest::prelude::*;

/// A literal expression: a number or a Q-expression of literals.
#[derive(Clone, Debug)]
enum Literal {
    Number(i64),
    List(Vec<Literal>),
}

impl Literal {
    /// The form `print` produces.
    fn canonical(&self) -> String {
        match self {
            Literal::Number(n) => n.to_string(),
            Literal::List(items) => {
                let inner: Vec<String> = items.iter().map(Literal::canonical).collect();
                format!("{{{}}}", inner.join(" "))
            }
        }
    }

    /// The same literal written with `sep` between elements and `pad`
    /// inside the braces.
    fn spaced(&self, sep: &str, pad: &str) -> String {
        match self {
            Literal::Number(n) => n.to_string(),
            Literal::List(items) => {
                let inner: Vec<String> = items.iter().map(|item| item.spaced(sep, pad)).collect();
                format!("{{{pad}{}{pad}}}", inner.join(sep))
            }
        }
    }
}

fn literal_strategy() -> impl Strategy<Value = Literal> {
    let leaf = any::<i64>().prop_map(Literal::Number);
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Literal::List)
    })
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{1,3}").unwrap()
}

fn padding_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{0,3}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn literal_round_trip(
        literal in literal_strategy(),
        sep in separator_strategy(),
        pad in padding_strategy(),
    ) {
        let interp = Interpreter::new();
        let source = format!("{pad}{}{pad}", literal.spaced(&sep, &pad));
        let printed = interp.eval_line(&source).unwrap().to_string();
        prop_assert_eq!(printed, literal.canonical());
    }

    #[test]
    fn sum_matches_host_arithmetic(numbers in prop::collection::vec(-1_000_000i64..1_000_000, 1..16)) {
        let interp = Interpreter::new();
        let terms: Vec<String> = numbers.iter().map(ToString::to_string).collect();
        let result = interp.eval_line(&format!("+ {}", terms.join(" "))).unwrap();
        prop_assert_eq!(result, Value::Number(numbers.iter().sum()));
    }

    #[test]
    fn head_and_tail_partition(numbers in prop::collection::vec(any::<i64>(), 1..16)) {
        let interp = Interpreter::new();
        let terms: Vec<String> = numbers.iter().map(ToString::to_string).collect();
        let list = format!("{{{}}}", terms.join(" "));

        let joined = interp
            .eval_line(&format!("join (head {list}) (tail {list})"))
            .unwrap();
        prop_assert_eq!(joined.to_string(), list);
    }

    #[test]
    fn eval_source_yields_one_result_per_expression(
        numbers in prop::collection::vec(any::<i64>(), 0..16),
    ) {
        let interp = Interpreter::new();
        let terms: Vec<String> = numbers.iter().map(ToString::to_string).collect();
        let results = interp.eval_source(&terms.join(" ")).unwrap();
        let expected: Vec<Value> = numbers.into_iter().map(Value::Number).collect();
        prop_assert_eq!(results, expected);
    }
}
