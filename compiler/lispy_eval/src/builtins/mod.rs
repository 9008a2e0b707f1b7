//! The builtin function registry.
//!
//! The set of primitives is fixed, so dispatch is a `match` on a closed
//! enum rather than a table of function pointers. Each primitive owns its
//! argument list and reports failure as an `Err`, which `Builtin::call`
//! turns into an `Error` value.

mod arith;
mod binding;
mod list;

use crate::environment::Environment;
use crate::errors::{arity_mismatch, type_mismatch, EvalError};
use crate::value::Value;

use arith::Arith;
use binding::Scope;

/// A primitive operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    List,
    Head,
    Tail,
    Eval,
    Join,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Def,
    Put,
    Lambda,
}

impl Builtin {
    /// Every builtin, in registration order.
    pub const ALL: [Builtin; 13] = [
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Mod,
        Builtin::Def,
        Builtin::Put,
        Builtin::Lambda,
    ];

    /// The symbol this builtin is bound to.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Mod => "%",
            Builtin::Def => "def",
            Builtin::Put => "=",
            Builtin::Lambda => "\\",
        }
    }

    /// Run the primitive on `args`, an `SExpr` of already-evaluated values.
    pub fn call(self, env: &Environment, args: Value) -> Value {
        let result = match self {
            Builtin::List => Ok(list::list(args)),
            Builtin::Head => list::head(args),
            Builtin::Tail => list::tail(args),
            Builtin::Eval => list::eval(env, args),
            Builtin::Join => list::join(args),
            Builtin::Add => arith::fold(Arith::Add, args),
            Builtin::Sub => arith::fold(Arith::Sub, args),
            Builtin::Mul => arith::fold(Arith::Mul, args),
            Builtin::Div => arith::fold(Arith::Div, args),
            Builtin::Mod => arith::fold(Arith::Rem, args),
            Builtin::Def => binding::bind(env, Scope::Global, args),
            Builtin::Put => binding::bind(env, Scope::Local, args),
            Builtin::Lambda => binding::lambda(args),
        };
        result.into()
    }
}

/// Bind every builtin into `env` under its name.
pub fn install(env: &Environment) {
    for builtin in Builtin::ALL {
        env.put(builtin.name(), Value::builtin(builtin));
    }
    tracing::debug!(count = Builtin::ALL.len(), "installed builtins");
}

// Argument checks shared by the primitives

fn expect_count(function: &'static str, args: &Value, expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(arity_mismatch(function, expected, args.len()))
    }
}

/// Every argument must be a `QExpr`.
fn expect_qexprs(function: &'static str, args: &Value) -> Result<(), EvalError> {
    for (index, arg) in args.cells().iter().enumerate() {
        if !matches!(arg, Value::QExpr(_)) {
            return Err(type_mismatch(function, index, "Q-Expression", arg.type_name()));
        }
    }
    Ok(())
}

/// Exactly one argument, a `QExpr`; returns it.
fn single_qexpr(function: &'static str, args: Value) -> Result<Value, EvalError> {
    expect_count(function, &args, 1)?;
    expect_qexprs(function, &args)?;
    Ok(args.take(0).unwrap_or_else(|| Value::qexpr(Vec::new())))
}
