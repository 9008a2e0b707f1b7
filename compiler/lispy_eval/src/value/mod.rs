//! Runtime values for the Lispy evaluator.
//!
//! # Ownership
//!
//! `SExpr` and `QExpr` own their elements in [`Cells`]. There is no sharing
//! inside a value tree: `pop` and `take` move an element out, `join` moves
//! every element of the source into the destination, and `clone` is a deep,
//! structural copy. The one exception is a closure's frame parent, which
//! is an `Environment` reference while the closure body runs.
//!
//! Printing and dropping do not recurse on the native stack once per level
//! of nesting: printing grows the stack through `ensure_sufficient_stack`,
//! and `Cells` releases nested lists from a worklist.

mod function;

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::errors::EvalError;
use crate::stack::ensure_sufficient_stack;

pub use function::{Closure, Function, REST_MARKER};

/// Runtime value in the Lispy evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 64-bit signed integer.
    Number(i64),
    /// Error value; the result of any failed operation.
    Error(EvalError),
    /// Identifier, resolved against the environment when evaluated.
    Symbol(String),
    /// Builtin primitive or user-defined closure.
    Function(Function),
    /// Evaluable list form: `(...)`.
    SExpr(Cells),
    /// Literal list form: `{...}`. Never evaluated implicitly.
    QExpr(Cells),
}

/// The elements of a list form.
///
/// Derefs to `Vec<Value>`. Dropping a `Cells` moves nested lists onto a
/// worklist instead of recursing into them.
#[derive(Clone, Default, PartialEq)]
pub struct Cells(Vec<Value>);

impl Cells {
    pub fn new() -> Self {
        Cells(Vec::new())
    }

    /// Take the elements out as a plain vector.
    pub fn into_vec(mut self) -> Vec<Value> {
        mem::take(&mut self.0)
    }
}

impl Deref for Cells {
    type Target = Vec<Value>;

    fn deref(&self) -> &Vec<Value> {
        &self.0
    }
}

impl DerefMut for Cells {
    fn deref_mut(&mut self) -> &mut Vec<Value> {
        &mut self.0
    }
}

impl From<Vec<Value>> for Cells {
    fn from(cells: Vec<Value>) -> Self {
        Cells(cells)
    }
}

impl FromIterator<Value> for Cells {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Cells(iter.into_iter().collect())
    }
}

impl IntoIterator for Cells {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl Drop for Cells {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.0);
        while let Some(mut value) = pending.pop() {
            if let Some(cells) = value.cells_mut() {
                pending.append(cells);
            }
        }
    }
}

impl fmt::Debug for Cells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

// Factory Methods

impl Value {
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn error(error: EvalError) -> Self {
        Value::Error(error)
    }

    #[inline]
    pub fn sexpr(cells: Vec<Value>) -> Self {
        Value::SExpr(Cells(cells))
    }

    #[inline]
    pub fn qexpr(cells: Vec<Value>) -> Self {
        Value::QExpr(Cells(cells))
    }

    /// The empty S-expression `()`, returned by statements like `def`.
    #[inline]
    pub fn unit() -> Self {
        Value::SExpr(Cells::new())
    }

    #[inline]
    pub fn builtin(builtin: crate::Builtin) -> Self {
        Value::Function(Function::Builtin(builtin))
    }

    #[inline]
    pub fn closure(closure: Closure) -> Self {
        Value::Function(Function::Closure(closure))
    }
}

// Inspection

impl Value {
    /// Variant name used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Elements of a list form. Empty for every other variant.
    pub fn cells(&self) -> &[Value] {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => &cells.0,
            _ => &[],
        }
    }

    pub fn cells_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(&mut cells.0),
            _ => None,
        }
    }

    /// Element count of a list form; zero for every other variant.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells().is_empty()
    }
}

// Ownership Transfer

impl Value {
    /// Remove the element at `index`, shifting later elements left.
    ///
    /// The container stays valid with one element fewer. Returns `None`
    /// when `self` is not a list form or `index` is out of range.
    pub fn pop(&mut self, index: usize) -> Option<Value> {
        let cells = self.cells_mut()?;
        if index < cells.len() {
            Some(cells.remove(index))
        } else {
            None
        }
    }

    /// Extract the element at `index`, discarding the rest of the container.
    pub fn take(mut self, index: usize) -> Option<Value> {
        self.pop(index)
    }

    /// Move every element of `source` onto the end of `self`.
    ///
    /// `self` keeps its own tag. Returns `None` unless both values are list
    /// forms; callers decide how to report that.
    pub fn join(mut self, source: Value) -> Option<Value> {
        let (Some(dest), Value::SExpr(src) | Value::QExpr(src)) = (self.cells_mut(), source)
        else {
            return None;
        };
        dest.append(&mut src.into_vec());
        Some(self)
    }

    /// Yield the elements of a list form as an owned vector.
    pub fn into_cells(self) -> Vec<Value> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => cells.into_vec(),
            _ => Vec::new(),
        }
    }

    /// Retag a list form as `QExpr`. Other variants pass through.
    #[must_use]
    pub fn into_qexpr(self) -> Value {
        match self {
            Value::SExpr(cells) => Value::QExpr(cells),
            other => other,
        }
    }

    /// Retag a list form as `SExpr`. Other variants pass through.
    #[must_use]
    pub fn into_sexpr(self) -> Value {
        match self {
            Value::QExpr(cells) => Value::SExpr(cells),
            other => other,
        }
    }
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        Value::Error(error)
    }
}

impl From<Result<Value, EvalError>> for Value {
    fn from(result: Result<Value, EvalError>) -> Self {
        result.unwrap_or_else(Value::Error)
    }
}

// Printing

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{cell}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(error) => write!(f, "Error: {error}"),
            Value::Symbol(name) => f.write_str(name),
            Value::Function(function) => write!(f, "{function}"),
            Value::SExpr(cells) => ensure_sufficient_stack(|| write_cells(f, cells, '(', ')')),
            Value::QExpr(cells) => ensure_sufficient_stack(|| write_cells(f, cells, '{', '}')),
        }
    }
}

#[cfg(test)]
mod tests;
