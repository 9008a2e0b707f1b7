//! Function values: builtin primitives and user-defined closures.

use std::fmt;

use super::Value;
use crate::builtins::Builtin;
use crate::environment::Frame;

/// Formal that binds every remaining argument as a `QExpr`.
pub const REST_MARKER: &str = "&";

/// A callable value.
#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    Builtin(Builtin),
    Closure(Closure),
}

/// A user-defined function built by `\`.
///
/// `frame` holds the arguments bound so far. Applying a closure to fewer
/// arguments than it has formals binds those into `frame`, drops the
/// consumed formals, and returns the updated closure. Because values are
/// copied on lookup, every curried instance owns its own `frame`.
#[derive(Clone, Debug, PartialEq)]
pub struct Closure {
    pub(crate) formals: Vec<String>,
    pub(crate) body: Vec<Value>,
    pub(crate) frame: Frame,
}

impl Closure {
    /// Closure with no bound arguments.
    pub fn new(formals: Vec<String>, body: Vec<Value>) -> Self {
        Closure {
            formals,
            body,
            frame: Frame::new(),
        }
    }

    /// Formals still waiting for an argument.
    pub fn formals(&self) -> &[String] {
        &self.formals
    }

    /// Body expressions, evaluated as one S-expression on full application.
    pub fn body(&self) -> &[Value] {
        &self.body
    }

    /// Arguments bound by earlier partial applications.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin(_) => f.write_str("<function>"),
            Function::Closure(closure) => {
                write!(f, "(\\ {{{}}} ", closure.formals.join(" "))?;
                super::write_cells(f, &closure.body, '{', '}')?;
                f.write_str(")")
            }
        }
    }
}
