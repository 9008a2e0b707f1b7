//! Evaluation errors.
//!
//! Errors never unwind: they travel as `Value::Error(EvalError)` and are
//! checked by tag. Factory functions are the public constructors; the
//! `Display` text of each variant is the diagnostic printed after
//! `Error: `.
//!
//! # Usage
//!
//! ```ignore
//! use lispy_eval::errors::{unbound_symbol, division_by_zero};
//! ```

/// Coarse error taxonomy.
///
/// Several variants of [`EvalError`] share a category; matching on the
/// category is how callers ask "was this an arity problem?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    ArityError,
    TypeError,
    EmptyList,
    UnboundSymbol,
    DivisionByZero,
    IntegerOverflow,
    MalformedLambda,
    NonFunctionApplication,
    InvalidNumber,
}

/// A runtime error carried by `Value::Error`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    // Arity
    #[error("function '{function}' passed {got} arguments, expected {expected}")]
    ArityMismatch {
        function: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("function '{function}' requires at least one argument")]
    MissingArguments { function: &'static str },
    #[error("too many arguments: function passed {got}, expected at most {expected}")]
    TooManyArguments { expected: usize, got: usize },
    #[error("function '{function}' cannot bind {symbols} symbols to {values} values")]
    BindingCountMismatch {
        function: &'static str,
        symbols: usize,
        values: usize,
    },

    // Type
    #[error("function '{function}' expected {expected} for argument {argument}, got {got}")]
    TypeMismatch {
        function: &'static str,
        argument: usize,
        expected: &'static str,
        got: &'static str,
    },
    #[error("function '{function}' passed {{}}")]
    EmptyList { function: &'static str },

    // Lookup
    #[error("unbound symbol '{name}'")]
    UnboundSymbol { name: String },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Application
    #[error("malformed lambda: {reason}")]
    MalformedLambda { reason: &'static str },
    #[error("s-expression starts with {got}, expected Function")]
    NonFunctionApplication { got: &'static str },

    // Reader
    #[error("invalid number '{text}'")]
    InvalidNumber { text: String },
}

impl EvalError {
    /// The taxonomy bucket this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvalError::ArityMismatch { .. }
            | EvalError::MissingArguments { .. }
            | EvalError::TooManyArguments { .. }
            | EvalError::BindingCountMismatch { .. } => ErrorCategory::ArityError,
            EvalError::TypeMismatch { .. } => ErrorCategory::TypeError,
            EvalError::EmptyList { .. } => ErrorCategory::EmptyList,
            EvalError::UnboundSymbol { .. } => ErrorCategory::UnboundSymbol,
            EvalError::DivisionByZero => ErrorCategory::DivisionByZero,
            EvalError::IntegerOverflow { .. } => ErrorCategory::IntegerOverflow,
            EvalError::MalformedLambda { .. } => ErrorCategory::MalformedLambda,
            EvalError::NonFunctionApplication { .. } => ErrorCategory::NonFunctionApplication,
            EvalError::InvalidNumber { .. } => ErrorCategory::InvalidNumber,
        }
    }

    /// The human-readable diagnostic.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// Arity Errors

/// A builtin that takes exactly `expected` arguments got `got`.
#[cold]
pub fn arity_mismatch(function: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch {
        function,
        expected,
        got,
    }
}

/// A variadic builtin was called with no arguments.
#[cold]
pub fn missing_arguments(function: &'static str) -> EvalError {
    EvalError::MissingArguments { function }
}

/// A closure ran out of formals while arguments remained.
#[cold]
pub fn too_many_arguments(expected: usize, got: usize) -> EvalError {
    EvalError::TooManyArguments { expected, got }
}

/// `def`/`=` got a different number of values than symbols.
#[cold]
pub fn binding_count_mismatch(function: &'static str, symbols: usize, values: usize) -> EvalError {
    EvalError::BindingCountMismatch {
        function,
        symbols,
        values,
    }
}

// Type Errors

#[cold]
pub fn type_mismatch(
    function: &'static str,
    argument: usize,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError::TypeMismatch {
        function,
        argument,
        expected,
        got,
    }
}

#[cold]
pub fn empty_list(function: &'static str) -> EvalError {
    EvalError::EmptyList { function }
}

// Lookup Errors

#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::UnboundSymbol {
        name: name.to_string(),
    }
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::IntegerOverflow { operation }
}

// Application Errors

#[cold]
pub fn malformed_lambda(reason: &'static str) -> EvalError {
    EvalError::MalformedLambda { reason }
}

#[cold]
pub fn non_function_application(got: &'static str) -> EvalError {
    EvalError::NonFunctionApplication { got }
}

// Reader Errors

#[cold]
pub fn invalid_number(text: &str) -> EvalError {
    EvalError::InvalidNumber {
        text: text.to_string(),
    }
}
