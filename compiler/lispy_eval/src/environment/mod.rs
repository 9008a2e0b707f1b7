//! Environments: frames of bindings chained through parent references.
//!
//! A [`Frame`] is plain data (bindings plus an optional parent); cloning it
//! deep-copies every bound value and shares the parent. An [`Environment`]
//! is a frame behind `Rc<RefCell<_>>`, so cloning an `Environment` shares
//! the frame.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::{unbound_symbol, EvalError};
use crate::value::Value;

/// A single scope: symbol bindings and the scope it sits on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

impl Frame {
    /// Create an empty frame with no parent.
    pub fn new() -> Self {
        Frame::default()
    }

    /// Create an empty frame on top of `parent`.
    pub fn with_parent(parent: Environment) -> Self {
        Frame {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Look up a binding in this frame only.
    #[inline]
    pub fn local(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Bind `name` in this frame, replacing any existing binding.
    #[inline]
    pub fn put(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    #[inline]
    pub fn parent(&self) -> Option<&Environment> {
        self.parent.as_ref()
    }

    #[inline]
    pub fn set_parent(&mut self, parent: Option<Environment>) {
        self.parent = parent;
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in this frame, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

/// A shared, mutable frame in the scope chain.
///
/// `Rc` rather than `Arc`: evaluation is single-threaded.
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Frame>>);

impl Environment {
    /// Create a root environment (no parent, no bindings).
    pub fn new() -> Self {
        Environment::default()
    }

    /// Create an empty environment whose parent is `parent`.
    pub fn with_parent(parent: &Environment) -> Self {
        Environment::from_frame(Frame::with_parent(parent.clone()))
    }

    /// Put an existing frame behind a shared reference.
    pub fn from_frame(frame: Frame) -> Self {
        Environment(Rc::new(RefCell::new(frame)))
    }

    /// Resolve `name`, searching this frame then each parent in turn.
    ///
    /// Returns a copy of the bound value.
    pub fn get(&self, name: &str) -> Result<Value, EvalError> {
        let mut env = self.clone();
        loop {
            let parent = {
                let frame = env.0.borrow();
                if let Some(value) = frame.local(name) {
                    return Ok(value.clone());
                }
                frame.parent.clone()
            };
            match parent {
                Some(parent) => env = parent,
                None => return Err(unbound_symbol(name)),
            }
        }
    }

    /// Bind `name` in this frame, never in a parent.
    pub fn put(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().put(name, value);
    }

    /// Bind `name` in the root frame of this chain.
    pub fn define_global(&self, name: impl Into<String>, value: Value) {
        let name = name.into();
        tracing::debug!(%name, "define global");
        self.root().put(name, value);
    }

    /// The frame at the end of the parent chain.
    pub fn root(&self) -> Environment {
        let mut env = self.clone();
        while let Some(parent) = env.parent() {
            env = parent;
        }
        env
    }

    pub fn parent(&self) -> Option<Environment> {
        self.0.borrow().parent.clone()
    }

    /// Number of frames from here to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1usize;
        let mut env = self.clone();
        while let Some(parent) = env.parent() {
            depth = depth.saturating_add(1);
            env = parent;
        }
        depth
    }

    /// Whether `name` is bound in this frame (parents are not searched).
    pub fn has_local(&self, name: &str) -> bool {
        self.0.borrow().local(name).is_some()
    }

    /// A new environment holding a deep copy of this frame's bindings and
    /// the same parent reference.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Environment::from_frame(self.0.borrow().clone())
    }

    /// Snapshot of this frame.
    pub fn frame(&self) -> Frame {
        self.0.borrow().clone()
    }

    /// Drop every binding in this frame.
    pub fn clear(&self) {
        self.0.borrow_mut().bindings.clear();
    }

    /// Whether two environments are the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Environments compare by identity, not by contents.
impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.0.borrow();
        f.debug_struct("Environment")
            .field("bindings", &frame.len())
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests;
