//! Build context: the current parent slot
//!
//! The walker holds exactly one piece of mutable state, the widget new elements attach to.
//! Entering a toplevel or container replaces it through a [`ParentScope`]; dropping the
//! scope puts the previous parent back. Because the restore lives in `Drop`, it also runs
//! when a nested compile returns early with an error.

use log::trace;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// The current-parent slot threaded through a compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext<H> {
    current_parent: Option<H>,
}

impl<H> BuildContext<H> {
    /// A context with no current parent, as at the start of a document.
    pub fn new() -> Self {
        Self {
            current_parent: None,
        }
    }

    /// A context whose current parent is `parent`.
    pub fn with_parent(parent: H) -> Self {
        Self {
            current_parent: Some(parent),
        }
    }

    pub fn current_parent(&self) -> Option<&H> {
        self.current_parent.as_ref()
    }
}

impl<H: fmt::Debug> BuildContext<H> {
    /// Make `parent` the current parent until the returned scope is dropped.
    pub fn enter(&mut self, parent: H) -> ParentScope<'_, H> {
        trace!("enter parent {:?}", parent);
        let previous = self.current_parent.replace(parent);
        ParentScope {
            context: self,
            previous,
        }
    }
}

impl<H> Default for BuildContext<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped replacement of the current parent. Derefs to the context it guards.
pub struct ParentScope<'a, H: fmt::Debug> {
    context: &'a mut BuildContext<H>,
    previous: Option<H>,
}

impl<H: fmt::Debug> Deref for ParentScope<'_, H> {
    type Target = BuildContext<H>;

    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl<H: fmt::Debug> DerefMut for ParentScope<'_, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.context
    }
}

impl<H: fmt::Debug> Drop for ParentScope<'_, H> {
    fn drop(&mut self) {
        let left = std::mem::replace(&mut self.context.current_parent, self.previous.take());
        trace!(
            "leave parent {:?}, restored {:?}",
            left,
            self.context.current_parent
        );
    }
}
