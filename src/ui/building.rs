//! Widget tree building from template IR
//!
//! This module walks an `IrNode` tree and asks a widget factory to construct one widget per
//! element. It is organised in layers:
//!
//! 1. Classification - the registry maps each element name to a category
//! 2. Context - the current parent is threaded through the walk and restored on exit
//! 3. Compilation - the walker dispatches per category and reassembles results
//! 4. Flattening - nested sequences are spliced so results never nest more than one level
//!
//! Callers should primarily use [`compile_document`].

pub mod compiled;
pub mod compiler;
pub mod context;
pub mod error;
pub mod flatten;

pub use compiled::{Compiled, ResultShape};
pub use compiler::{compile, compile_document, Compiler};
pub use context::{BuildContext, ParentScope};
pub use error::CompileError;
pub use flatten::flatten_ir;
