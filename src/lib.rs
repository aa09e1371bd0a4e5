//! # slimui
//!
//! Compiles template IR documents into widget trees.
//!
//! A template parser produces an [`IrNode`](ui::ir::IrNode) tree of text, sequences and
//! elements. The compiler in [`ui::building`] walks that tree and asks a widget toolkit,
//! through the capabilities in [`ui::factory`], to build one widget per element, attaching
//! each to the enclosing toplevel or container.
//!
//! The crate ships an in-memory toolkit ([`ui::toolkit::WidgetTree`]) and a set of output
//! formats for inspecting what was built. The `slimui` binary ties them together.
//!
//! ## Testing
//!
//! [`ui::testing`] provides a recording factory and fluent assertions over widget trees.

pub mod ui;
