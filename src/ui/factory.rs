//! Widget factory capabilities
//!
//! The compiler does not build widgets itself. It asks a toolkit to do so through one
//! capability per element category. A toolkit that implements all three is a
//! [`WidgetFactory`] and can be handed to the compiler.
//!
//! Contract for implementors: each call constructs exactly one new, distinct widget, and
//! when `parent` is given the new widget is attached to it before the call returns, after
//! any children previously attached to the same parent.

use crate::ui::registry::{ContainerKind, LeafKind, ToplevelKind};
use std::fmt;

/// Types shared by every factory capability.
pub trait FactoryOutput {
    /// Opaque reference to a constructed widget.
    type Handle: Clone + fmt::Debug;
    /// Failure raised by the toolkit. The compiler propagates it untouched.
    type Error: std::error::Error + 'static;
}

pub trait ToplevelFactory: FactoryOutput {
    fn create_toplevel(&mut self, kind: ToplevelKind) -> Result<Self::Handle, Self::Error>;
}

pub trait ContainerFactory: FactoryOutput {
    fn create_container(
        &mut self,
        kind: ContainerKind,
        parent: Option<&Self::Handle>,
    ) -> Result<Self::Handle, Self::Error>;
}

pub trait LeafFactory: FactoryOutput {
    fn create_leaf(
        &mut self,
        kind: LeafKind,
        parent: Option<&Self::Handle>,
        text: &str,
    ) -> Result<Self::Handle, Self::Error>;
}

/// A toolkit able to build every element category.
pub trait WidgetFactory: ToplevelFactory + ContainerFactory + LeafFactory {}

impl<T> WidgetFactory for T where T: ToplevelFactory + ContainerFactory + LeafFactory {}
