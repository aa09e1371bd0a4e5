//! In-memory widget toolkit
//!
//! `WidgetTree` is an arena of widgets that implements every factory capability. It does not
//! render anything; it records what was built and how it nests, which is what the compiler
//! is responsible for. The CLI prints these trees and the tests inspect them.
//!
//! Widgets are never removed, so a `WidgetId` stays valid for the life of its tree.

use crate::ui::factory::{ContainerFactory, FactoryOutput, LeafFactory, ToplevelFactory};
use crate::ui::registry::{Category, ContainerKind, Element, LeafKind, ToplevelKind};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Handle to a widget in a [`WidgetTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WidgetId(usize);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A constructed widget.
#[derive(Debug, Clone)]
pub struct Widget {
    pub id: WidgetId,
    pub element: Element,
    pub parent: Option<WidgetId>,
    pub children: Vec<WidgetId>,
    /// Label text, for leaves.
    pub text: Option<String>,
}

impl Widget {
    pub fn name(&self) -> &'static str {
        self.element.name()
    }

    pub fn category(&self) -> Category {
        self.element.category()
    }
}

/// Errors raised while attaching widgets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolkitError {
    #[error("unknown widget {0}")]
    UnknownWidget(WidgetId),
    #[error("cannot attach `{element}` to {parent}: `{parent_element}` does not take children")]
    NotAContainer {
        element: &'static str,
        parent: WidgetId,
        parent_element: &'static str,
    },
}

/// Arena of widgets, in construction order.
#[derive(Debug, Clone, Default)]
pub struct WidgetTree {
    widgets: Vec<Widget>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id.0)
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.get(id).and_then(|widget| widget.parent)
    }

    /// Children of `id` in construction order. Empty for unknown ids.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.get(id)
            .map(|widget| widget.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn children_count(&self, id: WidgetId) -> usize {
        self.children(id).len()
    }

    /// Widgets without a parent, in construction order.
    pub fn roots(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.widgets
            .iter()
            .filter(|widget| widget.parent.is_none())
            .map(|widget| widget.id)
    }

    /// Walk up from `id` to the toplevel that owns it, if any.
    pub fn find_toplevel(&self, id: WidgetId) -> Option<WidgetId> {
        let mut current = self.get(id)?;
        loop {
            if current.category() == Category::Toplevel {
                return Some(current.id);
            }
            current = self.get(current.parent?)?;
        }
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn insert(
        &mut self,
        element: Element,
        parent: Option<WidgetId>,
        text: Option<String>,
    ) -> Result<WidgetId, ToolkitError> {
        if let Some(parent_id) = parent {
            let parent_widget = self
                .get(parent_id)
                .ok_or(ToolkitError::UnknownWidget(parent_id))?;
            if parent_widget.category() == Category::Leaf {
                return Err(ToolkitError::NotAContainer {
                    element: element.name(),
                    parent: parent_id,
                    parent_element: parent_widget.name(),
                });
            }
        }

        let id = WidgetId(self.widgets.len());
        self.widgets.push(Widget {
            id,
            element,
            parent,
            children: Vec::new(),
            text,
        });
        if let Some(parent_id) = parent {
            self.widgets[parent_id.0].children.push(id);
        }
        Ok(id)
    }
}

impl FactoryOutput for WidgetTree {
    type Handle = WidgetId;
    type Error = ToolkitError;
}

impl ToplevelFactory for WidgetTree {
    fn create_toplevel(&mut self, kind: ToplevelKind) -> Result<WidgetId, ToolkitError> {
        self.insert(Element::Toplevel(kind), None, None)
    }
}

impl ContainerFactory for WidgetTree {
    fn create_container(
        &mut self,
        kind: ContainerKind,
        parent: Option<&WidgetId>,
    ) -> Result<WidgetId, ToolkitError> {
        self.insert(Element::Container(kind), parent.copied(), None)
    }
}

impl LeafFactory for WidgetTree {
    fn create_leaf(
        &mut self,
        kind: LeafKind,
        parent: Option<&WidgetId>,
        text: &str,
    ) -> Result<WidgetId, ToolkitError> {
        self.insert(Element::Leaf(kind), parent.copied(), Some(text.to_string()))
    }
}
