//! Element category registry
//!
//! Every element name a template may use belongs to exactly one of three categories:
//!
//! - Toplevel: a root construct such as a dialog. Built without a parent.
//! - Container: built under a parent, and becomes the parent of its nested elements.
//! - Leaf: built under a parent from a single compiled text value. Never a parent.
//!
//! The registry is closed: the name lists below are the complete vocabulary. Names are
//! classified into typed kinds so that widget factories never dispatch on strings.
//!
//! If a name were listed in more than one category, lookup resolves it in the order
//! Toplevel, Leaf, Container. The shipped lists are disjoint.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// The construction category of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Toplevel,
    Container,
    Leaf,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Toplevel => write!(f, "toplevel"),
            Category::Container => write!(f, "container"),
            Category::Leaf => write!(f, "leaf"),
        }
    }
}

/// Toplevel elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToplevelKind {
    MainDialog,
    PopupDialog,
}

impl ToplevelKind {
    pub fn name(self) -> &'static str {
        match self {
            ToplevelKind::MainDialog => "main_dialog",
            ToplevelKind::PopupDialog => "popup_dialog",
        }
    }
}

/// Container elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    VBox,
    HBox,
}

impl ContainerKind {
    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::VBox => "vbox",
            ContainerKind::HBox => "hbox",
        }
    }
}

/// Leaf elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    PushButton,
    InputField,
}

impl LeafKind {
    pub fn name(self) -> &'static str {
        match self {
            LeafKind::PushButton => "push_button",
            LeafKind::InputField => "input_field",
        }
    }
}

/// A classified element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Toplevel(ToplevelKind),
    Container(ContainerKind),
    Leaf(LeafKind),
}

impl Element {
    pub fn category(self) -> Category {
        match self {
            Element::Toplevel(_) => Category::Toplevel,
            Element::Container(_) => Category::Container,
            Element::Leaf(_) => Category::Leaf,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Toplevel(kind) => kind.name(),
            Element::Container(kind) => kind.name(),
            Element::Leaf(kind) => kind.name(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const TOPLEVEL_ELEMENTS: &[ToplevelKind] =
    &[ToplevelKind::MainDialog, ToplevelKind::PopupDialog];
pub const CONTAINER_ELEMENTS: &[ContainerKind] = &[ContainerKind::VBox, ContainerKind::HBox];
pub const LEAF_ELEMENTS: &[LeafKind] = &[LeafKind::PushButton, LeafKind::InputField];

static REGISTRY: Lazy<HashMap<&'static str, Element>> = Lazy::new(|| {
    let mut table = HashMap::new();
    // or_insert keeps the first registration, which fixes the lookup order.
    for &kind in TOPLEVEL_ELEMENTS {
        table.entry(kind.name()).or_insert(Element::Toplevel(kind));
    }
    for &kind in LEAF_ELEMENTS {
        table.entry(kind.name()).or_insert(Element::Leaf(kind));
    }
    for &kind in CONTAINER_ELEMENTS {
        table.entry(kind.name()).or_insert(Element::Container(kind));
    }
    table
});

/// Resolve an element name to its typed element.
pub fn lookup(name: &str) -> Option<Element> {
    REGISTRY.get(name).copied()
}

/// Classify an element name, or `None` if the name is not registered.
pub fn classify(name: &str) -> Option<Category> {
    lookup(name).map(Element::category)
}

/// All registered elements, in lookup order.
pub fn elements() -> impl Iterator<Item = Element> {
    TOPLEVEL_ELEMENTS
        .iter()
        .map(|&kind| Element::Toplevel(kind))
        .chain(LEAF_ELEMENTS.iter().map(|&kind| Element::Leaf(kind)))
        .chain(CONTAINER_ELEMENTS.iter().map(|&kind| Element::Container(kind)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_classify_known_names() {
        assert_eq!(classify("main_dialog"), Some(Category::Toplevel));
        assert_eq!(classify("popup_dialog"), Some(Category::Toplevel));
        assert_eq!(classify("vbox"), Some(Category::Container));
        assert_eq!(classify("hbox"), Some(Category::Container));
        assert_eq!(classify("push_button"), Some(Category::Leaf));
        assert_eq!(classify("input_field"), Some(Category::Leaf));
    }

    #[test]
    fn test_classify_unknown_names() {
        assert_eq!(classify("frobnicate"), None);
        assert_eq!(classify(""), None);
        // Lookup is case sensitive
        assert_eq!(classify("VBox"), None);
    }

    #[test]
    fn test_lookup_returns_typed_kind() {
        assert_eq!(lookup("hbox"), Some(Element::Container(ContainerKind::HBox)));
        assert_eq!(lookup("input_field"), Some(Element::Leaf(LeafKind::InputField)));
    }

    #[test]
    fn test_name_lists_are_disjoint() {
        let mut seen = HashSet::new();
        for element in elements() {
            assert!(seen.insert(element.name()), "{} registered twice", element);
        }
        assert_eq!(seen.len(), REGISTRY.len());
    }

    #[test]
    fn test_every_element_round_trips_through_lookup() {
        for element in elements() {
            assert_eq!(lookup(element.name()), Some(element));
        }
    }
}
