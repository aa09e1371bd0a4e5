//! Fluent assertion API for widget trees

use crate::ui::registry::Category;
use crate::ui::toolkit::{Widget, WidgetId, WidgetTree};

/// Create an assertion builder for a widget tree
pub fn assert_tree(tree: &WidgetTree) -> TreeAssertion<'_> {
    TreeAssertion {
        tree,
        roots: tree.roots().collect(),
    }
}

pub struct TreeAssertion<'a> {
    tree: &'a WidgetTree,
    roots: Vec<WidgetId>,
}

impl<'a> TreeAssertion<'a> {
    pub fn widget_count(self, expected: usize) -> Self {
        assert_eq!(
            self.tree.len(),
            expected,
            "tree: Expected {} widgets, found {}",
            expected,
            self.tree.len()
        );
        self
    }

    pub fn root_count(self, expected: usize) -> Self {
        assert_eq!(
            self.roots.len(),
            expected,
            "tree: Expected {} roots, found {}",
            expected,
            self.roots.len()
        );
        self
    }

    pub fn root<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(WidgetAssertion<'a>),
    {
        let id = *self.roots.get(index).unwrap_or_else(|| {
            panic!(
                "tree: Root index {} out of bounds ({} roots)",
                index,
                self.roots.len()
            )
        });
        assertion(WidgetAssertion::new(self.tree, id, format!("root[{}]", index)));
        self
    }

    /// Assert on a widget by handle, e.g. the one returned by the compiler.
    pub fn widget<F>(self, id: WidgetId, assertion: F) -> Self
    where
        F: FnOnce(WidgetAssertion<'a>),
    {
        assertion(WidgetAssertion::new(self.tree, id, format!("widget{}", id)));
        self
    }
}

pub struct WidgetAssertion<'a> {
    tree: &'a WidgetTree,
    widget: &'a Widget,
    context: String,
}

impl<'a> WidgetAssertion<'a> {
    fn new(tree: &'a WidgetTree, id: WidgetId, context: String) -> Self {
        let widget = tree
            .get(id)
            .unwrap_or_else(|| panic!("{}: No widget with id {}", context, id));
        Self {
            tree,
            widget,
            context,
        }
    }

    pub fn element(self, expected: &str) -> Self {
        assert_eq!(
            self.widget.name(),
            expected,
            "{}: Expected element '{}', found '{}'",
            self.context,
            expected,
            self.widget.name()
        );
        self
    }

    pub fn category(self, expected: Category) -> Self {
        assert_eq!(
            self.widget.category(),
            expected,
            "{}: Expected {} widget, found {}",
            self.context,
            expected,
            self.widget.category()
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.widget.text.as_deref(),
            Some(expected),
            "{}: Expected text '{}', found {:?}",
            self.context,
            expected,
            self.widget.text
        );
        self
    }

    pub fn parent(self, expected: Option<WidgetId>) -> Self {
        assert_eq!(
            self.widget.parent, expected,
            "{}: Expected parent {:?}, found {:?}",
            self.context, expected, self.widget.parent
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.widget.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            self.summarize_children()
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(WidgetAssertion<'a>),
    {
        let id = *self.widget.children.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds ({} children)",
                self.context,
                index,
                self.widget.children.len()
            )
        });
        assertion(WidgetAssertion::new(
            self.tree,
            id,
            format!("{}[{}]", self.context, index),
        ));
        self
    }

    fn summarize_children(&self) -> String {
        self.widget
            .children
            .iter()
            .filter_map(|&id| self.tree.get(id))
            .map(|child| child.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
