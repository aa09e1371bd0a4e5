//! Treeviz formatter for widget trees
//!
//! One line per widget, so a tree can be scanned quickly. Nesting is drawn with box
//! characters, two columns per level. Each root starts a block of its own:
//!
//! ```text
//! ⧉ main_dialog
//! └─ ☰ vbox
//!   ├─ • push_button "OK"
//!   └─ • input_field ""
//! ```
//!
//! Icons
//!     Toplevel: ⧉
//!     Container: ☰
//!     Leaf: •
//!
//! Labels longer than the configured width are truncated and end in `...`.

use crate::ui::formats::registry::{FormatError, Formatter};
use crate::ui::registry::Category;
use crate::ui::toolkit::{Widget, WidgetId, WidgetTree};

pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(category: Category) -> &'static str {
    match category {
        Category::Toplevel => "⧉",
        Category::Container => "☰",
        Category::Leaf => "•",
    }
}

fn label(widget: &Widget) -> String {
    match &widget.text {
        Some(text) => format!("{} {:?}", widget.name(), text),
        None => widget.name().to_string(),
    }
}

struct Treeviz<'a> {
    tree: &'a WidgetTree,
    label_width: usize,
    output: String,
}

impl Treeviz<'_> {
    fn line(&mut self, widget: &Widget, prefix: &str) {
        self.output.push_str(&format!(
            "{}{} {}\n",
            prefix,
            get_icon(widget.category()),
            truncate(&label(widget), self.label_width)
        ));
    }

    fn root(&mut self, id: WidgetId) {
        let Some(widget) = self.tree.get(id) else {
            return;
        };
        self.line(widget, "");
        self.children(widget, "");
    }

    fn children(&mut self, widget: &Widget, prefix: &str) {
        let count = widget.children.len();
        for (i, &child_id) in widget.children.iter().enumerate() {
            let Some(child) = self.tree.get(child_id) else {
                continue;
            };
            let is_last = i == count - 1;
            let connector = if is_last { "└─ " } else { "├─ " };
            self.line(child, &format!("{}{}", prefix, connector));

            let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
            self.children(child, &child_prefix);
        }
    }
}

pub fn to_treeviz_str(tree: &WidgetTree) -> String {
    to_treeviz_str_with_width(tree, DEFAULT_LABEL_WIDTH)
}

pub fn to_treeviz_str_with_width(tree: &WidgetTree, label_width: usize) -> String {
    let mut viz = Treeviz {
        tree,
        label_width,
        output: String::new(),
    };
    for root in tree.roots() {
        viz.root(root);
    }
    viz.output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter {
    label_width: usize,
}

impl TreevizFormatter {
    pub fn new(label_width: usize) -> Self {
        TreevizFormatter { label_width }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_WIDTH)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &WidgetTree) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_width(tree, self.label_width))
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }
}
