//! XML-like widget tree serialization
//!
//! - Element name -> tag name
//! - Leaf text -> text content
//! - Children -> nested tags, two spaces per level
//!
//! ```text
//! <main_dialog>
//!   <vbox>
//!     <push_button>OK</push_button>
//!   </vbox>
//! </main_dialog>
//! ```

use crate::ui::formats::registry::{FormatError, Formatter};
use crate::ui::toolkit::{WidgetId, WidgetTree};

struct TagSerializer<'a> {
    tree: &'a WidgetTree,
    output: String,
    indent_level: usize,
}

impl TagSerializer<'_> {
    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn visit(&mut self, id: WidgetId) {
        let Some(widget) = self.tree.get(id) else {
            return;
        };
        let tag = widget.name();
        self.output.push_str(&self.indent());
        self.output.push_str(&format!("<{tag}>"));

        if let Some(text) = &widget.text {
            self.output.push_str(&escape_xml(text));
        }

        if !widget.children.is_empty() {
            self.output.push('\n');
            self.indent_level += 1;
            for &child in &widget.children {
                self.visit(child);
            }
            self.indent_level -= 1;
            self.output.push_str(&self.indent());
        }

        self.output.push_str(&format!("</{tag}>\n"));
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn to_tag_str(tree: &WidgetTree) -> String {
    let mut serializer = TagSerializer {
        tree,
        output: String::new(),
        indent_level: 0,
    };
    for root in tree.roots() {
        serializer.visit(root);
    }
    serializer.output
}

/// Formatter implementation for tag format
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, tree: &WidgetTree) -> Result<String, FormatError> {
        Ok(to_tag_str(tree))
    }

    fn description(&self) -> &str {
        "XML-like nesting of widgets with leaf text as content"
    }
}
