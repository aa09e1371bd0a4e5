//! JSON serialization of widget trees
//!
//! The output is an array with one object per root. Objects carry the widget id, element
//! name, category, leaf text (when present) and nested children.

use crate::ui::formats::registry::{FormatError, Formatter};
use crate::ui::toolkit::{WidgetId, WidgetTree};
use serde_json::{json, Value};

fn widget_value(tree: &WidgetTree, id: WidgetId) -> Value {
    let Some(widget) = tree.get(id) else {
        return Value::Null;
    };
    let children: Vec<Value> = widget
        .children
        .iter()
        .map(|&child| widget_value(tree, child))
        .collect();

    let mut value = json!({
        "id": widget.id,
        "element": widget.name(),
        "category": widget.category(),
    });
    if let Some(text) = &widget.text {
        value["text"] = json!(text);
    }
    value["children"] = Value::Array(children);
    value
}

/// The tree as a JSON array of root objects.
pub fn to_json_value(tree: &WidgetTree) -> Value {
    Value::Array(tree.roots().map(|root| widget_value(tree, root)).collect())
}

/// Formatter implementation for JSON output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &WidgetTree) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&to_json_value(tree))
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Widget tree as nested JSON objects"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::factory::{LeafFactory, ToplevelFactory};
    use crate::ui::registry::{LeafKind, ToplevelKind};

    #[test]
    fn test_json_shape() {
        let mut tree = WidgetTree::new();
        let dialog = tree.create_toplevel(ToplevelKind::MainDialog).unwrap();
        tree.create_leaf(LeafKind::PushButton, Some(&dialog), "OK")
            .unwrap();

        assert_eq!(
            to_json_value(&tree),
            json!([{
                "id": 0,
                "element": "main_dialog",
                "category": "toplevel",
                "children": [{
                    "id": 1,
                    "element": "push_button",
                    "category": "leaf",
                    "text": "OK",
                    "children": [],
                }],
            }])
        );
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(JsonFormatter.serialize(&WidgetTree::new()).unwrap(), "[]");
    }
}
