//! Intermediate Representation for templates
//!
//! This module defines the IR that an external template parser hands to the compiler.
//! The IR is a tree of `IrNode`s: literal text, ordered sequences and declared elements.
//! The compiler never sees raw markup, only this tree.
//!
//! The serialized form is externally tagged and snake_cased, so a document reads as:
//!
//! ```text
//! {"tag": {"name": "main_dialog", "body": {"multi": [
//!     {"tag": {"name": "push_button", "attrs": {"id": "ok"}, "body": {"static": "OK"}}}
//! ]}}}
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Attribute values a template may attach to an element.
///
/// Mirrors the property types the widget toolkit understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Integer(i64),
    String(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(value) => write!(f, "{}", value),
            AttrValue::Integer(value) => write!(f, "{}", value),
            AttrValue::String(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Integer(value)
    }
}

/// Element attributes, kept sorted by name.
pub type Attributes = BTreeMap<String, AttrValue>;

/// A node in the template IR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrNode {
    /// Literal text content.
    Static(String),
    /// An ordered sequence of nodes, in document order. May be empty.
    Multi(Vec<IrNode>),
    /// A declared element. `body` is usually a `Multi` but may be any node.
    Tag {
        name: String,
        #[serde(default)]
        attrs: Attributes,
        #[serde(default = "empty_body")]
        body: Box<IrNode>,
    },
}

fn empty_body() -> Box<IrNode> {
    Box::new(IrNode::Multi(Vec::new()))
}

impl IrNode {
    /// Creates a `Static` node.
    pub fn text(text: impl Into<String>) -> Self {
        IrNode::Static(text.into())
    }

    /// Creates a `Multi` node.
    pub fn multi(children: Vec<IrNode>) -> Self {
        IrNode::Multi(children)
    }

    /// Creates a `Tag` node without attributes.
    pub fn tag(name: impl Into<String>, body: IrNode) -> Self {
        Self::tag_with(name, Attributes::new(), body)
    }

    /// Creates a `Tag` node with attributes.
    pub fn tag_with(name: impl Into<String>, attrs: Attributes, body: IrNode) -> Self {
        IrNode::Tag {
            name: name.into(),
            attrs,
            body: Box::new(body),
        }
    }

    /// Number of `Tag` nodes in this tree.
    pub fn tag_count(&self) -> usize {
        match self {
            IrNode::Static(_) => 0,
            IrNode::Multi(children) => children.iter().map(IrNode::tag_count).sum(),
            IrNode::Tag { body, .. } => 1 + body.tag_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_count() {
        let node = IrNode::tag(
            "main_dialog",
            IrNode::multi(vec![
                IrNode::tag("vbox", IrNode::multi(vec![])),
                IrNode::text("stray"),
                IrNode::tag("push_button", IrNode::text("OK")),
            ]),
        );
        assert_eq!(node.tag_count(), 3);
        assert_eq!(IrNode::text("x").tag_count(), 0);
    }

    #[test]
    fn test_deserialize_defaults() {
        let node: IrNode = serde_json::from_str(r#"{"tag": {"name": "vbox"}}"#).unwrap();
        assert_eq!(node, IrNode::tag("vbox", IrNode::multi(vec![])));
    }

    #[test]
    fn test_deserialize_attribute_values() {
        let node: IrNode = serde_json::from_str(
            r#"{"tag": {"name": "input_field",
                "attrs": {"id": "surname", "enabled": true, "width": 20},
                "body": {"static": ""}}}"#,
        )
        .unwrap();
        let IrNode::Tag { attrs, .. } = node else {
            panic!("Expected Tag");
        };
        assert_eq!(attrs["id"], AttrValue::from("surname"));
        assert_eq!(attrs["enabled"], AttrValue::Bool(true));
        assert_eq!(attrs["width"], AttrValue::Integer(20));
    }

    #[test]
    fn test_serialized_form() {
        let node = IrNode::multi(vec![IrNode::text("a")]);
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"multi":[{"static":"a"}]}"#
        );
    }

    #[test]
    fn test_attr_value_display() {
        assert_eq!(AttrValue::from("ok").to_string(), "\"ok\"");
        assert_eq!(AttrValue::from(3i64).to_string(), "3");
        assert_eq!(AttrValue::from(false).to_string(), "false");
    }
}
