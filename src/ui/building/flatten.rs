//! Sequence flattening
//!
//! Two passes keep sequences one level deep:
//!
//! - [`splice`] is used by the compiler while it assembles a `Multi` result. A child that
//!   compiled to a sequence contributes its elements, not itself.
//! - [`flatten_ir`] is an optional pre-pass over the IR with the same rules, so the compiler
//!   walks fewer wrapper nodes. It never changes which widgets get built, nor in what order.

use crate::ui::building::compiled::Compiled;
use crate::ui::ir::IrNode;
use log::trace;

/// Append `item` to `out`, splicing it in if it is a sequence.
///
/// Sequences produced by the compiler are already flat, so one level of splicing keeps the
/// result flat.
pub fn splice<H>(out: &mut Vec<Compiled<H>>, item: Compiled<H>) {
    match item {
        Compiled::Multi(items) => {
            trace!("splice {} results into sequence", items.len());
            out.extend(items);
        }
        other => out.push(other),
    }
}

/// Rewrite an IR tree so that no `Multi` directly contains a `Multi`.
///
/// A `Multi` left with exactly one child after splicing is replaced by that child. Tag
/// bodies are flattened too. Attributes and text are left untouched.
pub fn flatten_ir(node: IrNode) -> IrNode {
    match node {
        IrNode::Static(text) => IrNode::Static(text),
        IrNode::Multi(children) => {
            let mut flat = Vec::with_capacity(children.len());
            for child in children {
                match flatten_ir(child) {
                    IrNode::Multi(grandchildren) => flat.extend(grandchildren),
                    other => flat.push(other),
                }
            }
            if flat.len() == 1 {
                trace!("elide single-child sequence");
                return flat.remove(0);
            }
            IrNode::Multi(flat)
        }
        IrNode::Tag { name, attrs, body } => IrNode::Tag {
            name,
            attrs,
            body: Box::new(flatten_ir(*body)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> IrNode {
        IrNode::text(s)
    }

    #[test]
    fn test_splice_sequence() {
        let mut out: Vec<Compiled<u8>> = vec![Compiled::Text("a".into())];
        splice(
            &mut out,
            Compiled::Multi(vec![Compiled::Widget(1), Compiled::Text("b".into())]),
        );
        splice(&mut out, Compiled::Widget(2));
        assert_eq!(
            out,
            vec![
                Compiled::Text("a".into()),
                Compiled::Widget(1),
                Compiled::Text("b".into()),
                Compiled::Widget(2),
            ]
        );
    }

    #[test]
    fn test_splice_empty_sequence_adds_nothing() {
        let mut out: Vec<Compiled<u8>> = vec![];
        splice(&mut out, Compiled::Multi(vec![]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_flatten_nested_multis() {
        let node = IrNode::multi(vec![
            text("a"),
            IrNode::multi(vec![text("b"), IrNode::multi(vec![text("c"), text("d")])]),
            text("e"),
        ]);
        assert_eq!(
            flatten_ir(node),
            IrNode::multi(vec![text("a"), text("b"), text("c"), text("d"), text("e")])
        );
    }

    #[test]
    fn test_flatten_single_child_multi() {
        let node = IrNode::multi(vec![IrNode::multi(vec![text("only")])]);
        assert_eq!(flatten_ir(node), text("only"));
    }

    #[test]
    fn test_flatten_drops_empty_multis() {
        let node = IrNode::multi(vec![IrNode::multi(vec![]), text("a"), IrNode::multi(vec![])]);
        assert_eq!(flatten_ir(node), text("a"));
    }

    #[test]
    fn test_flatten_recurses_into_tag_bodies() {
        let node = IrNode::tag(
            "vbox",
            IrNode::multi(vec![IrNode::multi(vec![
                IrNode::tag("push_button", IrNode::multi(vec![text("OK")])),
                IrNode::tag("push_button", text("Cancel")),
            ])]),
        );
        assert_eq!(
            flatten_ir(node),
            IrNode::tag(
                "vbox",
                IrNode::multi(vec![
                    IrNode::tag("push_button", text("OK")),
                    IrNode::tag("push_button", text("Cancel")),
                ])
            )
        );
    }
}
