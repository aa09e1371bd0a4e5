//! The compiler: walks an IR tree and builds widgets
//!
//! Each node variant has its own rule:
//!
//! - `Static` compiles to its text.
//! - `Multi` with one child compiles to that child's result. Any other `Multi` compiles its
//!   children in order into a flat sequence, reduced to its element if splicing left only one.
//! - `Tag` is classified and built through the factory capability of its category. Toplevels
//!   and containers then become the current parent while their body is compiled; leaves
//!   compile their body to text first and pass it to the factory.

use crate::ui::building::compiled::Compiled;
use crate::ui::building::context::BuildContext;
use crate::ui::building::error::CompileError;
use crate::ui::building::flatten::splice;
use crate::ui::factory::{FactoryOutput, WidgetFactory};
use crate::ui::ir::IrNode;
use crate::ui::registry::{self, Element};
use log::debug;

type Result<T, F> = std::result::Result<T, CompileError<<F as FactoryOutput>::Error>>;

/// Walks IR trees, building widgets with the factory it borrows.
pub struct Compiler<'f, F: WidgetFactory> {
    factory: &'f mut F,
}

impl<'f, F: WidgetFactory> Compiler<'f, F> {
    pub fn new(factory: &'f mut F) -> Self {
        Self { factory }
    }

    /// Compile a whole document. The root must compile to exactly one widget, either
    /// directly or as the only element of a sequence.
    ///
    /// A well-formed root is a toplevel, but any single widget is accepted: a lone container
    /// or leaf is built without a parent and returned as the root.
    pub fn compile_document(&mut self, root: &IrNode) -> Result<F::Handle, F> {
        let mut context = BuildContext::new();
        match self.compile(root, &mut context)?.into_single() {
            Compiled::Widget(handle) => Ok(handle),
            other => Err(CompileError::Structural(other.shape())),
        }
    }

    /// Compile one node under `context`. The context is left as it was found.
    pub fn compile(
        &mut self,
        node: &IrNode,
        context: &mut BuildContext<F::Handle>,
    ) -> Result<Compiled<F::Handle>, F> {
        match node {
            IrNode::Static(text) => Ok(Compiled::Text(text.clone())),
            IrNode::Multi(children) => self.compile_multi(children, context),
            IrNode::Tag { name, body, .. } => self.compile_tag(name, body, context),
        }
    }

    fn compile_multi(
        &mut self,
        children: &[IrNode],
        context: &mut BuildContext<F::Handle>,
    ) -> Result<Compiled<F::Handle>, F> {
        if let [only] = children {
            return self.compile(only, context);
        }
        let mut results = Vec::with_capacity(children.len());
        for child in children {
            let compiled = self.compile(child, context)?;
            splice(&mut results, compiled);
        }
        Ok(Compiled::Multi(results).into_single())
    }

    fn compile_tag(
        &mut self,
        name: &str,
        body: &IrNode,
        context: &mut BuildContext<F::Handle>,
    ) -> Result<Compiled<F::Handle>, F> {
        let previous_parent = context.current_parent().cloned();
        let element =
            registry::lookup(name).ok_or_else(|| CompileError::Classification(name.to_string()))?;
        debug!(
            "build {} `{}` under {:?}",
            element.category(),
            name,
            previous_parent
        );

        let widget = match element {
            Element::Toplevel(kind) => {
                let widget = self
                    .factory
                    .create_toplevel(kind)
                    .map_err(CompileError::Factory)?;
                self.compile_children(widget.clone(), body, context)?;
                widget
            }
            Element::Container(kind) => {
                let widget = self
                    .factory
                    .create_container(kind, previous_parent.as_ref())
                    .map_err(CompileError::Factory)?;
                self.compile_children(widget.clone(), body, context)?;
                widget
            }
            Element::Leaf(kind) => {
                let text = self.compile_text(name, body, context)?;
                debug!("leaf `{}` text {:?}", name, text);
                self.factory
                    .create_leaf(kind, previous_parent.as_ref(), &text)
                    .map_err(CompileError::Factory)?
            }
        };
        Ok(Compiled::Widget(widget))
    }

    /// Compile `body` with `parent` as the current parent. Results are discarded: children
    /// attach themselves to the parent as they are built.
    fn compile_children(
        &mut self,
        parent: F::Handle,
        body: &IrNode,
        context: &mut BuildContext<F::Handle>,
    ) -> Result<(), F> {
        let mut scope = context.enter(parent);
        self.compile(body, &mut scope)?;
        Ok(())
    }

    /// Compile a leaf body, which must reduce to a single piece of text.
    fn compile_text(
        &mut self,
        name: &str,
        body: &IrNode,
        context: &mut BuildContext<F::Handle>,
    ) -> Result<String, F> {
        match self.compile(body, context)?.into_single() {
            Compiled::Text(text) => Ok(text),
            other => Err(CompileError::Shape {
                element: name.to_string(),
                found: other.shape(),
            }),
        }
    }
}

/// Compile `node` under `context` with `factory`.
pub fn compile<F: WidgetFactory>(
    node: &IrNode,
    context: &mut BuildContext<F::Handle>,
    factory: &mut F,
) -> Result<Compiled<F::Handle>, F> {
    Compiler::new(factory).compile(node, context)
}

/// Compile a document with a fresh context and return its root widget.
///
/// Accepts any single widget as the root, not only a toplevel. See
/// [`Compiler::compile_document`].
pub fn compile_document<F: WidgetFactory>(root: &IrNode, factory: &mut F) -> Result<F::Handle, F> {
    Compiler::new(factory).compile_document(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::building::compiled::ResultShape;
    use crate::ui::testing::{FactoryCall, Handle, RecordingFactory};

    fn button(text: &str) -> IrNode {
        IrNode::tag("push_button", IrNode::text(text))
    }

    #[test]
    fn test_static_compiles_to_text() {
        let mut factory = RecordingFactory::new();
        let mut context = BuildContext::new();
        let result = compile(&IrNode::text("hello"), &mut context, &mut factory).unwrap();
        assert_eq!(result, Compiled::Text("hello".to_string()));
        assert!(factory.calls().is_empty());
    }

    #[test]
    fn test_empty_multi_compiles_to_empty_sequence() {
        let mut factory = RecordingFactory::new();
        let mut context = BuildContext::new();
        let result = compile(&IrNode::multi(vec![]), &mut context, &mut factory).unwrap();
        assert_eq!(result, Compiled::Multi(vec![]));
    }

    #[test]
    fn test_sequence_left_with_one_element_is_reduced() {
        let mut factory = RecordingFactory::new();
        let mut context = BuildContext::new();
        let node = IrNode::multi(vec![IrNode::multi(vec![]), IrNode::text("a")]);
        let result = compile(&node, &mut context, &mut factory).unwrap();
        assert_eq!(result, Compiled::Text("a".to_string()));

        let node = IrNode::multi(vec![IrNode::multi(vec![]), button("OK")]);
        let result = compile(&node, &mut context, &mut factory).unwrap();
        assert_eq!(result, Compiled::Widget(Handle(0)));
    }

    #[test]
    fn test_container_root_is_accepted() {
        let mut factory = RecordingFactory::new();
        let root = compile_document(&IrNode::tag("vbox", button("OK")), &mut factory).unwrap();
        assert_eq!(root, Handle(0));
        assert_eq!(factory.calls()[0], FactoryCall::container("vbox", None));
    }

    #[test]
    fn test_leaf_under_parent() {
        let mut factory = RecordingFactory::new();
        let mut context = BuildContext::with_parent(Handle(99));
        let result = compile(&button("OK"), &mut context, &mut factory).unwrap();
        assert_eq!(result, Compiled::Widget(Handle(0)));
        assert_eq!(
            factory.calls(),
            &[FactoryCall::leaf("push_button", Some(Handle(99)), "OK")]
        );
    }

    #[test]
    fn test_toplevel_ignores_ambient_parent() {
        let mut factory = RecordingFactory::new();
        let mut context = BuildContext::with_parent(Handle(99));
        compile(
            &IrNode::tag("popup_dialog", IrNode::multi(vec![])),
            &mut context,
            &mut factory,
        )
        .unwrap();
        assert_eq!(factory.calls(), &[FactoryCall::toplevel("popup_dialog")]);
        assert_eq!(context.current_parent(), Some(&Handle(99)));
    }

    #[test]
    fn test_container_children_attach_to_container() {
        let mut factory = RecordingFactory::new();
        let node = IrNode::tag(
            "hbox",
            IrNode::multi(vec![button("a"), IrNode::tag("vbox", button("b"))]),
        );
        let mut context = BuildContext::with_parent(Handle(50));
        compile(&node, &mut context, &mut factory).unwrap();
        assert_eq!(
            factory.calls(),
            &[
                FactoryCall::container("hbox", Some(Handle(50))),
                FactoryCall::leaf("push_button", Some(Handle(0)), "a"),
                FactoryCall::container("vbox", Some(Handle(0))),
                FactoryCall::leaf("push_button", Some(Handle(2)), "b"),
            ]
        );
    }

    #[test]
    fn test_leaf_body_with_widget_is_shape_error() {
        let mut factory = RecordingFactory::new();
        let node = IrNode::tag("push_button", IrNode::tag("vbox", IrNode::multi(vec![])));
        let err = compile_document(&node, &mut factory).unwrap_err();
        match err {
            CompileError::Shape { element, found } => {
                assert_eq!(element, "push_button");
                assert_eq!(found, ResultShape::Widget);
            }
            other => panic!("Expected Shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_leaf_body_with_several_texts_is_shape_error() {
        let mut factory = RecordingFactory::new();
        let node = IrNode::tag(
            "input_field",
            IrNode::multi(vec![IrNode::text("a"), IrNode::text("b")]),
        );
        let err = compile_document(&node, &mut factory).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Shape {
                found: ResultShape::Sequence(2),
                ..
            }
        ));
        assert!(factory.calls().is_empty());
    }

    #[test]
    fn test_leaf_body_reduces_single_element_sequence() {
        let mut factory = RecordingFactory::new();
        let node = IrNode::tag(
            "push_button",
            IrNode::multi(vec![IrNode::multi(vec![]), IrNode::text("Go")]),
        );
        let mut context = BuildContext::new();
        compile(&node, &mut context, &mut factory).unwrap();
        assert_eq!(factory.calls(), &[FactoryCall::leaf("push_button", None, "Go")]);
    }

    #[test]
    fn test_document_root_must_be_widget() {
        let mut factory = RecordingFactory::new();
        let err = compile_document(&IrNode::text("just text"), &mut factory).unwrap_err();
        assert!(matches!(err, CompileError::Structural(ResultShape::Text)));

        let err = compile_document(&IrNode::multi(vec![]), &mut factory).unwrap_err();
        assert!(matches!(err, CompileError::Structural(ResultShape::Sequence(0))));
    }

    #[test]
    fn test_document_root_inside_single_element_sequence() {
        let mut factory = RecordingFactory::new();
        let root = IrNode::multi(vec![
            IrNode::multi(vec![]),
            IrNode::tag("main_dialog", IrNode::multi(vec![])),
        ]);
        assert_eq!(compile_document(&root, &mut factory).unwrap(), Handle(0));
    }
}
