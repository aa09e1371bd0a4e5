//! A widget factory that records its calls

use crate::ui::factory::{ContainerFactory, FactoryOutput, LeafFactory, ToplevelFactory};
use crate::ui::registry::{ContainerKind, LeafKind, ToplevelKind};
use thiserror::Error;

/// Opaque handle handed out by [`RecordingFactory`], numbered from 0 in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(pub usize);

/// One factory invocation, with the arguments it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryCall {
    Toplevel {
        name: &'static str,
    },
    Container {
        name: &'static str,
        parent: Option<Handle>,
    },
    Leaf {
        name: &'static str,
        parent: Option<Handle>,
        text: String,
    },
}

impl FactoryCall {
    pub fn toplevel(name: &'static str) -> Self {
        FactoryCall::Toplevel { name }
    }

    pub fn container(name: &'static str, parent: Option<Handle>) -> Self {
        FactoryCall::Container { name, parent }
    }

    pub fn leaf(name: &'static str, parent: Option<Handle>, text: &str) -> Self {
        FactoryCall::Leaf {
            name,
            parent,
            text: text.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FactoryCall::Toplevel { name }
            | FactoryCall::Container { name, .. }
            | FactoryCall::Leaf { name, .. } => *name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordingError {
    #[error("refused to build `{0}`")]
    Refused(&'static str),
}

/// Factory that logs calls instead of building widgets.
#[derive(Debug, Default)]
pub struct RecordingFactory {
    calls: Vec<FactoryCall>,
    fail_on: Option<&'static str>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory that fails when asked to build `element`. The failing call is still logged.
    pub fn failing_on(element: &'static str) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some(element),
        }
    }

    pub fn calls(&self) -> &[FactoryCall] {
        &self.calls
    }

    /// Names of the elements built so far, in call order.
    pub fn names(&self) -> Vec<&'static str> {
        self.calls.iter().map(FactoryCall::name).collect()
    }

    fn record(&mut self, call: FactoryCall) -> Result<Handle, RecordingError> {
        let name = call.name();
        let handle = Handle(self.calls.len());
        self.calls.push(call);
        if self.fail_on == Some(name) {
            return Err(RecordingError::Refused(name));
        }
        Ok(handle)
    }
}

impl FactoryOutput for RecordingFactory {
    type Handle = Handle;
    type Error = RecordingError;
}

impl ToplevelFactory for RecordingFactory {
    fn create_toplevel(&mut self, kind: ToplevelKind) -> Result<Handle, RecordingError> {
        self.record(FactoryCall::toplevel(kind.name()))
    }
}

impl ContainerFactory for RecordingFactory {
    fn create_container(
        &mut self,
        kind: ContainerKind,
        parent: Option<&Handle>,
    ) -> Result<Handle, RecordingError> {
        self.record(FactoryCall::container(kind.name(), parent.copied()))
    }
}

impl LeafFactory for RecordingFactory {
    fn create_leaf(
        &mut self,
        kind: LeafKind,
        parent: Option<&Handle>,
        text: &str,
    ) -> Result<Handle, RecordingError> {
        self.record(FactoryCall::leaf(kind.name(), parent.copied(), text))
    }
}
