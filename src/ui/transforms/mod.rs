//! Transform pipeline infrastructure
//!
//! Processing before compilation is a chain of stages. A stage implements
//! [`Runnable<I, O>`]; a [`Transform<I, O>`] wraps stages and chains them with `then`, so the
//! compiler checks that each stage's input matches the previous stage's output:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(ReadIr::new(IrFormat::Json))   // String -> IrNode
//!     .then(FlattenIr);                    // IrNode -> IrNode
//! ```
//!
//! Most callers go through [`DocumentLoader`](crate::ui::loader::DocumentLoader), which builds
//! this pipeline from its settings with [`ir_pipeline`].

pub mod stages;

use crate::ui::ir::IrNode;
use crate::ui::loader::IrFormat;
use stages::{FlattenIr, ReadIr};
use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Generic error with message
    #[error("{0}")]
    Error(String),
    /// Stage failed with specific error
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain `stage` after this transform, returning a transform with its output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

/// The standard source-to-IR pipeline: read in `format`, then optionally flatten.
pub fn ir_pipeline(format: IrFormat, flatten: bool) -> Transform<String, IrNode> {
    let read = Transform::from_fn(Ok).then(ReadIr::new(format));
    if flatten {
        read.then(FlattenIr)
    } else {
        read
    }
}
