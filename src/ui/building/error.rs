//! Error types for widget tree building

use crate::ui::building::compiled::ResultShape;
use thiserror::Error;

/// Errors that abort a compile. `E` is the widget factory's own error type.
///
/// All errors are terminal: the compile stops at the first one and no partial tree is
/// returned.
#[derive(Debug, Error)]
pub enum CompileError<E: std::error::Error + 'static> {
    /// The element name is not in the category registry.
    #[error("unknown element `{0}`")]
    Classification(String),
    /// A leaf element's body did not compile to a single piece of text.
    #[error("leaf element `{element}` expects plain text, found {found}")]
    Shape { element: String, found: ResultShape },
    /// The document root did not compile to exactly one widget.
    #[error("document root must be a single widget, found {0}")]
    Structural(ResultShape),
    /// The widget factory failed. Passed through unchanged.
    #[error(transparent)]
    Factory(E),
}

impl<E: std::error::Error + 'static> CompileError<E> {
    /// Short name of the error kind, for reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CompileError::Classification(_) => "classification",
            CompileError::Shape { .. } => "shape",
            CompileError::Structural(_) => "structural",
            CompileError::Factory(_) => "factory",
        }
    }
}
