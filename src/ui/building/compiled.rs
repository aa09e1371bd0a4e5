//! Compilation results

use std::fmt;

/// The result of compiling one IR node.
///
/// A `Multi` never contains another `Multi`: sequences are spliced as they are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compiled<H> {
    /// Plain text, from a `Static` node.
    Text(String),
    /// A constructed widget, from a `Tag` node.
    Widget(H),
    /// A flat sequence of results, from a `Multi` node.
    Multi(Vec<Compiled<H>>),
}

impl<H> Compiled<H> {
    /// Describes the shape of this result, without the handles.
    pub fn shape(&self) -> ResultShape {
        match self {
            Compiled::Text(_) => ResultShape::Text,
            Compiled::Widget(_) => ResultShape::Widget,
            Compiled::Multi(items) => ResultShape::Sequence(items.len()),
        }
    }

    /// Reduces a one-element sequence to its element. Any other result is returned as is.
    pub fn into_single(self) -> Self {
        match self {
            Compiled::Multi(mut items) if items.len() == 1 => items.remove(0),
            other => other,
        }
    }

    /// Nesting depth of sequences: 0 for a single result, 1 for a flat sequence.
    pub fn depth(&self) -> usize {
        match self {
            Compiled::Multi(items) => 1 + items.iter().map(Compiled::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}

/// The shape of a compiled result, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    Text,
    Widget,
    Sequence(usize),
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultShape::Text => write!(f, "plain text"),
            ResultShape::Widget => write!(f, "a widget"),
            ResultShape::Sequence(0) => write!(f, "an empty sequence"),
            ResultShape::Sequence(len) => write!(f, "a sequence of {} results", len),
        }
    }
}
