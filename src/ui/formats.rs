//! Output formats for widget trees
//!
//! Each format implements [`Formatter`] and is looked up by name in a [`FormatRegistry`]:
//! - `treeviz`: one line per widget, nesting drawn with box characters
//! - `tag`: XML-like nesting with leaf text as content
//! - `json`: the tree as nested JSON objects

pub mod json;
pub mod registry;
pub mod tag;
pub mod treeviz;

pub use json::{to_json_value, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use tag::{to_tag_str, TagFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
