//! Document loading utilities
//!
//! `DocumentLoader` holds serialized IR text and the settings needed to read it, and runs the
//! standard pipeline over it. It is used by the CLI and by the integration tests.
//!
//! ```rust,ignore
//! use slimui::ui::loader::DocumentLoader;
//! use slimui::ui::toolkit::WidgetTree;
//!
//! let mut tree = WidgetTree::new();
//! let root = DocumentLoader::from_path("dialog.yaml")?.build(&mut tree)?;
//! ```

use crate::ui::building::{compile_document, CompileError};
use crate::ui::factory::WidgetFactory;
use crate::ui::ir::IrNode;
use crate::ui::transforms::{ir_pipeline, TransformError};
use log::debug;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Serialization formats for IR documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IrFormat {
    /// Decide from the file extension, or from the document's first character.
    #[default]
    Auto,
    Json,
    Yaml,
}

impl IrFormat {
    /// Format implied by a file extension, if it names one.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(IrFormat::Json),
            "yaml" | "yml" => Some(IrFormat::Yaml),
            _ => None,
        }
    }

    /// Guess the format of `source`: JSON documents start with `{` or `[`, anything else is
    /// read as YAML.
    pub fn detect(source: &str) -> Self {
        match source.trim_start().chars().next() {
            Some('{') | Some('[') => IrFormat::Json,
            _ => IrFormat::Yaml,
        }
    }

    /// Resolve `Auto` against `source`.
    pub fn resolve(self, source: &str) -> Self {
        match self {
            IrFormat::Auto => Self::detect(source),
            explicit => explicit,
        }
    }
}

impl FromStr for IrFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(IrFormat::Auto),
            "json" => Ok(IrFormat::Json),
            "yaml" | "yml" => Ok(IrFormat::Yaml),
            other => Err(LoadError::UnknownFormat(other.to_string())),
        }
    }
}

/// Errors raised while reading IR.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON IR: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML IR: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unknown IR format `{0}` (expected auto, json or yaml)")]
    UnknownFormat(String),
}

/// Parse serialized IR.
///
/// YAML documents use the same single-key maps as JSON (`static: text`), not YAML tags.
pub fn read_ir(source: &str, format: IrFormat) -> Result<IrNode, LoadError> {
    let node = match format.resolve(source) {
        IrFormat::Json => serde_json::from_str(source)?,
        _ => serde_yaml::with::singleton_map_recursive::deserialize(
            serde_yaml::Deserializer::from_str(source),
        )?,
    };
    Ok(node)
}

/// Errors raised while building a document.
#[derive(Debug, Error)]
pub enum BuildError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Compile(#[from] CompileError<E>),
}

/// IR source with the settings needed to read and compile it.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
    format: IrFormat,
    flatten: bool,
}

impl DocumentLoader {
    /// Load from a file path. The format is taken from the extension when it names one.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let format = IrFormat::from_extension(path).unwrap_or_default();
        debug!("loaded {} ({:?})", path.display(), format);
        Ok(DocumentLoader::from_string(source).with_format(format))
    }

    /// Load from a string. The format is detected from its content.
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
            format: IrFormat::Auto,
            flatten: true,
        }
    }

    /// Read as `format`. `Auto` leaves the extension-derived choice in place.
    pub fn with_format(mut self, format: IrFormat) -> Self {
        if format != IrFormat::Auto {
            self.format = format;
        }
        self
    }

    /// Whether to run the flattening pre-pass (on by default).
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    pub fn format(&self) -> IrFormat {
        self.format
    }

    /// Read the IR, flattened if enabled.
    pub fn ir(&self) -> Result<IrNode, TransformError> {
        ir_pipeline(self.format, self.flatten).run(self.source.clone())
    }

    /// Read the IR and compile it with `factory`, returning the root widget.
    pub fn build<F: WidgetFactory>(
        &self,
        factory: &mut F,
    ) -> Result<F::Handle, BuildError<F::Error>> {
        let ir = self.ir()?;
        Ok(compile_document(&ir, factory)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{FactoryCall, Handle, RecordingFactory};

    const DIALOG_JSON: &str = r#"
        {"tag": {"name": "main_dialog", "body": {"multi": [
            {"tag": {"name": "push_button", "attrs": {"id": "ok"}, "body": {"static": "OK"}}}
        ]}}}
    "#;

    #[test]
    fn test_detect() {
        assert_eq!(IrFormat::detect("  \n{\"static\": \"x\"}"), IrFormat::Json);
        assert_eq!(IrFormat::detect("static: x"), IrFormat::Yaml);
        assert_eq!(IrFormat::detect(""), IrFormat::Yaml);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(
            IrFormat::from_extension(Path::new("a/dialog.JSON")),
            Some(IrFormat::Json)
        );
        assert_eq!(
            IrFormat::from_extension(Path::new("dialog.yml")),
            Some(IrFormat::Yaml)
        );
        assert_eq!(IrFormat::from_extension(Path::new("dialog.ir")), None);
    }

    #[test]
    fn test_parse_format_name() {
        assert_eq!("yaml".parse::<IrFormat>().unwrap(), IrFormat::Yaml);
        let err = "xml".parse::<IrFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown IR format `xml` (expected auto, json or yaml)"
        );
    }

    #[test]
    fn test_read_ir_json_with_attrs() {
        let node = read_ir(DIALOG_JSON, IrFormat::Auto).unwrap();
        assert_eq!(node.tag_count(), 2);
    }

    #[test]
    fn test_read_ir_yaml_maps() {
        let source = "\
tag:
  name: hbox
  attrs:
    spacing: 4
  body:
    multi:
      - tag:
          name: push_button
          body:
            static: \"Yes\"
      - multi: []
";
        let node = read_ir(source, IrFormat::Auto).unwrap();
        let mut attrs = crate::ui::ir::Attributes::new();
        attrs.insert("spacing".to_string(), 4i64.into());
        assert_eq!(
            node,
            IrNode::tag_with(
                "hbox",
                attrs,
                IrNode::multi(vec![
                    IrNode::tag("push_button", IrNode::text("Yes")),
                    IrNode::multi(vec![]),
                ])
            )
        );
    }

    #[test]
    fn test_read_ir_rejects_malformed_yaml() {
        let err = read_ir("tag: [unterminated", IrFormat::Yaml).unwrap_err();
        assert!(matches!(err, LoadError::Yaml(_)));
    }

    #[test]
    fn test_build_through_loader() {
        let mut factory = RecordingFactory::new();
        let root = DocumentLoader::from_string(DIALOG_JSON)
            .build(&mut factory)
            .unwrap();
        assert_eq!(root, Handle(0));
        assert_eq!(
            factory.calls(),
            &[
                FactoryCall::toplevel("main_dialog"),
                FactoryCall::leaf("push_button", Some(Handle(0)), "OK"),
            ]
        );
    }

    #[test]
    fn test_build_reports_compile_errors() {
        let mut factory = RecordingFactory::new();
        let err = DocumentLoader::from_string(r#"{"tag": {"name": "frobnicator"}}"#)
            .build(&mut factory)
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown element `frobnicator`");
    }

    #[test]
    fn test_explicit_format_overrides_detection() {
        let loader =
            DocumentLoader::from_string("{\"static\": \"x\"}").with_format(IrFormat::Yaml);
        assert_eq!(loader.format(), IrFormat::Yaml);
        // YAML is a superset of JSON, so this still reads.
        assert_eq!(loader.ir().unwrap(), IrNode::text("x"));
    }
}
