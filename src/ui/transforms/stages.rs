//! Standard pipeline stages

use crate::ui::building::flatten_ir;
use crate::ui::ir::IrNode;
use crate::ui::loader::{read_ir, IrFormat};
use crate::ui::transforms::{Runnable, TransformError};

/// Parses serialized IR text.
///
/// # Input
/// - `String` - a JSON or YAML document
///
/// # Output
/// - `IrNode` - the document root
pub struct ReadIr {
    format: IrFormat,
}

impl ReadIr {
    pub fn new(format: IrFormat) -> Self {
        ReadIr { format }
    }
}

impl Default for ReadIr {
    fn default() -> Self {
        Self::new(IrFormat::Auto)
    }
}

impl Runnable<String, IrNode> for ReadIr {
    fn run(&self, input: String) -> Result<IrNode, TransformError> {
        read_ir(&input, self.format).map_err(|err| TransformError::StageFailed {
            stage: "read-ir".to_string(),
            message: err.to_string(),
        })
    }
}

/// Splices nested sequences out of an IR tree. See [`flatten_ir`].
pub struct FlattenIr;

impl Runnable<IrNode, IrNode> for FlattenIr {
    fn run(&self, input: IrNode) -> Result<IrNode, TransformError> {
        Ok(flatten_ir(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_ir_yaml() {
        let source = "tag:\n  name: push_button\n  body:\n    static: OK\n";
        let node = ReadIr::new(IrFormat::Yaml)
            .run(source.to_string())
            .unwrap();
        assert_eq!(node, IrNode::tag("push_button", IrNode::text("OK")));
    }

    #[test]
    fn test_read_ir_reports_stage() {
        let err = ReadIr::default().run("{\"tag\": ".to_string()).unwrap_err();
        match err {
            TransformError::StageFailed { stage, .. } => assert_eq!(stage, "read-ir"),
            other => panic!("Expected StageFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_flatten_stage() {
        let node = IrNode::multi(vec![IrNode::multi(vec![IrNode::text("x")])]);
        assert_eq!(FlattenIr.run(node).unwrap(), IrNode::text("x"));
    }
}
