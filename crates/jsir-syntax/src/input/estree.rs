//! Reader for Babel/ESTree JSON exports.
//!
//! Accepts the `File` document `@babel/parser` prints (`{"type": "File",
//! "program": {...}}`) or a bare `Program`. This is the only path for
//! `V8IntrinsicIdentifier` nodes, which need Babel's `v8intrinsic` plugin.

use crate::ast::Program;
use crate::traits::{ReadError, Reader};
use serde_json::Value;

/// Static instance of the ESTree reader for registry.
pub static ESTREE_READER: EstreeReader = EstreeReader;

/// ESTree JSON reader.
pub struct EstreeReader;

impl Reader for EstreeReader {
    fn language(&self) -> &'static str {
        "estree"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn read(&self, source: &str) -> Result<Program, ReadError> {
        read_estree(source)
    }
}

/// Parse a Babel JSON document into a syntax tree.
pub fn read_estree(source: &str) -> Result<Program, ReadError> {
    let mut root: Value = serde_json::from_str(source)?;
    let root_kind = root.get("type").and_then(Value::as_str).map(str::to_owned);

    let program = match root_kind.as_deref() {
        Some("File") => root
            .get_mut("program")
            .map(Value::take)
            .ok_or_else(|| ReadError::Parse("File node without a program".into()))?,
        Some("Program") => root,
        Some(other) => {
            return Err(ReadError::UnexpectedNode {
                expected: "File or Program".into(),
                got: other.into(),
            });
        }
        None => return Err(ReadError::Parse("root node has no type".into())),
    };

    let program: Program = serde_json::from_value(program)?;
    tracing::debug!(statements = program.body.len(), "read ESTree document");
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expression, Statement};

    #[test]
    fn test_file_root() {
        let program = read_estree(
            r#"{
                "type": "File",
                "program": {
                    "type": "Program",
                    "sourceType": "script",
                    "body": [
                        { "type": "ExpressionStatement",
                          "expression": { "type": "Identifier", "name": "x" } }
                    ],
                    "directives": []
                }
            }"#,
        )
        .unwrap();
        assert_eq!(program.body, vec![Statement::expr(Expression::ident("x"))]);
    }

    #[test]
    fn test_program_root() {
        let program = read_estree(r#"{ "type": "Program", "body": [ { "type": "EmptyStatement" } ] }"#)
            .unwrap();
        assert_eq!(program.body, vec![Statement::EmptyStatement]);
    }

    #[test]
    fn test_v8_intrinsic() {
        let program = read_estree(
            r#"{ "type": "Program", "body": [
                { "type": "ExpressionStatement",
                  "expression": {
                    "type": "CallExpression",
                    "callee": { "type": "V8IntrinsicIdentifier", "name": "DebugPrint" },
                    "arguments": []
                  } }
            ] }"#,
        )
        .unwrap();
        match &program.body[0] {
            Statement::ExpressionStatement {
                expression: Expression::CallExpression { callee, .. },
            } => assert_eq!(
                **callee,
                Expression::V8IntrinsicIdentifier {
                    name: "DebugPrint".into()
                }
            ),
            other => panic!("expected call, got {}", other.kind()),
        }
    }

    #[test]
    fn test_wrong_root() {
        let err = read_estree(r#"{ "type": "Identifier", "name": "x" }"#).unwrap_err();
        assert!(matches!(err, ReadError::UnexpectedNode { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = read_estree("{ not json").unwrap_err();
        assert!(matches!(err, ReadError::Json(_)));
    }
}
