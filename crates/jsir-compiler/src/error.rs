//! Compilation errors.

use thiserror::Error;

/// Why a syntax tree could not be compiled.
///
/// Every variant aborts the whole compilation; there is no partial output.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A node kind with no counterpart in the AST schema.
    #[error("unhandled node type {kind}")]
    UnhandledNode { kind: String },

    /// A known node kind in a shape the schema does not accept.
    #[error("unsupported {kind}: {reason}")]
    Unsupported { kind: String, reason: String },

    /// A built message failed validation. Indicates a compiler bug, not bad input.
    #[error(transparent)]
    Shape(#[from] ShapeViolation),

    #[error("nesting exceeds the limit of {limit} levels")]
    TooDeep { limit: usize },
}

impl CompileError {
    pub(crate) fn unhandled(kind: impl Into<String>) -> Self {
        CompileError::UnhandledNode { kind: kind.into() }
    }

    pub(crate) fn unsupported(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        CompileError::Unsupported {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the input program rather than the compiler.
    pub fn is_unsupported_input(&self) -> bool {
        matches!(
            self,
            CompileError::UnhandledNode { .. }
                | CompileError::Unsupported { .. }
                | CompileError::TooDeep { .. }
        )
    }
}

/// A message that does not satisfy its schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {message}.{field}: {problem}")]
pub struct ShapeViolation {
    pub message: &'static str,
    pub field: &'static str,
    pub problem: String,
}

impl ShapeViolation {
    pub fn new(message: &'static str, field: &'static str, problem: impl Into<String>) -> Self {
        Self {
            message,
            field,
            problem: problem.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CompileError::unhandled("ClassDeclaration").to_string(),
            "unhandled node type ClassDeclaration"
        );
        assert_eq!(
            CompileError::unsupported("YieldExpression", "delegating yield").to_string(),
            "unsupported YieldExpression: delegating yield"
        );
        let shape: CompileError = ShapeViolation::new("IfStatement", "test", "missing").into();
        assert_eq!(shape.to_string(), "malformed IfStatement.test: missing");
        assert!(!shape.is_unsupported_input());
    }
}
