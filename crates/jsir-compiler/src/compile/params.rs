//! Parameters and variable bindings.
//!
//! The AST only knows plain names in binding position. Defaults, rest
//! parameters and destructuring are rejected, not desugared.

use super::CompileContext;
use crate::error::CompileError;
use crate::ir;
use crate::schema::make;
use jsir_syntax::{Pattern, VariableDeclaration, VariableDeclarator};

/// Name bound by a simple identifier pattern.
pub(super) fn binding_name(pattern: &Pattern) -> Result<&str, CompileError> {
    match pattern {
        Pattern::Identifier(id) if id.name.is_empty() => Err(CompileError::unsupported(
            pattern.kind(),
            "empty binding name",
        )),
        Pattern::Identifier(id) => Ok(&id.name),
        Pattern::AssignmentPattern { .. } => Err(CompileError::unsupported(
            pattern.kind(),
            "default values are not supported",
        )),
        Pattern::RestElement { .. } => Err(CompileError::unsupported(
            pattern.kind(),
            "rest bindings are not supported",
        )),
        Pattern::ObjectPattern | Pattern::ArrayPattern => Err(CompileError::unsupported(
            pattern.kind(),
            "destructuring is not supported",
        )),
        Pattern::Unsupported(node) => Err(CompileError::unhandled(&node.kind)),
    }
}

/// Wire value of a `var`/`let`/`const` keyword.
pub(super) fn declaration_kind(kind: &str) -> Result<ir::VariableDeclarationKind, CompileError> {
    match kind {
        "var" => Ok(ir::VariableDeclarationKind::Var),
        "let" => Ok(ir::VariableDeclarationKind::Let),
        "const" => Ok(ir::VariableDeclarationKind::Const),
        other => Err(CompileError::unsupported(
            "VariableDeclaration",
            format!("unknown declaration kind {:?}", other),
        )),
    }
}

/// The one declarator of a loop head (`for (let i = 0; ...)`, `for (const k in o)`).
pub(super) fn single_declarator<'d>(
    loop_kind: &str,
    decl: &'d VariableDeclaration,
) -> Result<&'d VariableDeclarator, CompileError> {
    declaration_kind(&decl.kind)?;
    match decl.declarations.as_slice() {
        [declarator] => Ok(declarator),
        declarators => Err(CompileError::unsupported(
            loop_kind,
            format!(
                "loop head must declare exactly one variable, found {}",
                declarators.len()
            ),
        )),
    }
}

impl CompileContext<'_> {
    pub(super) fn parameter(&self, pattern: &Pattern) -> Result<ir::Parameter, CompileError> {
        let name = binding_name(pattern)?;
        Ok(make(ir::Parameter { name: name.into() })?)
    }

    pub(super) fn parameters(&self, params: &[Pattern]) -> Result<Vec<ir::Parameter>, CompileError> {
        params.iter().map(|param| self.parameter(param)).collect()
    }

    pub(super) fn declarator(
        &mut self,
        declarator: &VariableDeclarator,
    ) -> Result<ir::VariableDeclarator, CompileError> {
        let name = binding_name(&declarator.id)?.to_string();
        let value = declarator
            .init
            .as_ref()
            .map(|init| self.expression(init).map(Box::new))
            .transpose()?;
        Ok(make(ir::VariableDeclarator { name, value })?)
    }
}
