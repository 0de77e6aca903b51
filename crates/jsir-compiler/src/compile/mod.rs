//! Lowering from the syntax tree to AST messages.
//!
//! A depth-first walk over [`jsir_syntax::Program`]. Each node is mapped
//! bottom-up: children first, then the parent message is built through
//! [`make`](crate::schema::make). The first unsupported construct aborts the
//! walk.
//!
//! - [`params`]: formal parameters and bindings
//! - [`stmt`]: statements, declarations, loops, `try`
//! - [`expr`]: expressions, object literals, functions

mod expr;
mod params;
mod stmt;

use crate::error::CompileError;
use crate::ir;
use crate::schema::make;
use jsir_syntax::Program;

/// Limits applied while compiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Deepest statement/expression nesting accepted before giving up with
    /// [`CompileError::TooDeep`].
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Compiles syntax trees into [`ir::Ast`] messages.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn compile(&self, program: &Program) -> Result<ir::Ast, CompileError> {
        tracing::debug!(
            statements = program.body.len(),
            max_depth = self.options.max_depth,
            "compiling program"
        );
        let mut cx = CompileContext::new(&self.options);
        cx.program(program)
    }
}

/// Compile with default options.
pub fn compile(program: &Program) -> Result<ir::Ast, CompileError> {
    Compiler::default().compile(program)
}

/// State of one compilation.
struct CompileContext<'a> {
    options: &'a CompileOptions,
    depth: usize,
}

impl<'a> CompileContext<'a> {
    fn new(options: &'a CompileOptions) -> Self {
        Self { options, depth: 0 }
    }

    fn program(&mut self, program: &Program) -> Result<ir::Ast, CompileError> {
        let statements = program
            .body
            .iter()
            .enumerate()
            .map(|(index, stmt)| {
                tracing::debug!(index, kind = stmt.kind(), "top-level statement");
                self.statement(stmt)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(make(ir::Ast { statements })?)
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, CompileError>,
    ) -> Result<T, CompileError> {
        if self.depth >= self.options.max_depth {
            return Err(CompileError::TooDeep {
                limit: self.options.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Input text for a field the schema requires to be non-empty.
///
/// Readers can hand over empty names and operators (an ESTree document is
/// free to), so they are rejected here as input rather than as a shape error.
fn required_text(kind: &str, field: &str, value: &str) -> Result<String, CompileError> {
    if value.is_empty() {
        return Err(CompileError::unsupported(kind, format!("empty {}", field)));
    }
    Ok(value.to_owned())
}

/// Wire value of a function-like construct's kind.
fn function_type(generator: bool, is_async: bool) -> i32 {
    ir::FunctionType::from_flags(generator, is_async) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsir_syntax::{Expression, Statement};

    fn nested_negation(depth: usize) -> Expression {
        (0..depth).fold(Expression::number(1.0), |inner, _| {
            Expression::UnaryExpression {
                operator: "-".into(),
                prefix: true,
                argument: Box::new(inner),
            }
        })
    }

    #[test]
    fn test_empty_program() {
        let ast = compile(&Program::default()).unwrap();
        assert!(ast.statements.is_empty());
    }

    #[test]
    fn test_depth_limit() {
        let compiler = Compiler::new(CompileOptions { max_depth: 16 });

        let shallow = Program::new(vec![Statement::expr(nested_negation(8))]);
        assert!(compiler.compile(&shallow).is_ok());

        let deep = Program::new(vec![Statement::expr(nested_negation(32))]);
        let err = compiler.compile(&deep).unwrap_err();
        assert!(matches!(err, CompileError::TooDeep { limit: 16 }));
    }

    #[test]
    fn test_default_options() {
        assert_eq!(Compiler::default().options().max_depth, 256);
    }
}
