//! Statement lowering.

use super::params::{declaration_kind, single_declarator};
use super::{CompileContext, function_type, required_text};
use crate::error::CompileError;
use crate::ir;
use crate::schema::make;
use jsir_syntax::{
    CatchClause, Expression, ForInit, Function, Statement, VariableDeclaration,
};

impl CompileContext<'_> {
    pub(super) fn statement(&mut self, stmt: &Statement) -> Result<ir::Statement, CompileError> {
        self.nested(|cx| cx.lower_statement(stmt))
    }

    pub(super) fn statements(
        &mut self,
        stmts: &[Statement],
    ) -> Result<Vec<ir::Statement>, CompileError> {
        stmts.iter().map(|stmt| self.statement(stmt)).collect()
    }

    fn boxed_statement(&mut self, stmt: &Statement) -> Result<Box<ir::Statement>, CompileError> {
        self.statement(stmt).map(Box::new)
    }

    fn lower_statement(&mut self, stmt: &Statement) -> Result<ir::Statement, CompileError> {
        tracing::trace!(kind = stmt.kind(), "statement");

        let lowered: ir::Statement = match stmt {
            Statement::EmptyStatement => make(ir::EmptyStatement {})?.into(),

            Statement::BlockStatement(block) => make(ir::BlockStatement {
                body: self.statements(&block.body)?,
            })?
            .into(),

            Statement::ExpressionStatement { expression } => make(ir::ExpressionStatement {
                expression: Some(self.expression(expression)?),
            })?
            .into(),

            Statement::VariableDeclaration(decl) => self.variable_declaration(decl)?.into(),

            Statement::FunctionDeclaration(func) => self.function_declaration(func)?.into(),

            Statement::ReturnStatement { argument } => make(ir::ReturnStatement {
                argument: argument
                    .as_ref()
                    .map(|arg| self.expression(arg))
                    .transpose()?,
            })?
            .into(),

            Statement::IfStatement {
                test,
                consequent,
                alternate,
            } => make(ir::IfStatement {
                test: Some(self.expression(test)?),
                if_body: Some(self.boxed_statement(consequent)?),
                else_body: alternate
                    .as_deref()
                    .map(|alt| self.boxed_statement(alt))
                    .transpose()?,
            })?
            .into(),

            Statement::WhileStatement { test, body } => make(ir::WhileLoop {
                test: Some(self.expression(test)?),
                body: Some(self.boxed_statement(body)?),
            })?
            .into(),

            Statement::DoWhileStatement { body, test } => make(ir::DoWhileLoop {
                body: Some(self.boxed_statement(body)?),
                test: Some(self.expression(test)?),
            })?
            .into(),

            Statement::ForStatement {
                init,
                test,
                update,
                body,
            } => self
                .for_loop(init.as_ref(), test.as_ref(), update.as_ref(), body)?
                .into(),

            Statement::ForInStatement { left, right, body } => make(ir::ForInLoop {
                left: Some(self.loop_binding("ForInStatement", left)?),
                right: Some(self.expression(right)?),
                body: Some(self.boxed_statement(body)?),
            })?
            .into(),

            Statement::ForOfStatement { is_await: true, .. } => {
                return Err(CompileError::unsupported(
                    "ForOfStatement",
                    "for await loops are not supported",
                ));
            }

            Statement::ForOfStatement {
                left, right, body, ..
            } => make(ir::ForOfLoop {
                left: Some(self.loop_binding("ForOfStatement", left)?),
                right: Some(self.expression(right)?),
                body: Some(self.boxed_statement(body)?),
            })?
            .into(),

            Statement::TryStatement {
                block,
                handler,
                finalizer,
            } => {
                if handler.is_none() && finalizer.is_none() {
                    return Err(CompileError::unsupported(
                        "TryStatement",
                        "try needs a catch or finally clause",
                    ));
                }
                let body = self.statements(&block.body)?;
                let catch = handler
                    .as_ref()
                    .map(|clause| self.catch_clause(clause))
                    .transpose()?;
                let finally = match finalizer {
                    Some(block) => Some(make(ir::FinallyClause {
                        body: self.statements(&block.body)?,
                    })?),
                    None => None,
                };
                make(ir::TryStatement {
                    body,
                    catch,
                    finally,
                })?
                .into()
            }

            Statement::ThrowStatement { argument } => make(ir::ThrowStatement {
                argument: Some(self.expression(argument)?),
            })?
            .into(),

            Statement::Unsupported(node) => return Err(CompileError::unhandled(&node.kind)),
        };

        Ok(make(lowered)?)
    }

    fn variable_declaration(
        &mut self,
        decl: &VariableDeclaration,
    ) -> Result<ir::VariableDeclaration, CompileError> {
        let kind = declaration_kind(&decl.kind)?;
        if decl.declarations.is_empty() {
            return Err(CompileError::unsupported(
                "VariableDeclaration",
                "declaration has no declarators",
            ));
        }
        let declarations = decl
            .declarations
            .iter()
            .map(|declarator| self.declarator(declarator))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(make(ir::VariableDeclaration {
            kind: kind as i32,
            declarations,
        })?)
    }

    fn function_declaration(&mut self, func: &Function) -> Result<ir::FunctionDeclaration, CompileError> {
        let name = func.id.as_ref().ok_or_else(|| {
            CompileError::unsupported("FunctionDeclaration", "function declaration has no name")
        })?;
        Ok(make(ir::FunctionDeclaration {
            name: required_text("FunctionDeclaration", "name", &name.name)?,
            r#type: function_type(func.generator, func.is_async),
            parameters: self.parameters(&func.params)?,
            body: self.statements(&func.body.body)?,
        })?)
    }

    /// `for (init; test; update)` with all three clauses and a single declarator.
    fn for_loop(
        &mut self,
        init: Option<&ForInit>,
        test: Option<&Expression>,
        update: Option<&Expression>,
        body: &Statement,
    ) -> Result<ir::ForLoop, CompileError> {
        let (Some(init), Some(test), Some(update)) = (init, test, update) else {
            return Err(CompileError::unsupported(
                "ForStatement",
                "init, test and update clauses are all required",
            ));
        };
        let declarator = match init {
            ForInit::VariableDeclaration(decl) => single_declarator("ForStatement", decl)?,
            ForInit::Expression(expr) => {
                return Err(CompileError::unsupported(
                    "ForStatement",
                    format!("init must be a variable declaration, found {}", expr.kind()),
                ));
            }
        };
        Ok(make(ir::ForLoop {
            init: Some(self.declarator(declarator)?),
            test: Some(self.expression(test)?),
            update: Some(self.expression(update)?),
            body: Some(self.boxed_statement(body)?),
        })?)
    }

    /// Left side of `for-in`/`for-of`: one declared variable, no initializer.
    fn loop_binding(
        &mut self,
        loop_kind: &str,
        left: &ForInit,
    ) -> Result<ir::VariableDeclarator, CompileError> {
        let decl = match left {
            ForInit::VariableDeclaration(decl) => decl,
            ForInit::Expression(expr) => {
                return Err(CompileError::unsupported(
                    loop_kind,
                    format!("left side must be a variable declaration, found {}", expr.kind()),
                ));
            }
        };
        let declarator = single_declarator(loop_kind, decl)?;
        if declarator.init.is_some() {
            return Err(CompileError::unsupported(
                loop_kind,
                "loop variable must not have an initializer",
            ));
        }
        self.declarator(declarator)
    }

    fn catch_clause(&mut self, clause: &CatchClause) -> Result<ir::CatchClause, CompileError> {
        let parameter = clause
            .param
            .as_ref()
            .map(|param| self.parameter(param))
            .transpose()?;
        Ok(make(ir::CatchClause {
            parameter,
            body: self.statements(&clause.body.body)?,
        })?)
    }
}

#[cfg(test)]
mod tests {
    use crate::compile::compile;
    use crate::error::CompileError;
    use crate::ir::{self, statement};
    use jsir_syntax::{
        BlockStatement, CatchClause, Expression, ForInit, Pattern, Program, Statement,
        VariableDeclaration, VariableDeclarator,
    };

    fn single(stmt: Statement) -> Result<statement::Statement, CompileError> {
        let ast = compile(&Program::new(vec![stmt]))?;
        let mut statements = ast.statements;
        assert_eq!(statements.len(), 1);
        Ok(statements.remove(0).statement.unwrap())
    }

    fn declaration(kind: &str, declarators: &[(&str, Option<f64>)]) -> VariableDeclaration {
        VariableDeclaration {
            kind: kind.into(),
            declarations: declarators
                .iter()
                .map(|(name, init)| {
                    VariableDeclarator::new(Pattern::ident(*name), init.map(Expression::number))
                })
                .collect(),
        }
    }

    fn empty_body() -> Box<Statement> {
        Box::new(Statement::block(vec![]))
    }

    #[test]
    fn test_variable_declaration() {
        let stmt = Statement::VariableDeclaration(declaration("let", &[("a", Some(1.0)), ("b", None)]));
        match single(stmt).unwrap() {
            statement::Statement::VariableDeclaration(decl) => {
                assert_eq!(decl.kind, ir::VariableDeclarationKind::Let as i32);
                assert_eq!(decl.declarations.len(), 2);
                assert_eq!(decl.declarations[0].name, "a");
                assert!(decl.declarations[0].value.is_some());
                assert_eq!(decl.declarations[1].name, "b");
                assert!(decl.declarations[1].value.is_none());
            }
            other => panic!("expected VariableDeclaration, got {}", other.name()),
        }
    }

    #[test]
    fn test_if_without_else() {
        let stmt = Statement::IfStatement {
            test: Expression::ident("c"),
            consequent: Box::new(Statement::EmptyStatement),
            alternate: None,
        };
        match single(stmt).unwrap() {
            statement::Statement::IfStatement(ir) => {
                assert!(ir.test.is_some());
                assert!(ir.if_body.is_some());
                assert!(ir.else_body.is_none());
            }
            other => panic!("expected IfStatement, got {}", other.name()),
        }
    }

    #[test]
    fn test_for_requires_all_clauses() {
        let stmt = Statement::ForStatement {
            init: Some(ForInit::VariableDeclaration(declaration("let", &[("i", Some(0.0))]))),
            test: None,
            update: Some(Expression::ident("i")),
            body: empty_body(),
        };
        assert!(matches!(single(stmt), Err(CompileError::Unsupported { .. })));
    }

    #[test]
    fn test_for_rejects_multiple_declarators() {
        let stmt = Statement::ForStatement {
            init: Some(ForInit::VariableDeclaration(declaration(
                "let",
                &[("i", Some(0.0)), ("j", Some(0.0))],
            ))),
            test: Some(Expression::ident("i")),
            update: Some(Expression::ident("i")),
            body: empty_body(),
        };
        let err = single(stmt).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported ForStatement: loop head must declare exactly one variable, found 2"
        );
    }

    #[test]
    fn test_for_in_rejects_initializer() {
        let stmt = Statement::ForInStatement {
            left: ForInit::VariableDeclaration(declaration("var", &[("k", Some(0.0))])),
            right: Expression::ident("o"),
            body: empty_body(),
        };
        assert!(matches!(single(stmt), Err(CompileError::Unsupported { .. })));
    }

    #[test]
    fn test_for_of_binding() {
        let stmt = Statement::ForOfStatement {
            left: ForInit::VariableDeclaration(declaration("const", &[("x", None)])),
            right: Expression::ident("xs"),
            body: empty_body(),
            is_await: false,
        };
        match single(stmt).unwrap() {
            statement::Statement::ForOfLoop(ir) => {
                assert_eq!(ir.left.unwrap().name, "x");
            }
            other => panic!("expected ForOfLoop, got {}", other.name()),
        }
    }

    #[test]
    fn test_for_await_rejected() {
        let stmt = Statement::ForOfStatement {
            left: ForInit::VariableDeclaration(declaration("const", &[("x", None)])),
            right: Expression::ident("xs"),
            body: empty_body(),
            is_await: true,
        };
        assert!(matches!(single(stmt), Err(CompileError::Unsupported { .. })));
    }

    #[test]
    fn test_try_clauses_flattened() {
        let stmt = Statement::TryStatement {
            block: BlockStatement::new(vec![Statement::EmptyStatement]),
            handler: Some(CatchClause {
                param: Some(Pattern::ident("e")),
                body: BlockStatement::new(vec![Statement::EmptyStatement, Statement::EmptyStatement]),
            }),
            finalizer: Some(BlockStatement::new(vec![Statement::EmptyStatement])),
        };
        match single(stmt).unwrap() {
            statement::Statement::TryStatement(ir) => {
                assert_eq!(ir.body.len(), 1);
                let catch = ir.catch.unwrap();
                assert_eq!(catch.parameter.unwrap().name, "e");
                assert_eq!(catch.body.len(), 2);
                assert_eq!(ir.finally.unwrap().body.len(), 1);
            }
            other => panic!("expected TryStatement, got {}", other.name()),
        }
    }

    #[test]
    fn test_anonymous_function_declaration() {
        let stmt = Statement::FunctionDeclaration(jsir_syntax::Function {
            id: None,
            params: vec![],
            body: BlockStatement::default(),
            generator: false,
            is_async: false,
        });
        assert!(matches!(single(stmt), Err(CompileError::Unsupported { .. })));
    }

    #[test]
    fn test_empty_bindings_are_unsupported() {
        let no_declarators = Statement::VariableDeclaration(declaration("var", &[]));
        let err = single(no_declarators).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported VariableDeclaration: declaration has no declarators"
        );

        let unnamed = Statement::VariableDeclaration(declaration("let", &[("", None)]));
        let err = single(unnamed).unwrap_err();
        assert!(err.is_unsupported_input(), "{err}");

        let nameless_function = Statement::FunctionDeclaration(jsir_syntax::Function {
            id: Some(jsir_syntax::Identifier::new("")),
            params: vec![],
            body: BlockStatement::default(),
            generator: false,
            is_async: false,
        });
        let err = single(nameless_function).unwrap_err();
        assert_eq!(err.to_string(), "unsupported FunctionDeclaration: empty name");
    }

    #[test]
    fn test_unhandled_statement() {
        let err = single(Statement::unsupported("BreakStatement")).unwrap_err();
        assert_eq!(err.to_string(), "unhandled node type BreakStatement");
    }
}
