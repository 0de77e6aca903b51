//! Source text in, wire bytes out.

use jsir_compiler::ir::{
    self, BinaryExpression, Expression, NumberLiteral, VariableDeclaration,
    VariableDeclarationKind, VariableDeclarator, expression, statement,
};
use jsir_compiler::{Ast, CompileError, compile, decode, encode};
use jsir_syntax::{ReadError, read_estree, read_javascript};
use serde_json::json;

fn compile_js(source: &str) -> Result<Ast, CompileError> {
    let program = read_javascript(source).expect("source should parse");
    compile(&program)
}

fn compile_estree(program: serde_json::Value) -> Result<Ast, CompileError> {
    let program = read_estree(&program.to_string()).expect("document should parse");
    compile(&program)
}

fn number(value: f64) -> Box<Expression> {
    Box::new(NumberLiteral { value }.into())
}

fn only_expression(ast: &Ast) -> &expression::Expression {
    match ast.statements.as_slice() {
        [stmt] => match &stmt.statement {
            Some(statement::Statement::ExpressionStatement(stmt)) => stmt
                .expression
                .as_ref()
                .and_then(|expr| expr.expression.as_ref())
                .expect("expression statement has an expression"),
            _ => panic!("expected an expression statement"),
        },
        _ => panic!("expected exactly one statement"),
    }
}

fn assert_unsupported(result: Result<Ast, CompileError>) {
    match result {
        Err(CompileError::Unsupported { .. }) => {}
        Err(other) => panic!("expected unsupported construct, got {other}"),
        Ok(_) => panic!("expected unsupported construct, compiled fine"),
    }
}

/// Statement wrapper around a single ESTree expression.
fn expression_program(expression: serde_json::Value) -> serde_json::Value {
    json!({
        "type": "Program",
        "body": [{ "type": "ExpressionStatement", "expression": expression }]
    })
}

#[test]
fn test_const_declaration_round_trip() {
    let ast = compile_js("const x = 1 + 2;").unwrap();

    let expected = Ast {
        statements: vec![
            VariableDeclaration {
                kind: VariableDeclarationKind::Const as i32,
                declarations: vec![VariableDeclarator {
                    name: "x".into(),
                    value: Some(Box::new(
                        BinaryExpression {
                            operator: "+".into(),
                            lhs: Some(number(1.0)),
                            rhs: Some(number(2.0)),
                        }
                        .into(),
                    )),
                }],
            }
            .into(),
        ],
    };
    assert_eq!(ast, expected);

    let decoded = decode(&encode(&ast)).unwrap();
    assert_eq!(decoded, ast);
}

#[test]
fn test_array_hole_alignment() {
    let ast = compile_js("[1, , 3];").unwrap();
    match only_expression(&ast) {
        expression::Expression::ArrayExpression(array) => {
            assert_eq!(array.elements.len(), 3);
            assert_eq!(array.elements[0], *number(1.0));
            assert_eq!(array.elements[1], Expression::default());
            assert_eq!(array.elements[2], *number(3.0));
        }
        other => panic!("expected ArrayExpression, got {}", other.name()),
    }

    // Holes survive the wire.
    let decoded = decode(&encode(&ast)).unwrap();
    assert_eq!(decoded, ast);
}

#[test]
fn test_function_kinds() {
    let ast = compile_js(
        "function f() {}
         function* g() {}
         async function h() {}
         async function* i() {}",
    )
    .unwrap();

    let kinds: Vec<_> = ast
        .statements
        .iter()
        .map(|stmt| match &stmt.statement {
            Some(statement::Statement::FunctionDeclaration(func)) => {
                (func.name.as_str(), func.r#type)
            }
            _ => panic!("expected FunctionDeclaration"),
        })
        .collect();
    assert_eq!(
        kinds,
        [
            ("f", ir::FunctionType::Plain as i32),
            ("g", ir::FunctionType::Generator as i32),
            ("h", ir::FunctionType::Async as i32),
            ("i", ir::FunctionType::AsyncGenerator as i32),
        ]
    );
}

#[test]
fn test_object_method_kind() {
    let ast = compile_js("({ async *m(a) { yield a; } });").unwrap();
    match only_expression(&ast) {
        expression::Expression::ObjectExpression(object) => match &object.fields[0].field {
            Some(ir::object_field::Field::Method(method)) => {
                assert_eq!(method.name, "m");
                assert_eq!(method.r#type, ir::FunctionType::AsyncGenerator as i32);
                assert_eq!(method.parameters.len(), 1);
                assert_eq!(method.body.len(), 1);
            }
            _ => panic!("expected a method field"),
        },
        other => panic!("expected ObjectExpression, got {}", other.name()),
    }
}

#[test]
fn test_empty_string_key() {
    let ast = compile_js("({ '': 1, ''() {} });").unwrap();
    match only_expression(&ast) {
        expression::Expression::ObjectExpression(object) => {
            assert!(matches!(
                &object.fields[0].field,
                Some(ir::object_field::Field::Property(ir::ObjectProperty {
                    key: Some(ir::object_property::Key::Name(name)),
                    ..
                })) if name.is_empty()
            ));
            assert!(matches!(
                &object.fields[1].field,
                Some(ir::object_field::Field::Method(method)) if method.name.is_empty()
            ));
        }
        other => panic!("expected ObjectExpression, got {}", other.name()),
    }
}

#[test]
fn test_member_expression_snapshot() {
    let ast = compile_js("a.b;").unwrap();
    insta::assert_json_snapshot!(ast, @r#"
    {
      "statements": [
        {
          "statement": {
            "ExpressionStatement": {
              "expression": {
                "expression": {
                  "MemberExpression": {
                    "object": {
                      "expression": {
                        "Identifier": {
                          "name": "a"
                        }
                      }
                    },
                    "property": {
                      "Name": "b"
                    }
                  }
                }
              }
            }
          }
        }
      ]
    }
    "#);
}

#[test]
fn test_loops_and_try() {
    let ast = compile_js(
        "for (let i = 0; i < 10; i++) { continue_(); }
         for (const k in o) {}
         for (const v of xs) {}
         while (x) x--;
         do { x++; } while (x < 3);
         try { f(); } catch (e) { g(e); } finally { h(); }",
    )
    .unwrap();

    let names: Vec<_> = ast
        .statements
        .iter()
        .map(|stmt| stmt.statement.as_ref().map(|s| s.name()))
        .collect();
    assert_eq!(
        names,
        [
            Some("ForLoop"),
            Some("ForInLoop"),
            Some("ForOfLoop"),
            Some("WhileLoop"),
            Some("DoWhileLoop"),
            Some("TryStatement"),
        ]
    );
}

#[test]
fn test_try_with_bare_catch() {
    let ast = compile_js("try {} catch {}").unwrap();
    match &ast.statements[0].statement {
        Some(statement::Statement::TryStatement(stmt)) => {
            let catch = stmt.catch.as_ref().unwrap();
            assert!(catch.parameter.is_none());
            assert!(stmt.finally.is_none());
        }
        _ => panic!("expected TryStatement"),
    }
}

#[test]
fn test_try_without_clauses() {
    // tree-sitter may recover a clause-less try; either way nothing compiles.
    match read_javascript("try {}") {
        Err(ReadError::Parse(_)) => {}
        Ok(program) => assert_unsupported(compile(&program)),
        Err(other) => panic!("expected a parse error, got {other}"),
    }

    assert_unsupported(compile_estree(json!({
        "type": "Program",
        "body": [{
            "type": "TryStatement",
            "block": { "type": "BlockStatement", "body": [] },
            "handler": null,
            "finalizer": null
        }]
    })));
}

#[test]
fn test_rejected_source_constructs() {
    assert_unsupported(compile_js("for (let i = 0, j = 0; i < j; i++) {}"));
    assert_unsupported(compile_js("for (;;) {}"));
    assert_unsupported(compile_js("function f({ a }) {}"));
    assert_unsupported(compile_js("function f(a = 1) {}"));
    assert_unsupported(compile_js("function f(...a) {}"));
    assert_unsupported(compile_js("function* g() { yield* h(); }"));
    assert_unsupported(compile_js("({ a });"));
    assert_unsupported(compile_js("({ [k]() {} });"));
    assert_unsupported(compile_js("({ get g() { return 1; }, set s(a, b) {} });"));
    assert_unsupported(compile_js("async function f() { for await (const x of xs) {} }"));
}

#[test]
fn test_rejected_estree_shapes() {
    // for-in binding with an initializer
    assert_unsupported(compile_estree(json!({
        "type": "Program",
        "body": [{
            "type": "ForInStatement",
            "left": {
                "type": "VariableDeclaration",
                "kind": "var",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": { "type": "Identifier", "name": "k" },
                    "init": { "type": "NumericLiteral", "value": 0 }
                }]
            },
            "right": { "type": "Identifier", "name": "o" },
            "body": { "type": "BlockStatement", "body": [] }
        }]
    })));

    // postfix unary
    assert_unsupported(compile_estree(expression_program(json!({
        "type": "UnaryExpression",
        "operator": "-",
        "prefix": false,
        "argument": { "type": "Identifier", "name": "a" }
    }))));

    // shorthand on a computed key
    assert_unsupported(compile_estree(expression_program(json!({
        "type": "ObjectExpression",
        "properties": [{
            "type": "ObjectProperty",
            "key": { "type": "Identifier", "name": "k" },
            "value": { "type": "Identifier", "name": "k" },
            "computed": true,
            "shorthand": true
        }]
    }))));

    // ESTree-style method property
    assert_unsupported(compile_estree(expression_program(json!({
        "type": "ObjectExpression",
        "properties": [{
            "type": "ObjectProperty",
            "key": { "type": "Identifier", "name": "m" },
            "value": {
                "type": "FunctionExpression",
                "id": null,
                "params": [],
                "body": { "type": "BlockStatement", "body": [] }
            },
            "computed": false,
            "method": true
        }]
    }))));
}

#[test]
fn test_unhandled_kinds_are_named() {
    let err = compile_js("class A {}").unwrap_err();
    assert_eq!(err.to_string(), "unhandled node type ClassDeclaration");

    let err = compile_js("while (x) { break; }").unwrap_err();
    assert_eq!(err.to_string(), "unhandled node type BreakStatement");
}

#[test]
fn test_v8_intrinsic_call() {
    let ast = compile_estree(expression_program(json!({
        "type": "CallExpression",
        "callee": { "type": "V8IntrinsicIdentifier", "name": "DebugPrint" },
        "arguments": [{ "type": "Identifier", "name": "x" }]
    })))
    .unwrap();

    match only_expression(&ast) {
        expression::Expression::CallExpression(call) => {
            let callee = call.callee.as_ref().and_then(|c| c.expression.as_ref());
            assert!(matches!(
                callee,
                Some(expression::Expression::V8IntrinsicIdentifier(ir::V8IntrinsicIdentifier { name }))
                    if name == "DebugPrint"
            ));
        }
        other => panic!("expected CallExpression, got {}", other.name()),
    }
}

#[test]
fn test_readers_agree() {
    let from_source = compile_js(
        "'use strict';\nif (a && !b) { c = d[0]; } else f(1, 'two');\nfunction g() { 'use asm'; }",
    )
    .unwrap();
    let from_estree = compile_estree(json!({
        "type": "File",
        "program": {
            "type": "Program",
            "directives": [{
                "type": "Directive",
                "value": { "type": "DirectiveLiteral", "value": "use strict" }
            }],
            "body": [{
                "type": "IfStatement",
                "test": {
                    "type": "LogicalExpression",
                    "operator": "&&",
                    "left": { "type": "Identifier", "name": "a" },
                    "right": {
                        "type": "UnaryExpression",
                        "operator": "!",
                        "prefix": true,
                        "argument": { "type": "Identifier", "name": "b" }
                    }
                },
                "consequent": {
                    "type": "BlockStatement",
                    "body": [{
                        "type": "ExpressionStatement",
                        "expression": {
                            "type": "AssignmentExpression",
                            "operator": "=",
                            "left": { "type": "Identifier", "name": "c" },
                            "right": {
                                "type": "MemberExpression",
                                "object": { "type": "Identifier", "name": "d" },
                                "property": { "type": "NumericLiteral", "value": 0 },
                                "computed": true
                            }
                        }
                    }]
                },
                "alternate": {
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "CallExpression",
                        "callee": { "type": "Identifier", "name": "f" },
                        "arguments": [
                            { "type": "NumericLiteral", "value": 1 },
                            { "type": "StringLiteral", "value": "two" }
                        ]
                    }
                }
            }, {
                "type": "FunctionDeclaration",
                "id": { "type": "Identifier", "name": "g" },
                "params": [],
                "body": {
                    "type": "BlockStatement",
                    "body": [],
                    "directives": [{
                        "type": "Directive",
                        "value": { "type": "DirectiveLiteral", "value": "use asm" }
                    }]
                }
            }]
        }
    }))
    .unwrap();
    assert_eq!(from_source, from_estree);
    assert_eq!(from_estree.statements.len(), 3);
}
