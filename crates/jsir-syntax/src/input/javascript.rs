//! Tree-sitter based JavaScript reader.
//!
//! Produces the same tree `@babel/parser` would for the modeled subset.
//! Constructs outside the subset become `Unsupported` nodes named after
//! their Babel counterpart (`switch_statement` → `SwitchStatement`).

use super::literal;
use crate::ast::*;
use crate::traits::{ReadError, Reader};
use std::cell::Cell;
use tree_sitter::{Node, Parser, Tree};

/// Static instance of the JavaScript reader for registry.
pub static JAVASCRIPT_READER: JavaScriptReader = JavaScriptReader;

/// JavaScript reader using tree-sitter.
pub struct JavaScriptReader;

impl Reader for JavaScriptReader {
    fn language(&self) -> &'static str {
        "javascript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["js", "mjs", "cjs"]
    }

    fn read(&self, source: &str) -> Result<Program, ReadError> {
        read_javascript(source)
    }
}

/// Parse JavaScript source into a syntax tree.
pub fn read_javascript(source: &str) -> Result<Program, ReadError> {
    let mut parser = Parser::new();
    parser
        .set_language(&arborium_javascript::language().into())
        .map_err(|err| ReadError::Parse(err.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ReadError::Parse("failed to parse".into()))?;

    let ctx = ReadContext::new(source);
    let program = ctx.read_program(&tree)?;
    tracing::debug!(statements = program.body.len(), "read JavaScript source");
    Ok(program)
}

/// Extras that may appear between any two tokens.
fn is_trivia(node: &Node) -> bool {
    matches!(node.kind(), "comment" | "html_comment" | "hash_bang_line")
}

/// Babel's name for a tree-sitter node kind, used for unsupported constructs.
fn babel_kind(kind: &str) -> String {
    let mapped = match kind {
        "import_statement" => "ImportDeclaration",
        "export_statement" => "ExportNamedDeclaration",
        "do_statement" => "DoWhileStatement",
        "statement_block" => "BlockStatement",
        "template_string" => "TemplateLiteral",
        "class" => "ClassExpression",
        "super" => "Super",
        "import" => "Import",
        "private_property_identifier" => "PrivateName",
        "meta_property" => "MetaProperty",
        "ternary_expression" => "ConditionalExpression",
        "subscript_expression" => "MemberExpression",
        "optional_chain" => "OptionalMemberExpression",
        "pair_pattern" | "object_assignment_pattern" => "ObjectProperty",
        "rest_pattern" => "RestElement",
        "jsx_element" | "jsx_self_closing_element" => "JSXElement",
        _ => "",
    };
    if !mapped.is_empty() {
        return mapped.to_string();
    }
    kind.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// First ERROR or MISSING node in document order.
///
/// Walks with a cursor, since the tree can be far deeper than the stack.
fn first_error(root: Node) -> Option<Node> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// Deepest statement/expression nesting the reader walks.
pub const MAX_NESTING: usize = 1000;

struct ReadContext<'a> {
    source: &'a str,
    depth: Cell<usize>,
}

impl<'a> ReadContext<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            depth: Cell::new(0),
        }
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(&self, f: impl FnOnce() -> Result<T, ReadError>) -> Result<T, ReadError> {
        let depth = self.depth.get();
        if depth >= MAX_NESTING {
            return Err(ReadError::Parse(format!(
                "nesting exceeds the limit of {} levels",
                MAX_NESTING
            )));
        }
        self.depth.set(depth + 1);
        let result = f();
        self.depth.set(depth);
        result
    }

    fn node_text(&self, node: Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    fn field<'t>(&self, node: Node<'t>, name: &str) -> Result<Node<'t>, ReadError> {
        node.child_by_field_name(name)
            .ok_or_else(|| ReadError::Parse(format!("{} missing {}", node.kind(), name)))
    }

    /// Named children with comments removed.
    fn named_children<'t>(&self, node: Node<'t>) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|child| !is_trivia(child))
            .collect()
    }

    fn first_named<'t>(&self, node: Node<'t>) -> Option<Node<'t>> {
        self.named_children(node).into_iter().next()
    }

    /// Whether `node` has an anonymous child token with the given text.
    fn has_token(&self, node: Node, token: &str) -> bool {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .any(|child| !child.is_named() && child.kind() == token);
        found
    }

    fn read_program(&self, tree: &Tree) -> Result<Program, ReadError> {
        let root = tree.root_node();

        if let Some(err) = first_error(root) {
            let pos = err.start_position();
            return Err(ReadError::Parse(format!(
                "syntax error at {}:{}",
                pos.row + 1,
                pos.column + 1
            )));
        }

        let body = self.read_statements(root)?;
        Ok(Program::new(body))
    }

    fn read_statements(&self, node: Node) -> Result<Vec<Statement>, ReadError> {
        self.named_children(node)
            .into_iter()
            .map(|child| self.read_stmt(child))
            .collect()
    }

    fn read_block(&self, node: Node) -> Result<BlockStatement, ReadError> {
        if node.kind() != "statement_block" {
            return Err(ReadError::UnexpectedNode {
                expected: "statement_block".into(),
                got: node.kind().into(),
            });
        }
        Ok(BlockStatement::new(self.read_statements(node)?))
    }

    fn read_stmt(&self, node: Node) -> Result<Statement, ReadError> {
        self.nested(|| self.read_stmt_node(node))
    }

    fn read_stmt_node(&self, node: Node) -> Result<Statement, ReadError> {
        tracing::trace!(kind = node.kind(), "read statement");
        match node.kind() {
            "empty_statement" => Ok(Statement::EmptyStatement),
            "statement_block" => Ok(Statement::BlockStatement(self.read_block(node)?)),
            "expression_statement" => {
                let expr = self
                    .first_named(node)
                    .ok_or_else(|| ReadError::Parse("expression_statement has no child".into()))?;
                Ok(Statement::expr(self.read_expr(expr)?))
            }
            "lexical_declaration" | "variable_declaration" => Ok(
                Statement::VariableDeclaration(self.read_variable_declaration(node)?),
            ),
            "function_declaration" | "generator_function_declaration" => {
                Ok(Statement::FunctionDeclaration(self.read_function(node)?))
            }
            "return_statement" => {
                let argument = self
                    .first_named(node)
                    .map(|n| self.read_expr(n))
                    .transpose()?;
                Ok(Statement::ReturnStatement { argument })
            }
            "if_statement" => self.read_if_statement(node),
            "while_statement" => Ok(Statement::WhileStatement {
                test: self.read_expr(self.field(node, "condition")?)?,
                body: Box::new(self.read_stmt(self.field(node, "body")?)?),
            }),
            "do_statement" => Ok(Statement::DoWhileStatement {
                body: Box::new(self.read_stmt(self.field(node, "body")?)?),
                test: self.read_expr(self.field(node, "condition")?)?,
            }),
            "for_statement" => self.read_for_statement(node),
            "for_in_statement" => self.read_for_in_statement(node),
            "try_statement" => self.read_try_statement(node),
            "throw_statement" => {
                let argument = self
                    .first_named(node)
                    .ok_or_else(|| ReadError::Parse("throw_statement has no argument".into()))?;
                Ok(Statement::ThrowStatement {
                    argument: self.read_expr(argument)?,
                })
            }
            kind => Ok(Statement::unsupported(babel_kind(kind))),
        }
    }

    fn read_variable_declaration(&self, node: Node) -> Result<VariableDeclaration, ReadError> {
        let kind = node
            .child(0)
            .map(|keyword| self.node_text(keyword).to_string())
            .ok_or_else(|| ReadError::Parse("declaration missing keyword".into()))?;

        let declarations = self
            .named_children(node)
            .into_iter()
            .filter(|child| child.kind() == "variable_declarator")
            .map(|declarator| {
                let id = self.read_pattern(self.field(declarator, "name")?)?;
                let init = declarator
                    .child_by_field_name("value")
                    .map(|value| self.read_expr(value))
                    .transpose()?;
                Ok(VariableDeclarator::new(id, init))
            })
            .collect::<Result<Vec<_>, ReadError>>()?;

        Ok(VariableDeclaration { kind, declarations })
    }

    fn read_if_statement(&self, node: Node) -> Result<Statement, ReadError> {
        let test = self.read_expr(self.field(node, "condition")?)?;
        let consequent = self.read_stmt(self.field(node, "consequence")?)?;

        // alternative is an else_clause wrapping the statement
        let alternate = match node.child_by_field_name("alternative") {
            Some(clause) => {
                let stmt = self
                    .first_named(clause)
                    .ok_or_else(|| ReadError::Parse("else_clause has no body".into()))?;
                Some(Box::new(self.read_stmt(stmt)?))
            }
            None => None,
        };

        Ok(Statement::IfStatement {
            test,
            consequent: Box::new(consequent),
            alternate,
        })
    }

    /// Expression of an optional `for (init; test; update)` clause.
    fn read_for_clause(&self, node: Option<Node>) -> Result<Option<Expression>, ReadError> {
        let Some(node) = node else {
            return Ok(None);
        };
        match node.kind() {
            "empty_statement" | ";" => Ok(None),
            "expression_statement" => self
                .first_named(node)
                .map(|expr| self.read_expr(expr))
                .transpose(),
            _ => self.read_expr(node).map(Some),
        }
    }

    fn read_for_statement(&self, node: Node) -> Result<Statement, ReadError> {
        let init = match node.child_by_field_name("initializer") {
            Some(init) if matches!(init.kind(), "lexical_declaration" | "variable_declaration") => {
                Some(ForInit::VariableDeclaration(
                    self.read_variable_declaration(init)?,
                ))
            }
            other => self.read_for_clause(other)?.map(ForInit::Expression),
        };
        let test = self.read_for_clause(node.child_by_field_name("condition"))?;
        let update = node
            .child_by_field_name("increment")
            .map(|expr| self.read_expr(expr))
            .transpose()?;
        let body = Box::new(self.read_stmt(self.field(node, "body")?)?);

        Ok(Statement::ForStatement {
            init,
            test,
            update,
            body,
        })
    }

    fn read_for_in_statement(&self, node: Node) -> Result<Statement, ReadError> {
        let left_node = self.field(node, "left")?;
        let right = self.read_expr(self.field(node, "right")?)?;
        let body = Box::new(self.read_stmt(self.field(node, "body")?)?);

        // Older grammars carry no `kind`/`operator` fields; scan the tokens.
        let mut kind = None;
        let mut is_of = false;
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.is_named() {
                continue;
            }
            match child.kind() {
                "var" | "let" | "const" if kind.is_none() => kind = Some(child.kind().to_string()),
                "of" => is_of = true,
                _ => {}
            }
        }
        let is_await = self.has_token(node, "await");

        let left = match kind {
            Some(kind) => {
                let id = self.read_pattern(left_node)?;
                let init = node
                    .child_by_field_name("value")
                    .map(|value| self.read_expr(value))
                    .transpose()?;
                ForInit::VariableDeclaration(VariableDeclaration {
                    kind,
                    declarations: vec![VariableDeclarator::new(id, init)],
                })
            }
            None => ForInit::Expression(self.read_expr(left_node)?),
        };

        if is_of {
            Ok(Statement::ForOfStatement {
                left,
                right,
                body,
                is_await,
            })
        } else {
            Ok(Statement::ForInStatement { left, right, body })
        }
    }

    fn read_try_statement(&self, node: Node) -> Result<Statement, ReadError> {
        let block = self.read_block(self.field(node, "body")?)?;

        let handler = match node.child_by_field_name("handler") {
            Some(clause) => {
                let param = clause
                    .child_by_field_name("parameter")
                    .map(|p| self.read_pattern(p))
                    .transpose()?;
                let body = self.read_block(self.field(clause, "body")?)?;
                Some(CatchClause { param, body })
            }
            None => None,
        };

        let finalizer = match node.child_by_field_name("finalizer") {
            Some(clause) => Some(self.read_block(self.field(clause, "body")?)?),
            None => None,
        };

        Ok(Statement::TryStatement {
            block,
            handler,
            finalizer,
        })
    }

    fn read_pattern(&self, node: Node) -> Result<Pattern, ReadError> {
        self.nested(|| self.read_pattern_node(node))
    }

    fn read_pattern_node(&self, node: Node) -> Result<Pattern, ReadError> {
        match node.kind() {
            "identifier" | "undefined" => Ok(Pattern::ident(self.node_text(node))),
            "assignment_pattern" => Ok(Pattern::AssignmentPattern {
                left: Box::new(self.read_pattern(self.field(node, "left")?)?),
                right: Box::new(self.read_expr(self.field(node, "right")?)?),
            }),
            "rest_pattern" => {
                let argument = self
                    .first_named(node)
                    .ok_or_else(|| ReadError::Parse("rest_pattern has no argument".into()))?;
                Ok(Pattern::RestElement {
                    argument: Box::new(self.read_pattern(argument)?),
                })
            }
            "object_pattern" => Ok(Pattern::ObjectPattern),
            "array_pattern" => Ok(Pattern::ArrayPattern),
            kind => Ok(Pattern::Unsupported(UnsupportedNode::new(babel_kind(kind)))),
        }
    }

    fn read_params(&self, node: Node) -> Result<Vec<Pattern>, ReadError> {
        self.named_children(node)
            .into_iter()
            .map(|param| self.read_pattern(param))
            .collect()
    }

    fn read_function(&self, node: Node) -> Result<Function, ReadError> {
        let id = node
            .child_by_field_name("name")
            .map(|name| Identifier::new(self.node_text(name)));
        let params = self.read_params(self.field(node, "parameters")?)?;
        let body = self.read_block(self.field(node, "body")?)?;

        Ok(Function {
            id,
            params,
            body,
            generator: self.has_token(node, "*"),
            is_async: self.has_token(node, "async"),
        })
    }

    fn read_arrow_function(&self, node: Node) -> Result<ArrowFunction, ReadError> {
        let params = match node.child_by_field_name("parameter") {
            Some(param) => vec![self.read_pattern(param)?],
            None => self.read_params(self.field(node, "parameters")?)?,
        };

        let body_node = self.field(node, "body")?;
        let body = if body_node.kind() == "statement_block" {
            ArrowBody::BlockStatement(self.read_block(body_node)?)
        } else {
            ArrowBody::Expression(Box::new(self.read_expr(body_node)?))
        };

        Ok(ArrowFunction {
            id: None,
            params,
            body,
            generator: false,
            is_async: self.has_token(node, "async"),
        })
    }

    fn read_expr(&self, node: Node) -> Result<Expression, ReadError> {
        self.nested(|| self.read_expr_node(node))
    }

    fn read_expr_node(&self, node: Node) -> Result<Expression, ReadError> {
        tracing::trace!(kind = node.kind(), "read expression");
        match node.kind() {
            // Literals
            "identifier" | "undefined" => Ok(Expression::ident(self.node_text(node))),
            "number" => self.read_number(node),
            "string" => Ok(Expression::string(literal::unquote_string(
                self.node_text(node),
            )?)),
            "regex" => Ok(Expression::RegExpLiteral {
                pattern: self.node_text(self.field(node, "pattern")?).to_string(),
                flags: node
                    .child_by_field_name("flags")
                    .map(|flags| self.node_text(flags).to_string())
                    .unwrap_or_default(),
            }),
            "true" => Ok(Expression::BooleanLiteral { value: true }),
            "false" => Ok(Expression::BooleanLiteral { value: false }),
            "null" => Ok(Expression::NullLiteral),
            "this" => Ok(Expression::ThisExpression),

            // Grouping is not a node in Babel's output
            "parenthesized_expression" => {
                let inner = self.first_named(node).ok_or_else(|| {
                    ReadError::Parse("parenthesized_expression is empty".into())
                })?;
                self.read_expr(inner)
            }

            "assignment_expression" => Ok(Expression::AssignmentExpression {
                operator: "=".into(),
                left: Box::new(self.read_expr(self.field(node, "left")?)?),
                right: Box::new(self.read_expr(self.field(node, "right")?)?),
            }),
            "augmented_assignment_expression" => Ok(Expression::AssignmentExpression {
                operator: self.node_text(self.field(node, "operator")?).to_string(),
                left: Box::new(self.read_expr(self.field(node, "left")?)?),
                right: Box::new(self.read_expr(self.field(node, "right")?)?),
            }),

            "object" => self.read_object(node),
            "array" => self.read_array(node),

            "function_expression" | "function" | "generator_function" => {
                Ok(Expression::FunctionExpression(self.read_function(node)?))
            }
            "arrow_function" => Ok(Expression::ArrowFunctionExpression(
                self.read_arrow_function(node)?,
            )),

            "call_expression" => self.read_call(node),
            "new_expression" => {
                let arguments = match node.child_by_field_name("arguments") {
                    Some(args) => self.read_arguments(args)?,
                    None => Vec::new(),
                };
                Ok(Expression::NewExpression {
                    callee: Box::new(self.read_expr(self.field(node, "constructor")?)?),
                    arguments,
                })
            }

            "member_expression" => self.read_member(node),
            "subscript_expression" => {
                if node.child_by_field_name("optional_chain").is_some() {
                    return Ok(Expression::unsupported("OptionalMemberExpression"));
                }
                Ok(Expression::MemberExpression {
                    object: Box::new(self.read_expr(self.field(node, "object")?)?),
                    property: Box::new(self.read_expr(self.field(node, "index")?)?),
                    computed: true,
                })
            }

            "unary_expression" => Ok(Expression::UnaryExpression {
                operator: self.node_text(self.field(node, "operator")?).to_string(),
                prefix: true,
                argument: Box::new(self.read_expr(self.field(node, "argument")?)?),
            }),
            "binary_expression" => self.read_binary(node),
            "update_expression" => {
                let operator = self.node_text(self.field(node, "operator")?).to_string();
                let prefix = node
                    .child(0)
                    .is_some_and(|first| matches!(first.kind(), "++" | "--"));
                Ok(Expression::UpdateExpression {
                    operator,
                    prefix,
                    argument: Box::new(self.read_expr(self.field(node, "argument")?)?),
                })
            }

            "yield_expression" => {
                let argument = self
                    .first_named(node)
                    .map(|arg| self.read_expr(arg).map(Box::new))
                    .transpose()?;
                Ok(Expression::YieldExpression {
                    argument,
                    delegate: self.has_token(node, "*"),
                })
            }
            "await_expression" => {
                let argument = self
                    .first_named(node)
                    .ok_or_else(|| ReadError::Parse("await_expression has no argument".into()))?;
                Ok(Expression::AwaitExpression {
                    argument: Box::new(self.read_expr(argument)?),
                })
            }
            "ternary_expression" => Ok(Expression::ConditionalExpression {
                test: Box::new(self.read_expr(self.field(node, "condition")?)?),
                consequent: Box::new(self.read_expr(self.field(node, "consequence")?)?),
                alternate: Box::new(self.read_expr(self.field(node, "alternative")?)?),
            }),
            "sequence_expression" => {
                let mut expressions = Vec::new();
                self.flatten_sequence(node, &mut expressions)?;
                Ok(Expression::SequenceExpression { expressions })
            }
            "spread_element" => {
                let argument = self
                    .first_named(node)
                    .ok_or_else(|| ReadError::Parse("spread_element has no argument".into()))?;
                Ok(Expression::SpreadElement {
                    argument: Box::new(self.read_expr(argument)?),
                })
            }

            kind => Ok(Expression::unsupported(babel_kind(kind))),
        }
    }

    fn read_number(&self, node: Node) -> Result<Expression, ReadError> {
        let text = self.node_text(node);
        if text.ends_with('n') {
            return Ok(Expression::BigIntLiteral {
                value: literal::parse_bigint(text)?,
            });
        }
        Ok(Expression::number(literal::parse_number(text)?))
    }

    fn flatten_sequence(&self, node: Node, out: &mut Vec<Expression>) -> Result<(), ReadError> {
        for child in self.named_children(node) {
            if child.kind() == "sequence_expression" {
                self.flatten_sequence(child, out)?;
            } else {
                out.push(self.read_expr(child)?);
            }
        }
        Ok(())
    }

    fn read_binary(&self, node: Node) -> Result<Expression, ReadError> {
        let operator = self.node_text(self.field(node, "operator")?).to_string();
        let left = Box::new(self.read_expr(self.field(node, "left")?)?);
        let right = Box::new(self.read_expr(self.field(node, "right")?)?);

        if matches!(operator.as_str(), "&&" | "||" | "??") {
            Ok(Expression::LogicalExpression {
                operator,
                left,
                right,
            })
        } else {
            Ok(Expression::BinaryExpression {
                operator,
                left,
                right,
            })
        }
    }

    fn read_call(&self, node: Node) -> Result<Expression, ReadError> {
        if node.child_by_field_name("optional_chain").is_some() {
            return Ok(Expression::unsupported("OptionalCallExpression"));
        }
        let args = self.field(node, "arguments")?;
        if args.kind() == "template_string" {
            return Ok(Expression::unsupported("TaggedTemplateExpression"));
        }
        Ok(Expression::CallExpression {
            callee: Box::new(self.read_expr(self.field(node, "function")?)?),
            arguments: self.read_arguments(args)?,
        })
    }

    fn read_arguments(&self, node: Node) -> Result<Vec<Expression>, ReadError> {
        self.named_children(node)
            .into_iter()
            .map(|arg| self.read_expr(arg))
            .collect()
    }

    fn read_member(&self, node: Node) -> Result<Expression, ReadError> {
        if node.child_by_field_name("optional_chain").is_some() {
            return Ok(Expression::unsupported("OptionalMemberExpression"));
        }
        let object = Box::new(self.read_expr(self.field(node, "object")?)?);
        let property_node = self.field(node, "property")?;
        let property = match property_node.kind() {
            "property_identifier" | "identifier" => {
                Expression::ident(self.node_text(property_node))
            }
            kind => Expression::unsupported(babel_kind(kind)),
        };
        Ok(Expression::MemberExpression {
            object,
            property: Box::new(property),
            computed: false,
        })
    }

    /// Array literal elements; holes are found between consecutive commas.
    fn read_array(&self, node: Node) -> Result<Expression, ReadError> {
        let mut elements = Vec::new();
        let mut expect_element = true;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if is_trivia(&child) {
                continue;
            }
            match child.kind() {
                "[" | "]" => {}
                "," => {
                    if expect_element {
                        elements.push(None);
                    }
                    expect_element = true;
                }
                _ => {
                    elements.push(Some(self.read_expr(child)?));
                    expect_element = false;
                }
            }
        }

        Ok(Expression::ArrayExpression { elements })
    }

    fn read_object(&self, node: Node) -> Result<Expression, ReadError> {
        let properties = self
            .named_children(node)
            .into_iter()
            .map(|member| self.read_object_member(member))
            .collect::<Result<Vec<_>, ReadError>>()?;
        Ok(Expression::ObjectExpression { properties })
    }

    fn read_object_member(&self, node: Node) -> Result<ObjectMember, ReadError> {
        match node.kind() {
            "pair" => {
                let (key, computed) = self.read_property_key(self.field(node, "key")?)?;
                Ok(ObjectMember::ObjectProperty(ObjectProperty {
                    key,
                    value: self.read_expr(self.field(node, "value")?)?,
                    computed,
                    shorthand: false,
                    method: false,
                }))
            }
            "shorthand_property_identifier" => {
                let name = self.node_text(node);
                Ok(ObjectMember::ObjectProperty(ObjectProperty {
                    key: Expression::ident(name),
                    value: Expression::ident(name),
                    computed: false,
                    shorthand: true,
                    method: false,
                }))
            }
            "method_definition" => self.read_method(node),
            "spread_element" => {
                let argument = self
                    .first_named(node)
                    .ok_or_else(|| ReadError::Parse("spread_element has no argument".into()))?;
                Ok(ObjectMember::SpreadElement {
                    argument: self.read_expr(argument)?,
                })
            }
            kind => Ok(ObjectMember::Unsupported(UnsupportedNode::new(babel_kind(
                kind,
            )))),
        }
    }

    /// Property key and whether it is computed (`[expr]`).
    fn read_property_key(&self, node: Node) -> Result<(Expression, bool), ReadError> {
        match node.kind() {
            "property_identifier" | "identifier" => {
                Ok((Expression::ident(self.node_text(node)), false))
            }
            "computed_property_name" => {
                let inner = self.first_named(node).ok_or_else(|| {
                    ReadError::Parse("computed_property_name is empty".into())
                })?;
                Ok((self.read_expr(inner)?, true))
            }
            _ => Ok((self.read_expr(node)?, false)),
        }
    }

    fn read_method(&self, node: Node) -> Result<ObjectMember, ReadError> {
        let (key, computed) = self.read_property_key(self.field(node, "name")?)?;

        let kind = if self.has_token(node, "get") {
            MethodKind::Get
        } else if self.has_token(node, "set") {
            MethodKind::Set
        } else {
            MethodKind::Method
        };

        Ok(ObjectMember::ObjectMethod(ObjectMethod {
            kind,
            key,
            params: self.read_params(self.field(node, "parameters")?)?,
            body: self.read_block(self.field(node, "body")?)?,
            computed,
            shorthand: false,
            generator: self.has_token(node, "*"),
            is_async: self.has_token(node, "async"),
        }))
    }
}
