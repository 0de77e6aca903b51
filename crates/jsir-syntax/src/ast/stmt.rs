//! Statement-level nodes.

use super::{Body, Expression, Identifier, Pattern, UnsupportedNode, node_serde};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type")]
pub enum Statement {
    EmptyStatement,
    BlockStatement(BlockStatement),
    ExpressionStatement {
        expression: Expression,
    },
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(Function),
    ReturnStatement {
        argument: Option<Expression>,
    },
    IfStatement {
        test: Expression,
        consequent: Box<Statement>,
        alternate: Option<Box<Statement>>,
    },
    WhileStatement {
        test: Expression,
        body: Box<Statement>,
    },
    DoWhileStatement {
        body: Box<Statement>,
        test: Expression,
    },
    ForStatement {
        init: Option<ForInit>,
        test: Option<Expression>,
        update: Option<Expression>,
        body: Box<Statement>,
    },
    ForInStatement {
        left: ForInit,
        right: Expression,
        body: Box<Statement>,
    },
    ForOfStatement {
        left: ForInit,
        right: Expression,
        body: Box<Statement>,
        #[serde(rename = "await", default)]
        is_await: bool,
    },
    TryStatement {
        block: BlockStatement,
        handler: Option<CatchClause>,
        finalizer: Option<BlockStatement>,
    },
    ThrowStatement {
        argument: Expression,
    },
    #[serde(skip)]
    Unsupported(UnsupportedNode),
}

node_serde!(
    Statement,
    &[
        "EmptyStatement",
        "BlockStatement",
        "ExpressionStatement",
        "VariableDeclaration",
        "FunctionDeclaration",
        "ReturnStatement",
        "IfStatement",
        "WhileStatement",
        "DoWhileStatement",
        "ForStatement",
        "ForInStatement",
        "ForOfStatement",
        "TryStatement",
        "ThrowStatement",
    ]
);

impl Statement {
    pub fn expr(expression: Expression) -> Self {
        Statement::ExpressionStatement { expression }
    }

    pub fn block(body: Vec<Statement>) -> Self {
        Statement::BlockStatement(BlockStatement::new(body))
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        Statement::Unsupported(UnsupportedNode::new(kind))
    }

    /// Babel node type name.
    pub fn kind(&self) -> &str {
        match self {
            Statement::EmptyStatement => "EmptyStatement",
            Statement::BlockStatement(_) => "BlockStatement",
            Statement::ExpressionStatement { .. } => "ExpressionStatement",
            Statement::VariableDeclaration(_) => "VariableDeclaration",
            Statement::FunctionDeclaration(_) => "FunctionDeclaration",
            Statement::ReturnStatement { .. } => "ReturnStatement",
            Statement::IfStatement { .. } => "IfStatement",
            Statement::WhileStatement { .. } => "WhileStatement",
            Statement::DoWhileStatement { .. } => "DoWhileStatement",
            Statement::ForStatement { .. } => "ForStatement",
            Statement::ForInStatement { .. } => "ForInStatement",
            Statement::ForOfStatement { .. } => "ForOfStatement",
            Statement::TryStatement { .. } => "TryStatement",
            Statement::ThrowStatement { .. } => "ThrowStatement",
            Statement::Unsupported(node) => &node.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Body")]
pub struct BlockStatement {
    pub body: Vec<Statement>,
}

impl From<Body> for BlockStatement {
    fn from(body: Body) -> Self {
        Self::new(body.into_statements())
    }
}

impl BlockStatement {
    pub fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }
}

/// `var`, `let` or `const` with one or more declarators.
///
/// `kind` stays textual; anything but the three keywords is rejected later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub kind: String,
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub id: Pattern,
    pub init: Option<Expression>,
}

impl VariableDeclarator {
    pub fn new(id: Pattern, init: Option<Expression>) -> Self {
        Self { id, init }
    }
}

/// Head of a `for` loop initializer or `for-in`/`for-of` left side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ForInit {
    VariableDeclaration(VariableDeclaration),
    #[serde(untagged)]
    Expression(Expression),
}

impl<'de> Deserialize<'de> for ForInit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let node = Value::deserialize(deserializer)?;
        let init = if node.get("type").and_then(Value::as_str) == Some("VariableDeclaration") {
            serde_json::from_value(node).map(ForInit::VariableDeclaration)
        } else {
            serde_json::from_value(node).map(ForInit::Expression)
        };
        init.map_err(D::Error::custom)
    }
}

impl ForInit {
    pub fn kind(&self) -> &str {
        match self {
            ForInit::VariableDeclaration(_) => "VariableDeclaration",
            ForInit::Expression(expr) => expr.kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub param: Option<Pattern>,
    pub body: BlockStatement,
}

/// Shared shape of function declarations and function expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    #[serde(default)]
    pub generator: bool,
    #[serde(rename = "async", default)]
    pub is_async: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_for_init_declaration() {
        let init: ForInit = serde_json::from_value(json!({
            "type": "VariableDeclaration",
            "kind": "let",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "i" },
                "init": { "type": "NumericLiteral", "value": 0 }
            }]
        }))
        .unwrap();
        match init {
            ForInit::VariableDeclaration(decl) => {
                assert_eq!(decl.kind, "let");
                assert_eq!(decl.declarations.len(), 1);
            }
            ForInit::Expression(_) => panic!("expected VariableDeclaration"),
        }
    }

    #[test]
    fn test_for_init_expression() {
        let init: ForInit = serde_json::from_value(json!({
            "type": "Identifier",
            "name": "i"
        }))
        .unwrap();
        assert_eq!(init, ForInit::Expression(Expression::ident("i")));
    }

    #[test]
    fn test_for_init_malformed_declaration() {
        let init = serde_json::from_value::<ForInit>(json!({
            "type": "VariableDeclaration",
            "declarations": []
        }));
        // No `kind`: an error, not an expression named VariableDeclaration.
        assert!(init.is_err(), "{init:?}");
    }

    #[test]
    fn test_function_flags() {
        let stmt: Statement = serde_json::from_value(json!({
            "type": "FunctionDeclaration",
            "id": { "type": "Identifier", "name": "f" },
            "params": [],
            "body": { "type": "BlockStatement", "body": [], "directives": [] },
            "generator": true,
            "async": true
        }))
        .unwrap();
        match stmt {
            Statement::FunctionDeclaration(f) => {
                assert!(f.generator);
                assert!(f.is_async);
                assert_eq!(f.id, Some(Identifier::new("f")));
            }
            other => panic!("expected FunctionDeclaration, got {}", other.kind()),
        }
    }

    #[test]
    fn test_bare_catch() {
        let stmt: Statement = serde_json::from_value(json!({
            "type": "TryStatement",
            "block": { "type": "BlockStatement", "body": [] },
            "handler": {
                "type": "CatchClause",
                "param": null,
                "body": { "type": "BlockStatement", "body": [] }
            },
            "finalizer": null
        }))
        .unwrap();
        match stmt {
            Statement::TryStatement { handler, finalizer, .. } => {
                assert!(handler.unwrap().param.is_none());
                assert!(finalizer.is_none());
            }
            other => panic!("expected TryStatement, got {}", other.kind()),
        }
    }
}
