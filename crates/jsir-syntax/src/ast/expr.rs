//! Expression-level nodes.

use super::{BlockStatement, Function, Identifier, Pattern, UnsupportedNode, node_serde};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type")]
pub enum Expression {
    // Leaves
    Identifier(Identifier),
    NumericLiteral {
        value: f64,
    },
    /// Digits as written, without the `n` suffix.
    BigIntLiteral {
        value: String,
    },
    StringLiteral {
        value: String,
    },
    RegExpLiteral {
        pattern: String,
        flags: String,
    },
    BooleanLiteral {
        value: bool,
    },
    NullLiteral,
    ThisExpression,
    /// `%Name` syntax exposed by V8's natives mode.
    V8IntrinsicIdentifier {
        name: String,
    },

    // Compound
    AssignmentExpression {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    ObjectExpression {
        properties: Vec<ObjectMember>,
    },
    /// `None` entries are holes (`[1, , 3]`).
    ArrayExpression {
        elements: Vec<Option<Expression>>,
    },
    FunctionExpression(Function),
    ArrowFunctionExpression(ArrowFunction),
    CallExpression {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    NewExpression {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    MemberExpression {
        object: Box<Expression>,
        property: Box<Expression>,
        computed: bool,
    },
    UnaryExpression {
        operator: String,
        #[serde(default = "default_prefix")]
        prefix: bool,
        argument: Box<Expression>,
    },
    BinaryExpression {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    LogicalExpression {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    UpdateExpression {
        operator: String,
        prefix: bool,
        argument: Box<Expression>,
    },
    YieldExpression {
        argument: Option<Box<Expression>>,
        #[serde(default)]
        delegate: bool,
    },
    AwaitExpression {
        argument: Box<Expression>,
    },
    ConditionalExpression {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },
    SequenceExpression {
        expressions: Vec<Expression>,
    },
    SpreadElement {
        argument: Box<Expression>,
    },
    #[serde(skip)]
    Unsupported(UnsupportedNode),
}

node_serde!(
    Expression,
    &[
        "Identifier",
        "NumericLiteral",
        "BigIntLiteral",
        "StringLiteral",
        "RegExpLiteral",
        "BooleanLiteral",
        "NullLiteral",
        "ThisExpression",
        "V8IntrinsicIdentifier",
        "AssignmentExpression",
        "ObjectExpression",
        "ArrayExpression",
        "FunctionExpression",
        "ArrowFunctionExpression",
        "CallExpression",
        "NewExpression",
        "MemberExpression",
        "UnaryExpression",
        "BinaryExpression",
        "LogicalExpression",
        "UpdateExpression",
        "YieldExpression",
        "AwaitExpression",
        "ConditionalExpression",
        "SequenceExpression",
        "SpreadElement",
    ]
);

fn default_prefix() -> bool {
    true
}

impl Expression {
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn number(value: f64) -> Self {
        Expression::NumericLiteral { value }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral {
            value: value.into(),
        }
    }

    pub fn binary(operator: impl Into<String>, left: Expression, right: Expression) -> Self {
        Expression::BinaryExpression {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::CallExpression {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        Expression::Unsupported(UnsupportedNode::new(kind))
    }

    /// Babel node type name.
    pub fn kind(&self) -> &str {
        match self {
            Expression::Identifier(_) => "Identifier",
            Expression::NumericLiteral { .. } => "NumericLiteral",
            Expression::BigIntLiteral { .. } => "BigIntLiteral",
            Expression::StringLiteral { .. } => "StringLiteral",
            Expression::RegExpLiteral { .. } => "RegExpLiteral",
            Expression::BooleanLiteral { .. } => "BooleanLiteral",
            Expression::NullLiteral => "NullLiteral",
            Expression::ThisExpression => "ThisExpression",
            Expression::V8IntrinsicIdentifier { .. } => "V8IntrinsicIdentifier",
            Expression::AssignmentExpression { .. } => "AssignmentExpression",
            Expression::ObjectExpression { .. } => "ObjectExpression",
            Expression::ArrayExpression { .. } => "ArrayExpression",
            Expression::FunctionExpression(_) => "FunctionExpression",
            Expression::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            Expression::CallExpression { .. } => "CallExpression",
            Expression::NewExpression { .. } => "NewExpression",
            Expression::MemberExpression { .. } => "MemberExpression",
            Expression::UnaryExpression { .. } => "UnaryExpression",
            Expression::BinaryExpression { .. } => "BinaryExpression",
            Expression::LogicalExpression { .. } => "LogicalExpression",
            Expression::UpdateExpression { .. } => "UpdateExpression",
            Expression::YieldExpression { .. } => "YieldExpression",
            Expression::AwaitExpression { .. } => "AwaitExpression",
            Expression::ConditionalExpression { .. } => "ConditionalExpression",
            Expression::SequenceExpression { .. } => "SequenceExpression",
            Expression::SpreadElement { .. } => "SpreadElement",
            Expression::Unsupported(node) => &node.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowFunction {
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: ArrowBody,
    #[serde(default)]
    pub generator: bool,
    #[serde(rename = "async", default)]
    pub is_async: bool,
}

/// `=> { ... }` or `=> expr`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ArrowBody {
    BlockStatement(BlockStatement),
    #[serde(untagged)]
    Expression(Box<Expression>),
}

impl<'de> Deserialize<'de> for ArrowBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let node = Value::deserialize(deserializer)?;
        let body = if node.get("type").and_then(Value::as_str) == Some("BlockStatement") {
            serde_json::from_value(node).map(ArrowBody::BlockStatement)
        } else {
            serde_json::from_value(node).map(ArrowBody::Expression)
        };
        body.map_err(D::Error::custom)
    }
}

/// An entry of an object literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type")]
pub enum ObjectMember {
    ObjectProperty(ObjectProperty),
    ObjectMethod(ObjectMethod),
    SpreadElement {
        argument: Expression,
    },
    #[serde(skip)]
    Unsupported(UnsupportedNode),
}

node_serde!(ObjectMember, &["ObjectProperty", "ObjectMethod", "SpreadElement"]);

impl ObjectMember {
    pub fn kind(&self) -> &str {
        match self {
            ObjectMember::ObjectProperty(_) => "ObjectProperty",
            ObjectMember::ObjectMethod(_) => "ObjectMethod",
            ObjectMember::SpreadElement { .. } => "SpreadElement",
            ObjectMember::Unsupported(node) => &node.kind,
        }
    }
}

/// `key: value`, `[key]: value` or shorthand `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    pub key: Expression,
    pub value: Expression,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub shorthand: bool,
    /// ESTree-style `{ f() {} }` encoded as a property; Babel uses `ObjectMethod`.
    #[serde(default)]
    pub method: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMethod {
    pub kind: MethodKind,
    pub key: Expression,
    pub params: Vec<Pattern>,
    pub body: BlockStatement,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub shorthand: bool,
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
    fn test_arrow_expression_body() {
        let expr: Expression = serde_json::from_value(json!({
            "type": "ArrowFunctionExpression",
            "id": null,
            "params": [{ "type": "Identifier", "name": "a" }],
            "body": { "type": "Identifier", "name": "a" },
            "generator": false,
            "async": false,
            "expression": true
        }))
        .unwrap();
        match expr {
            Expression::ArrowFunctionExpression(arrow) => {
                assert_eq!(arrow.params, vec![Pattern::ident("a")]);
                assert_eq!(arrow.body, ArrowBody::Expression(Box::new(Expression::ident("a"))));
            }
            other => panic!("expected ArrowFunctionExpression, got {}", other.kind()),
        }
    }

    #[test]
    fn test_arrow_block_body() {
        let expr: Expression = serde_json::from_value(json!({
            "type": "ArrowFunctionExpression",
            "params": [],
            "body": { "type": "BlockStatement", "body": [] },
            "async": true
        }))
        .unwrap();
        match expr {
            Expression::ArrowFunctionExpression(arrow) => {
                assert!(arrow.is_async);
                assert!(matches!(arrow.body, ArrowBody::BlockStatement(_)));
            }
            other => panic!("expected ArrowFunctionExpression, got {}", other.kind()),
        }
    }

    #[test]
    fn test_object_members() {
        let expr: Expression = serde_json::from_value(json!({
            "type": "ObjectExpression",
            "properties": [
                {
                    "type": "ObjectProperty",
                    "key": { "type": "Identifier", "name": "a" },
                    "value": { "type": "NumericLiteral", "value": 1 },
                    "computed": false,
                    "shorthand": false
                },
                {
                    "type": "ObjectMethod",
                    "kind": "get",
                    "key": { "type": "Identifier", "name": "b" },
                    "params": [],
                    "body": { "type": "BlockStatement", "body": [] },
                    "computed": false
                },
                {
                    "type": "SpreadElement",
                    "argument": { "type": "Identifier", "name": "rest" }
                }
            ]
        }))
        .unwrap();
        match expr {
            Expression::ObjectExpression { properties } => {
                let kinds: Vec<_> = properties.iter().map(ObjectMember::kind).collect();
                assert_eq!(kinds, ["ObjectProperty", "ObjectMethod", "SpreadElement"]);
                match &properties[1] {
                    ObjectMember::ObjectMethod(m) => assert_eq!(m.kind, MethodKind::Get),
                    _ => unreachable!(),
                }
            }
            other => panic!("expected ObjectExpression, got {}", other.kind()),
        }
    }

    #[test]
    fn test_bigint_keeps_digits() {
        let expr: Expression = serde_json::from_value(json!({
            "type": "BigIntLiteral",
            "value": "0x1f"
        }))
        .unwrap();
        assert_eq!(
            expr,
            Expression::BigIntLiteral {
                value: "0x1f".into()
            }
        );
    }
}
