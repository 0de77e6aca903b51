//! Concrete syntax tree for the accepted JavaScript subset.
//!
//! The shapes follow Babel's node types (`IfStatement`, `CallExpression`, ...)
//! so that a tree read from source with tree-sitter and a tree exported as
//! Babel JSON are the same value. Each grammar level is a closed sum type with
//! one variant per construct the compiler knows about and an `Unsupported`
//! fallback that keeps the kind name of anything else.
//!
//! # Serialization
//!
//! All node enums use an internal `"type"` tag:
//! - `{"type": "Identifier", "name": "x"}` → [`Expression::Identifier`]
//! - `{"type": "ClassDeclaration", ...}` → [`Statement::Unsupported`]
//!
//! Only an unknown tag falls back to `Unsupported`. A known tag with a
//! malformed body (`{"type": "IfStatement", "test": 5}`) is a read error.
//!
//! Fields Babel attaches for tooling (`start`, `loc`, `extra`, ...) are ignored.

mod expr;
mod stmt;

pub use expr::*;
pub use stmt::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `type` tag of `node` when it is a string outside `known`.
pub(crate) fn foreign_kind(node: &Value, known: &[&str]) -> Option<String> {
    let kind = node.get("type")?.as_str()?;
    (!known.contains(&kind)).then(|| kind.to_owned())
}

/// Serde impls for a node enum derived with `#[serde(remote = "Self")]`.
///
/// Tags in `$known` go through the derived code, so their errors surface;
/// any other tag becomes `$ty::Unsupported`, serialized back as `{"type": kind}`.
macro_rules! node_serde {
    ($ty:ident, $known:expr) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let node = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                match $crate::ast::foreign_kind(&node, $known) {
                    Some(kind) => Ok($ty::Unsupported($crate::ast::UnsupportedNode::new(kind))),
                    None => $ty::deserialize(node).map_err(<D::Error as serde::de::Error>::custom),
                }
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                match self {
                    $ty::Unsupported(node) => serde::Serialize::serialize(node, serializer),
                    _ => $ty::serialize(self, serializer),
                }
            }
        }
    };
}

pub(crate) use node_serde;

/// Root of a parsed script.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Body")]
pub struct Program {
    pub body: Vec<Statement>,
}

impl From<Body> for Program {
    fn from(body: Body) -> Self {
        Self::new(body.into_statements())
    }
}

/// A statement list as Babel prints it, with the directive prologue
/// (`'use strict'`) split out of `body`.
#[derive(Deserialize)]
pub(crate) struct Body {
    body: Vec<Statement>,
    #[serde(default)]
    directives: Vec<Directive>,
}

#[derive(Deserialize)]
struct Directive {
    value: DirectiveLiteral,
}

/// Babel keeps the text between the quotes as written.
#[derive(Deserialize)]
struct DirectiveLiteral {
    value: String,
}

impl Body {
    /// Directives become string expression statements ahead of the body,
    /// which is how source text reads them.
    pub(crate) fn into_statements(self) -> Vec<Statement> {
        self.directives
            .into_iter()
            .map(|directive| Statement::expr(Expression::string(directive.value.value)))
            .chain(self.body)
            .collect()
    }
}

impl Program {
    pub fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }
}

/// A plain identifier reference or binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A node whose kind is outside the modeled grammar.
///
/// Only the kind name survives; it is what error messages report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsupportedNode {
    #[serde(rename = "type")]
    pub kind: String,
}

impl UnsupportedNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// A binding position: function parameters, declarator ids, catch params.
///
/// Destructuring patterns are recognized so they can be reported by name, but
/// their contents are not retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type")]
pub enum Pattern {
    Identifier(Identifier),
    AssignmentPattern {
        left: Box<Pattern>,
        right: Box<Expression>,
    },
    RestElement {
        argument: Box<Pattern>,
    },
    ObjectPattern,
    ArrayPattern,
    #[serde(skip)]
    Unsupported(UnsupportedNode),
}

node_serde!(
    Pattern,
    &["Identifier", "AssignmentPattern", "RestElement", "ObjectPattern", "ArrayPattern"]
);

impl Pattern {
    pub fn ident(name: impl Into<String>) -> Self {
        Pattern::Identifier(Identifier::new(name))
    }

    /// Babel node type name.
    pub fn kind(&self) -> &str {
        match self {
            Pattern::Identifier(_) => "Identifier",
            Pattern::AssignmentPattern { .. } => "AssignmentPattern",
            Pattern::RestElement { .. } => "RestElement",
            Pattern::ObjectPattern => "ObjectPattern",
            Pattern::ArrayPattern => "ArrayPattern",
            Pattern::Unsupported(node) => &node.kind,
        }
    }
}
