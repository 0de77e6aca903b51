//! Protobuf messages of the compiled AST.
//!
//! Hand-written `prost` derives mirroring `proto/ast.proto` (package
//! `compiler.protobuf`). Field tags are part of the wire contract with the
//! fuzzer and must not be renumbered; new variants are appended.
//!
//! `Statement`, `Expression` and `ObjectField` are tagged unions: a message
//! wrapping a single `oneof`. A well-formed value has exactly one variant set,
//! except for the empty `Expression` used as an array hole.

use serde::Serialize;

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Ast {
    #[prost(message, repeated, tag = "1")]
    pub statements: Vec<Statement>,
}

/// A parameter in a function declaration. Not an expression on its own.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Parameter {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration, Serialize)]
#[repr(i32)]
pub enum VariableDeclarationKind {
    Var = 0,
    Let = 1,
    Const = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration, Serialize)]
#[repr(i32)]
pub enum FunctionType {
    Plain = 0,
    Generator = 1,
    Async = 2,
    AsyncGenerator = 3,
}

impl FunctionType {
    /// Kind of a function-like construct from its `generator`/`async` flags.
    pub fn from_flags(generator: bool, is_async: bool) -> Self {
        match (generator, is_async) {
            (true, true) => FunctionType::AsyncGenerator,
            (true, false) => FunctionType::Generator,
            (false, true) => FunctionType::Async,
            (false, false) => FunctionType::Plain,
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct EmptyStatement {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct BlockStatement {
    #[prost(message, repeated, tag = "1")]
    pub body: Vec<Statement>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct VariableDeclarator {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, boxed, tag = "2")]
    pub value: Option<Box<Expression>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct VariableDeclaration {
    #[prost(enumeration = "VariableDeclarationKind", tag = "1")]
    pub kind: i32,
    #[prost(message, repeated, tag = "2")]
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct FunctionDeclaration {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(enumeration = "FunctionType", tag = "2")]
    pub r#type: i32,
    #[prost(message, repeated, tag = "3")]
    pub parameters: Vec<Parameter>,
    #[prost(message, repeated, tag = "4")]
    pub body: Vec<Statement>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ReturnStatement {
    #[prost(message, optional, tag = "1")]
    pub argument: Option<Expression>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ExpressionStatement {
    #[prost(message, optional, tag = "1")]
    pub expression: Option<Expression>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct IfStatement {
    #[prost(message, optional, tag = "1")]
    pub test: Option<Expression>,
    #[prost(message, optional, boxed, tag = "2")]
    pub if_body: Option<Box<Statement>>,
    #[prost(message, optional, boxed, tag = "3")]
    pub else_body: Option<Box<Statement>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct WhileLoop {
    #[prost(message, optional, tag = "1")]
    pub test: Option<Expression>,
    #[prost(message, optional, boxed, tag = "2")]
    pub body: Option<Box<Statement>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct DoWhileLoop {
    #[prost(message, optional, boxed, tag = "1")]
    pub body: Option<Box<Statement>>,
    #[prost(message, optional, tag = "2")]
    pub test: Option<Expression>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ForLoop {
    #[prost(message, optional, tag = "1")]
    pub init: Option<VariableDeclarator>,
    #[prost(message, optional, tag = "2")]
    pub test: Option<Expression>,
    #[prost(message, optional, tag = "3")]
    pub update: Option<Expression>,
    #[prost(message, optional, boxed, tag = "4")]
    pub body: Option<Box<Statement>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ForInLoop {
    #[prost(message, optional, tag = "1")]
    pub left: Option<VariableDeclarator>,
    #[prost(message, optional, tag = "2")]
    pub right: Option<Expression>,
    #[prost(message, optional, boxed, tag = "3")]
    pub body: Option<Box<Statement>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ForOfLoop {
    #[prost(message, optional, tag = "1")]
    pub left: Option<VariableDeclarator>,
    #[prost(message, optional, tag = "2")]
    pub right: Option<Expression>,
    #[prost(message, optional, boxed, tag = "3")]
    pub body: Option<Box<Statement>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct CatchClause {
    #[prost(message, optional, tag = "1")]
    pub parameter: Option<Parameter>,
    #[prost(message, repeated, tag = "2")]
    pub body: Vec<Statement>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct FinallyClause {
    #[prost(message, repeated, tag = "1")]
    pub body: Vec<Statement>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct TryStatement {
    #[prost(message, repeated, tag = "1")]
    pub body: Vec<Statement>,
    #[prost(message, optional, tag = "2")]
    pub catch: Option<CatchClause>,
    #[prost(message, optional, tag = "3")]
    pub finally: Option<FinallyClause>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ThrowStatement {
    #[prost(message, optional, tag = "1")]
    pub argument: Option<Expression>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Statement {
    #[prost(oneof = "statement::Statement", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14")]
    pub statement: Option<statement::Statement>,
}

pub mod statement {
    use serde::Serialize;

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize)]
    pub enum Statement {
        #[prost(message, tag = "1")]
        EmptyStatement(super::EmptyStatement),
        #[prost(message, tag = "2")]
        BlockStatement(super::BlockStatement),
        #[prost(message, tag = "3")]
        VariableDeclaration(super::VariableDeclaration),
        #[prost(message, tag = "4")]
        FunctionDeclaration(super::FunctionDeclaration),
        #[prost(message, tag = "5")]
        ReturnStatement(super::ReturnStatement),
        #[prost(message, tag = "6")]
        ExpressionStatement(super::ExpressionStatement),
        #[prost(message, tag = "7")]
        IfStatement(super::IfStatement),
        #[prost(message, tag = "8")]
        WhileLoop(super::WhileLoop),
        #[prost(message, tag = "9")]
        DoWhileLoop(super::DoWhileLoop),
        #[prost(message, tag = "10")]
        ForLoop(super::ForLoop),
        #[prost(message, tag = "11")]
        ForInLoop(super::ForInLoop),
        #[prost(message, tag = "12")]
        ForOfLoop(super::ForOfLoop),
        #[prost(message, tag = "13")]
        TryStatement(super::TryStatement),
        #[prost(message, tag = "14")]
        ThrowStatement(super::ThrowStatement),
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Identifier {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct NumberLiteral {
    #[prost(double, tag = "1")]
    pub value: f64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct BigIntLiteral {
    #[prost(string, tag = "1")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct StringLiteral {
    #[prost(string, tag = "1")]
    pub value: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct RegExpLiteral {
    #[prost(string, tag = "1")]
    pub pattern: String,
    #[prost(string, tag = "2")]
    pub flags: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct BooleanLiteral {
    #[prost(bool, tag = "1")]
    pub value: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct NullLiteral {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ThisExpression {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct AssignmentExpression {
    #[prost(string, tag = "1")]
    pub operator: String,
    #[prost(message, optional, boxed, tag = "2")]
    pub lhs: Option<Box<Expression>>,
    #[prost(message, optional, boxed, tag = "3")]
    pub rhs: Option<Box<Expression>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ObjectProperty {
    #[prost(oneof = "object_property::Key", tags = "1, 2, 3")]
    pub key: Option<object_property::Key>,
    #[prost(message, optional, tag = "4")]
    pub value: Option<Expression>,
}

pub mod object_property {
    use serde::Serialize;

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize)]
    pub enum Key {
        /// A "regular" property.
        #[prost(string, tag = "1")]
        Name(String),
        /// An element.
        #[prost(int64, tag = "2")]
        Index(i64),
        /// A computed property.
        #[prost(message, tag = "3")]
        Expression(super::Expression),
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ObjectMethod {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(enumeration = "FunctionType", tag = "2")]
    pub r#type: i32,
    #[prost(message, repeated, tag = "3")]
    pub parameters: Vec<Parameter>,
    #[prost(message, repeated, tag = "4")]
    pub body: Vec<Statement>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ObjectGetter {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub body: Vec<Statement>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ObjectSetter {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub parameter: Option<Parameter>,
    #[prost(message, repeated, tag = "3")]
    pub body: Vec<Statement>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ObjectField {
    #[prost(oneof = "object_field::Field", tags = "1, 2, 3, 4")]
    pub field: Option<object_field::Field>,
}

pub mod object_field {
    use serde::Serialize;

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize)]
    pub enum Field {
        #[prost(message, tag = "1")]
        Property(super::ObjectProperty),
        #[prost(message, tag = "2")]
        Method(super::ObjectMethod),
        #[prost(message, tag = "3")]
        Getter(super::ObjectGetter),
        #[prost(message, tag = "4")]
        Setter(super::ObjectSetter),
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ObjectExpression {
    #[prost(message, repeated, tag = "1")]
    pub fields: Vec<ObjectField>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ArrayExpression {
    /// Holes are empty `Expression`s.
    #[prost(message, repeated, tag = "1")]
    pub elements: Vec<Expression>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct FunctionExpression {
    #[prost(enumeration = "FunctionType", tag = "1")]
    pub r#type: i32,
    #[prost(message, repeated, tag = "2")]
    pub parameters: Vec<Parameter>,
    #[prost(message, repeated, tag = "3")]
    pub body: Vec<Statement>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ArrowFunctionExpression {
    #[prost(enumeration = "FunctionType", tag = "1")]
    pub r#type: i32,
    #[prost(message, repeated, tag = "2")]
    pub parameters: Vec<Parameter>,
    #[prost(oneof = "arrow_function_expression::Body", tags = "3, 4")]
    pub body: Option<arrow_function_expression::Body>,
}

pub mod arrow_function_expression {
    use serde::Serialize;

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize)]
    pub enum Body {
        #[prost(message, tag = "3")]
        Block(Box<super::Statement>),
        #[prost(message, tag = "4")]
        Expression(Box<super::Expression>),
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct CallExpression {
    #[prost(message, optional, boxed, tag = "1")]
    pub callee: Option<Box<Expression>>,
    #[prost(message, repeated, tag = "2")]
    pub arguments: Vec<Expression>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct NewExpression {
    #[prost(message, optional, boxed, tag = "1")]
    pub callee: Option<Box<Expression>>,
    #[prost(message, repeated, tag = "2")]
    pub arguments: Vec<Expression>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MemberExpression {
    #[prost(message, optional, boxed, tag = "1")]
    pub object: Option<Box<Expression>>,
    #[prost(oneof = "member_expression::Property", tags = "2, 3")]
    pub property: Option<member_expression::Property>,
}

pub mod member_expression {
    use serde::Serialize;

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize)]
    pub enum Property {
        /// A "regular" property.
        #[prost(string, tag = "2")]
        Name(String),
        /// A computed property or element.
        #[prost(message, tag = "3")]
        Expression(Box<super::Expression>),
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct UnaryExpression {
    #[prost(string, tag = "1")]
    pub operator: String,
    #[prost(message, optional, boxed, tag = "2")]
    pub argument: Option<Box<Expression>>,
}

/// Arithmetic, relational and logical operators alike; only `operator` tells
/// `&&` apart from `&`.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct BinaryExpression {
    #[prost(string, tag = "1")]
    pub operator: String,
    #[prost(message, optional, boxed, tag = "2")]
    pub lhs: Option<Box<Expression>>,
    #[prost(message, optional, boxed, tag = "3")]
    pub rhs: Option<Box<Expression>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct UpdateExpression {
    #[prost(string, tag = "1")]
    pub operator: String,
    #[prost(bool, tag = "2")]
    pub is_prefix: bool,
    #[prost(message, optional, boxed, tag = "3")]
    pub argument: Option<Box<Expression>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct YieldExpression {
    #[prost(message, optional, boxed, tag = "1")]
    pub argument: Option<Box<Expression>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct SpreadElement {
    #[prost(message, optional, boxed, tag = "1")]
    pub argument: Option<Box<Expression>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct V8IntrinsicIdentifier {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct AwaitExpression {
    #[prost(message, optional, boxed, tag = "1")]
    pub argument: Option<Box<Expression>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct TernaryExpression {
    #[prost(message, optional, boxed, tag = "1")]
    pub condition: Option<Box<Expression>>,
    #[prost(message, optional, boxed, tag = "2")]
    pub consequent: Option<Box<Expression>>,
    #[prost(message, optional, boxed, tag = "3")]
    pub alternate: Option<Box<Expression>>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct SequenceExpression {
    #[prost(message, repeated, tag = "1")]
    pub expressions: Vec<Expression>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Expression {
    #[prost(
        oneof = "expression::Expression",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25"
    )]
    pub expression: Option<expression::Expression>,
}

pub mod expression {
    use serde::Serialize;

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize)]
    pub enum Expression {
        #[prost(message, tag = "1")]
        Identifier(super::Identifier),
        #[prost(message, tag = "2")]
        NumberLiteral(super::NumberLiteral),
        #[prost(message, tag = "3")]
        BigIntLiteral(super::BigIntLiteral),
        #[prost(message, tag = "4")]
        StringLiteral(super::StringLiteral),
        #[prost(message, tag = "5")]
        RegExpLiteral(super::RegExpLiteral),
        #[prost(message, tag = "6")]
        BooleanLiteral(super::BooleanLiteral),
        #[prost(message, tag = "7")]
        NullLiteral(super::NullLiteral),
        #[prost(message, tag = "8")]
        ThisExpression(super::ThisExpression),
        #[prost(message, tag = "9")]
        AssignmentExpression(super::AssignmentExpression),
        #[prost(message, tag = "10")]
        ObjectExpression(super::ObjectExpression),
        #[prost(message, tag = "11")]
        ArrayExpression(super::ArrayExpression),
        #[prost(message, tag = "12")]
        FunctionExpression(super::FunctionExpression),
        #[prost(message, tag = "13")]
        ArrowFunctionExpression(super::ArrowFunctionExpression),
        #[prost(message, tag = "14")]
        CallExpression(super::CallExpression),
        #[prost(message, tag = "15")]
        NewExpression(super::NewExpression),
        #[prost(message, tag = "16")]
        MemberExpression(super::MemberExpression),
        #[prost(message, tag = "17")]
        UnaryExpression(super::UnaryExpression),
        #[prost(message, tag = "18")]
        BinaryExpression(super::BinaryExpression),
        #[prost(message, tag = "19")]
        UpdateExpression(super::UpdateExpression),
        #[prost(message, tag = "20")]
        YieldExpression(super::YieldExpression),
        #[prost(message, tag = "21")]
        SpreadElement(super::SpreadElement),
        #[prost(message, tag = "22")]
        V8IntrinsicIdentifier(super::V8IntrinsicIdentifier),
        #[prost(message, tag = "23")]
        AwaitExpression(super::AwaitExpression),
        #[prost(message, tag = "24")]
        TernaryExpression(super::TernaryExpression),
        #[prost(message, tag = "25")]
        SequenceExpression(super::SequenceExpression),
    }
}

// ============================================================================
// Union wrapping
// ============================================================================

macro_rules! union_variants {
    ($union:ident . $field:ident : $module:ident :: $oneof:ident { $($variant:ident),* $(,)? }) => {
        $(
            impl From<$variant> for $union {
                fn from(value: $variant) -> Self {
                    $union {
                        $field: Some($module::$oneof::$variant(value)),
                    }
                }
            }
        )*
    };
}

union_variants!(Statement.statement: statement::Statement {
    EmptyStatement,
    BlockStatement,
    VariableDeclaration,
    FunctionDeclaration,
    ReturnStatement,
    ExpressionStatement,
    IfStatement,
    WhileLoop,
    DoWhileLoop,
    ForLoop,
    ForInLoop,
    ForOfLoop,
    TryStatement,
    ThrowStatement,
});

union_variants!(Expression.expression: expression::Expression {
    Identifier,
    NumberLiteral,
    BigIntLiteral,
    StringLiteral,
    RegExpLiteral,
    BooleanLiteral,
    NullLiteral,
    ThisExpression,
    AssignmentExpression,
    ObjectExpression,
    ArrayExpression,
    FunctionExpression,
    ArrowFunctionExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    UnaryExpression,
    BinaryExpression,
    UpdateExpression,
    YieldExpression,
    SpreadElement,
    V8IntrinsicIdentifier,
    AwaitExpression,
    TernaryExpression,
    SequenceExpression,
});

impl From<ObjectProperty> for ObjectField {
    fn from(value: ObjectProperty) -> Self {
        ObjectField {
            field: Some(object_field::Field::Property(value)),
        }
    }
}

impl From<ObjectMethod> for ObjectField {
    fn from(value: ObjectMethod) -> Self {
        ObjectField {
            field: Some(object_field::Field::Method(value)),
        }
    }
}

impl From<ObjectGetter> for ObjectField {
    fn from(value: ObjectGetter) -> Self {
        ObjectField {
            field: Some(object_field::Field::Getter(value)),
        }
    }
}

impl From<ObjectSetter> for ObjectField {
    fn from(value: ObjectSetter) -> Self {
        ObjectField {
            field: Some(object_field::Field::Setter(value)),
        }
    }
}

impl statement::Statement {
    /// Message name of the populated variant.
    pub fn name(&self) -> &'static str {
        use statement::Statement::*;
        match self {
            EmptyStatement(_) => "EmptyStatement",
            BlockStatement(_) => "BlockStatement",
            VariableDeclaration(_) => "VariableDeclaration",
            FunctionDeclaration(_) => "FunctionDeclaration",
            ReturnStatement(_) => "ReturnStatement",
            ExpressionStatement(_) => "ExpressionStatement",
            IfStatement(_) => "IfStatement",
            WhileLoop(_) => "WhileLoop",
            DoWhileLoop(_) => "DoWhileLoop",
            ForLoop(_) => "ForLoop",
            ForInLoop(_) => "ForInLoop",
            ForOfLoop(_) => "ForOfLoop",
            TryStatement(_) => "TryStatement",
            ThrowStatement(_) => "ThrowStatement",
        }
    }
}

impl expression::Expression {
    /// Message name of the populated variant.
    pub fn name(&self) -> &'static str {
        use expression::Expression::*;
        match self {
            Identifier(_) => "Identifier",
            NumberLiteral(_) => "NumberLiteral",
            BigIntLiteral(_) => "BigIntLiteral",
            StringLiteral(_) => "StringLiteral",
            RegExpLiteral(_) => "RegExpLiteral",
            BooleanLiteral(_) => "BooleanLiteral",
            NullLiteral(_) => "NullLiteral",
            ThisExpression(_) => "ThisExpression",
            AssignmentExpression(_) => "AssignmentExpression",
            ObjectExpression(_) => "ObjectExpression",
            ArrayExpression(_) => "ArrayExpression",
            FunctionExpression(_) => "FunctionExpression",
            ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            CallExpression(_) => "CallExpression",
            NewExpression(_) => "NewExpression",
            MemberExpression(_) => "MemberExpression",
            UnaryExpression(_) => "UnaryExpression",
            BinaryExpression(_) => "BinaryExpression",
            UpdateExpression(_) => "UpdateExpression",
            YieldExpression(_) => "YieldExpression",
            SpreadElement(_) => "SpreadElement",
            V8IntrinsicIdentifier(_) => "V8IntrinsicIdentifier",
            AwaitExpression(_) => "AwaitExpression",
            TernaryExpression(_) => "TernaryExpression",
            SequenceExpression(_) => "SequenceExpression",
        }
    }
}
