//! Shape validation for AST messages.
//!
//! Protobuf cannot express "required" or "exactly one of", so the wire types in
//! [`crate::ir`] admit values the fuzzer would choke on. Every message the
//! compiler builds passes through [`make`], which checks the constraints the
//! type system leaves open. Checks are shallow: children were validated when
//! they were built.

use crate::error::ShapeViolation;
use crate::ir::*;

/// A message with a named schema.
pub trait Schema: Sized {
    /// Message name in `proto/ast.proto`.
    const NAME: &'static str;

    fn validate(&self) -> Result<(), ShapeViolation>;
}

/// Validate a freshly built message and hand it back.
pub fn make<M: Schema>(message: M) -> Result<M, ShapeViolation> {
    message.validate()?;
    Ok(message)
}

fn require<'a, T>(
    message: &'static str,
    field: &'static str,
    value: Option<&'a T>,
) -> Result<&'a T, ShapeViolation> {
    value.ok_or_else(|| ShapeViolation::new(message, field, "missing"))
}

fn non_empty(message: &'static str, field: &'static str, value: &str) -> Result<(), ShapeViolation> {
    if value.is_empty() {
        return Err(ShapeViolation::new(message, field, "empty"));
    }
    Ok(())
}

fn filled(message: &'static str, field: &'static str, expr: &Expression) -> Result<(), ShapeViolation> {
    if expr.expression.is_none() {
        return Err(ShapeViolation::new(message, field, "empty expression"));
    }
    Ok(())
}

fn required_expr(
    message: &'static str,
    field: &'static str,
    expr: Option<&Expression>,
) -> Result<(), ShapeViolation> {
    filled(message, field, require(message, field, expr)?)
}

fn optional_expr(
    message: &'static str,
    field: &'static str,
    expr: Option<&Expression>,
) -> Result<(), ShapeViolation> {
    expr.map_or(Ok(()), |expr| filled(message, field, expr))
}

fn required_stmt(
    message: &'static str,
    field: &'static str,
    stmt: Option<&Statement>,
) -> Result<(), ShapeViolation> {
    if require(message, field, stmt)?.statement.is_none() {
        return Err(ShapeViolation::new(message, field, "empty statement"));
    }
    Ok(())
}

fn enumeration<E: TryFrom<i32>>(
    message: &'static str,
    field: &'static str,
    value: i32,
) -> Result<(), ShapeViolation> {
    E::try_from(value)
        .map(|_| ())
        .map_err(|_| ShapeViolation::new(message, field, format!("unknown value {}", value)))
}

// ============================================================================
// Unions
// ============================================================================

impl Schema for Statement {
    const NAME: &'static str = "Statement";

    fn validate(&self) -> Result<(), ShapeViolation> {
        require(Self::NAME, "statement", self.statement.as_ref()).map(|_| ())
    }
}

/// The empty `Expression` is legal on the wire but only built directly, as an
/// array hole; anything passing through [`make`] must carry a variant.
impl Schema for Expression {
    const NAME: &'static str = "Expression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        require(Self::NAME, "expression", self.expression.as_ref()).map(|_| ())
    }
}

impl Schema for ObjectField {
    const NAME: &'static str = "ObjectField";

    fn validate(&self) -> Result<(), ShapeViolation> {
        require(Self::NAME, "field", self.field.as_ref()).map(|_| ())
    }
}

// ============================================================================
// Program and statements
// ============================================================================

impl Schema for Ast {
    const NAME: &'static str = "AST";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for Parameter {
    const NAME: &'static str = "Parameter";

    fn validate(&self) -> Result<(), ShapeViolation> {
        non_empty(Self::NAME, "name", &self.name)
    }
}

impl Schema for EmptyStatement {
    const NAME: &'static str = "EmptyStatement";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for BlockStatement {
    const NAME: &'static str = "BlockStatement";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for VariableDeclarator {
    const NAME: &'static str = "VariableDeclarator";

    fn validate(&self) -> Result<(), ShapeViolation> {
        non_empty(Self::NAME, "name", &self.name)?;
        optional_expr(Self::NAME, "value", self.value.as_deref())
    }
}

impl Schema for VariableDeclaration {
    const NAME: &'static str = "VariableDeclaration";

    fn validate(&self) -> Result<(), ShapeViolation> {
        enumeration::<VariableDeclarationKind>(Self::NAME, "kind", self.kind)?;
        if self.declarations.is_empty() {
            return Err(ShapeViolation::new(Self::NAME, "declarations", "empty"));
        }
        Ok(())
    }
}

impl Schema for FunctionDeclaration {
    const NAME: &'static str = "FunctionDeclaration";

    fn validate(&self) -> Result<(), ShapeViolation> {
        non_empty(Self::NAME, "name", &self.name)?;
        enumeration::<FunctionType>(Self::NAME, "type", self.r#type)
    }
}

impl Schema for ReturnStatement {
    const NAME: &'static str = "ReturnStatement";

    fn validate(&self) -> Result<(), ShapeViolation> {
        optional_expr(Self::NAME, "argument", self.argument.as_ref())
    }
}

impl Schema for ExpressionStatement {
    const NAME: &'static str = "ExpressionStatement";

    fn validate(&self) -> Result<(), ShapeViolation> {
        required_expr(Self::NAME, "expression", self.expression.as_ref())
    }
}

impl Schema for IfStatement {
    const NAME: &'static str = "IfStatement";

    fn validate(&self) -> Result<(), ShapeViolation> {
        required_expr(Self::NAME, "test", self.test.as_ref())?;
        required_stmt(Self::NAME, "ifBody", self.if_body.as_deref())?;
        match self.else_body.as_deref() {
            Some(stmt) => required_stmt(Self::NAME, "elseBody", Some(stmt)),
            None => Ok(()),
        }
    }
}

impl Schema for WhileLoop {
    const NAME: &'static str = "WhileLoop";

    fn validate(&self) -> Result<(), ShapeViolation> {
        required_expr(Self::NAME, "test", self.test.as_ref())?;
        required_stmt(Self::NAME, "body", self.body.as_deref())
    }
}

impl Schema for DoWhileLoop {
    const NAME: &'static str = "DoWhileLoop";

    fn validate(&self) -> Result<(), ShapeViolation> {
        required_stmt(Self::NAME, "body", self.body.as_deref())?;
        required_expr(Self::NAME, "test", self.test.as_ref())
    }
}

impl Schema for ForLoop {
    const NAME: &'static str = "ForLoop";

    fn validate(&self) -> Result<(), ShapeViolation> {
        require(Self::NAME, "init", self.init.as_ref())?;
        required_expr(Self::NAME, "test", self.test.as_ref())?;
        required_expr(Self::NAME, "update", self.update.as_ref())?;
        required_stmt(Self::NAME, "body", self.body.as_deref())
    }
}

/// `for-in` and `for-of` bind one fresh variable per iteration.
fn loop_binding(
    message: &'static str,
    left: Option<&VariableDeclarator>,
) -> Result<(), ShapeViolation> {
    if require(message, "left", left)?.value.is_some() {
        return Err(ShapeViolation::new(message, "left", "binding has an initializer"));
    }
    Ok(())
}

impl Schema for ForInLoop {
    const NAME: &'static str = "ForInLoop";

    fn validate(&self) -> Result<(), ShapeViolation> {
        loop_binding(Self::NAME, self.left.as_ref())?;
        required_expr(Self::NAME, "right", self.right.as_ref())?;
        required_stmt(Self::NAME, "body", self.body.as_deref())
    }
}

impl Schema for ForOfLoop {
    const NAME: &'static str = "ForOfLoop";

    fn validate(&self) -> Result<(), ShapeViolation> {
        loop_binding(Self::NAME, self.left.as_ref())?;
        required_expr(Self::NAME, "right", self.right.as_ref())?;
        required_stmt(Self::NAME, "body", self.body.as_deref())
    }
}

impl Schema for CatchClause {
    const NAME: &'static str = "CatchClause";

    fn validate(&self) -> Result<(), ShapeViolation> {
        match &self.parameter {
            Some(param) => non_empty(Self::NAME, "parameter", &param.name),
            None => Ok(()),
        }
    }
}

impl Schema for FinallyClause {
    const NAME: &'static str = "FinallyClause";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for TryStatement {
    const NAME: &'static str = "TryStatement";

    fn validate(&self) -> Result<(), ShapeViolation> {
        if self.catch.is_none() && self.finally.is_none() {
            return Err(ShapeViolation::new(
                Self::NAME,
                "catch",
                "neither catch nor finally clause",
            ));
        }
        Ok(())
    }
}

impl Schema for ThrowStatement {
    const NAME: &'static str = "ThrowStatement";

    fn validate(&self) -> Result<(), ShapeViolation> {
        required_expr(Self::NAME, "argument", self.argument.as_ref())
    }
}

// ============================================================================
// Expressions
// ============================================================================

impl Schema for Identifier {
    const NAME: &'static str = "Identifier";

    fn validate(&self) -> Result<(), ShapeViolation> {
        non_empty(Self::NAME, "name", &self.name)
    }
}

impl Schema for NumberLiteral {
    const NAME: &'static str = "NumberLiteral";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for BigIntLiteral {
    const NAME: &'static str = "BigIntLiteral";

    fn validate(&self) -> Result<(), ShapeViolation> {
        non_empty(Self::NAME, "value", &self.value)
    }
}

impl Schema for StringLiteral {
    const NAME: &'static str = "StringLiteral";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for RegExpLiteral {
    const NAME: &'static str = "RegExpLiteral";

    fn validate(&self) -> Result<(), ShapeViolation> {
        non_empty(Self::NAME, "pattern", &self.pattern)
    }
}

impl Schema for BooleanLiteral {
    const NAME: &'static str = "BooleanLiteral";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for NullLiteral {
    const NAME: &'static str = "NullLiteral";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for ThisExpression {
    const NAME: &'static str = "ThisExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for AssignmentExpression {
    const NAME: &'static str = "AssignmentExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        non_empty(Self::NAME, "operator", &self.operator)?;
        required_expr(Self::NAME, "lhs", self.lhs.as_deref())?;
        required_expr(Self::NAME, "rhs", self.rhs.as_deref())
    }
}

impl Schema for ObjectProperty {
    const NAME: &'static str = "ObjectProperty";

    fn validate(&self) -> Result<(), ShapeViolation> {
        // `{ "": 1 }` is a legal empty name.
        match require(Self::NAME, "key", self.key.as_ref())? {
            object_property::Key::Name(_) | object_property::Key::Index(_) => {}
            object_property::Key::Expression(expr) => filled(Self::NAME, "expression", expr)?,
        }
        required_expr(Self::NAME, "value", self.value.as_ref())
    }
}

impl Schema for ObjectMethod {
    const NAME: &'static str = "ObjectMethod";

    fn validate(&self) -> Result<(), ShapeViolation> {
        enumeration::<FunctionType>(Self::NAME, "type", self.r#type)
    }
}

impl Schema for ObjectGetter {
    const NAME: &'static str = "ObjectGetter";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for ObjectSetter {
    const NAME: &'static str = "ObjectSetter";

    fn validate(&self) -> Result<(), ShapeViolation> {
        require(Self::NAME, "parameter", self.parameter.as_ref()).map(|_| ())
    }
}

impl Schema for ObjectExpression {
    const NAME: &'static str = "ObjectExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for ArrayExpression {
    const NAME: &'static str = "ArrayExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        Ok(())
    }
}

impl Schema for FunctionExpression {
    const NAME: &'static str = "FunctionExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        enumeration::<FunctionType>(Self::NAME, "type", self.r#type)
    }
}

impl Schema for ArrowFunctionExpression {
    const NAME: &'static str = "ArrowFunctionExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        enumeration::<FunctionType>(Self::NAME, "type", self.r#type)?;
        match require(Self::NAME, "body", self.body.as_ref())? {
            arrow_function_expression::Body::Block(stmt) => match &stmt.statement {
                Some(statement::Statement::BlockStatement(_)) => Ok(()),
                _ => Err(ShapeViolation::new(Self::NAME, "block", "not a block statement")),
            },
            arrow_function_expression::Body::Expression(expr) => {
                filled(Self::NAME, "expression", expr)
            }
        }
    }
}

fn call_like(
    message: &'static str,
    callee: Option<&Expression>,
    arguments: &[Expression],
) -> Result<(), ShapeViolation> {
    required_expr(message, "callee", callee)?;
    arguments
        .iter()
        .try_for_each(|arg| filled(message, "arguments", arg))
}

impl Schema for CallExpression {
    const NAME: &'static str = "CallExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        call_like(Self::NAME, self.callee.as_deref(), &self.arguments)
    }
}

impl Schema for NewExpression {
    const NAME: &'static str = "NewExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        call_like(Self::NAME, self.callee.as_deref(), &self.arguments)
    }
}

impl Schema for MemberExpression {
    const NAME: &'static str = "MemberExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        required_expr(Self::NAME, "object", self.object.as_deref())?;
        match require(Self::NAME, "property", self.property.as_ref())? {
            member_expression::Property::Name(name) => non_empty(Self::NAME, "name", name),
            member_expression::Property::Expression(expr) => {
                filled(Self::NAME, "expression", expr)
            }
        }
    }
}

impl Schema for UnaryExpression {
    const NAME: &'static str = "UnaryExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        non_empty(Self::NAME, "operator", &self.operator)?;
        required_expr(Self::NAME, "argument", self.argument.as_deref())
    }
}

impl Schema for BinaryExpression {
    const NAME: &'static str = "BinaryExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        non_empty(Self::NAME, "operator", &self.operator)?;
        required_expr(Self::NAME, "lhs", self.lhs.as_deref())?;
        required_expr(Self::NAME, "rhs", self.rhs.as_deref())
    }
}

impl Schema for UpdateExpression {
    const NAME: &'static str = "UpdateExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        if !matches!(self.operator.as_str(), "++" | "--") {
            return Err(ShapeViolation::new(
                Self::NAME,
                "operator",
                format!("unknown operator {:?}", self.operator),
            ));
        }
        required_expr(Self::NAME, "argument", self.argument.as_deref())
    }
}

impl Schema for YieldExpression {
    const NAME: &'static str = "YieldExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        optional_expr(Self::NAME, "argument", self.argument.as_deref())
    }
}

impl Schema for SpreadElement {
    const NAME: &'static str = "SpreadElement";

    fn validate(&self) -> Result<(), ShapeViolation> {
        required_expr(Self::NAME, "argument", self.argument.as_deref())
    }
}

impl Schema for V8IntrinsicIdentifier {
    const NAME: &'static str = "V8IntrinsicIdentifier";

    fn validate(&self) -> Result<(), ShapeViolation> {
        non_empty(Self::NAME, "name", &self.name)
    }
}

impl Schema for AwaitExpression {
    const NAME: &'static str = "AwaitExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        required_expr(Self::NAME, "argument", self.argument.as_deref())
    }
}

impl Schema for TernaryExpression {
    const NAME: &'static str = "TernaryExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        required_expr(Self::NAME, "condition", self.condition.as_deref())?;
        required_expr(Self::NAME, "consequent", self.consequent.as_deref())?;
        required_expr(Self::NAME, "alternate", self.alternate.as_deref())
    }
}

impl Schema for SequenceExpression {
    const NAME: &'static str = "SequenceExpression";

    fn validate(&self) -> Result<(), ShapeViolation> {
        if self.expressions.len() < 2 {
            return Err(ShapeViolation::new(
                Self::NAME,
                "expressions",
                "fewer than two expressions",
            ));
        }
        self.expressions
            .iter()
            .try_for_each(|expr| filled(Self::NAME, "expressions", expr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64) -> Expression {
        NumberLiteral { value }.into()
    }

    #[test]
    fn test_empty_union_rejected() {
        let err = make(Statement::default()).unwrap_err();
        assert_eq!(err.message, "Statement");
        assert_eq!(err.field, "statement");

        assert!(make(Expression::default()).is_err());
        assert!(make(ObjectField::default()).is_err());
    }

    #[test]
    fn test_required_expression_missing_or_empty() {
        let missing = IfStatement {
            test: None,
            if_body: Some(Box::new(EmptyStatement {}.into())),
            else_body: None,
        };
        assert_eq!(make(missing).unwrap_err().problem, "missing");

        let empty = ThrowStatement {
            argument: Some(Expression::default()),
        };
        assert_eq!(make(empty).unwrap_err().problem, "empty expression");
    }

    #[test]
    fn test_unknown_enum_value() {
        let decl = VariableDeclaration {
            kind: 7,
            declarations: vec![VariableDeclarator {
                name: "x".into(),
                value: None,
            }],
        };
        let err = make(decl).unwrap_err();
        assert_eq!(err.field, "kind");
        assert_eq!(err.problem, "unknown value 7");
    }

    #[test]
    fn test_loop_binding_without_initializer() {
        let with_init = ForOfLoop {
            left: Some(VariableDeclarator {
                name: "x".into(),
                value: Some(Box::new(number(1.0))),
            }),
            right: Some(Identifier { name: "xs".into() }.into()),
            body: Some(Box::new(EmptyStatement {}.into())),
        };
        assert!(make(with_init).is_err());
    }

    #[test]
    fn test_try_needs_a_clause() {
        assert!(make(TryStatement::default()).is_err());
        let with_finally = TryStatement {
            body: vec![],
            catch: None,
            finally: Some(FinallyClause::default()),
        };
        assert!(make(with_finally).is_ok());
    }

    #[test]
    fn test_member_property_exactly_once() {
        let object = Some(Box::new(Identifier { name: "a".into() }.into()));
        let without = MemberExpression {
            object: object.clone(),
            property: None,
        };
        assert!(make(without).is_err());

        let named = MemberExpression {
            object,
            property: Some(member_expression::Property::Name("b".into())),
        };
        assert!(make(named).is_ok());
    }

    #[test]
    fn test_holes_allowed_in_arrays_only() {
        let array = ArrayExpression {
            elements: vec![number(1.0), Expression::default(), number(3.0)],
        };
        assert!(make(array).is_ok());

        let call = CallExpression {
            callee: Some(Box::new(Identifier { name: "f".into() }.into())),
            arguments: vec![Expression::default()],
        };
        assert!(make(call).is_err());
    }
}
