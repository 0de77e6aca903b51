//! Expression lowering.

use super::{CompileContext, function_type, required_text};
use crate::error::CompileError;
use crate::ir::{self, arrow_function_expression, member_expression, object_property};
use crate::schema::make;
use jsir_syntax::{
    ArrowBody, ArrowFunction, Expression, Function, MethodKind, ObjectMember, ObjectMethod,
    ObjectProperty,
};

impl CompileContext<'_> {
    pub(super) fn expression(&mut self, expr: &Expression) -> Result<ir::Expression, CompileError> {
        self.nested(|cx| cx.lower_expression(expr))
    }

    fn expressions(&mut self, exprs: &[Expression]) -> Result<Vec<ir::Expression>, CompileError> {
        exprs.iter().map(|expr| self.expression(expr)).collect()
    }

    fn boxed(&mut self, expr: &Expression) -> Result<Box<ir::Expression>, CompileError> {
        self.expression(expr).map(Box::new)
    }

    fn lower_expression(&mut self, expr: &Expression) -> Result<ir::Expression, CompileError> {
        tracing::trace!(kind = expr.kind(), "expression");

        let lowered: ir::Expression = match expr {
            Expression::Identifier(id) => make(ir::Identifier {
                name: required_text("Identifier", "name", &id.name)?,
            })?
            .into(),
            Expression::NumericLiteral { value } => make(ir::NumberLiteral { value: *value })?.into(),
            Expression::BigIntLiteral { value } => make(ir::BigIntLiteral {
                value: required_text("BigIntLiteral", "value", value)?,
            })?
            .into(),
            Expression::StringLiteral { value } => make(ir::StringLiteral {
                value: value.clone(),
            })?
            .into(),
            Expression::RegExpLiteral { pattern, flags } => make(ir::RegExpLiteral {
                pattern: required_text("RegExpLiteral", "pattern", pattern)?,
                flags: flags.clone(),
            })?
            .into(),
            Expression::BooleanLiteral { value } => make(ir::BooleanLiteral { value: *value })?.into(),
            Expression::NullLiteral => make(ir::NullLiteral {})?.into(),
            Expression::ThisExpression => make(ir::ThisExpression {})?.into(),
            Expression::V8IntrinsicIdentifier { name } => make(ir::V8IntrinsicIdentifier {
                name: required_text("V8IntrinsicIdentifier", "name", name)?,
            })?
            .into(),

            Expression::AssignmentExpression {
                operator,
                left,
                right,
            } => make(ir::AssignmentExpression {
                operator: required_text("AssignmentExpression", "operator", operator)?,
                lhs: Some(self.boxed(left)?),
                rhs: Some(self.boxed(right)?),
            })?
            .into(),

            Expression::ObjectExpression { properties } => {
                let fields = properties
                    .iter()
                    .map(|member| self.object_field(member))
                    .collect::<Result<Vec<_>, _>>()?;
                make(ir::ObjectExpression { fields })?.into()
            }

            Expression::ArrayExpression { elements } => {
                // Holes stay in place as empty expressions so indices line up.
                let elements = elements
                    .iter()
                    .map(|element| match element {
                        Some(element) => self.expression(element),
                        None => Ok(ir::Expression::default()),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                make(ir::ArrayExpression { elements })?.into()
            }

            Expression::FunctionExpression(func) => self.function_expression(func)?.into(),
            Expression::ArrowFunctionExpression(arrow) => self.arrow_function(arrow)?.into(),

            Expression::CallExpression { callee, arguments } => make(ir::CallExpression {
                callee: Some(self.boxed(callee)?),
                arguments: self.expressions(arguments)?,
            })?
            .into(),
            Expression::NewExpression { callee, arguments } => make(ir::NewExpression {
                callee: Some(self.boxed(callee)?),
                arguments: self.expressions(arguments)?,
            })?
            .into(),

            Expression::MemberExpression {
                object,
                property,
                computed,
            } => {
                let object = self.boxed(object)?;
                let property = if *computed {
                    member_expression::Property::Expression(self.boxed(property)?)
                } else {
                    match &**property {
                        Expression::Identifier(id) => member_expression::Property::Name(
                            required_text("MemberExpression", "property name", &id.name)?,
                        ),
                        other => {
                            return Err(CompileError::unsupported(
                                "MemberExpression",
                                format!("property must be an identifier, found {}", other.kind()),
                            ));
                        }
                    }
                };
                make(ir::MemberExpression {
                    object: Some(object),
                    property: Some(property),
                })?
                .into()
            }

            Expression::UnaryExpression {
                operator,
                prefix,
                argument,
            } => {
                if !*prefix {
                    return Err(CompileError::unsupported(
                        "UnaryExpression",
                        format!("postfix operator {} is not supported", operator),
                    ));
                }
                make(ir::UnaryExpression {
                    operator: required_text("UnaryExpression", "operator", operator)?,
                    argument: Some(self.boxed(argument)?),
                })?
                .into()
            }

            // Logical operators share the binary message; the operator tells them apart.
            Expression::BinaryExpression {
                operator,
                left,
                right,
            }
            | Expression::LogicalExpression {
                operator,
                left,
                right,
            } => make(ir::BinaryExpression {
                operator: required_text(expr.kind(), "operator", operator)?,
                lhs: Some(self.boxed(left)?),
                rhs: Some(self.boxed(right)?),
            })?
            .into(),

            Expression::UpdateExpression {
                operator,
                prefix,
                argument,
            } => make(ir::UpdateExpression {
                operator: required_text("UpdateExpression", "operator", operator)?,
                is_prefix: *prefix,
                argument: Some(self.boxed(argument)?),
            })?
            .into(),

            Expression::YieldExpression { delegate: true, .. } => {
                return Err(CompileError::unsupported(
                    "YieldExpression",
                    "delegating yield* is not supported",
                ));
            }
            Expression::YieldExpression { argument, .. } => make(ir::YieldExpression {
                argument: argument
                    .as_deref()
                    .map(|arg| self.boxed(arg))
                    .transpose()?,
            })?
            .into(),

            Expression::AwaitExpression { argument } => make(ir::AwaitExpression {
                argument: Some(self.boxed(argument)?),
            })?
            .into(),

            Expression::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => make(ir::TernaryExpression {
                condition: Some(self.boxed(test)?),
                consequent: Some(self.boxed(consequent)?),
                alternate: Some(self.boxed(alternate)?),
            })?
            .into(),

            Expression::SequenceExpression { expressions } => make(ir::SequenceExpression {
                expressions: self.expressions(expressions)?,
            })?
            .into(),

            Expression::SpreadElement { argument } => make(ir::SpreadElement {
                argument: Some(self.boxed(argument)?),
            })?
            .into(),

            Expression::Unsupported(node) => return Err(CompileError::unhandled(&node.kind)),
        };

        Ok(make(lowered)?)
    }

    /// The name is dropped: the schema has no slot for it.
    fn function_expression(&mut self, func: &Function) -> Result<ir::FunctionExpression, CompileError> {
        if let Some(id) = &func.id {
            tracing::trace!(name = %id.name, "dropping function expression name");
        }
        Ok(make(ir::FunctionExpression {
            r#type: function_type(func.generator, func.is_async),
            parameters: self.parameters(&func.params)?,
            body: self.statements(&func.body.body)?,
        })?)
    }

    fn arrow_function(
        &mut self,
        arrow: &ArrowFunction,
    ) -> Result<ir::ArrowFunctionExpression, CompileError> {
        if arrow.generator {
            return Err(CompileError::unsupported(
                "ArrowFunctionExpression",
                "arrow functions cannot be generators",
            ));
        }
        if arrow.id.is_some() {
            return Err(CompileError::unsupported(
                "ArrowFunctionExpression",
                "arrow functions cannot be named",
            ));
        }
        let parameters = self.parameters(&arrow.params)?;
        let body = match &arrow.body {
            ArrowBody::BlockStatement(block) => {
                let block = make(ir::BlockStatement {
                    body: self.statements(&block.body)?,
                })?;
                arrow_function_expression::Body::Block(Box::new(make(ir::Statement::from(block))?))
            }
            ArrowBody::Expression(expr) => arrow_function_expression::Body::Expression(self.boxed(expr)?),
        };
        Ok(make(ir::ArrowFunctionExpression {
            r#type: function_type(false, arrow.is_async),
            parameters,
            body: Some(body),
        })?)
    }

    fn object_field(&mut self, member: &ObjectMember) -> Result<ir::ObjectField, CompileError> {
        let field: ir::ObjectField = match member {
            ObjectMember::ObjectProperty(prop) => self.object_property(prop)?.into(),
            ObjectMember::ObjectMethod(method) => match method.kind {
                MethodKind::Method => self.object_method(method)?.into(),
                MethodKind::Get => self.object_getter(method)?.into(),
                MethodKind::Set => self.object_setter(method)?.into(),
            },
            ObjectMember::SpreadElement { .. } => {
                return Err(CompileError::unsupported(
                    "SpreadElement",
                    "spread in object literals is not supported",
                ));
            }
            ObjectMember::Unsupported(node) => return Err(CompileError::unhandled(&node.kind)),
        };
        Ok(make(field)?)
    }

    fn object_property(&mut self, prop: &ObjectProperty) -> Result<ir::ObjectProperty, CompileError> {
        if prop.shorthand || prop.method {
            return Err(CompileError::unsupported(
                "ObjectProperty",
                "shorthand and method properties are not supported",
            ));
        }
        let key = if prop.computed {
            object_property::Key::Expression(self.expression(&prop.key)?)
        } else {
            match &prop.key {
                Expression::Identifier(id) => object_property::Key::Name(id.name.clone()),
                Expression::StringLiteral { value } => object_property::Key::Name(value.clone()),
                Expression::NumericLiteral { value } => object_property::Key::Index(index_key(*value)?),
                other => {
                    return Err(CompileError::unsupported(
                        "ObjectProperty",
                        format!("unsupported key {}", other.kind()),
                    ));
                }
            }
        };
        Ok(make(ir::ObjectProperty {
            key: Some(key),
            value: Some(self.expression(&prop.value)?),
        })?)
    }

    fn object_method(&mut self, method: &ObjectMethod) -> Result<ir::ObjectMethod, CompileError> {
        Ok(make(ir::ObjectMethod {
            name: method_name(method)?,
            r#type: function_type(method.generator, method.is_async),
            parameters: self.parameters(&method.params)?,
            body: self.statements(&method.body.body)?,
        })?)
    }

    fn object_getter(&mut self, method: &ObjectMethod) -> Result<ir::ObjectGetter, CompileError> {
        let name = method_name(method)?;
        plain_accessor(method, "getter")?;
        if !method.params.is_empty() {
            return Err(CompileError::unsupported(
                "ObjectMethod",
                "getter must not take parameters",
            ));
        }
        Ok(make(ir::ObjectGetter {
            name,
            body: self.statements(&method.body.body)?,
        })?)
    }

    fn object_setter(&mut self, method: &ObjectMethod) -> Result<ir::ObjectSetter, CompileError> {
        let name = method_name(method)?;
        plain_accessor(method, "setter")?;
        let [param] = method.params.as_slice() else {
            return Err(CompileError::unsupported(
                "ObjectMethod",
                format!(
                    "setter must take exactly one parameter, found {}",
                    method.params.len()
                ),
            ));
        };
        Ok(make(ir::ObjectSetter {
            name,
            parameter: Some(self.parameter(param)?),
            body: self.statements(&method.body.body)?,
        })?)
    }
}

/// Integral numeric object key (`{ 0: a }`).
fn index_key(value: f64) -> Result<i64, CompileError> {
    if value.fract() != 0.0 || !(i64::MIN as f64..=i64::MAX as f64).contains(&value) {
        return Err(CompileError::unsupported(
            "ObjectProperty",
            format!("numeric key {} is not an integer", value),
        ));
    }
    Ok(value as i64)
}

fn method_name(method: &ObjectMethod) -> Result<String, CompileError> {
    if method.computed || method.shorthand {
        return Err(CompileError::unsupported(
            "ObjectMethod",
            "computed and shorthand method names are not supported",
        ));
    }
    match &method.key {
        Expression::Identifier(id) => Ok(id.name.clone()),
        Expression::StringLiteral { value } => Ok(value.clone()),
        other => Err(CompileError::unsupported(
            "ObjectMethod",
            format!("unsupported method name {}", other.kind()),
        )),
    }
}

/// Accessors are never async or generators.
fn plain_accessor(method: &ObjectMethod, what: &str) -> Result<(), CompileError> {
    if method.generator || method.is_async {
        return Err(CompileError::unsupported(
            "ObjectMethod",
            format!("{} must be synchronous and not a generator", what),
        ));
    }
    Ok(())
}
