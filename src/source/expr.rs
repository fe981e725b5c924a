//! Source expression AST definitions.

use crate::source::operator::{BinaryOperator, UnaryOperator};
use crate::value::{ExprType, Value};
use serde::{Deserialize, Serialize};

/// Reference to a field or property of an entity (or a static member)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberRef {
    /// Member name as declared on the host type
    pub name: String,
    /// Declaring type, if known
    pub declaring_type: Option<String>,
    /// Static type of the member
    pub ty: ExprType,
}

impl MemberRef {
    pub fn new(name: impl Into<String>, ty: ExprType) -> Self {
        Self {
            name: name.into(),
            declaring_type: None,
            ty,
        }
    }

    pub fn declared_on(name: impl Into<String>, declaring_type: impl Into<String>, ty: ExprType) -> Self {
        Self {
            name: name.into(),
            declaring_type: Some(declaring_type.into()),
            ty,
        }
    }
}

/// Reference to a host method, either called directly or backing an
/// overloaded operator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodRef {
    pub declaring_type: String,
    pub name: String,
    pub return_type: ExprType,
}

impl MethodRef {
    pub fn new(
        declaring_type: impl Into<String>,
        name: impl Into<String>,
        return_type: ExprType,
    ) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            name: name.into(),
            return_type,
        }
    }
}

/// Lambda parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterRef {
    pub name: String,
    pub ty: ExprType,
}

impl ParameterRef {
    pub fn new(name: impl Into<String>, ty: ExprType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Host-language expression tree node.
///
/// Trees are immutable values; the translator only ever reads them and
/// builds fresh fragments by cloning sub-trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// `(params) => body`
    Lambda {
        parameters: Vec<ParameterRef>,
        body: Box<Expression>,
    },

    /// Reference to a lambda parameter
    Parameter(ParameterRef),

    /// Binary operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        ty: ExprType,
        /// User-defined operator implementation, if any
        method: Option<MethodRef>,
    },

    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
        ty: ExprType,
    },

    /// Field or property access; `expression` is `None` for static members
    MemberAccess {
        member: MemberRef,
        expression: Option<Box<Expression>>,
    },

    /// Literal constant
    Constant { value: Value, ty: ExprType },

    /// Method call; `object` is `None` for static methods
    MethodCall {
        object: Option<Box<Expression>>,
        method: MethodRef,
        arguments: Vec<Expression>,
    },

    /// `test ? if_true : if_false`
    Conditional {
        test: Box<Expression>,
        if_true: Box<Expression>,
        if_false: Box<Expression>,
        ty: ExprType,
    },
}

impl Expression {
    /// Create a lambda expression
    pub fn lambda(parameters: Vec<ParameterRef>, body: Expression) -> Self {
        Expression::Lambda {
            parameters,
            body: Box::new(body),
        }
    }

    /// Create a parameter reference
    pub fn parameter(name: impl Into<String>, ty: ExprType) -> Self {
        Expression::Parameter(ParameterRef::new(name, ty))
    }

    /// Create a constant expression
    pub fn constant(value: Value, ty: ExprType) -> Self {
        Expression::Constant { value, ty }
    }

    /// Create a `bool` literal
    pub fn boolean(value: bool) -> Self {
        Self::constant(Value::Boolean(value), ExprType::Boolean)
    }

    /// Create an `int` literal
    pub fn int32(value: i32) -> Self {
        Self::constant(Value::Int32(value), ExprType::Int32)
    }

    /// Create a string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::constant(Value::String(value.into()), ExprType::String)
    }

    /// Create a typed `null` literal
    pub fn null(ty: ExprType) -> Self {
        Self::constant(Value::Null, ty)
    }

    /// Create a member access on `receiver`
    pub fn member(receiver: Expression, member: MemberRef) -> Self {
        Expression::MemberAccess {
            member,
            expression: Some(Box::new(receiver)),
        }
    }

    /// Create a static member access
    pub fn static_member(member: MemberRef) -> Self {
        Expression::MemberAccess {
            member,
            expression: None,
        }
    }

    /// Create a binary operation expression
    pub fn binary_op(op: BinaryOperator, left: Expression, right: Expression, ty: ExprType) -> Self {
        Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            ty,
            method: None,
        }
    }

    /// Create a binary operation backed by a user-defined operator
    pub fn binary_op_with_method(
        op: BinaryOperator,
        left: Expression,
        right: Expression,
        ty: ExprType,
        method: MethodRef,
    ) -> Self {
        Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            ty,
            method: Some(method),
        }
    }

    /// Create a unary operation expression
    pub fn unary_op(op: UnaryOperator, operand: Expression, ty: ExprType) -> Self {
        Expression::UnaryOp {
            op,
            operand: Box::new(operand),
            ty,
        }
    }

    /// Create an equality expression
    pub fn eq(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Equal, left, right, ExprType::Boolean)
    }

    /// Create a not-equal expression
    pub fn ne(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::NotEqual, left, right, ExprType::Boolean)
    }

    /// Create a less-than expression
    pub fn lt(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::LessThan, left, right, ExprType::Boolean)
    }

    /// Create a less-than-or-equal expression
    pub fn le(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::LessThanOrEqual, left, right, ExprType::Boolean)
    }

    /// Create a greater-than expression
    pub fn gt(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::GreaterThan, left, right, ExprType::Boolean)
    }

    /// Create a greater-than-or-equal expression
    pub fn ge(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::GreaterThanOrEqual, left, right, ExprType::Boolean)
    }

    /// Create an `&&` expression
    pub fn and_also(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::And, left, right, ExprType::Boolean)
    }

    /// Create an `||` expression
    pub fn or_else(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Or, left, right, ExprType::Boolean)
    }

    /// Create a `??` expression
    pub fn coalesce(left: Expression, right: Expression, ty: ExprType) -> Self {
        Self::binary_op(BinaryOperator::Coalesce, left, right, ty)
    }

    /// Create a logical negation; keeps the operand's type (`!b` on `bool?`
    /// is `bool?`)
    pub fn not_expr(operand: Expression) -> Self {
        let ty = operand.ty().clone();
        Self::unary_op(UnaryOperator::Not, operand, ty)
    }

    /// Create a conversion to `ty`
    pub fn convert(operand: Expression, ty: ExprType) -> Self {
        Self::unary_op(UnaryOperator::Convert, operand, ty)
    }

    /// Create a conditional expression
    pub fn conditional(test: Expression, if_true: Expression, if_false: Expression, ty: ExprType) -> Self {
        Expression::Conditional {
            test: Box::new(test),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
            ty,
        }
    }

    /// Create a method call
    pub fn call(object: Option<Expression>, method: MethodRef, arguments: Vec<Expression>) -> Self {
        Expression::MethodCall {
            object: object.map(Box::new),
            method,
            arguments,
        }
    }

    /// Static type of this node
    pub fn ty(&self) -> &ExprType {
        match self {
            Expression::Lambda { body, .. } => body.ty(),
            Expression::Parameter(param) => &param.ty,
            Expression::BinaryOp { ty, .. } => ty,
            Expression::UnaryOp { ty, .. } => ty,
            Expression::MemberAccess { member, .. } => &member.ty,
            Expression::Constant { ty, .. } => ty,
            Expression::MethodCall { method, .. } => &method.return_type,
            Expression::Conditional { ty, .. } => ty,
        }
    }

    /// Node kind name, as used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Lambda { .. } => "Lambda",
            Expression::Parameter(_) => "Parameter",
            Expression::BinaryOp { op, .. } => op.name(),
            Expression::UnaryOp { op, .. } => op.name(),
            Expression::MemberAccess { .. } => "MemberAccess",
            Expression::Constant { .. } => "Constant",
            Expression::MethodCall { .. } => "Call",
            Expression::Conditional { .. } => "Conditional",
        }
    }

    /// Peel off any chain of `Convert`/`ConvertChecked` nodes
    pub fn strip_convert(&self) -> &Expression {
        let mut current = self;
        while let Expression::UnaryOp { op, operand, .. } = current {
            if !op.is_conversion() {
                break;
            }
            current = operand.as_ref();
        }
        current
    }

    fn is_member_access(&self) -> bool {
        matches!(self, Expression::MemberAccess { .. })
    }

    /// Whether this node is a member access once conversions are stripped
    pub fn strips_to_member_access(&self) -> bool {
        self.strip_convert().is_member_access()
    }

    /// The literal value if this node is a boolean constant, possibly wrapped
    /// in conversions (`Convert(true, bool?)`)
    pub fn bool_literal(&self) -> Option<bool> {
        match self.strip_convert() {
            Expression::Constant { value, .. } => value.as_bool(),
            _ => None,
        }
    }

    /// Whether this node is a `null` constant, possibly wrapped in conversions
    pub fn is_null_literal(&self) -> bool {
        matches!(self.strip_convert(), Expression::Constant { value, .. } if value.is_null())
    }
}
