//! Target expression AST definitions.

use crate::source::{MemberRef, MethodRef, ParameterRef};
use crate::target::operator::{ArithmeticOperator, ComparisonOperator, LogicalOperator};
use crate::value::{ExprType, Value};
use serde::{Deserialize, Serialize};

/// One `WHEN condition THEN value` arm of a CASE expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenThenPair {
    pub when: DbExpression,
    pub then: DbExpression,
}

impl WhenThenPair {
    pub fn new(when: DbExpression, then: DbExpression) -> Self {
        Self { when, then }
    }
}

/// SQL-semantics expression tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DbExpression {
    /// `left op right`, carrying the host result type. `method` is only set
    /// for `Add` backed by a user-defined operator (string concatenation and
    /// the like).
    Arithmetic {
        op: ArithmeticOperator,
        left: Box<DbExpression>,
        right: Box<DbExpression>,
        ty: ExprType,
        method: Option<MethodRef>,
    },

    /// `left op right` as a predicate
    Comparison {
        op: ComparisonOperator,
        left: Box<DbExpression>,
        right: Box<DbExpression>,
    },

    /// `left AND right` / `left OR right`
    Logical {
        op: LogicalOperator,
        left: Box<DbExpression>,
        right: Box<DbExpression>,
    },

    /// `NOT operand`
    Not(Box<DbExpression>),

    /// `CASE WHEN .. THEN .. [WHEN ..] ELSE .. END`; arms are tried in order
    CaseWhen {
        when_then: Vec<WhenThenPair>,
        else_value: Box<DbExpression>,
        ty: ExprType,
    },

    /// Literal, including typed `NULL`
    Constant { value: Value, ty: ExprType },

    /// Column (or static member) reference
    MemberAccess {
        member: MemberRef,
        receiver: Option<Box<DbExpression>>,
    },

    /// Method call left for the generator to map onto a SQL function
    MethodCall {
        object: Option<Box<DbExpression>>,
        method: MethodRef,
        arguments: Vec<DbExpression>,
    },

    /// Cast to `ty`
    Convert {
        ty: ExprType,
        operand: Box<DbExpression>,
    },

    /// Lambda parameter, bound by the generator to a table alias
    Parameter(ParameterRef),
}

impl DbExpression {
    fn arithmetic(
        op: ArithmeticOperator,
        left: DbExpression,
        right: DbExpression,
        ty: ExprType,
        method: Option<MethodRef>,
    ) -> Self {
        DbExpression::Arithmetic {
            op,
            left: Box::new(left),
            right: Box::new(right),
            ty,
            method,
        }
    }

    pub fn add(ty: ExprType, left: DbExpression, right: DbExpression, method: Option<MethodRef>) -> Self {
        Self::arithmetic(ArithmeticOperator::Add, left, right, ty, method)
    }

    pub fn subtract(left: DbExpression, right: DbExpression, ty: ExprType) -> Self {
        Self::arithmetic(ArithmeticOperator::Subtract, left, right, ty, None)
    }

    pub fn multiply(left: DbExpression, right: DbExpression, ty: ExprType) -> Self {
        Self::arithmetic(ArithmeticOperator::Multiply, left, right, ty, None)
    }

    pub fn divide(ty: ExprType, left: DbExpression, right: DbExpression) -> Self {
        Self::arithmetic(ArithmeticOperator::Divide, left, right, ty, None)
    }

    pub fn comparison(op: ComparisonOperator, left: DbExpression, right: DbExpression) -> Self {
        DbExpression::Comparison {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn equal(left: DbExpression, right: DbExpression) -> Self {
        Self::comparison(ComparisonOperator::Equal, left, right)
    }

    pub fn less_than(left: DbExpression, right: DbExpression) -> Self {
        Self::comparison(ComparisonOperator::LessThan, left, right)
    }

    pub fn less_than_or_equal(left: DbExpression, right: DbExpression) -> Self {
        Self::comparison(ComparisonOperator::LessThanOrEqual, left, right)
    }

    pub fn greater_than(left: DbExpression, right: DbExpression) -> Self {
        Self::comparison(ComparisonOperator::GreaterThan, left, right)
    }

    pub fn greater_than_or_equal(left: DbExpression, right: DbExpression) -> Self {
        Self::comparison(ComparisonOperator::GreaterThanOrEqual, left, right)
    }

    pub fn and(left: DbExpression, right: DbExpression) -> Self {
        DbExpression::Logical {
            op: LogicalOperator::And,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: DbExpression, right: DbExpression) -> Self {
        DbExpression::Logical {
            op: LogicalOperator::Or,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn not(operand: DbExpression) -> Self {
        DbExpression::Not(Box::new(operand))
    }

    pub fn case_when(when_then: Vec<WhenThenPair>, else_value: DbExpression, ty: ExprType) -> Self {
        DbExpression::CaseWhen {
            when_then,
            else_value: Box::new(else_value),
            ty,
        }
    }

    pub fn constant(value: Value, ty: ExprType) -> Self {
        DbExpression::Constant { value, ty }
    }

    /// Boolean literal
    pub fn bool_constant(value: bool) -> Self {
        Self::constant(Value::Boolean(value), ExprType::Boolean)
    }

    /// Typed `NULL`
    pub fn null(ty: ExprType) -> Self {
        Self::constant(Value::Null, ty)
    }

    pub fn member_access(member: MemberRef, receiver: Option<DbExpression>) -> Self {
        DbExpression::MemberAccess {
            member,
            receiver: receiver.map(Box::new),
        }
    }

    pub fn method_call(object: Option<DbExpression>, method: MethodRef, arguments: Vec<DbExpression>) -> Self {
        DbExpression::MethodCall {
            object: object.map(Box::new),
            method,
            arguments,
        }
    }

    pub fn convert(ty: ExprType, operand: DbExpression) -> Self {
        DbExpression::Convert {
            ty,
            operand: Box::new(operand),
        }
    }

    pub fn parameter(param: ParameterRef) -> Self {
        DbExpression::Parameter(param)
    }

    /// The fixed always-false predicate, `1 = 0`
    pub fn always_false() -> Self {
        Self::equal(
            Self::constant(Value::Int32(1), ExprType::Int32),
            Self::constant(Value::Int32(0), ExprType::Int32),
        )
    }

    /// The fixed always-true predicate, `NOT (1 = 0)`
    pub fn always_true() -> Self {
        Self::not(Self::always_false())
    }

    pub fn is_always_false(&self) -> bool {
        *self == Self::always_false()
    }

    pub fn is_always_true(&self) -> bool {
        *self == Self::always_true()
    }

    /// Whether this node is an `x = NULL` or `NULL = x` test, i.e. `x IS NULL`
    /// in SQL
    pub fn is_null_test(&self) -> bool {
        self.null_test_subject().is_some()
    }

    /// The operand tested against NULL when this node is a null test.
    pub fn null_test_subject(&self) -> Option<&DbExpression> {
        match self {
            DbExpression::Comparison {
                op: ComparisonOperator::Equal,
                left,
                right,
            } => {
                if right.is_null_constant() {
                    Some(left)
                } else if left.is_null_constant() {
                    Some(right)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn is_null_constant(&self) -> bool {
        matches!(self, DbExpression::Constant { value, .. } if value.is_null())
    }
}
