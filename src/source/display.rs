//! Host-language rendering of source expressions, used in diagnostics.

use crate::source::{Expression, UnaryOperator};
use std::fmt;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Lambda { parameters, body } => {
                match parameters.as_slice() {
                    [single] => write!(f, "{}", single.name)?,
                    params => {
                        write!(f, "(")?;
                        for (i, param) in params.iter().enumerate() {
                            if i > 0 {
                                write!(f, ", ")?;
                            }
                            write!(f, "{}", param.name)?;
                        }
                        write!(f, ")")?;
                    }
                }
                write!(f, " => {}", body)
            }

            Expression::Parameter(param) => write!(f, "{}", param.name),

            Expression::BinaryOp {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op.as_str(), right),

            Expression::UnaryOp { op, operand, ty } => match op {
                UnaryOperator::Not => write!(f, "!{}", operand),
                UnaryOperator::Negate => write!(f, "-{}", operand),
                UnaryOperator::TypeAs => write!(f, "({} as {})", operand, ty),
                UnaryOperator::Convert | UnaryOperator::ConvertChecked => {
                    write!(f, "{}({}, {})", op.name(), operand, ty)
                }
            },

            Expression::MemberAccess { member, expression } => match (expression, &member.declaring_type) {
                (Some(receiver), _) => write!(f, "{}.{}", receiver, member.name),
                (None, Some(declaring_type)) => write!(f, "{}.{}", declaring_type, member.name),
                (None, None) => write!(f, "{}", member.name),
            },

            Expression::Constant { value, .. } => write!(f, "{}", value),

            Expression::MethodCall {
                object,
                method,
                arguments,
            } => {
                match object {
                    Some(object) => write!(f, "{}.{}(", object, method.name)?,
                    None => write!(f, "{}.{}(", method.declaring_type, method.name)?,
                }
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }

            Expression::Conditional {
                test,
                if_true,
                if_false,
                ..
            } => write!(f, "({} ? {} : {})", test, if_true, if_false),
        }
    }
}
