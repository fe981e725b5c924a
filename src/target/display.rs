//! SQL-flavoured rendering of target expressions.
//!
//! This is a diagnostic view of the tree; dialect-specific SQL generation
//! lives downstream.

use crate::target::DbExpression;
use crate::value::Value;
use std::fmt;

fn write_constant(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => write!(f, "NULL"),
        Value::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        Value::Int32(v) => write!(f, "{}", v),
        Value::Int64(v) => write!(f, "{}", v),
        Value::Float64(v) => write!(f, "{}", v),
        Value::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
    }
}

impl fmt::Display for DbExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbExpression::Arithmetic {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op.as_str(), right),

            DbExpression::Comparison { op, left, right } => match self.null_test_subject() {
                Some(subject) => write!(f, "({} IS NULL)", subject),
                None => write!(f, "({} {} {})", left, op.as_str(), right),
            },

            DbExpression::Logical { op, left, right } => {
                write!(f, "({} {} {})", left, op.as_str(), right)
            }

            DbExpression::Not(operand) => write!(f, "NOT {}", operand),

            DbExpression::CaseWhen {
                when_then,
                else_value,
                ..
            } => {
                write!(f, "CASE")?;
                for pair in when_then {
                    write!(f, " WHEN {} THEN {}", pair.when, pair.then)?;
                }
                write!(f, " ELSE {} END", else_value)
            }

            DbExpression::Constant { value, .. } => write_constant(f, value),

            DbExpression::MemberAccess { member, receiver } => match receiver {
                Some(receiver) => write!(f, "{}.{}", receiver, member.name),
                None => write!(f, "{}", member.name),
            },

            DbExpression::MethodCall {
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

            DbExpression::Convert { ty, operand } => write!(f, "CAST({} AS {})", operand, ty),

            DbExpression::Parameter(param) => write!(f, "{}", param.name),
        }
    }
}
