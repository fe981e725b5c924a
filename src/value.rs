//! Static types and literal values shared by the source and target trees.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Static host-language type of an expression node.
///
/// The translator never infers these; it trusts whatever the caller attached
/// to each node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExprType {
    Boolean,
    Int32,
    Int64,
    Float64,
    Decimal,
    String,
    DateTime,
    /// `T?` over a value type
    Nullable(Box<ExprType>),
    /// Any other named type (entities, enums, user types)
    Object(String),
}

impl ExprType {
    /// `bool?`
    pub fn nullable_boolean() -> Self {
        ExprType::Nullable(Box::new(ExprType::Boolean))
    }

    /// Wrap in `Nullable` unless already nullable
    pub fn nullable(self) -> Self {
        if self.is_nullable() {
            self
        } else {
            ExprType::Nullable(Box::new(self))
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, ExprType::Nullable(_))
    }
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprType::Boolean => write!(f, "Boolean"),
            ExprType::Int32 => write!(f, "Int32"),
            ExprType::Int64 => write!(f, "Int64"),
            ExprType::Float64 => write!(f, "Double"),
            ExprType::Decimal => write!(f, "Decimal"),
            ExprType::String => write!(f, "String"),
            ExprType::DateTime => write!(f, "DateTime"),
            ExprType::Nullable(inner) => write!(f, "{}?", inner),
            ExprType::Object(name) => write!(f, "{}", name),
        }
    }
}

/// Literal payload of a constant node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    String(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "\"{}\"", s),
        }
    }
}
