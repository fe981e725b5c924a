//! Operator definitions for source expressions.

use serde::{Deserialize, Serialize};

/// Binary operators that can appear in a host expression tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    // Comparison
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,

    // Logical (short-circuit)
    And,
    Or,

    // `??`
    Coalesce,

    // Bitwise
    ExclusiveOr,
}

impl BinaryOperator {
    /// Get the display string for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::Coalesce => "??",
            BinaryOperator::ExclusiveOr => "^",
        }
    }

    /// Node kind name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "Add",
            BinaryOperator::Subtract => "Subtract",
            BinaryOperator::Multiply => "Multiply",
            BinaryOperator::Divide => "Divide",
            BinaryOperator::Modulo => "Modulo",
            BinaryOperator::Equal => "Equal",
            BinaryOperator::NotEqual => "NotEqual",
            BinaryOperator::LessThan => "LessThan",
            BinaryOperator::LessThanOrEqual => "LessThanOrEqual",
            BinaryOperator::GreaterThan => "GreaterThan",
            BinaryOperator::GreaterThanOrEqual => "GreaterThanOrEqual",
            BinaryOperator::And => "AndAlso",
            BinaryOperator::Or => "OrElse",
            BinaryOperator::Coalesce => "Coalesce",
            BinaryOperator::ExclusiveOr => "ExclusiveOr",
        }
    }
}

/// Unary operators that can appear in a host expression tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Not,
    Convert,
    ConvertChecked,
    Negate,
    TypeAs,
}

impl UnaryOperator {
    /// Whether this operator is a type conversion transparent to boolean
    /// normalization
    pub fn is_conversion(&self) -> bool {
        matches!(self, UnaryOperator::Convert | UnaryOperator::ConvertChecked)
    }

    /// Node kind name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            UnaryOperator::Not => "Not",
            UnaryOperator::Convert => "Convert",
            UnaryOperator::ConvertChecked => "ConvertChecked",
            UnaryOperator::Negate => "Negate",
            UnaryOperator::TypeAs => "TypeAs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_display() {
        assert_eq!(BinaryOperator::Add.as_str(), "+");
        assert_eq!(BinaryOperator::Equal.as_str(), "==");
        assert_eq!(BinaryOperator::NotEqual.as_str(), "!=");
        assert_eq!(BinaryOperator::And.as_str(), "&&");
        assert_eq!(BinaryOperator::Coalesce.as_str(), "??");

        assert_eq!(BinaryOperator::And.name(), "AndAlso");
        assert_eq!(UnaryOperator::TypeAs.name(), "TypeAs");
    }

    #[test]
    fn test_conversions() {
        assert!(UnaryOperator::Convert.is_conversion());
        assert!(UnaryOperator::ConvertChecked.is_conversion());
        assert!(!UnaryOperator::Not.is_conversion());
        assert!(!UnaryOperator::TypeAs.is_conversion());
    }
}
