//! Error types for translation.

use crate::source::Expression;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// The node kind or operator has no counterpart in the target tree
    #[error("Unsupported expression `{kind}`: {expression}")]
    Unsupported { kind: String, expression: String },

    /// The expression is well-typed but cannot be given SQL semantics
    #[error("Invalid expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: String },
}

impl TranslateError {
    pub fn unsupported(expr: &Expression) -> Self {
        TranslateError::Unsupported {
            kind: expr.kind_name().to_string(),
            expression: expr.to_string(),
        }
    }

    pub fn invalid(expr: &Expression, reason: impl Into<String>) -> Self {
        TranslateError::InvalidExpression {
            expression: expr.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for translation
pub type TranslateResult<T> = Result<T, TranslateError>;
