//! Translation of host-language predicate and projection trees into
//! SQL-semantics trees.
//!
//! The host language has two-valued booleans; SQL has three-valued logic
//! where any comparison against NULL is unknown. The translator rewrites
//! equality on booleans, logical connectives and conditionals so that the
//! SQL evaluation of the output selects the same rows the host evaluation
//! of the input would.

mod conditional;
mod equality;
pub mod error;
mod logical;
pub mod visitor;

pub use error::{TranslateError, TranslateResult};
pub use visitor::Translator;

use crate::source::Expression;
use crate::target::DbExpression;

/// Translate a lambda (or any sub-tree) with the default type classifier
pub fn translate(expr: &Expression) -> TranslateResult<DbExpression> {
    Translator::new().translate(expr)
}
