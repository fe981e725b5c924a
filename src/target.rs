//! Target expression tree.
//!
//! The tree the translator produces and a downstream SQL generator consumes.
//! Its node kinds follow SQL semantics: comparisons and CASE WHEN are
//! predicates, AND/OR only ever combine predicates.

pub mod display;
pub mod expr;
pub mod operator;

pub use expr::{DbExpression, WhenThenPair};
pub use operator::{ArithmeticOperator, ComparisonOperator, LogicalOperator};
