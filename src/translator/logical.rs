//! `&&` / `||` translation.
//!
//! SQL connectives only accept predicates. Every operand is forced into
//! `operand == true` form and re-visited, which turns bare boolean columns
//! into comparisons and leaves genuine predicates alone. A literal operand
//! short-circuits instead.

use crate::classify::TypeClassifier;
use crate::source::{builder, Expression};
use crate::target::DbExpression;
use crate::translator::{TranslateResult, Translator};
use log::trace;

impl<C: TypeClassifier> Translator<C> {
    pub(super) fn visit_and_also(&self, left: &Expression, right: &Expression) -> TranslateResult<DbExpression> {
        if let Some(value) = right.bool_literal() {
            return self.short_circuit_and(left, value);
        }
        if let Some(value) = left.bool_literal() {
            return self.short_circuit_and(right, value);
        }

        Ok(DbExpression::and(
            self.visit_forced_predicate(left)?,
            self.visit_forced_predicate(right)?,
        ))
    }

    pub(super) fn visit_or_else(&self, left: &Expression, right: &Expression) -> TranslateResult<DbExpression> {
        if let Some(value) = right.bool_literal() {
            return self.short_circuit_or(left, value);
        }
        if let Some(value) = left.bool_literal() {
            return self.short_circuit_or(right, value);
        }

        Ok(DbExpression::or(
            self.visit_forced_predicate(left)?,
            self.visit_forced_predicate(right)?,
        ))
    }

    /// `other && literal`
    fn short_circuit_and(&self, other: &Expression, literal: bool) -> TranslateResult<DbExpression> {
        trace!("short-circuit {} && {}", other, literal);
        if literal {
            Ok(DbExpression::equal(self.visit(other)?, DbExpression::bool_constant(true)))
        } else {
            Ok(DbExpression::always_false())
        }
    }

    /// `other || literal`
    fn short_circuit_or(&self, other: &Expression, literal: bool) -> TranslateResult<DbExpression> {
        trace!("short-circuit {} || {}", other, literal);
        if literal {
            Ok(DbExpression::always_true())
        } else {
            Ok(DbExpression::equal(self.visit(other)?, DbExpression::bool_constant(true)))
        }
    }

    /// Visit `expr == true`
    fn visit_forced_predicate(&self, expr: &Expression) -> TranslateResult<DbExpression> {
        let forced = builder::equal_literal(expr, true, self.is_nullable_boolean(expr));
        self.visit(&forced)
    }
}
