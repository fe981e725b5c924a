//! Equality translation for boolean and nullable-boolean operands.
//!
//! Host equality on booleans cannot be passed through: SQL predicates are
//! not values that `=` accepts everywhere, a bare boolean column is not a
//! predicate until compared against a literal, and `NULL = NULL` is
//! unknown where the host says `true`.

use crate::classify::{TypeClass, TypeClassifier};
use crate::source::{builder, Expression, UnaryOperator};
use crate::target::DbExpression;
use crate::translator::{TranslateError, TranslateResult, Translator};
use log::trace;

impl<C: TypeClassifier> Translator<C> {
    /// `left == right`; `expr` is the equality node itself, used for error
    /// reporting. The static type of `left` picks the strategy.
    pub(super) fn visit_equal(
        &self,
        expr: &Expression,
        left: &Expression,
        right: &Expression,
    ) -> TranslateResult<DbExpression> {
        match self.classifier().classify(left.ty()) {
            TypeClass::Boolean => self.visit_equal_boolean(left, right),
            TypeClass::NullableBoolean => self.visit_equal_nullable_boolean(expr, left, right),
            TypeClass::Other => self.visit_equal_direct(left, right),
        }
    }

    fn visit_equal_direct(&self, left: &Expression, right: &Expression) -> TranslateResult<DbExpression> {
        Ok(DbExpression::equal(self.visit(left)?, self.visit(right)?))
    }

    fn visit_equal_boolean(&self, left: &Expression, right: &Expression) -> TranslateResult<DbExpression> {
        if let Some(value) = right.bool_literal() {
            return self.visit_equal_specific(left, value);
        }
        if let Some(value) = left.bool_literal() {
            return self.visit_equal_specific(right, value);
        }

        // Two plain columns compare directly
        if left.strips_to_member_access() && right.strips_to_member_access() {
            return self.visit_equal_direct(left, right);
        }

        self.visit_cross_equal(left, right, false)
    }

    fn visit_equal_nullable_boolean(
        &self,
        expr: &Expression,
        left: &Expression,
        right: &Expression,
    ) -> TranslateResult<DbExpression> {
        let left_is_member = left.strips_to_member_access();
        let right_is_member = right.strips_to_member_access();

        if left_is_member && right_is_member {
            return self.visit_equal_direct(left, right);
        }

        if left.is_null_literal() || right.is_null_literal() {
            if !left_is_member && !right_is_member {
                return Err(TranslateError::invalid(
                    expr,
                    "only a member access can be compared with null",
                ));
            }
            return self.visit_equal_direct(left, right);
        }

        // x == (bool?)true, x == (bool?)false
        if let Some(value) = right.bool_literal() {
            return self.visit_equal_specific(left, value);
        }
        if let Some(value) = left.bool_literal() {
            return self.visit_equal_specific(right, value);
        }

        self.visit_cross_equal(left, right, true)
    }

    /// `expr == value` with the comparison folded into `expr` itself.
    ///
    /// Only columns and constants are compared against the literal; any
    /// other expression already is a predicate, negated for `false`.
    fn visit_equal_specific(&self, expr: &Expression, value: bool) -> TranslateResult<DbExpression> {
        match expr {
            Expression::UnaryOp {
                op: UnaryOperator::Not,
                operand,
                ..
            } => Ok(DbExpression::not(self.visit_equal_specific(operand, value)?)),

            Expression::UnaryOp { op, operand, .. } if op.is_conversion() => {
                self.visit_equal_specific(operand, value)
            }

            Expression::MemberAccess { .. } | Expression::Constant { .. } | Expression::Parameter(_) => {
                Ok(DbExpression::equal(self.visit(expr)?, DbExpression::bool_constant(value)))
            }

            _ => {
                let predicate = self.visit(expr)?;
                if value {
                    Ok(predicate)
                } else {
                    Ok(DbExpression::not(predicate))
                }
            }
        }
    }

    /// `left == right` for composite operands, as
    /// `(left AND right) OR (NOT left AND NOT right)` in predicate form.
    ///
    /// On the nullable path, when a column is involved, both sides being NULL
    /// also counts as equal.
    fn visit_cross_equal(
        &self,
        left: &Expression,
        right: &Expression,
        nullable: bool,
    ) -> TranslateResult<DbExpression> {
        let rewritten = builder::both_true_or_both_false(left, right, nullable);
        trace!("cross equality {} == {} rewritten to {}", left, right, rewritten);
        let equal = self.visit(&rewritten)?;

        if !nullable || !(left.strips_to_member_access() || right.strips_to_member_access()) {
            return Ok(equal);
        }

        // Built directly: re-visiting `composite == null` is rejected
        let both_null = DbExpression::and(
            DbExpression::equal(self.visit(left)?, DbExpression::null(left.ty().clone())),
            DbExpression::equal(self.visit(right)?, DbExpression::null(right.ty().clone())),
        );
        Ok(DbExpression::or(equal, both_null))
    }
}
