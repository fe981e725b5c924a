//! Builders for the source fragments the translator rewrites into and
//! re-visits.
//!
//! The fragments are ordinary `Expression` values; they are built from
//! clones of the original sub-trees and carry no link back to where those
//! sub-trees came from.

use crate::source::Expression;
use crate::value::ExprType;

/// `true`
pub fn constant_true() -> Expression {
    Expression::boolean(true)
}

/// `false`
pub fn constant_false() -> Expression {
    Expression::boolean(false)
}

/// `(bool?)true`
pub fn nullable_true() -> Expression {
    Expression::convert(constant_true(), ExprType::nullable_boolean())
}

/// `(bool?)false`
pub fn nullable_false() -> Expression {
    Expression::convert(constant_false(), ExprType::nullable_boolean())
}

/// Boolean literal, lifted to `bool?` when `nullable` is set
pub fn literal(value: bool, nullable: bool) -> Expression {
    match (value, nullable) {
        (true, false) => constant_true(),
        (false, false) => constant_false(),
        (true, true) => nullable_true(),
        (false, true) => nullable_false(),
    }
}

/// `left == right`
pub fn equal(left: Expression, right: Expression) -> Expression {
    Expression::eq(left, right)
}

/// `expr == value`, with the literal lifted to match a nullable `expr`
pub fn equal_literal(expr: &Expression, value: bool, nullable: bool) -> Expression {
    equal(expr.clone(), literal(value, nullable))
}

/// `left && right`
pub fn and_also(left: Expression, right: Expression) -> Expression {
    Expression::and_also(left, right)
}

/// `left || right`
pub fn or_else(left: Expression, right: Expression) -> Expression {
    Expression::or_else(left, right)
}

/// `(left == true && right == true) || (left == false && right == false)`
pub fn both_true_or_both_false(left: &Expression, right: &Expression, nullable: bool) -> Expression {
    let both_true = and_also(
        equal_literal(left, true, nullable),
        equal_literal(right, true, nullable),
    );
    let both_false = and_also(
        equal_literal(left, false, nullable),
        equal_literal(right, false, nullable),
    );
    or_else(both_true, both_false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{BinaryOperator, MemberRef};

    #[test]
    fn test_literals() {
        assert_eq!(literal(true, false).bool_literal(), Some(true));
        assert_eq!(literal(false, true).bool_literal(), Some(false));
        assert_eq!(literal(false, true).ty(), &ExprType::nullable_boolean());
        assert_eq!(literal(true, false).ty(), &ExprType::Boolean);
    }

    #[test]
    fn test_both_true_or_both_false_shape() {
        let p = Expression::static_member(MemberRef::new("P", ExprType::Boolean));
        let q = Expression::static_member(MemberRef::new("Q", ExprType::Boolean));

        let expr = both_true_or_both_false(&p, &q, false);
        let Expression::BinaryOp {
            op: BinaryOperator::Or,
            left,
            right,
            ..
        } = expr
        else {
            panic!("expected ||");
        };
        assert_eq!(
            *left,
            and_also(equal(p.clone(), constant_true()), equal(q.clone(), constant_true()))
        );
        assert_eq!(
            *right,
            and_also(equal(p, constant_false()), equal(q, constant_false()))
        );
    }
}
