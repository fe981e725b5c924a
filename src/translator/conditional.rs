//! Conditional (`?:`) and null-coalescing (`??`) translation.

use crate::classify::TypeClassifier;
use crate::source::{builder, Expression};
use crate::target::{DbExpression, WhenThenPair};
use crate::translator::{TranslateResult, Translator};
use crate::value::ExprType;

impl<C: TypeClassifier> Translator<C> {
    /// `test ? if_true : if_false` as
    /// `CASE WHEN test THEN if_true WHEN NOT test THEN if_false ELSE NULL END`.
    ///
    /// An unknown test falls through both arms and yields NULL rather than
    /// `if_false`.
    pub(super) fn visit_conditional(
        &self,
        test: &Expression,
        if_true: &Expression,
        if_false: &Expression,
        ty: &ExprType,
    ) -> TranslateResult<DbExpression> {
        let nullable = self.is_nullable_boolean(test);

        let when_true = self.visit(&builder::equal_literal(test, true, nullable))?;
        let then_true = self.visit(if_true)?;
        let when_false = self.visit(&builder::equal_literal(test, false, nullable))?;
        let then_false = self.visit(if_false)?;

        Ok(DbExpression::case_when(
            vec![
                WhenThenPair::new(when_true, then_true),
                WhenThenPair::new(when_false, then_false),
            ],
            DbExpression::null(ty.clone()),
            ty.clone(),
        ))
    }

    /// `left ?? right` as `CASE WHEN left IS NULL THEN right ELSE left END`.
    /// `left` is visited once and its translation used in both places.
    pub(super) fn visit_coalesce(
        &self,
        left: &Expression,
        right: &Expression,
        ty: &ExprType,
    ) -> TranslateResult<DbExpression> {
        let then = self.visit(right)?;
        let subject = self.visit(left)?;

        Ok(DbExpression::case_when(
            vec![WhenThenPair::new(
                DbExpression::equal(subject.clone(), DbExpression::null(ty.clone())),
                then,
            )],
            subject,
            ty.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{Expression, MemberRef};
    use crate::target::{DbExpression, WhenThenPair};
    use crate::translator::Translator;
    use crate::value::{ExprType, Value};

    fn member(name: &str, ty: ExprType) -> Expression {
        Expression::static_member(MemberRef::new(name, ty))
    }

    fn db_member(name: &str, ty: ExprType) -> DbExpression {
        DbExpression::member_access(MemberRef::new(name, ty), None)
    }

    fn db_int(v: i32) -> DbExpression {
        DbExpression::constant(Value::Int32(v), ExprType::Int32)
    }

    #[test]
    fn test_conditional_on_boolean_member() {
        let expr = Expression::conditional(
            member("Flag", ExprType::Boolean),
            Expression::int32(1),
            Expression::int32(2),
            ExprType::Int32,
        );
        assert_eq!(
            Translator::new().translate(&expr).unwrap(),
            DbExpression::case_when(
                vec![
                    WhenThenPair::new(
                        DbExpression::equal(db_member("Flag", ExprType::Boolean), DbExpression::bool_constant(true)),
                        db_int(1),
                    ),
                    WhenThenPair::new(
                        DbExpression::equal(db_member("Flag", ExprType::Boolean), DbExpression::bool_constant(false)),
                        db_int(2),
                    ),
                ],
                DbExpression::null(ExprType::Int32),
                ExprType::Int32,
            )
        );
    }

    #[test]
    fn test_conditional_on_comparison() {
        let test = Expression::gt(member("Age", ExprType::Int32), Expression::int32(1));
        let expr = Expression::conditional(
            test,
            member("Name", ExprType::String),
            Expression::string("minor"),
            ExprType::String,
        );
        let gt = DbExpression::greater_than(db_member("Age", ExprType::Int32), db_int(1));
        match Translator::new().translate(&expr).unwrap() {
            DbExpression::CaseWhen {
                when_then,
                else_value,
                ty,
            } => {
                assert_eq!(when_then.len(), 2);
                assert_eq!(when_then[0].when, gt);
                assert_eq!(when_then[1].when, DbExpression::not(gt));
                assert_eq!(*else_value, DbExpression::null(ExprType::String));
                assert_eq!(ty, ExprType::String);
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_conditional_on_nullable_test() {
        let expr = Expression::conditional(
            member("Flag", ExprType::nullable_boolean()),
            Expression::int32(1),
            Expression::int32(0),
            ExprType::Int32,
        );
        let DbExpression::CaseWhen { when_then, .. } = Translator::new().translate(&expr).unwrap() else {
            panic!("expected CASE WHEN");
        };
        let flag = db_member("Flag", ExprType::nullable_boolean());
        assert_eq!(
            when_then[0].when,
            DbExpression::equal(flag.clone(), DbExpression::bool_constant(true))
        );
        assert_eq!(
            when_then[1].when,
            DbExpression::equal(flag, DbExpression::bool_constant(false))
        );
    }

    #[test]
    fn test_coalesce() {
        let nickname = member("Nickname", ExprType::String);
        let expr = Expression::coalesce(nickname, member("Name", ExprType::String), ExprType::String);
        let subject = db_member("Nickname", ExprType::String);
        assert_eq!(
            Translator::new().translate(&expr).unwrap(),
            DbExpression::case_when(
                vec![WhenThenPair::new(
                    DbExpression::equal(subject.clone(), DbExpression::null(ExprType::String)),
                    db_member("Name", ExprType::String),
                )],
                subject,
                ExprType::String,
            )
        );
    }
}
