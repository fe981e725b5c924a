//! Top-level dispatch over source node kinds.

use crate::classify::{StaticTypeClassifier, TypeClassifier};
use crate::source::{BinaryOperator, Expression, MemberRef, MethodRef, UnaryOperator};
use crate::target::DbExpression;
use crate::translator::{TranslateError, TranslateResult};
use crate::value::ExprType;
use log::debug;

/// Rewrites a source expression tree into a target expression tree.
///
/// The translator holds no state besides its type classifier, so one
/// instance can serve any number of translations, concurrently included.
#[derive(Debug, Clone, Default)]
pub struct Translator<C = StaticTypeClassifier> {
    classifier: C,
}

impl Translator<StaticTypeClassifier> {
    /// Create a translator using the structural type classifier
    pub fn new() -> Self {
        Self {
            classifier: StaticTypeClassifier,
        }
    }
}

impl<C: TypeClassifier> Translator<C> {
    /// Create a translator with a caller-supplied type classifier
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Translate a lambda-shaped tree. The parameter list is dropped and the
    /// body is translated; any other node is translated as is.
    pub fn translate(&self, expr: &Expression) -> TranslateResult<DbExpression> {
        debug!("translating {}", expr);
        let translated = self.visit(expr)?;
        debug!("translated to {}", translated);
        Ok(translated)
    }

    /// Dispatch on node kind. Every rewrite in this module tree re-enters
    /// here.
    pub(crate) fn visit(&self, expr: &Expression) -> TranslateResult<DbExpression> {
        match expr {
            Expression::Lambda { body, .. } => self.visit(body),

            Expression::Parameter(param) => Ok(DbExpression::parameter(param.clone())),

            Expression::BinaryOp {
                op,
                left,
                right,
                ty,
                method,
            } => self.visit_binary(expr, *op, left, right, ty, method.as_ref()),

            Expression::UnaryOp { op, operand, ty } => match op {
                UnaryOperator::Not => Ok(DbExpression::not(self.visit(operand)?)),
                UnaryOperator::Convert | UnaryOperator::ConvertChecked => {
                    Ok(DbExpression::convert(ty.clone(), self.visit(operand)?))
                }
                UnaryOperator::Negate | UnaryOperator::TypeAs => {
                    Err(TranslateError::unsupported(expr))
                }
            },

            Expression::MemberAccess { member, expression } => {
                self.visit_member_access(member, expression.as_deref())
            }

            Expression::Constant { value, ty } => {
                Ok(DbExpression::constant(value.clone(), ty.clone()))
            }

            Expression::MethodCall {
                object,
                method,
                arguments,
            } => self.visit_method_call(object.as_deref(), method, arguments),

            Expression::Conditional {
                test,
                if_true,
                if_false,
                ty,
            } => self.visit_conditional(test, if_true, if_false, ty),
        }
    }

    fn visit_binary(
        &self,
        expr: &Expression,
        op: BinaryOperator,
        left: &Expression,
        right: &Expression,
        ty: &ExprType,
        method: Option<&MethodRef>,
    ) -> TranslateResult<DbExpression> {
        match op {
            BinaryOperator::Add => Ok(DbExpression::add(
                ty.clone(),
                self.visit(left)?,
                self.visit(right)?,
                method.cloned(),
            )),
            BinaryOperator::Subtract => Ok(DbExpression::subtract(
                self.visit(left)?,
                self.visit(right)?,
                ty.clone(),
            )),
            BinaryOperator::Multiply => Ok(DbExpression::multiply(
                self.visit(left)?,
                self.visit(right)?,
                ty.clone(),
            )),
            BinaryOperator::Divide => Ok(DbExpression::divide(
                ty.clone(),
                self.visit(left)?,
                self.visit(right)?,
            )),

            BinaryOperator::LessThan => Ok(DbExpression::less_than(
                self.visit(left)?,
                self.visit(right)?,
            )),
            BinaryOperator::LessThanOrEqual => Ok(DbExpression::less_than_or_equal(
                self.visit(left)?,
                self.visit(right)?,
            )),
            BinaryOperator::GreaterThan => Ok(DbExpression::greater_than(
                self.visit(left)?,
                self.visit(right)?,
            )),
            BinaryOperator::GreaterThanOrEqual => Ok(DbExpression::greater_than_or_equal(
                self.visit(left)?,
                self.visit(right)?,
            )),

            BinaryOperator::Equal => self.visit_equal(expr, left, right),
            BinaryOperator::NotEqual => Ok(DbExpression::not(self.visit_equal(expr, left, right)?)),

            BinaryOperator::And => self.visit_and_also(left, right),
            BinaryOperator::Or => self.visit_or_else(left, right),

            BinaryOperator::Coalesce => self.visit_coalesce(left, right, ty),

            BinaryOperator::Modulo | BinaryOperator::ExclusiveOr => {
                Err(TranslateError::unsupported(expr))
            }
        }
    }

    fn visit_member_access(
        &self,
        member: &MemberRef,
        receiver: Option<&Expression>,
    ) -> TranslateResult<DbExpression> {
        let receiver = receiver.map(|r| self.visit(r)).transpose()?;
        Ok(DbExpression::member_access(member.clone(), receiver))
    }

    fn visit_method_call(
        &self,
        object: Option<&Expression>,
        method: &MethodRef,
        arguments: &[Expression],
    ) -> TranslateResult<DbExpression> {
        let object = object.map(|o| self.visit(o)).transpose()?;
        let arguments = arguments
            .iter()
            .map(|arg| self.visit(arg))
            .collect::<TranslateResult<Vec<_>>>()?;
        Ok(DbExpression::method_call(object, method.clone(), arguments))
    }

    pub(crate) fn is_nullable_boolean(&self, expr: &Expression) -> bool {
        self.classifier.is_nullable_boolean(expr.ty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ParameterRef;
    use crate::value::Value;

    fn user() -> Expression {
        Expression::parameter("u", ExprType::Object("User".into()))
    }

    fn age() -> Expression {
        Expression::member(user(), MemberRef::new("Age", ExprType::Int32))
    }

    fn name() -> Expression {
        Expression::member(user(), MemberRef::new("Name", ExprType::String))
    }

    fn db_user() -> DbExpression {
        DbExpression::parameter(ParameterRef::new("u", ExprType::Object("User".into())))
    }

    fn db_age() -> DbExpression {
        DbExpression::member_access(MemberRef::new("Age", ExprType::Int32), Some(db_user()))
    }

    fn db_int(v: i32) -> DbExpression {
        DbExpression::constant(Value::Int32(v), ExprType::Int32)
    }

    #[test]
    fn test_lambda_visits_body() {
        let lambda = Expression::lambda(
            vec![ParameterRef::new("u", ExprType::Object("User".into()))],
            Expression::gt(age(), Expression::int32(18)),
        );
        let translated = Translator::new().translate(&lambda).unwrap();
        assert_eq!(translated, DbExpression::greater_than(db_age(), db_int(18)));
    }

    #[test]
    fn test_arithmetic_keeps_type() {
        let translator = Translator::new();
        let expr = Expression::binary_op(
            BinaryOperator::Divide,
            Expression::binary_op(BinaryOperator::Multiply, age(), Expression::int32(2), ExprType::Int32),
            Expression::int32(3),
            ExprType::Int32,
        );
        assert_eq!(
            translator.translate(&expr).unwrap(),
            DbExpression::divide(
                ExprType::Int32,
                DbExpression::multiply(db_age(), db_int(2), ExprType::Int32),
                db_int(3),
            )
        );

        let minus = Expression::binary_op(BinaryOperator::Subtract, age(), Expression::int32(1), ExprType::Int32);
        assert_eq!(
            translator.translate(&minus).unwrap(),
            DbExpression::subtract(db_age(), db_int(1), ExprType::Int32)
        );
    }

    #[test]
    fn test_add_carries_operator_method() {
        let concat = MethodRef::new("String", "Concat", ExprType::String);
        let expr = Expression::binary_op_with_method(
            BinaryOperator::Add,
            name(),
            Expression::string("!"),
            ExprType::String,
            concat.clone(),
        );
        match Translator::new().translate(&expr).unwrap() {
            DbExpression::Arithmetic { method, ty, .. } => {
                assert_eq!(method, Some(concat));
                assert_eq!(ty, ExprType::String);
            }
            other => panic!("unexpected node {:?}", other),
        }
    }

    #[test]
    fn test_ordering_comparisons() {
        let translator = Translator::new();
        let cases = [
            (Expression::lt(age(), Expression::int32(1)), DbExpression::less_than(db_age(), db_int(1))),
            (Expression::le(age(), Expression::int32(1)), DbExpression::less_than_or_equal(db_age(), db_int(1))),
            (Expression::gt(age(), Expression::int32(1)), DbExpression::greater_than(db_age(), db_int(1))),
            (Expression::ge(age(), Expression::int32(1)), DbExpression::greater_than_or_equal(db_age(), db_int(1))),
        ];
        for (input, expected) in cases {
            assert_eq!(translator.translate(&input).unwrap(), expected);
        }
    }

    #[test]
    fn test_pass_through_nodes() {
        let translator = Translator::new();

        let null = Expression::null(ExprType::String);
        assert_eq!(
            translator.translate(&null).unwrap(),
            DbExpression::null(ExprType::String)
        );

        let widened = Expression::convert(age(), ExprType::Int64);
        assert_eq!(
            translator.translate(&widened).unwrap(),
            DbExpression::convert(ExprType::Int64, db_age())
        );

        let checked = Expression::unary_op(UnaryOperator::ConvertChecked, age(), ExprType::Int64);
        assert_eq!(
            translator.translate(&checked).unwrap(),
            DbExpression::convert(ExprType::Int64, db_age())
        );

        let now = Expression::static_member(MemberRef::declared_on("Now", "DateTime", ExprType::DateTime));
        assert_eq!(
            translator.translate(&now).unwrap(),
            DbExpression::member_access(MemberRef::declared_on("Now", "DateTime", ExprType::DateTime), None)
        );
    }

    #[test]
    fn test_method_call_visits_receiver_and_arguments_in_order() {
        let substring = MethodRef::new("String", "Substring", ExprType::String);
        let expr = Expression::call(
            Some(name()),
            substring.clone(),
            vec![Expression::int32(0), age()],
        );
        assert_eq!(
            Translator::new().translate(&expr).unwrap(),
            DbExpression::method_call(
                Some(DbExpression::member_access(MemberRef::new("Name", ExprType::String), Some(db_user()))),
                substring,
                vec![db_int(0), db_age()],
            )
        );

        let is_null_or_empty = MethodRef::new("String", "IsNullOrEmpty", ExprType::Boolean);
        let expr = Expression::call(None, is_null_or_empty, vec![name()]);
        assert!(matches!(
            Translator::new().translate(&expr).unwrap(),
            DbExpression::MethodCall { object: None, ref arguments, .. } if arguments.len() == 1
        ));
    }

    #[test]
    fn test_lambda_argument_translates_to_its_body() {
        let order_type = ExprType::Object("Order".into());
        let order = Expression::parameter("o", order_type.clone());
        let total = MemberRef::new("Total", ExprType::Int32);
        let any = MethodRef::new("Enumerable", "Any", ExprType::Boolean);
        let orders = Expression::member(user(), MemberRef::new("Orders", ExprType::Object("Orders".into())));

        // Enumerable.Any(u.Orders, o => o.Total > 100)
        let expr = Expression::call(
            None,
            any.clone(),
            vec![
                orders,
                Expression::lambda(
                    vec![ParameterRef::new("o", order_type.clone())],
                    Expression::gt(Expression::member(order, total.clone()), Expression::int32(100)),
                ),
            ],
        );
        assert_eq!(
            Translator::new().translate(&expr).unwrap(),
            DbExpression::method_call(
                None,
                any,
                vec![
                    DbExpression::member_access(
                        MemberRef::new("Orders", ExprType::Object("Orders".into())),
                        Some(db_user()),
                    ),
                    DbExpression::greater_than(
                        DbExpression::member_access(
                            total,
                            Some(DbExpression::parameter(ParameterRef::new("o", order_type))),
                        ),
                        db_int(100),
                    ),
                ],
            )
        );
    }

    #[test]
    fn test_unsupported_nodes() {
        let translator = Translator::new();

        let modulo = Expression::binary_op(BinaryOperator::Modulo, age(), Expression::int32(2), ExprType::Int32);
        let err = translator.translate(&modulo).unwrap_err();
        assert_eq!(
            err,
            TranslateError::Unsupported {
                kind: "Modulo".to_string(),
                expression: "(u.Age % 2)".to_string(),
            }
        );

        let negate = Expression::unary_op(UnaryOperator::Negate, age(), ExprType::Int32);
        assert!(matches!(
            translator.translate(&negate),
            Err(TranslateError::Unsupported { ref kind, .. }) if kind == "Negate"
        ));

        let as_user = Expression::unary_op(UnaryOperator::TypeAs, name(), ExprType::Object("User".into()));
        assert_eq!(
            translator.translate(&as_user).unwrap_err(),
            TranslateError::Unsupported {
                kind: "TypeAs".to_string(),
                expression: "(u.Name as User)".to_string(),
            }
        );

        let flag = Expression::member(user(), MemberRef::new("Flag", ExprType::Boolean));
        let xor = Expression::binary_op(BinaryOperator::ExclusiveOr, flag.clone(), flag, ExprType::Boolean);
        assert_eq!(
            translator.translate(&xor).unwrap_err(),
            TranslateError::Unsupported {
                kind: "ExclusiveOr".to_string(),
                expression: "(u.Flag ^ u.Flag)".to_string(),
            }
        );

        // Nested failures abort the whole translation
        let nested = Expression::gt(modulo, Expression::int32(0));
        assert!(translator.translate(&nested).is_err());
    }
}
