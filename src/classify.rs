//! Classification of static types into the three classes the translator
//! branches on.

use crate::value::ExprType;

/// Class of a static type as far as equality translation is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    Boolean,
    NullableBoolean,
    /// Opaque to the translator
    Other,
}

/// Answers "is this static type Boolean, NullableBoolean or something else".
///
/// Callers with their own type system (e.g. user-defined boolean wrappers)
/// can plug in their own implementation.
pub trait TypeClassifier {
    fn classify(&self, ty: &ExprType) -> TypeClass;

    fn is_nullable_boolean(&self, ty: &ExprType) -> bool {
        self.classify(ty) == TypeClass::NullableBoolean
    }
}

/// Classifier that looks only at the structure of `ExprType`
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTypeClassifier;

impl TypeClassifier for StaticTypeClassifier {
    fn classify(&self, ty: &ExprType) -> TypeClass {
        match ty {
            ExprType::Boolean => TypeClass::Boolean,
            ExprType::Nullable(inner) if **inner == ExprType::Boolean => {
                TypeClass::NullableBoolean
            }
            _ => TypeClass::Other,
        }
    }
}
