//! Source expression tree.
//!
//! This module provides:
//! - The host-language expression tree handed to the translator
//! - Node inspection helpers (convert stripping, literal detection)
//! - A fragment builder for the rewrites the translator re-visits
//! - A host-language text rendering used in diagnostics

pub mod builder;
pub mod display;
pub mod expr;
pub mod operator;

pub use expr::{Expression, MemberRef, MethodRef, ParameterRef};
pub use operator::{BinaryOperator, UnaryOperator};
