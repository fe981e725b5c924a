pub mod classify;
pub mod source;
pub mod target;
pub mod translator;
pub mod value;

pub use translator::{translate, TranslateError, TranslateResult, Translator};
