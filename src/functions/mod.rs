pub mod constants;
pub mod math;

use crate::eval::{EvalError, Function, Resolver};
use std::any::Any;

/// Resolves the built-in math functions and constants.
///
/// Functions: `cos sin tan acos asin atan exp log log10 sqrt ceil floor round`.
/// Constants: `INFINITY NAN PI`. Names match exactly and case-sensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResolver;

impl Resolver for DefaultResolver {
    fn get_function(&self, name: &str, _user_data: &mut dyn Any) -> Option<Function> {
        math::lookup(name)
    }

    fn get_variable(&self, name: &str, _user_data: &mut dyn Any) -> Result<f64, EvalError> {
        constants::lookup(name).ok_or(EvalError::UndefinedVariable)
    }
}

pub fn default_resolver() -> &'static DefaultResolver {
    static DEFAULT: DefaultResolver = DefaultResolver;
    &DEFAULT
}
