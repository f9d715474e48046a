//! Embeddable evaluator for numeric infix expressions such as `1+(2*sin(3))`.
//!
//! Expressions are lexed and evaluated in a single pass. Unknown names are
//! handed to a [`Resolver`]: bare names followed by `(` are unary functions,
//! names written `$name` are variables.
//!
//! Precedence, lowest first: `+ -`, then `* /` together with the relational
//! operators `< <= > >= ==` (all left associative), then unary `-`. A lone
//! `=` also means equality. Relational operators yield `1.0` or `0.0`.

pub mod eval;
pub mod functions;

pub use eval::{
    code_to_string, error_to_string, evaluate_with_limits, EvalError, Function, Limits,
    ContextResolver, MapResolver, Resolver, MAX_NAME_LENGTH, MAX_STACK_DEPTH,
};
pub use functions::{default_resolver, DefaultResolver};
pub use numeval_macros::eval_fn;

use std::any::Any;
use std::collections::HashMap;

/// Evaluates `expression` to a single number.
///
/// `user_data` is passed untouched to every resolver and function call; pass
/// `&mut ()` when there is none. Without a resolver any function call or
/// variable is an error. Division by zero follows IEEE semantics.
pub fn evaluate(
    expression: &str,
    resolver: Option<&dyn Resolver>,
    user_data: &mut dyn Any,
) -> Result<f64, EvalError> {
    evaluate_with_limits(expression, resolver, user_data, &Limits::default())
}

/// Evaluates `expression` with the built-in functions and constants, plus the
/// entries of `context` available as `$name` variables.
pub fn evaluate_expression(
    expression: &str,
    context: &HashMap<String, f64>,
) -> Result<f64, EvalError> {
    let resolver = ContextResolver::new(context);
    evaluate(expression, Some(&resolver), &mut ())
}
