use crate::eval::{EvalError, Function};
use numeval_macros::eval_fn;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

static FUNCTIONS: LazyLock<HashMap<&'static str, Function>> = LazyLock::new(|| {
    let mut functions: HashMap<&'static str, Function> = HashMap::new();
    functions.insert("cos", Arc::new(cos));
    functions.insert("sin", Arc::new(sin));
    functions.insert("tan", Arc::new(tan));
    functions.insert("acos", Arc::new(acos));
    functions.insert("asin", Arc::new(asin));
    functions.insert("atan", Arc::new(atan));
    functions.insert("exp", Arc::new(exp));
    functions.insert("log", Arc::new(log));
    functions.insert("log10", Arc::new(log10));
    functions.insert("sqrt", Arc::new(sqrt));
    functions.insert("ceil", Arc::new(ceil));
    functions.insert("floor", Arc::new(floor));
    functions.insert("round", Arc::new(round));
    functions
});

pub fn lookup(name: &str) -> Option<Function> {
    FUNCTIONS.get(name).cloned()
}

#[eval_fn]
fn cos(x: f64) -> Result<f64, EvalError> {
    Ok(x.cos())
}

#[eval_fn]
fn sin(x: f64) -> Result<f64, EvalError> {
    Ok(x.sin())
}

#[eval_fn]
fn tan(x: f64) -> Result<f64, EvalError> {
    Ok(x.tan())
}

#[eval_fn]
fn acos(x: f64) -> Result<f64, EvalError> {
    Ok(x.acos())
}

#[eval_fn]
fn asin(x: f64) -> Result<f64, EvalError> {
    Ok(x.asin())
}

#[eval_fn]
fn atan(x: f64) -> Result<f64, EvalError> {
    Ok(x.atan())
}

#[eval_fn]
fn exp(x: f64) -> Result<f64, EvalError> {
    Ok(x.exp())
}

/// Natural logarithm.
#[eval_fn]
fn log(x: f64) -> Result<f64, EvalError> {
    Ok(x.ln())
}

#[eval_fn]
fn log10(x: f64) -> Result<f64, EvalError> {
    Ok(x.log10())
}

#[eval_fn]
fn sqrt(x: f64) -> Result<f64, EvalError> {
    Ok(x.sqrt())
}

#[eval_fn]
fn ceil(x: f64) -> Result<f64, EvalError> {
    Ok(x.ceil())
}

#[eval_fn]
fn floor(x: f64) -> Result<f64, EvalError> {
    Ok(x.floor())
}

/// Halves round towards positive infinity, so `round(-2.5)` is `-2`.
#[eval_fn]
fn round(x: f64) -> Result<f64, EvalError> {
    Ok((x + 0.5).floor())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, x: f64) -> f64 {
        let function = lookup(name).expect("function should exist");
        function(x, &mut ()).unwrap()
    }

    #[test]
    fn test_table_is_complete() {
        for name in [
            "cos", "sin", "tan", "acos", "asin", "atan", "exp", "log", "log10", "sqrt", "ceil",
            "floor", "round",
        ] {
            assert!(lookup(name).is_some(), "missing {}", name);
        }
    }

    #[test]
    fn test_generated_call_shape() {
        assert_eq!(floor(2.5, &mut ()), Ok(2.0));
        assert_eq!(round(-0.5, &mut 7_u8), Ok(0.0));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("SIN").is_none());
        assert!(lookup("Sqrt").is_none());
        assert!(lookup("pow").is_none());
    }

    #[test]
    fn test_trigonometry() {
        assert_eq!(call("sin", 0.0), 0.0);
        assert_eq!(call("cos", 0.0), 1.0);
        assert_eq!(call("tan", 0.0), 0.0);
        assert!((call("asin", 1.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert_eq!(call("acos", 1.0), 0.0);
        assert_eq!(call("atan", 0.0), 0.0);
    }

    #[test]
    fn test_exponentials() {
        assert_eq!(call("exp", 0.0), 1.0);
        assert_eq!(call("log", 1.0), 0.0);
        assert!((call("log10", 1000.0) - 3.0).abs() < 1e-12);
        assert_eq!(call("sqrt", 16.0), 4.0);
        assert!(call("sqrt", -1.0).is_nan());
        assert_eq!(call("log", 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(call("ceil", 1.2), 2.0);
        assert_eq!(call("floor", -1.2), -2.0);
        assert_eq!(call("round", 2.5), 3.0);
        assert_eq!(call("round", -2.5), -2.0);
        assert_eq!(call("round", 2.4), 2.0);
    }
}
