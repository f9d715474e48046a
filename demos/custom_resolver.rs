use numeval::{default_resolver, eval_fn, evaluate, EvalError, Function, Resolver};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Host state reachable from callbacks through the user-data handle.
struct Sensors {
    readings: HashMap<String, f64>,
    lookups: usize,
}

/// Resolves `$name` from the sensor table and adds a `celsius` function on
/// top of the built-in ones.
struct SensorResolver;

#[eval_fn]
fn celsius(fahrenheit: f64) -> Result<f64, EvalError> {
    Ok((fahrenheit - 32.0) * 5.0 / 9.0)
}

#[eval_fn]
fn offset(x: f64, user_data: &mut dyn Any) -> Result<f64, EvalError> {
    let sensors = user_data
        .downcast_ref::<Sensors>()
        .ok_or(EvalError::UndefinedVariable)?;
    let bias = sensors.readings.get("bias").copied().unwrap_or(0.0);
    Ok(x + bias)
}

impl Resolver for SensorResolver {
    fn get_function(&self, name: &str, user_data: &mut dyn Any) -> Option<Function> {
        match name {
            "celsius" => Some(Arc::new(celsius)),
            "offset" => Some(Arc::new(offset)),
            _ => default_resolver().get_function(name, user_data),
        }
    }

    fn get_variable(&self, name: &str, user_data: &mut dyn Any) -> Result<f64, EvalError> {
        let sensors = user_data
            .downcast_mut::<Sensors>()
            .ok_or(EvalError::UndefinedVariable)?;
        sensors.lookups += 1;
        sensors
            .readings
            .get(name)
            .copied()
            .ok_or(EvalError::UndefinedVariable)
    }
}

fn main() {
    pretty_env_logger::init();

    let mut sensors = Sensors {
        readings: HashMap::from([
            ("outside".to_string(), 68.0),
            ("inside".to_string(), 77.0),
            ("bias".to_string(), -0.5),
        ]),
        lookups: 0,
    };

    for expr in [
        "celsius($outside)",
        "offset(celsius($inside)) > 20",
        "sqrt($missing)",
    ] {
        let result = evaluate(expr, Some(&SensorResolver), &mut sensors);
        println!("{expr} = {result:?}");
    }
    println!("variable lookups: {}", sensors.lookups);
}
