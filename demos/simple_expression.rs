use log::debug;
use numeval::{default_resolver, evaluate, evaluate_expression, EvalError};
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let expressions = [
        "1+(2*sin(3))",
        "2 < 3 * 1",
        "--5 + round(2.5)",
        "$PI * 2",
        "(1+2",
        "1+2)",
    ];

    for expr in expressions {
        match evaluate(expr, Some(default_resolver()), &mut ()) {
            Ok(value) => println!("{expr} = {value}"),
            Err(err) => println!("{expr}: {err} (code {})", err.code()),
        }
    }

    let context: HashMap<String, f64> =
        [("price".to_string(), 120.0), ("volume".to_string(), 3000.0)]
            .iter()
            .cloned()
            .collect();

    let expr = "($price > 100) * ($volume < 5000)";
    let result: Result<f64, EvalError> = evaluate_expression(expr, &context);
    debug!("context: {context:?}");
    println!("{expr} = {result:?}");
}
