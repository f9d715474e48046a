use numeval::{evaluate, MapResolver};
use rayon::prelude::*;

fn main() {
    pretty_env_logger::init();

    let contexts = vec![
        [("price", 120.0), ("volume", 3000.0)],
        [("price", 80.0), ("volume", 6000.0)],
        [("price", 101.0), ("volume", 4999.0)],
    ];

    let expression = "($price > 100) * ($volume < 5000)";

    let results: Vec<_> = contexts
        .par_iter()
        .map(|context| {
            let mut resolver = MapResolver::with_defaults();
            for (name, value) in context {
                resolver.set_variable(name, *value);
            }
            evaluate(expression, Some(&resolver), &mut ())
        })
        .collect();

    for (i, result) in results.iter().enumerate() {
        println!("Result {}: {:?}", i, result);
    }
}
