use crate::eval::EvalError;
use crate::functions::DefaultResolver;
use log::trace;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// A unary function callable from an expression, e.g. `sin(x)`.
///
/// The second argument is the user data handed to [`crate::evaluate`].
pub type Function = Arc<dyn Fn(f64, &mut dyn Any) -> Result<f64, EvalError> + Send + Sync>;

/// Supplies functions and variables for names the engine does not know.
///
/// Bare names followed by `(` are looked up with `get_function`; `$name`
/// terms go through `get_variable`. Both receive the evaluation's user data.
pub trait Resolver {
    fn get_function(&self, name: &str, user_data: &mut dyn Any) -> Option<Function>;

    fn get_variable(&self, name: &str, user_data: &mut dyn Any) -> Result<f64, EvalError>;
}

/// Resolver backed by owned maps, optionally falling back to the built-in
/// math functions and constants.
#[derive(Clone, Default)]
pub struct MapResolver {
    functions: HashMap<String, Function>,
    variables: HashMap<String, f64>,
    with_defaults: bool,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names not held by the maps resolve against the default tables.
    pub fn with_defaults() -> Self {
        Self {
            with_defaults: true,
            ..Self::default()
        }
    }

    /// Registers a function, replacing any previous one of the same name.
    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64, &mut dyn Any) -> Result<f64, EvalError> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    pub fn remove_variable(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(name)
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }
}

impl From<&HashMap<String, f64>> for MapResolver {
    fn from(context: &HashMap<String, f64>) -> Self {
        Self {
            variables: context.clone(),
            ..Self::with_defaults()
        }
    }
}

/// Borrows a caller's variable map and falls back to the default tables.
pub struct ContextResolver<'a> {
    variables: &'a HashMap<String, f64>,
}

impl<'a> ContextResolver<'a> {
    pub fn new(variables: &'a HashMap<String, f64>) -> Self {
        Self { variables }
    }
}

impl Resolver for ContextResolver<'_> {
    fn get_function(&self, name: &str, user_data: &mut dyn Any) -> Option<Function> {
        DefaultResolver.get_function(name, user_data)
    }

    fn get_variable(&self, name: &str, user_data: &mut dyn Any) -> Result<f64, EvalError> {
        match self.variables.get(name) {
            Some(value) => Ok(*value),
            None => DefaultResolver.get_variable(name, user_data),
        }
    }
}

impl Resolver for MapResolver {
    fn get_function(&self, name: &str, user_data: &mut dyn Any) -> Option<Function> {
        if let Some(function) = self.functions.get(name) {
            return Some(function.clone());
        }
        if self.with_defaults {
            trace!("Function '{}' not registered, trying defaults", name);
            return DefaultResolver.get_function(name, user_data);
        }
        None
    }

    fn get_variable(&self, name: &str, user_data: &mut dyn Any) -> Result<f64, EvalError> {
        if let Some(value) = self.variables.get(name) {
            return Ok(*value);
        }
        if self.with_defaults {
            trace!("Variable '{}' not set, trying defaults", name);
            return DefaultResolver.get_variable(name, user_data);
        }
        Err(EvalError::UndefinedVariable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resolver_knows_nothing() {
        let resolver = MapResolver::new();
        assert!(resolver.get_function("sin", &mut ()).is_none());
        assert_eq!(
            resolver.get_variable("PI", &mut ()),
            Err(EvalError::UndefinedVariable)
        );
    }

    #[test]
    fn test_defaults_fallback() {
        let resolver = MapResolver::with_defaults();
        let sin = resolver.get_function("sin", &mut ()).unwrap();
        assert_eq!(sin(0.0, &mut ()), Ok(0.0));
        assert_eq!(
            resolver.get_variable("PI", &mut ()),
            Ok(std::f64::consts::PI)
        );
    }

    #[test]
    fn test_registered_entries_shadow_defaults() {
        let mut resolver = MapResolver::with_defaults();
        resolver.register_function("sin", |x, _| Ok(x * 2.0));
        resolver.set_variable("PI", 3.0);

        let sin = resolver.get_function("sin", &mut ()).unwrap();
        assert_eq!(sin(4.0, &mut ()), Ok(8.0));
        assert_eq!(resolver.get_variable("PI", &mut ()), Ok(3.0));
    }

    #[test]
    fn test_set_and_remove_variable() {
        let mut resolver = MapResolver::new();
        resolver.set_variable("x", 1.5);
        assert_eq!(resolver.variable("x"), Some(1.5));
        assert_eq!(resolver.remove_variable("x"), Some(1.5));
        assert_eq!(
            resolver.get_variable("x", &mut ()),
            Err(EvalError::UndefinedVariable)
        );
    }

    #[test]
    fn test_from_context_map() {
        let context = HashMap::from([("price".to_string(), 120.0)]);
        let resolver = MapResolver::from(&context);
        assert_eq!(resolver.get_variable("price", &mut ()), Ok(120.0));
        assert!(resolver.get_function("sqrt", &mut ()).is_some());
    }

    #[test]
    fn test_context_resolver_borrows_variables() {
        let context =
            HashMap::from([("price".to_string(), 120.0), ("PI".to_string(), 3.0)]);
        let resolver = ContextResolver::new(&context);
        assert_eq!(resolver.get_variable("price", &mut ()), Ok(120.0));
        assert_eq!(resolver.get_variable("PI", &mut ()), Ok(3.0));
        assert_eq!(
            resolver.get_variable("INFINITY", &mut ()),
            Ok(f64::INFINITY)
        );
        assert_eq!(
            resolver.get_variable("missing", &mut ()),
            Err(EvalError::UndefinedVariable)
        );
        assert!(resolver.get_function("sqrt", &mut ()).is_some());
        assert!(resolver.get_function("nope", &mut ()).is_none());
    }

    #[test]
    fn test_function_sees_user_data() {
        let mut resolver = MapResolver::new();
        resolver.register_function("scale", |x, user_data| {
            let factor = user_data.downcast_ref::<f64>().copied().unwrap_or(1.0);
            Ok(x * factor)
        });

        let scale = resolver.get_function("scale", &mut ()).unwrap();
        assert_eq!(scale(2.0, &mut 10.0_f64), Ok(20.0));
        assert_eq!(scale(2.0, &mut ()), Ok(2.0));
    }
}
