use std::collections::HashMap;
use std::sync::LazyLock;

// PI is kept at full f64 precision rather than rounded to f32.
static CONSTANTS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("INFINITY", f64::INFINITY),
        ("NAN", f64::NAN),
        ("PI", std::f64::consts::PI),
    ])
});

pub fn lookup(name: &str) -> Option<f64> {
    CONSTANTS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(lookup("PI"), Some(std::f64::consts::PI));
        assert_eq!(lookup("INFINITY"), Some(f64::INFINITY));
        assert!(lookup("NAN").unwrap().is_nan());
    }

    #[test]
    fn test_unknown_and_case_sensitive() {
        assert_eq!(lookup("pi"), None);
        assert_eq!(lookup("E"), None);
    }
}
