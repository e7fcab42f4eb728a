//! Catalog of base functions a hybrid block may use
//!
//! The identifiers returned by [`BaseFunction::as_str`] are the names the
//! objective evaluator registers its implementations under, so they must not
//! change. The order of [`BaseFunction::ALL`] is the palette order used by the
//! pattern generator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Base function driving one 25D block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseFunction {
    Sphere,
    Rastrigin,
    Ackley,
    Rosenbrock,
    Ellipsoid,
    Griewank,
    Schwefel,
}

impl BaseFunction {
    /// All base functions in generator palette order
    pub const ALL: [BaseFunction; 7] = [
        BaseFunction::Sphere,
        BaseFunction::Rastrigin,
        BaseFunction::Ackley,
        BaseFunction::Rosenbrock,
        BaseFunction::Ellipsoid,
        BaseFunction::Griewank,
        BaseFunction::Schwefel,
    ];

    /// Registry identifier understood by the evaluator
    pub fn as_str(self) -> &'static str {
        match self {
            BaseFunction::Sphere => "sphere",
            BaseFunction::Rastrigin => "rastrigin",
            BaseFunction::Ackley => "ackley",
            BaseFunction::Rosenbrock => "rosenbrock",
            BaseFunction::Ellipsoid => "ellipsoid",
            BaseFunction::Griewank => "griewank",
            BaseFunction::Schwefel => "schwefel",
        }
    }

    /// Conventional per-coordinate search box (min, max)
    pub fn default_bounds(self) -> (f64, f64) {
        match self {
            BaseFunction::Sphere => (-5.0, 5.0),
            BaseFunction::Rastrigin => (-5.12, 5.12),
            BaseFunction::Ackley => (-32.768, 32.768),
            BaseFunction::Rosenbrock => (-2.048, 2.048),
            BaseFunction::Ellipsoid => (-100.0, 100.0),
            BaseFunction::Griewank => (-600.0, 600.0),
            BaseFunction::Schwefel => (-500.0, 500.0),
        }
    }

    /// Whether the function has more than one local minimum
    pub fn is_multimodal(self) -> bool {
        matches!(
            self,
            BaseFunction::Rastrigin
                | BaseFunction::Ackley
                | BaseFunction::Griewank
                | BaseFunction::Schwefel
        )
    }

    pub fn description(self) -> &'static str {
        match self {
            BaseFunction::Sphere => "N-dimensional quadratic function",
            BaseFunction::Rastrigin => "N-dimensional highly multimodal function",
            BaseFunction::Ackley => "N-dimensional multimodal function",
            BaseFunction::Rosenbrock => "N-dimensional banana function",
            BaseFunction::Ellipsoid => "Separable ill-conditioned elliptic function",
            BaseFunction::Griewank => "N-dimensional multimodal function",
            BaseFunction::Schwefel => "N-dimensional multimodal with many local minima",
        }
    }
}

impl fmt::Display for BaseFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseFunction {
    type Err = CatalogError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_lowercase();
        BaseFunction::ALL
            .into_iter()
            .find(|func| func.as_str() == t)
            .ok_or_else(|| CatalogError::UnknownFunction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order_matches_registry() {
        let names: Vec<&str> = BaseFunction::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "sphere",
                "rastrigin",
                "ackley",
                "rosenbrock",
                "ellipsoid",
                "griewank",
                "schwefel"
            ]
        );
    }

    #[test]
    fn test_parse_function_names() {
        assert_eq!("sphere".parse::<BaseFunction>().unwrap(), BaseFunction::Sphere);
        assert_eq!(
            "Rosenbrock".parse::<BaseFunction>().unwrap(),
            BaseFunction::Rosenbrock
        );
        assert!(matches!(
            "levy".parse::<BaseFunction>(),
            Err(CatalogError::UnknownFunction(name)) if name == "levy"
        ));
    }

    #[test]
    fn test_bounds_are_ordered() {
        for func in BaseFunction::ALL {
            let (lower, upper) = func.default_bounds();
            assert!(lower < upper, "{} has invalid bounds", func);
            assert!(!func.description().is_empty());
        }
    }

    #[test]
    fn test_serde_uses_registry_names() {
        let json = serde_json::to_string(&BaseFunction::Griewank).unwrap();
        assert_eq!(json, "\"griewank\"");
        let back: BaseFunction = serde_json::from_str("\"schwefel\"").unwrap();
        assert_eq!(back, BaseFunction::Schwefel);
    }
}
