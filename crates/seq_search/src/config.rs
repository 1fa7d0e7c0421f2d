//! Search bounds, loadable from TOML.

use std::fs;
use std::path::Path;

use num_bigint::BigInt;
use num_rational::BigRational;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Largest generator subset tried as a linear combination
    pub max_generators: usize,
    /// Bound on the magnitude of every solved coefficient
    pub max_coefficient: u64,
    /// Try scaled termwise products of two distinct generators
    pub products: bool,
    /// Accept non-integer coefficients
    pub rationals: bool,
    /// Prefix terms required per unknown before a multi-generator subset
    /// or a product is attempted
    pub min_items_per_generator: usize,
    /// Stop after checking this many candidate subsets
    pub node_limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_generators: 3,
            max_coefficient: 1000,
            products: true,
            rationals: false,
            min_items_per_generator: 2,
            node_limit: None,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML file; keys missing from the file keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    pub(crate) fn coefficient_bound(&self) -> BigRational {
        BigRational::from_integer(BigInt::from(self.max_coefficient))
    }
}
