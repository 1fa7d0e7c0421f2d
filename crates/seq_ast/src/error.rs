//! Error types for expression evaluation.

use num_rational::BigRational;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The exact sum at `index` has a denominator other than 1
    #[error("non-integer result {value} at index {index}")]
    NonIntegerResult { index: usize, value: BigRational },

    /// A partially known generator has no value at `index`
    #[error("no known value of {generator} at index {index}")]
    UnknownTerm {
        generator: &'static str,
        index: usize,
    },
}
