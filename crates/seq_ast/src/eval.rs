//! Pointwise evaluation of generators and expressions.

use std::sync::Arc;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use seq_catalog::{Generator, PrefixCache};

use crate::error::EvalError;
use crate::expression::Expression;

/// Anything that yields one integer per index n >= 0.
pub trait Evaluate {
    fn evaluate(&self, n: usize) -> Result<BigInt, EvalError>;

    /// Values for `n = 0..len`.
    fn prefix(&self, len: usize) -> Result<Vec<BigInt>, EvalError> {
        (0..len).map(|n| self.evaluate(n)).collect()
    }
}

fn unknown_term(generator: &Generator, index: usize) -> EvalError {
    EvalError::UnknownTerm {
        generator: generator.name(),
        index,
    }
}

impl Evaluate for Generator {
    fn evaluate(&self, n: usize) -> Result<BigInt, EvalError> {
        self.compute(n).ok_or_else(|| unknown_term(self, n))
    }

    fn prefix(&self, len: usize) -> Result<Vec<BigInt>, EvalError> {
        let values = Generator::prefix(self, len);
        if values.len() < len {
            return Err(unknown_term(self, values.len()));
        }
        Ok(values)
    }
}

fn into_integer(value: BigRational, index: usize) -> Result<BigInt, EvalError> {
    if value.is_integer() {
        Ok(value.to_integer())
    } else {
        Err(EvalError::NonIntegerResult { index, value })
    }
}

impl Evaluate for Expression {
    fn evaluate(&self, n: usize) -> Result<BigInt, EvalError> {
        let mut total = BigRational::zero();
        for term in self.terms() {
            let mut product = BigInt::one();
            for g in term.factors() {
                product *= g.evaluate(n)?;
            }
            total += term.coeff() * BigRational::from_integer(product);
        }
        into_integer(total, n)
    }

    fn prefix(&self, len: usize) -> Result<Vec<BigInt>, EvalError> {
        self.prefix_with(len, |g| g.prefix(len).into())
    }
}

/// Factor columns of one term, checked to cover `len` indices.
fn term_columns(
    factors: &[&'static Generator],
    len: usize,
    fetch: &mut impl FnMut(&Generator) -> Arc<[BigInt]>,
) -> Result<Vec<Arc<[BigInt]>>, EvalError> {
    factors
        .iter()
        .map(|&g| {
            let column = fetch(g);
            if column.len() < len {
                Err(unknown_term(g, column.len()))
            } else {
                Ok(column)
            }
        })
        .collect()
}

fn row_value(coeff: &BigRational, columns: &[Arc<[BigInt]>], n: usize) -> BigRational {
    let mut product = BigInt::one();
    for column in columns {
        product *= &column[n];
    }
    coeff * BigRational::from_integer(product)
}

impl Expression {
    /// Like [`Evaluate::prefix`], reading factor prefixes through `cache`.
    pub fn prefix_cached(&self, len: usize, cache: &PrefixCache) -> Result<Vec<BigInt>, EvalError> {
        self.prefix_with(len, |g| cache.prefix(g, len))
    }

    /// True when the first `target.len()` values equal `target`.
    ///
    /// Stops at the first differing index.
    pub fn reproduces(&self, target: &[BigInt], cache: &PrefixCache) -> bool {
        let len = target.len();
        let mut fetch = |g: &Generator| cache.prefix(g, len);
        let mut terms = Vec::with_capacity(self.len());
        for term in self.terms() {
            match term_columns(term.factors(), len, &mut fetch) {
                Ok(columns) => terms.push((term.coeff(), columns)),
                Err(_) => return false,
            }
        }
        target.iter().enumerate().all(|(n, expected)| {
            let total = terms
                .iter()
                .fold(BigRational::zero(), |acc, (coeff, columns)| {
                    acc + row_value(coeff, columns, n)
                });
            total.is_integer() && total.numer() == expected
        })
    }

    fn prefix_with(
        &self,
        len: usize,
        mut fetch: impl FnMut(&Generator) -> Arc<[BigInt]>,
    ) -> Result<Vec<BigInt>, EvalError> {
        let mut totals = vec![BigRational::zero(); len];
        for term in self.terms() {
            let columns = term_columns(term.factors(), len, &mut fetch)?;
            for (n, total) in totals.iter_mut().enumerate() {
                *total += row_value(term.coeff(), &columns, n);
            }
        }
        totals
            .into_iter()
            .enumerate()
            .map(|(n, value)| into_integer(value, n))
            .collect()
    }
}
