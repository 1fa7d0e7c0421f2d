//! A single product term: `coefficient * g1(n) * g2(n) * ...`.

use std::cmp::Ordering;

use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use seq_catalog::Generator;
use smallvec::SmallVec;

/// Generator reference held by a term. Library generators are `'static`.
pub type Factor = &'static Generator;

/// Factor positions in canonical factor order; equal signatures mean equal
/// factor multisets.
pub type Signature = SmallVec<[usize; 2]>;

/// Exact rational coefficient times a multiset of generators.
///
/// A term without factors is a constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    coeff: BigRational,
    factors: SmallVec<[Factor; 2]>,
}

/// Canonical factor order: registration position, then name.
fn cmp_factor(a: &Factor, b: &Factor) -> Ordering {
    a.position()
        .cmp(&b.position())
        .then_with(|| a.name().cmp(b.name()))
}

impl Term {
    pub fn new(coeff: BigRational, factors: impl IntoIterator<Item = Factor>) -> Self {
        let mut factors: SmallVec<[Factor; 2]> = factors.into_iter().collect();
        factors.sort_by(cmp_factor);
        Self { coeff, factors }
    }

    pub fn constant(coeff: BigRational) -> Self {
        Self {
            coeff,
            factors: SmallVec::new(),
        }
    }

    /// `1 * g`
    pub fn atom(generator: Factor) -> Self {
        Self::new(BigRational::one(), [generator])
    }

    pub fn coeff(&self) -> &BigRational {
        &self.coeff
    }

    /// Factors in canonical factor order.
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    pub fn signature(&self) -> Signature {
        self.factors.iter().map(|g| g.position()).collect()
    }

    pub fn same_signature(&self, other: &Term) -> bool {
        self.factors.len() == other.factors.len()
            && self
                .factors
                .iter()
                .zip(other.factors.iter())
                .all(|(a, b)| a.position() == b.position())
    }

    pub fn is_constant(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.coeff.is_negative()
    }

    pub(crate) fn add_coeff(&mut self, delta: &BigRational) {
        self.coeff += delta;
    }

    /// Same factors, coefficient multiplied by `by`.
    pub fn scaled(&self, by: &BigRational) -> Term {
        Term {
            coeff: &self.coeff * by,
            factors: self.factors.clone(),
        }
    }

    /// Termwise product: coefficients multiply, factor multisets join.
    pub fn times(&self, other: &Term) -> Term {
        Term::new(
            &self.coeff * &other.coeff,
            self.factors.iter().chain(other.factors.iter()).copied(),
        )
    }
}
