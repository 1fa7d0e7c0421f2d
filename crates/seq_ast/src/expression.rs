//! Sums of terms and the builder operations used to compose them.

use std::hash::{Hash, Hasher};

use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::term::{Factor, Term};

/// A finite sum of terms with pairwise distinct factor signatures.
///
/// The empty expression is the identically-zero sequence. Equality and
/// hashing go through the canonical form, so two expressions compare equal
/// whenever they canonicalize to the same terms.
#[derive(Debug, Clone, Default)]
pub struct Expression {
    pub(crate) terms: Vec<Term>,
}

/// Merge `term` into `terms`, summing coefficients on a shared signature.
/// Returns the index of the affected term.
pub(crate) fn merge_term(terms: &mut Vec<Term>, term: Term) -> usize {
    match terms.iter().position(|t| t.same_signature(&term)) {
        Some(idx) => {
            terms[idx].add_coeff(term.coeff());
            idx
        }
        None => {
            terms.push(term);
            terms.len() - 1
        }
    }
}

impl Expression {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn constant(value: BigRational) -> Self {
        Self::zero().add_term(Term::constant(value))
    }

    /// The expression consisting of the single generator `g`.
    pub fn atom(generator: Factor) -> Self {
        Self::zero().add_term(Term::atom(generator))
    }

    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        terms
            .into_iter()
            .fold(Self::zero(), |acc, term| acc.add_term(term))
    }

    /// Add one term, merging with an existing term of the same signature.
    /// Terms whose coefficient becomes zero are removed.
    pub fn add_term(mut self, term: Term) -> Self {
        if term.is_zero() {
            return self;
        }
        let idx = merge_term(&mut self.terms, term);
        if self.terms[idx].is_zero() {
            self.terms.remove(idx);
        }
        self
    }

    pub fn add_expr(self, other: Expression) -> Self {
        other
            .terms
            .into_iter()
            .fold(self, |acc, term| acc.add_term(term))
    }

    pub fn sub_expr(self, other: Expression) -> Self {
        self.add_expr(other.negate())
    }

    pub fn negate(self) -> Self {
        self.scale(&-BigRational::one())
    }

    /// Scalar product: every coefficient multiplied by `by`.
    pub fn scale(self, by: &BigRational) -> Self {
        if by.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self.terms.iter().map(|t| t.scaled(by)).collect(),
        }
    }

    /// Termwise (Hadamard) product, distributed over both sums.
    ///
    /// Constant terms act as scalars, so `3 * p` and `p * 3` scale `p`
    /// while `p * zero_one` forms a two-factor term.
    pub fn multiply_factors(&self, other: &Expression) -> Self {
        let mut product = Self::zero();
        for lhs in &self.terms {
            for rhs in &other.terms {
                product = product.add_term(lhs.times(rhs));
            }
        }
        product
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(Term::is_zero)
    }

    /// Distinct generators referenced by any term, in registration order.
    pub fn generators(&self) -> Vec<Factor> {
        let mut all: Vec<Factor> = self
            .terms
            .iter()
            .flat_map(|t| t.factors().iter().copied())
            .collect();
        all.sort_by_key(|g| g.position());
        all.dedup_by_key(|g| g.position());
        all
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.canonicalize().terms == other.canonicalize().terms
    }
}

impl Eq for Expression {}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonicalize().terms.hash(state);
    }
}
