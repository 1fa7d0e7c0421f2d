//! Canonical normal form and the total orders behind it.
//!
//! Term order:
//! - constant terms first
//! - then by the smallest registration position among the factors
//! - then by factor count
//! - then lexically by factor names (in canonical factor order)
//!
//! Canonical form is the sole basis for expression equality and for
//! deduplicating search candidates.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::expression::{merge_term, Expression};
use crate::term::Term;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct TermKey {
    min_position: Option<usize>,
    factor_count: usize,
    names: SmallVec<[&'static str; 2]>,
}

fn term_key(term: &Term) -> TermKey {
    TermKey {
        min_position: term.factors().iter().map(|g| g.position()).min(),
        factor_count: term.factors().len(),
        names: term.factors().iter().map(|g| g.name()).collect(),
    }
}

/// Total order over terms used for canonical rendering.
pub fn compare_terms(a: &Term, b: &Term) -> Ordering {
    term_key(a)
        .cmp(&term_key(b))
        .then_with(|| a.coeff().cmp(b.coeff()))
}

/// Lexicographic order over term sequences; callers pass canonical forms.
pub fn compare_expressions(a: &Expression, b: &Expression) -> Ordering {
    for (ta, tb) in a.terms().iter().zip(b.terms().iter()) {
        match compare_terms(ta, tb) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Merge like terms, drop zero coefficients and sort.
pub fn canonicalize(expr: &Expression) -> Expression {
    let mut terms: Vec<Term> = Vec::with_capacity(expr.len());
    for term in expr.terms() {
        merge_term(&mut terms, term.clone());
    }
    terms.retain(|t| !t.is_zero());
    terms.sort_by(compare_terms);
    Expression { terms }
}

impl Expression {
    pub fn canonicalize(&self) -> Expression {
        canonicalize(self)
    }

    pub fn is_canonical(&self) -> bool {
        !self.terms().iter().any(Term::is_zero)
            && self
                .terms()
                .windows(2)
                .all(|w| {
                    !w[0].same_signature(&w[1]) && compare_terms(&w[0], &w[1]) == Ordering::Less
                })
    }
}
