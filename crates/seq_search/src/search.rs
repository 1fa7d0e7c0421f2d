//! Candidate enumeration, exact solving and ranking.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use rayon::prelude::*;
use seq_ast::{compare_expressions, Expression, Factor, Term};
use seq_catalog::{Library, PrefixCache};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::config::SearchConfig;
use crate::linalg::{solve_square_subsystem, SubsystemSolution};

// ============================================================================
// Results
// ============================================================================

/// Primary ranking key: fewer generators first, then smaller coefficients.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Complexity {
    pub generators: usize,
    pub coefficient_sum: BigRational,
}

impl Complexity {
    pub fn of(expression: &Expression) -> Self {
        Self {
            generators: expression.generators().len(),
            coefficient_sum: expression
                .terms()
                .iter()
                .fold(BigRational::zero(), |acc, t| acc + t.coeff().abs()),
        }
    }
}

/// One ranked match. `expression` is canonical and reproduces the first
/// `matched` target values exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub expression: Expression,
    pub complexity: Complexity,
    pub matched: usize,
}

impl SearchResult {
    fn new(expression: Expression, matched: usize) -> Self {
        let expression = expression.canonicalize();
        Self {
            complexity: Complexity::of(&expression),
            expression,
            matched,
        }
    }
}

/// Full ranking order: complexity, canonical term order, rendered text.
fn rank(a: &SearchResult, b: &SearchResult) -> Ordering {
    a.complexity
        .cmp(&b.complexity)
        .then_with(|| compare_expressions(&a.expression, &b.expression))
        .then_with(|| a.expression.to_string().cmp(&b.expression.to_string()))
}

// ============================================================================
// Candidates
// ============================================================================

/// Why a candidate produced no match. Never surfaced; only traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    AmbiguousSystem,
    Inconsistent,
    CoefficientOverflow,
    NonIntegerCoefficient,
    RedundantGenerator,
}

#[derive(Debug, Clone)]
enum Candidate {
    /// `c_1 * g_1 + ... + c_s * g_s`
    Combination(SmallVec<[Factor; 3]>),
    /// `c * a * b`
    Product(Factor, Factor),
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Combination(factors) => {
                for (i, g) in factors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(g.name())?;
                }
                Ok(())
            }
            Candidate::Product(a, b) => write!(f, "{} * {}", a, b),
        }
    }
}

/// Generators whose first `k` values are all known.
fn usable_generators(k: usize) -> Vec<Factor> {
    Library::global()
        .all()
        .iter()
        .filter(|g| g.covers(k))
        .collect()
}

/// Index subsets of `0..n` with `size` elements, in lexicographic order.
fn combinations(n: usize, size: usize) -> Vec<SmallVec<[usize; 3]>> {
    let mut out = Vec::new();
    if size == 0 || size > n {
        return out;
    }
    let mut idxs: SmallVec<[usize; 3]> = (0..size).collect();
    loop {
        out.push(idxs.clone());
        let Some(i) = (0..size).rev().find(|&i| idxs[i] < n - size + i) else {
            break;
        };
        idxs[i] += 1;
        for j in (i + 1)..size {
            idxs[j] = idxs[j - 1] + 1;
        }
    }
    out
}

// ============================================================================
// Searcher
// ============================================================================

/// Runs bounded combination searches against the built-in library.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    bound: BigRational,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        let bound = config.coefficient_bound();
        Self { config, bound }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// All expressions within bounds whose prefix equals `target`, ranked.
    ///
    /// An empty result means no match within the configured bounds.
    pub fn search(&self, target: &[BigInt]) -> Vec<SearchResult> {
        let k = target.len();
        if k == 0 {
            warn!("empty target prefix, nothing to search");
            return Vec::new();
        }

        let generators = usable_generators(k);
        let cache = PrefixCache::new();
        cache.warm(generators.iter().copied(), k);

        let candidates = self.candidates(&generators, k);
        debug!(
            items = k,
            candidates = candidates.len(),
            max_generators = self.config.max_generators,
            products = self.config.products,
            "search_start"
        );

        let accepted: Vec<Expression> = candidates
            .par_iter()
            .filter_map(|candidate| match self.check(candidate, target, &cache) {
                Ok(expression) => Some(expression),
                Err(reason) => {
                    trace!(candidate = %candidate, reason = ?reason, "candidate_skipped");
                    None
                }
            })
            .collect();

        let mut results: Vec<SearchResult> = accepted
            .into_iter()
            .map(|expression| SearchResult::new(expression, k))
            .collect();
        results.sort_by(rank);
        results.dedup_by(|a, b| a.expression.terms() == b.expression.terms());

        debug!(items = k, results = results.len(), "search_end");
        results
    }

    /// Candidates in deterministic order: subsets by size, then products.
    fn candidates(&self, generators: &[Factor], k: usize) -> Vec<Candidate> {
        let per_unknown = self.config.min_items_per_generator.max(1);
        let mut out = Vec::new();

        for size in 1..=self.config.max_generators.min(k) {
            if size > 1 && k < per_unknown * size {
                break;
            }
            out.extend(combinations(generators.len(), size).into_iter().map(|idxs| {
                Candidate::Combination(idxs.iter().map(|&i| generators[i]).collect())
            }));
        }

        if self.config.products && k >= per_unknown {
            out.extend(
                combinations(generators.len(), 2)
                    .into_iter()
                    .map(|pair| Candidate::Product(generators[pair[0]], generators[pair[1]])),
            );
        }

        if let Some(limit) = self.config.node_limit {
            if out.len() > limit {
                debug!(limit, dropped = out.len() - limit, "node_limit_reached");
                out.truncate(limit);
            }
        }
        out
    }

    fn check(
        &self,
        candidate: &Candidate,
        target: &[BigInt],
        cache: &PrefixCache,
    ) -> Result<Expression, SkipReason> {
        let k = target.len();
        let expression = match candidate {
            Candidate::Combination(factors) => {
                let columns: Vec<Arc<[BigInt]>> =
                    factors.iter().map(|g| cache.prefix(g, k)).collect();
                if let ([g], [column]) = (factors.as_slice(), columns.as_slice()) {
                    if column.as_ref() == target {
                        return Ok(Expression::atom(*g));
                    }
                }
                let refs: Vec<&[BigInt]> = columns.iter().map(|c| c.as_ref()).collect();
                let coeffs = self.solve(&refs, target)?;
                Expression::from_terms(
                    coeffs
                        .into_iter()
                        .zip(factors.iter())
                        .map(|(coeff, &g)| Term::new(coeff, [g])),
                )
            }
            Candidate::Product(a, b) => {
                let (lhs, rhs) = (cache.prefix(a, k), cache.prefix(b, k));
                let column: Vec<BigInt> = lhs.iter().zip(rhs.iter()).map(|(x, y)| x * y).collect();
                let coeff = self
                    .solve(&[column.as_slice()], target)?
                    .into_iter()
                    .next()
                    .ok_or(SkipReason::AmbiguousSystem)?;
                Expression::from_terms([Term::new(coeff, [*a, *b])])
            }
        };

        if expression.reproduces(target, cache) {
            Ok(expression)
        } else {
            Err(SkipReason::Inconsistent)
        }
    }

    /// Solve `target = Σ c_i * column_i` on a square subsystem and apply
    /// the coefficient filters. The caller verifies the remaining rows.
    fn solve(&self, columns: &[&[BigInt]], target: &[BigInt]) -> Result<Vec<BigRational>, SkipReason> {
        let coeffs = match solve_square_subsystem(columns, target) {
            SubsystemSolution::Unique(coeffs) => coeffs,
            SubsystemSolution::Singular => return Err(SkipReason::AmbiguousSystem),
            SubsystemSolution::Inconsistent => return Err(SkipReason::Inconsistent),
        };
        for coeff in &coeffs {
            if coeff.is_zero() {
                return Err(SkipReason::RedundantGenerator);
            }
            if coeff.abs() > self.bound {
                return Err(SkipReason::CoefficientOverflow);
            }
            if !self.config.rationals && !coeff.is_integer() {
                return Err(SkipReason::NonIntegerCoefficient);
            }
        }
        Ok(coeffs)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Search the built-in library with the default configuration.
pub fn search(target: &[BigInt]) -> Vec<SearchResult> {
    Searcher::default().search(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().copied().map(BigInt::from).collect()
    }

    fn rendered(results: &[SearchResult]) -> Vec<String> {
        results.iter().map(|r| r.expression.to_string()).collect()
    }

    #[test]
    fn test_combinations_lexicographic() {
        let all = combinations(4, 2);
        let pairs: Vec<Vec<usize>> = all.iter().map(|c| c.to_vec()).collect();
        assert_eq!(
            pairs,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(combinations(25, 3).len(), 2300);
        assert!(combinations(2, 3).is_empty());
    }

    fn candidate_count(searcher: &Searcher, k: usize) -> usize {
        searcher.candidates(&usable_generators(k), k).len()
    }

    #[test]
    fn test_candidate_counts_respect_prefix_length() {
        let searcher = Searcher::default();
        let n = Library::global().len();
        // k = 3: singles only, then products
        assert_eq!(candidate_count(&searcher, 3), n + n * (n - 1) / 2);
        // k = 1: singles only
        assert_eq!(candidate_count(&searcher, 1), n);
        // k = 6: singles, pairs, triples, products
        let expected = n + 2 * (n * (n - 1) / 2) + n * (n - 1) * (n - 2) / 6;
        assert_eq!(candidate_count(&searcher, 6), expected);
    }

    #[test]
    fn test_partially_known_generators_drop_out_of_long_searches() {
        let n = Library::global().len();
        assert_eq!(usable_generators(30).len(), n);
        let long = usable_generators(31);
        assert_eq!(long.len(), n - 2);
        assert!(long.iter().all(|g| g.name() != "m_exp" && g.name() != "m_primes"));
    }

    #[test]
    fn test_node_limit_truncates() {
        let config = SearchConfig {
            node_limit: Some(5),
            ..SearchConfig::default()
        };
        assert_eq!(candidate_count(&Searcher::new(config), 10), 5);
    }

    #[test]
    fn test_complexity_counts_distinct_generators() {
        let lib = Library::global();
        let p = lib.resolve("p").unwrap();
        let z = lib.resolve("zero_one").unwrap();
        let e = Expression::from_terms([
            Term::new(BigRational::from_integer(BigInt::from(-3)), [p, z]),
            Term::new(BigRational::from_integer(BigInt::from(2)), [p]),
        ]);
        let c = Complexity::of(&e);
        assert_eq!(c.generators, 2);
        assert_eq!(c.coefficient_sum, BigRational::from_integer(BigInt::from(5)));
    }

    #[test]
    fn test_primes() {
        let results = search(&ints(&[2, 3, 5, 7, 11]));
        assert_eq!(rendered(&results)[0], "p");
        assert_eq!(results[0].matched, 5);
    }

    #[test]
    fn test_scaled_single_generator() {
        let results = search(&ints(&[0, 3, 6, 9, 12]));
        let texts = rendered(&results);
        assert_eq!(texts[0], "3 * i");
        assert!(!texts.contains(&"3/2 * even".to_string()));
    }

    #[test]
    fn test_rationals_allowed_when_enabled() {
        let config = SearchConfig {
            rationals: true,
            ..SearchConfig::default()
        };
        let results = Searcher::new(config).search(&ints(&[0, 3, 6, 9, 12]));
        let texts = rendered(&results);
        // smaller coefficient sum outranks the integer solution
        assert_eq!(texts[0], "3/2 * even");
        assert!(texts.contains(&"3 * i".to_string()));
    }

    #[test]
    fn test_coefficient_bound() {
        let config = SearchConfig {
            max_coefficient: 2,
            ..SearchConfig::default()
        };
        let results = Searcher::new(config).search(&ints(&[0, 3, 6, 9, 12]));
        assert!(!rendered(&results).contains(&"3 * i".to_string()));
    }

    #[test]
    fn test_products_can_be_disabled() {
        let target = ints(&[0, 3, 0, 7, 0, 13, 0, 19, 0, 29]);
        let config = SearchConfig {
            products: false,
            ..SearchConfig::default()
        };
        let texts = rendered(&Searcher::new(config).search(&target));
        assert!(!texts.contains(&"zero_one * p".to_string()));
        assert_eq!(rendered(&search(&target))[0], "zero_one * p");
    }

    #[test]
    fn test_zero_target_has_no_match() {
        assert!(search(&ints(&[0, 0, 0, 0])).is_empty());
        assert!(search(&[]).is_empty());
    }

    #[test]
    fn test_single_zero_matches_generators_starting_at_zero() {
        let results = search(&ints(&[0]));
        let texts = rendered(&results);
        assert_eq!(
            texts,
            vec![
                "zero_one",
                "i",
                "square",
                "cube",
                "even",
                "triangular",
                "pentagonal",
                "hexagonal",
                "fib01",
                "pell",
                "tribonacci"
            ]
        );
        assert!(results.iter().all(|r| r.complexity.generators == 1));
    }
}
