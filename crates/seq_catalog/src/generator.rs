//! Atomic generators: named, pure functions `n -> integer` over n >= 0.

use std::fmt;

use num_bigint::BigInt;
use num_integer::binomial;
use num_traits::{One, Zero};

use crate::number_theory;

// ============================================================================
// Generator families
// ============================================================================

/// Closed-form or recurrence family of an atomic generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// `n mod 2`
    ZeroOne,
    /// `n`
    Integer,
    /// `n^e`
    Power(u32),
    /// `start + step * n`
    Arithmetic { start: i64, step: i64 },
    /// The n-th polygonal number with the given number of sides
    Polygonal(u32),
    /// `base^n`
    Geometric(u32),
    /// `f(n) = scale * f(n-1) + f(n-2)` seeded with `first, second`
    Fibonacci { first: i64, second: i64, scale: i64 },
    /// `f(n) = f(n-1) + f(n-2) + f(n-3)`, seeds 0, 1, 1
    Tribonacci,
    Factorial,
    Catalan,
    /// Bell numbers, read off the Bell triangle
    Bell,
    /// Repunits in the given base: 1, 11, 111, ... for base 10
    Repunit(u32),
    /// Base-10 repunits squared
    Demlo,
    /// The n-th prime, `p(0) = 2`
    Prime,
    /// The n-th Mersenne exponent; only the tabulated ones are known
    MersenneExponent,
    /// `2^m - 1` for the n-th Mersenne exponent `m`
    MersennePrime,
    /// Euler's totient of `n + 1`
    Totient,
    /// Divisor sum of `n + 1`
    Sigma,
}

impl GeneratorKind {
    /// Number of indices with a known value; `None` for total families.
    pub fn known_len(&self) -> Option<usize> {
        match self {
            GeneratorKind::MersenneExponent | GeneratorKind::MersennePrime => {
                Some(number_theory::MERSENNE_EXPONENTS.len())
            }
            _ => None,
        }
    }

    /// Value at index `n`, or `None` past the known terms.
    pub fn compute(&self, n: usize) -> Option<BigInt> {
        if self.known_len().is_some_and(|known| n >= known) {
            return None;
        }
        self.closed_form(n)
            .or_else(|| self.recurrence(n + 1).pop())
    }

    /// Values for indices `0..len`, cut short at the known terms.
    ///
    /// Recurrence families iterate once instead of restarting for every index.
    pub fn prefix(&self, len: usize) -> Vec<BigInt> {
        let len = self.known_len().map_or(len, |known| len.min(known));
        if self.is_recurrence() {
            self.recurrence(len)
        } else {
            (0..len).filter_map(|n| self.compute(n)).collect()
        }
    }

    fn is_recurrence(&self) -> bool {
        matches!(
            self,
            GeneratorKind::Fibonacci { .. }
                | GeneratorKind::Tribonacci
                | GeneratorKind::Factorial
                | GeneratorKind::Catalan
                | GeneratorKind::Bell
                | GeneratorKind::Repunit(_)
                | GeneratorKind::Demlo
                | GeneratorKind::Prime
        )
    }

    fn closed_form(&self, n: usize) -> Option<BigInt> {
        let big_n = BigInt::from(n);
        let value = match *self {
            GeneratorKind::ZeroOne => BigInt::from(n % 2),
            GeneratorKind::Integer => big_n,
            GeneratorKind::Power(exponent) => big_n.pow(exponent),
            GeneratorKind::Arithmetic { start, step } => {
                BigInt::from(start) + big_n * BigInt::from(step)
            }
            GeneratorKind::Polygonal(sides) => {
                let sides = BigInt::from(sides);
                let two = BigInt::from(2);
                let pairs = &big_n * (&big_n - BigInt::one()) / &two;
                &big_n + (sides - two) * pairs
            }
            GeneratorKind::Geometric(base) => num_traits::pow(BigInt::from(base), n),
            GeneratorKind::Catalan => {
                binomial(BigInt::from(2 * n), big_n) / BigInt::from(n + 1)
            }
            GeneratorKind::MersenneExponent => BigInt::from(number_theory::mersenne_exponent(n)?),
            GeneratorKind::MersennePrime => {
                let exponent = number_theory::mersenne_exponent(n)?;
                (BigInt::one() << exponent) - BigInt::one()
            }
            GeneratorKind::Totient => BigInt::from(number_theory::totient(n as u64 + 1)),
            GeneratorKind::Sigma => BigInt::from(number_theory::divisor_sum(n as u64 + 1)),
            _ => return None,
        };
        Some(value)
    }

    fn recurrence(&self, len: usize) -> Vec<BigInt> {
        let mut out = Vec::with_capacity(len);
        match *self {
            GeneratorKind::Fibonacci {
                first,
                second,
                scale,
            } => {
                let (mut a, mut b) = (BigInt::from(first), BigInt::from(second));
                for _ in 0..len {
                    let next = &a + &b * BigInt::from(scale);
                    out.push(std::mem::replace(&mut a, std::mem::replace(&mut b, next)));
                }
            }
            GeneratorKind::Tribonacci => {
                let (mut a, mut b, mut c) = (BigInt::zero(), BigInt::one(), BigInt::one());
                for _ in 0..len {
                    let next = &a + &b + &c;
                    out.push(a);
                    a = b;
                    b = c;
                    c = next;
                }
            }
            GeneratorKind::Factorial => {
                let mut acc = BigInt::one();
                for n in 0..len {
                    if n > 0 {
                        acc *= BigInt::from(n);
                    }
                    out.push(acc.clone());
                }
            }
            GeneratorKind::Catalan => {
                // C(k+1) = C(k) * 2(2k+1) / (k+2), exact at every step
                let mut acc = BigInt::one();
                for k in 0..len {
                    out.push(acc.clone());
                    acc = acc * BigInt::from(2 * (2 * k + 1)) / BigInt::from(k + 2);
                }
            }
            GeneratorKind::Bell => {
                let mut row = vec![BigInt::one()];
                for _ in 0..len {
                    out.push(row[0].clone());
                    let mut next = Vec::with_capacity(row.len() + 1);
                    next.push(row[row.len() - 1].clone());
                    for value in &row {
                        let last = &next[next.len() - 1] + value;
                        next.push(last);
                    }
                    row = next;
                }
            }
            GeneratorKind::Repunit(base) => {
                let mut acc = BigInt::one();
                for _ in 0..len {
                    out.push(acc.clone());
                    acc = acc * BigInt::from(base) + BigInt::one();
                }
            }
            GeneratorKind::Demlo => {
                out = GeneratorKind::Repunit(10)
                    .recurrence(len)
                    .into_iter()
                    .map(|r| &r * &r)
                    .collect();
            }
            GeneratorKind::Prime => {
                out.extend(number_theory::primes(len).into_iter().map(BigInt::from));
            }
            // closed forms are evaluated by `closed_form`
            _ => {}
        }
        out
    }
}

// ============================================================================
// Generator
// ============================================================================

/// A registered atomic generator.
///
/// Instances live in the global [`Library`](crate::Library) and are shared by
/// `&'static` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Generator {
    name: &'static str,
    doc: &'static str,
    kind: GeneratorKind,
    position: usize,
}

impl Generator {
    pub(crate) fn new(
        name: &'static str,
        doc: &'static str,
        kind: GeneratorKind,
        position: usize,
    ) -> Self {
        Self {
            name,
            doc,
            kind,
            position,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description of the formula.
    pub fn doc(&self) -> &'static str {
        self.doc
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    /// Registration index in the library (canonical ordering key).
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn known_len(&self) -> Option<usize> {
        self.kind.known_len()
    }

    /// True when the first `len` values are all known.
    pub fn covers(&self, len: usize) -> bool {
        self.known_len().map_or(true, |known| len <= known)
    }

    pub fn compute(&self, n: usize) -> Option<BigInt> {
        self.kind.compute(n)
    }

    /// Up to `len` values; shorter only for partially known generators.
    pub fn prefix(&self, len: usize) -> Vec<BigInt> {
        self.kind.prefix(len)
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
