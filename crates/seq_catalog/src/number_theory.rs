//! Integer helpers backing the number-theoretic generators.

/// Known Mersenne exponents, in order. The families built on them are only
/// defined for these indices.
pub(crate) const MERSENNE_EXPONENTS: [u64; 30] = [
    2, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127, 521, 607, 1279, 2203, 2281, 3217, 4253, 4423,
    9689, 9941, 11213, 19937, 21701, 23209, 44497, 86243, 110503, 132049,
];

pub(crate) fn is_prime(m: u64) -> bool {
    if m < 2 {
        return false;
    }
    if m % 2 == 0 {
        return m == 2;
    }
    let mut d = 3u64;
    while d.saturating_mul(d) <= m {
        if m % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// First `count` primes, starting at 2.
pub(crate) fn primes(count: usize) -> Vec<u64> {
    let mut found: Vec<u64> = Vec::with_capacity(count);
    let mut candidate = 2u64;
    while found.len() < count {
        let is_new_prime = found
            .iter()
            .take_while(|&&q| q.saturating_mul(q) <= candidate)
            .all(|&q| candidate % q != 0);
        if is_new_prime {
            found.push(candidate);
        }
        candidate += if candidate == 2 { 1 } else { 2 };
    }
    found
}

/// Euler's totient by trial factorisation.
pub(crate) fn totient(mut m: u64) -> u64 {
    let mut result = m;
    let mut d = 2u64;
    while d.saturating_mul(d) <= m {
        if m % d == 0 {
            while m % d == 0 {
                m /= d;
            }
            result -= result / d;
        }
        d += 1;
    }
    if m > 1 {
        result -= result / m;
    }
    result
}

/// Sum of all positive divisors of `m`.
pub(crate) fn divisor_sum(m: u64) -> u128 {
    let mut total = 0u128;
    let mut d = 1u64;
    while d.saturating_mul(d) <= m {
        if m % d == 0 {
            total += u128::from(d);
            let pair = m / d;
            if pair != d {
                total += u128::from(pair);
            }
        }
        d += 1;
    }
    total
}

/// The n-th Mersenne exponent (0-based), if it is in the table.
pub(crate) fn mersenne_exponent(n: usize) -> Option<u64> {
    MERSENNE_EXPONENTS.get(n).copied()
}
