//! The process-wide generator registry.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::error::CatalogError;
use crate::generator::{Generator, GeneratorKind};

/// The built-in catalog, populated once on first access.
pub static LIBRARY: LazyLock<Library> = LazyLock::new(Library::builtin);

/// Ordered, immutable collection of atomic generators.
#[derive(Debug)]
pub struct Library {
    generators: Vec<Generator>,
    by_name: FxHashMap<&'static str, usize>,
}

impl Library {
    /// The global built-in library.
    pub fn global() -> &'static Library {
        &LIBRARY
    }

    fn builtin() -> Self {
        let mut lib = Library {
            generators: Vec::new(),
            by_name: FxHashMap::default(),
        };

        lib.register(
            "zero_one",
            "f(n) := n % 2  => [0, 1, 0, 1, 0, 1, ...]",
            GeneratorKind::ZeroOne,
        );
        lib.register("i", "f(n) := n", GeneratorKind::Integer);
        lib.register("square", "f(n) := n ** 2", GeneratorKind::Power(2));
        lib.register("cube", "f(n) := n ** 3", GeneratorKind::Power(3));
        lib.register(
            "even",
            "f(n) := 2 * n",
            GeneratorKind::Arithmetic { start: 0, step: 2 },
        );
        lib.register(
            "triangular",
            "f(n) := the n-th triangular number",
            GeneratorKind::Polygonal(3),
        );
        lib.register(
            "pentagonal",
            "f(n) := the n-th pentagonal number",
            GeneratorKind::Polygonal(5),
        );
        lib.register(
            "hexagonal",
            "f(n) := the n-th hexagonal number",
            GeneratorKind::Polygonal(6),
        );
        lib.register("power_of_2", "f(n) := 2 ** n", GeneratorKind::Geometric(2));
        lib.register("power_of_3", "f(n) := 3 ** n", GeneratorKind::Geometric(3));
        lib.register(
            "fib01",
            "f(n) := f(n - 2) + f(n - 1), f(0) := 0, f(1) := 1 (Fibonacci sequence [0, 1, 1, 2, 3, 5, 8, ...])",
            GeneratorKind::Fibonacci {
                first: 0,
                second: 1,
                scale: 1,
            },
        );
        lib.register(
            "fib11",
            "f(n) := f(n - 2) + f(n - 1), f(0) := 1, f(1) := 1 (Fibonacci sequence [1, 1, 2, 3, 5, 8, ...])",
            GeneratorKind::Fibonacci {
                first: 1,
                second: 1,
                scale: 1,
            },
        );
        lib.register(
            "lucas",
            "f(n) := f(n - 2) + f(n - 1), f(0) := 2, f(1) := 1 (Lucas numbers)",
            GeneratorKind::Fibonacci {
                first: 2,
                second: 1,
                scale: 1,
            },
        );
        lib.register(
            "pell",
            "f(n) := 2 * f(n - 1) + f(n - 2), f(0) := 0, f(1) := 1 (Pell numbers)",
            GeneratorKind::Fibonacci {
                first: 0,
                second: 1,
                scale: 2,
            },
        );
        lib.register(
            "tribonacci",
            "f(n) := f(n - 1) + f(n - 2) + f(n - 3), f(0) := 0, f(1) := 1, f(2) := 1",
            GeneratorKind::Tribonacci,
        );
        lib.register(
            "factorial",
            "f(n) := n * f(n - 1), f(0) := 1",
            GeneratorKind::Factorial,
        );
        lib.register(
            "catalan",
            "f(n) := the n-th Catalan number",
            GeneratorKind::Catalan,
        );
        lib.register("bell", "f(n) := the n-th Bell number", GeneratorKind::Bell);
        lib.register(
            "repunit",
            "f(n) := the repunit sequence in base 10",
            GeneratorKind::Repunit(10),
        );
        lib.register(
            "demlo",
            "f(n) := the Demlo numbers, defined as repunit ** 2",
            GeneratorKind::Demlo,
        );
        lib.register("p", "f(n) := the n-th prime number", GeneratorKind::Prime);
        lib.register(
            "m_exp",
            "f(n) := the n-th Mersenne exponent (first 30 known)",
            GeneratorKind::MersenneExponent,
        );
        lib.register(
            "m_primes",
            "f(n) := the n-th Mersenne prime (first 30 known)",
            GeneratorKind::MersennePrime,
        );
        lib.register(
            "phi",
            "f(n) := count numbers <= n + 1 and prime to n + 1 (Euler's totient function)",
            GeneratorKind::Totient,
        );
        lib.register(
            "sigma",
            "f(n) := sum divisors of n + 1",
            GeneratorKind::Sigma,
        );

        lib
    }

    fn register(&mut self, name: &'static str, doc: &'static str, kind: GeneratorKind) {
        debug_assert!(
            !self.by_name.contains_key(name),
            "generator '{}' registered twice",
            name
        );
        let position = self.generators.len();
        self.generators
            .push(Generator::new(name, doc, kind, position));
        self.by_name.insert(name, position);
    }

    /// Look up a generator by name.
    pub fn resolve(&self, name: &str) -> Result<&Generator, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::UnknownGenerator(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Generator> {
        self.by_name.get(name).map(|&idx| &self.generators[idx])
    }

    /// All generators in registration order.
    pub fn all(&self) -> &[Generator] {
        &self.generators
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}
