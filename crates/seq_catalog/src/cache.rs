//! Session-scoped memoization of generator prefixes.

use std::sync::{Arc, PoisonError, RwLock};

use num_bigint::BigInt;
use rustc_hash::FxHashMap;

use crate::generator::Generator;

type PrefixKey = (&'static str, usize);

/// Maps `(generator name, length)` to the computed prefix.
///
/// Safe to share across worker threads. A search warms it for the whole
/// library up front, after which it is only read.
#[derive(Debug, Default)]
pub struct PrefixCache {
    entries: RwLock<FxHashMap<PrefixKey, Arc<[BigInt]>>>,
}

impl PrefixCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix of `generator` with `len` values, computed at most once.
    /// Partially known generators yield at most their known terms.
    pub fn prefix(&self, generator: &Generator, len: usize) -> Arc<[BigInt]> {
        let key = (generator.name(), len);
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = entries.get(&key) {
                return Arc::clone(hit);
            }
        }
        let values: Arc<[BigInt]> = generator.prefix(len).into();
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(key).or_insert(values))
    }

    /// Populate the cache for every generator at `len`.
    pub fn warm<'a>(&self, generators: impl IntoIterator<Item = &'a Generator>, len: usize) {
        for generator in generators {
            self.prefix(generator, len);
        }
    }

    pub fn contains(&self, name: &str, len: usize) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.keys().any(|&(n, l)| n == name && l == len)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
