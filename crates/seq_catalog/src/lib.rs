//! Built-in catalog of atomic integer sequence generators.
//!
//! The catalog is a process-wide, immutable registry populated once on first
//! use. Its registration order is the canonical tie-break order used by the
//! rest of the workspace (term ordering, candidate ranking).

pub mod cache;
pub mod error;
pub mod generator;
pub mod library;
mod number_theory;

pub use cache::PrefixCache;
pub use error::CatalogError;
pub use generator::{Generator, GeneratorKind};
pub use library::{Library, LIBRARY};
