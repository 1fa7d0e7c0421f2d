//! Combination search over the generator library.
//!
//! Given a finite integer prefix, [`Searcher::search`] returns every
//! expression within the configured bounds whose prefix matches exactly:
//! single generators (scaled or not), linear combinations of up to
//! `max_generators` generators and scaled termwise products of two
//! generators. Coefficients are solved exactly on a square subsystem of
//! the prefix and verified on every row; results are canonical,
//! deduplicated and ranked.

pub mod config;
pub mod error;
pub mod linalg;
pub mod search;

pub use config::SearchConfig;
pub use error::ConfigError;
pub use linalg::{solve_square_subsystem, SubsystemSolution};
pub use search::{search, Complexity, SearchResult, Searcher};
