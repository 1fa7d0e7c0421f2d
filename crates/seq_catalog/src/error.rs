//! Error types for the generator catalog.

use thiserror::Error;

/// Errors that can occur when looking up generators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The identifier does not name any registered generator
    #[error("unknown generator '{0}'")]
    UnknownGenerator(String),
}
