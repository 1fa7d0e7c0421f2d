//! Textual expression syntax.
//!
//! Parses the arithmetic language accepted by `seq_cli test` (integers,
//! generator names, `+ - *`, unary minus and parentheses) into an
//! [`seq_ast::Expression`]. The canonical rendering of any integer-coefficient
//! expression parses back to an equal expression.

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse, MAX_NESTING};
