//! Expression model for combinations of library generators.
//!
//! An [`Expression`] is a sum of [`Term`]s; each term is an exact rational
//! coefficient times a product (multiset) of generators. Expressions are
//! built through explicit builder operations, canonicalized into a unique
//! normal form, rendered as text and evaluated pointwise.

pub mod canonical;
pub mod display;
pub mod error;
pub mod eval;
pub mod expression;
pub mod term;

pub use canonical::{canonicalize, compare_expressions, compare_terms};
pub use error::EvalError;
pub use eval::Evaluate;
pub use expression::Expression;
pub use term::{Factor, Term};
