//! Textual rendering of terms and expressions.
//!
//! - `1 * g` renders as `g`, `-1 * g` as `-g`
//! - other coefficients render as `<coeff> * g1 * g2`
//! - terms join with ` + ` / ` - `; only a negative first term shows its sign
//! - the empty expression renders as `0`

use std::fmt;

use num_traits::{One, Signed};

use crate::expression::Expression;
use crate::term::Term;

fn fmt_magnitude(term: &Term, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let magnitude = term.coeff().abs();
    if term.is_constant() {
        return write!(f, "{}", magnitude);
    }
    if !magnitude.is_one() {
        write!(f, "{} * ", magnitude)?;
    }
    for (i, generator) in term.factors().iter().enumerate() {
        if i > 0 {
            f.write_str(" * ")?;
        }
        f.write_str(generator.name())?;
    }
    Ok(())
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        fmt_magnitude(self, f)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms().is_empty() {
            return f.write_str("0");
        }
        for (i, term) in self.terms().iter().enumerate() {
            match (i, term.is_negative()) {
                (0, true) => f.write_str("-")?,
                (0, false) => {}
                (_, true) => f.write_str(" - ")?,
                (_, false) => f.write_str(" + ")?,
            }
            fmt_magnitude(term, f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Expression, Factor, Term};
    use num_bigint::BigInt;
    use num_rational::BigRational;
    use seq_catalog::Library;

    fn named(name: &str) -> Factor {
        Library::global().resolve(name).expect("registered generator")
    }

    fn int(v: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(v))
    }

    #[test]
    fn test_render_atom_and_negation() {
        assert_eq!(Expression::atom(named("p")).to_string(), "p");
        assert_eq!(Expression::atom(named("p")).negate().to_string(), "-p");
    }

    #[test]
    fn test_render_linear_combination() {
        let e = Expression::from_terms([
            Term::new(int(8), [named("m_exp")]),
            Term::new(int(-3), [named("p")]),
        ])
        .canonicalize();
        assert_eq!(e.to_string(), "-3 * p + 8 * m_exp");

        let e = Expression::from_terms([
            Term::atom(named("p")),
            Term::new(int(-7), [named("fib01")]),
        ])
        .canonicalize();
        assert_eq!(e.to_string(), "-7 * fib01 + p");
    }

    #[test]
    fn test_render_subtraction_and_products() {
        let e = Expression::from_terms([
            Term::atom(named("fib01")),
            Term::new(int(-2), [named("p")]),
        ])
        .canonicalize();
        assert_eq!(e.to_string(), "fib01 - 2 * p");

        let e = Expression::from_terms([Term::new(int(1), [named("p"), named("zero_one")])]);
        assert_eq!(e.to_string(), "zero_one * p");

        let e = Expression::from_terms([Term::new(int(-4), [named("p"), named("p")])]);
        assert_eq!(e.to_string(), "-4 * p * p");
    }

    #[test]
    fn test_render_constants_and_zero() {
        assert_eq!(Expression::zero().to_string(), "0");
        let e = Expression::atom(named("p"))
            .sub_expr(Expression::constant(int(1)))
            .canonicalize();
        assert_eq!(e.to_string(), "-1 + p");
        let half = BigRational::new(BigInt::from(1), BigInt::from(2));
        assert_eq!(
            Expression::atom(named("even")).scale(&half).to_string(),
            "1/2 * even"
        );
    }
}
