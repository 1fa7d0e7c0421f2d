//! Rendering followed by parsing reproduces the canonical expression.

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use seq_ast::{canonicalize, Expression, Term};
use seq_catalog::Library;
use seq_parser::parse;

fn arb_expression() -> impl Strategy<Value = Expression> {
    let pool = Library::global().len();
    let term = (-20i64..=20, prop::collection::vec(0..pool, 0..=2));
    prop::collection::vec(term, 1..5).prop_map(|raw| {
        let lib = Library::global();
        Expression::from_terms(raw.into_iter().map(|(coeff, idxs)| {
            let factors: Vec<_> = idxs.into_iter().map(|i| &lib.all()[i]).collect();
            Term::new(BigRational::from_integer(BigInt::from(coeff)), factors)
        }))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn canonical_text_parses_back(e in arb_expression()) {
        let canon = canonicalize(&e);
        let text = canon.to_string();
        let reparsed = parse(&text).expect("rendered expression parses");
        let recanon = canonicalize(&reparsed);
        prop_assert_eq!(recanon.terms(), canon.terms());
    }
}

#[test]
fn every_generator_name_parses() {
    for g in Library::global().all() {
        let e = parse(g.name()).expect("generator name parses");
        assert_eq!(e.to_string(), g.name());
    }
}
