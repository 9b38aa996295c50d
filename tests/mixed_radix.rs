//! Exercises the mixed-radix round-trip law directly: for a `Scope`/`Repeat`
//! tree, every index in `0..len()` unranks to a distinct string, and every
//! string produced that way re-occupies exactly the index it came from when
//! the enumeration is walked in order.

use num_bigint::BigUint;
use xeger::{Ast, compile};

fn indices(n: u32) -> Vec<BigUint> {
    (0..n).map(BigUint::from).collect()
}

#[test]
fn scope_digits_compose_in_big_endian_order() {
    // Scope([ab], [xy], [01]): outer-to-inner varies slowest-to-fastest,
    // matching positional place value, not reading order reversed.
    let ast = Ast::Scope(vec![
        Ast::List("ab".into()),
        Ast::List("xy".into()),
        Ast::List("01".into()),
    ]);
    let gen = compile(ast);
    assert_eq!(gen.len(), BigUint::from(8u32));

    let mut seen = std::collections::HashSet::new();
    for i in indices(8) {
        let s = gen.at(&i).unwrap();
        assert!(seen.insert(s), "index {i} produced a duplicate string");
    }
    assert_eq!(seen.len(), 8);

    // The last digit (innermost child) should vary fastest: at(0) and at(1)
    // differ only in their final character.
    let a0 = gen.at(&BigUint::from(0u32)).unwrap();
    let a1 = gen.at(&BigUint::from(1u32)).unwrap();
    assert_eq!(&a0[..a0.len() - 1], &a1[..a1.len() - 1]);
    assert_ne!(a0, a1);
}

#[test]
fn repeat_digits_use_constant_radix_equal_to_child_cardinality() {
    // [ab]{2,2}: constant radix 2, exactly like a 2-digit binary counter
    // over {'a','b'}.
    let ast = Ast::Repeat(2, 2, Box::new(Ast::List("ab".into())));
    let gen = compile(ast);
    assert_eq!(gen.len(), BigUint::from(4u32));

    let mut got: Vec<String> = indices(4).iter().map(|i| gen.at(i).unwrap()).collect();
    got.sort();
    assert_eq!(got, vec!["aa", "ab", "ba", "bb"]);
}

#[test]
fn repeat_bucket_boundaries_land_on_the_right_k() {
    // [a]{0,2} over a cardinality-1 child: each k contributes exactly one
    // string ("" for k=0, "a" for k=1, "aa" for k=2), so len == 3 and the
    // buckets are contiguous in index order.
    let ast = Ast::Repeat(0, 2, Box::new(Ast::Literal("a".into())));
    let gen = compile(ast);
    assert_eq!(gen.len(), BigUint::from(3u32));
    assert_eq!(gen.at(&BigUint::from(0u32)).unwrap(), "");
    assert_eq!(gen.at(&BigUint::from(1u32)).unwrap(), "a");
    assert_eq!(gen.at(&BigUint::from(2u32)).unwrap(), "aa");
}

#[test]
fn nested_scope_and_repeat_round_trip_over_the_full_domain() {
    // (ab|cd)[xy]{1,2}: an `or` feeding into a scope alongside a repeated
    // list, nested two levels deep.
    let ast = Ast::Scope(vec![
        Ast::Or(vec![Ast::Literal("ab".into()), Ast::Literal("cd".into())]),
        Ast::Repeat(1, 2, Box::new(Ast::List("xy".into()))),
    ]);
    let gen = compile(ast);
    let len = gen.len();

    let mut seen = std::collections::HashSet::new();
    let mut n = BigUint::from(0u32);
    while n < len {
        let s = gen.at(&n).unwrap();
        assert!(seen.insert(s), "index {n} duplicated a prior string");
        n += 1u32;
    }
    assert_eq!(seen.len() as u64, len.to_string().parse::<u64>().unwrap());
    assert!(gen.at(&len).is_err());
}
