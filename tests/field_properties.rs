use proptest::prelude::*;

use cyclobound::{BinaryField, Gf2n, Poly, PrimitiveTable};

fn gf256() -> BinaryField {
    BinaryField::new(8, &PrimitiveTable::standard()).unwrap()
}

fn gf16() -> BinaryField {
    BinaryField::new(4, &PrimitiveTable::standard()).unwrap()
}

fn arb_gf256() -> impl Strategy<Value = Gf2n> {
    (0u64..256).prop_map(|v| gf256().element(v))
}

fn arb_gf256_nonzero() -> impl Strategy<Value = Gf2n> {
    (1u64..256).prop_map(|v| gf256().element(v))
}

fn arb_poly_gf16(max_len: usize) -> impl Strategy<Value = Poly> {
    prop::collection::vec(0u64..16, 0..max_len).prop_map(|v| Poly::from_values(&v, gf16()))
}

// ===== Addition properties =====

proptest! {
    #[test]
    fn addition_commutative(a in arb_gf256(), b in arb_gf256()) {
        prop_assert_eq!(a + b, b + a);
    }
}

proptest! {
    #[test]
    fn addition_associative(a in arb_gf256(), b in arb_gf256(), c in arb_gf256()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }
}

proptest! {
    #[test]
    fn characteristic_two(a in arb_gf256()) {
        prop_assert_eq!(a + a, gf256().zero());
        prop_assert_eq!(-a, a);
        prop_assert_eq!(a - a, gf256().zero());
    }
}

// ===== Multiplication properties =====

proptest! {
    #[test]
    fn multiplication_commutative(a in arb_gf256(), b in arb_gf256()) {
        prop_assert_eq!(a * b, b * a);
    }
}

proptest! {
    #[test]
    fn multiplication_associative(a in arb_gf256(), b in arb_gf256(), c in arb_gf256()) {
        prop_assert_eq!((a * b) * c, a * (b * c));
    }
}

proptest! {
    #[test]
    fn distributive(a in arb_gf256(), b in arb_gf256(), c in arb_gf256()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }
}

proptest! {
    #[test]
    fn multiplicative_identity(a in arb_gf256()) {
        prop_assert_eq!(a * gf256().one(), a);
    }
}

proptest! {
    #[test]
    fn multiplicative_inverse(a in arb_gf256_nonzero()) {
        let inv = a.inverse().unwrap();
        prop_assert_eq!(a * inv, gf256().one());
    }
}

// ===== Exponentiation =====

proptest! {
    #[test]
    fn fermat_little_theorem(a in arb_gf256_nonzero()) {
        prop_assert!(a.pow(255).is_one());
    }
}

proptest! {
    #[test]
    fn pow_adds_exponents(a in arb_gf256(), e1 in 0u64..600, e2 in 0u64..600) {
        prop_assert_eq!(a.pow(e1) * a.pow(e2), a.pow(e1 + e2));
    }
}

proptest! {
    #[test]
    fn frobenius_is_additive(a in arb_gf256(), b in arb_gf256()) {
        prop_assert_eq!((a + b).pow(2), a.pow(2) + b.pow(2));
    }
}

// ===== Polynomial properties =====

proptest! {
    #[test]
    fn poly_mul_commutative(p in arb_poly_gf16(8), q in arb_poly_gf16(8)) {
        prop_assert_eq!(&p * &q, &q * &p);
    }
}

proptest! {
    #[test]
    fn poly_division_identity(p in arb_poly_gf16(12), d in arb_poly_gf16(6)) {
        prop_assume!(!d.is_zero());
        let (quot, rem) = p.div_rem(&d).unwrap();
        prop_assert_eq!(quot * &d + &rem, p);
        prop_assert!(rem.is_zero() || rem.degree() < d.degree());
    }
}

proptest! {
    #[test]
    fn eval_is_ring_homomorphism(p in arb_poly_gf16(8), q in arb_poly_gf16(8), x in 0u64..16) {
        let x = gf16().element(x);
        prop_assert_eq!((&p * &q).eval(x), p.eval(x) * q.eval(x));
    }
}

proptest! {
    #[test]
    fn product_weight_never_exceeds_lengths(p in arb_poly_gf16(6), q in arb_poly_gf16(6)) {
        let y = &p * &q;
        prop_assert!(y.weight() <= p.weight() * q.weight());
    }
}
