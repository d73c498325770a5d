use proptest::prelude::*;

use cyclobound::code::bounds::verify_rectangle;
use cyclobound::code::coset::{partition, root_cosets};
use cyclobound::code::generator::check_divides;
use cyclobound::{
    bch, ext_bch, find_generators, find_roots, tzeng, AnalysisConfig, Analyzer, CodeParams, Poly,
    PrimitiveTable, RootSet,
};

/// Codes small enough to analyze every generator.
const CODES: &[(u64, u64)] = &[
    (3, 2),
    (5, 2),
    (7, 2),
    (9, 2),
    (15, 2),
    (17, 2),
    (21, 2),
    (3, 4),
    (5, 4),
    (7, 4),
    (9, 4),
    (3, 16),
    (7, 8),
    (9, 8),
    (5, 16),
];

fn params(n: u64, q: u64) -> CodeParams {
    CodeParams::new(n, q, &PrimitiveTable::standard()).unwrap()
}

fn generators(p: &CodeParams) -> Vec<Poly> {
    find_generators(p)
        .unwrap()
        .into_iter()
        .map(|g| g.into_poly())
        .collect()
}

// ===== Generator synthesis =====

#[test]
fn cosets_partition_the_group() {
    for &(n, q) in CODES {
        let p = params(n, q);
        let order = p.group_order();
        let mut seen = vec![0u32; order as usize];
        for c in partition(q, order) {
            for &e in c.members() {
                seen[e as usize] += 1;
            }
        }
        assert!(seen.iter().all(|&c| c == 1), "n={n} q={q}");

        // the root cosets hold exactly the n-th roots of unity
        let step = order / n;
        let mut roots: Vec<u64> = root_cosets(&p)
            .iter()
            .flat_map(|c| c.members().to_vec())
            .collect();
        roots.sort_unstable();
        let expected: Vec<u64> = (0..n).map(|j| j * step).collect();
        assert_eq!(roots, expected, "n={n} q={q}");
    }
}

#[test]
fn every_generator_divides_xn_minus_1() {
    for &(n, q) in CODES {
        let p = params(n, q);
        let xn_1 = Poly::x_pow_n_minus_one(n as usize, p.base());
        for g in generators(&p) {
            assert!(check_divides(&g, n).is_ok(), "n={n} q={q} g={g}");
            assert!(xn_1.rem(&g).unwrap().is_zero());
            let degree = g.degree().unwrap();
            assert!(degree >= 1 && degree < n as usize);
        }
    }
}

#[test]
fn root_count_equals_degree() {
    for &(n, q) in CODES {
        let p = params(n, q);
        let alphas = p.ext().powers_of_alpha();
        for g in generators(&p) {
            let roots = find_roots(&alphas, &g, p.field_map()).unwrap();
            assert_eq!(roots.len(), g.degree().unwrap(), "n={n} q={q} g={g}");
        }
    }
}

#[test]
fn root_finder_is_idempotent() {
    for &(n, q) in CODES {
        let p = params(n, q);
        let alphas = p.ext().powers_of_alpha();
        for g in generators(&p) {
            let first = find_roots(&alphas, &g, p.field_map()).unwrap();
            let second = find_roots(&alphas, &g, p.field_map()).unwrap();
            assert_eq!(first, second);
        }
    }
}

// ===== Bounds =====

#[test]
fn bounds_are_ordered_and_witnesses_replay() {
    let config = AnalysisConfig {
        weight_limit: 1 << 10,
        ..AnalysisConfig::default()
    };
    for &(n, q) in CODES {
        let p = params(n, q);
        let alphas = p.ext().powers_of_alpha();
        let analyzer = Analyzer::new(p.clone(), config);
        let batch = analyzer.analyze_code().unwrap();
        assert_eq!(batch.failures(), 0, "n={n} q={q}");

        for report in batch.reports() {
            assert!(report.bounds_are_ordered(), "n={n} q={q} g={}", report.generator);
            if let Some(rect) = report.tzeng.witness() {
                let roots = find_roots(&alphas, &report.generator, p.field_map()).unwrap();
                assert!(verify_rectangle(&roots, rect).is_ok());
            }
        }
    }
}

fn arb_root_set() -> impl Strategy<Value = (RootSet, u64)> {
    prop::sample::select(vec![7u64, 15, 31, 63]).prop_flat_map(|order| {
        prop::collection::vec(0..order, 1..12)
            .prop_map(move |powers| (RootSet::from_powers(powers, order), order))
    })
}

proptest! {
    #[test]
    fn bound_chain_on_arbitrary_roots((roots, n) in arb_root_set()) {
        let b = bch(&roots);
        let e = ext_bch(&roots, n);
        let t = tzeng(&roots, n).unwrap();
        prop_assert!(b.value() <= e.value());
        prop_assert!(e.value() <= t.value());
    }
}

proptest! {
    #[test]
    fn tzeng_witness_always_replays((roots, n) in arb_root_set()) {
        let t = tzeng(&roots, n).unwrap();
        if let Some(rect) = t.witness() {
            prop_assert_eq!(rect.designed_distance(), t.value());
            prop_assert!(verify_rectangle(&roots, rect).is_ok());
        }
    }
}
