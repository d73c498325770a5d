//! Benchmarks for field arithmetic, generator synthesis and the bound searches.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cyclobound::code::weight::{search_min_weight, WeightLimits};
use cyclobound::{
    bch, ext_bch, find_generators, find_roots, tzeng, BinaryField, CodeParams, Poly,
    PrimitiveTable,
};

fn bench_field_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(2^16) Operations");

    let f = BinaryField::new(16, &PrimitiveTable::standard()).unwrap();
    let a = f.element(0x1234);
    let b = f.element(0xBEEF);

    group.bench_function("add", |bencher| {
        bencher.iter(|| black_box(a) + black_box(b))
    });

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b))
    });

    group.bench_function("inverse", |bencher| bencher.iter(|| black_box(a).inverse()));

    group.bench_function("pow_large", |bencher| {
        bencher.iter(|| black_box(a).pow(65534))
    });

    group.finish();
}

fn bench_poly_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Poly Operations");

    let f = BinaryField::new(8, &PrimitiveTable::standard()).unwrap();
    for size in [16usize, 64] {
        let values: Vec<u64> = (0..size as u64).map(|i| (i * 37 + 1) % 256).collect();
        let p = Poly::from_values(&values, f);
        group.bench_with_input(BenchmarkId::new("mul", size), &p, |bencher, p| {
            bencher.iter(|| black_box(p) * black_box(p))
        });
        let divisor = Poly::from_values(&values[..size / 4], f);
        group.bench_with_input(BenchmarkId::new("div_rem", size), &p, |bencher, p| {
            bencher.iter(|| black_box(p).div_rem(black_box(&divisor)))
        });
    }

    group.finish();
}

fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generator Synthesis");

    for (n, q) in [(7u64, 2u64), (15, 2), (21, 2), (15, 4)] {
        let params = CodeParams::new(n, q, &PrimitiveTable::standard()).unwrap();
        group.bench_with_input(
            BenchmarkId::new("find_generators", format!("n{n}_q{q}")),
            &params,
            |bencher, params| bencher.iter(|| find_generators(black_box(params))),
        );
    }

    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bounds");

    // first degree-15 generator of length 31: three cosets of size 5
    let params = CodeParams::new(31, 2, &PrimitiveTable::standard()).unwrap();
    let alphas = params.ext().powers_of_alpha();
    let g = find_generators(&params)
        .unwrap()
        .into_iter()
        .map(|g| g.into_poly())
        .find(|g| g.degree() == Some(15))
        .unwrap();
    let roots = find_roots(&alphas, &g, params.field_map()).unwrap();

    group.bench_function("find_roots_31", |bencher| {
        bencher.iter(|| find_roots(black_box(&alphas), black_box(&g), params.field_map()))
    });
    group.bench_function("bch_31", |bencher| bencher.iter(|| bch(black_box(&roots))));
    group.bench_function("ext_bch_31", |bencher| {
        bencher.iter(|| ext_bch(black_box(&roots), 31))
    });
    group.bench_function("tzeng_31", |bencher| {
        bencher.iter(|| tzeng(black_box(&roots), 31))
    });

    group.finish();
}

fn bench_weight_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Weight Search");
    group.sample_size(10);

    let params = CodeParams::new(15, 2, &PrimitiveTable::standard()).unwrap();
    // BCH(15, 7) generator, 127 information vectors
    let g = Poly::from_values(&[1, 0, 0, 0, 1, 0, 1, 1, 1], params.base());
    group.bench_function("bch_15_7", |bencher| {
        bencher.iter(|| search_min_weight(black_box(&g), 15, &WeightLimits::default()))
    });

    // Hamming(15, 11), 2047 information vectors
    let h = Poly::from_values(&[1, 1, 0, 0, 1], params.base());
    group.bench_function("hamming_15_11", |bencher| {
        bencher.iter(|| search_min_weight(black_box(&h), 15, &WeightLimits::default()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_field_operations,
    bench_poly_operations,
    bench_synthesis,
    bench_bounds,
    bench_weight_search,
);
criterion_main!(benches);
