//! Codes over GF(4)
//!
//! This example demonstrates:
//! - Embedding GF(4) into GF(16) with a `FieldMap`
//! - Parsing an explicit generator from base-field digits
//! - Capping the brute-force weight search
//!
//! Run with: cargo run --example gf4_length5

use cyclobound::code::weight::WeightSearch;
use cyclobound::{parse_generator, AnalysisConfig, Analyzer, CodeParams, PrimitiveTable};

fn main() {
    println!("=== Length 5 over GF(4) ===\n");

    let params = CodeParams::new(5, 4, &PrimitiveTable::standard()).unwrap();

    println!("--- GF(4) inside GF(16) ---\n");
    for (base, ext) in params.field_map().entries() {
        println!("{} -> {}", base, ext);
    }
    println!();

    let analyzer = Analyzer::new(params, AnalysisConfig::default());

    println!("--- Explicit generator x + 1 ---\n");
    let g = parse_generator("11", analyzer.params()).unwrap();
    let r = analyzer.analyze(&g).unwrap();
    println!("g(x) = {}  roots {:?}", r.generator, r.roots);
    println!("BCH bound: {}", r.bch.value());
    if let WeightSearch::Exhaustive(w) = &r.weight {
        println!("min weight {} from u(x) = {}: c(x) = {}", w.weight, w.information, w.codeword);
    }
    println!();

    println!("--- Capped weight search ---\n");
    let capped = Analyzer::new(
        analyzer.params().clone(),
        AnalysisConfig {
            weight_limit: 16,
            samples: 32,
            seed: 1,
            ..AnalysisConfig::default()
        },
    );
    let r = capped.analyze(&g).unwrap();
    println!("{:?}", r.weight);
}
