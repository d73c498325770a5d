//! The Hamming (7, 4) Code
//!
//! This example demonstrates:
//! - Building GF(2) and GF(8) for cyclic codes of length 7
//! - Irreducible factors of x^7 - 1 and the generators they combine into
//! - Roots, BCH/extended BCH/Tzeng bounds and the true minimum distance
//!
//! Run with: cargo run --example hamming7

use cyclobound::code::generator::irreducible_factors;
use cyclobound::{AnalysisConfig, Analyzer, CodeParams, PrimitiveTable};

fn main() {
    println!("=== Cyclic Codes of Length 7 over GF(2) ===\n");

    let params = CodeParams::new(7, 2, &PrimitiveTable::standard()).unwrap();
    println!("Base field:      {}", params.base());
    println!("Extension field: {}  (m = {})\n", params.ext(), params.m());

    println!("--- Irreducible factors of x^7 - 1 ---\n");
    for f in irreducible_factors(&params).unwrap() {
        println!("coset {:?}  ->  {}", f.coset().members(), f.base_poly());
    }
    println!();

    println!("--- Generators ---\n");
    let analyzer = Analyzer::new(params, AnalysisConfig::default());
    let batch = analyzer.analyze_code().unwrap();
    for r in batch.reports() {
        println!("g(x) = {}", r.generator);
        println!("  roots: {:?}", r.roots);
        println!(
            "  BCH = {}, ext BCH = {}, Tzeng = {}, d = {:?}",
            r.bch.value(),
            r.ext_bch.value(),
            r.tzeng.value(),
            r.weight.exact()
        );
    }
    println!();

    // The two degree-3 generators are the Hamming code and its reciprocal
    let hamming = batch.reports().find(|r| r.degree == 3).unwrap();
    println!(
        "Hamming (7, 4): g(x) = {}, d = {:?}",
        hamming.generator,
        hamming.weight.exact()
    );
}
