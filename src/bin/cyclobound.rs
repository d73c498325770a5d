//! Cyclic code bound explorer.
//!
//! Synthesizes every generator polynomial of a cyclic code of length `n` over
//! GF(q), or takes one from `--gen`, and prints its roots, the BCH, extended
//! BCH and Tzeng bounds, and the brute-force minimum weight.

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{prelude::*, EnvFilter};

use cyclobound::code::weight::DEFAULT_WEIGHT_LIMIT;
use cyclobound::{
    parse_generator, AnalysisConfig, Analyzer, BatchReport, BoundError, CodeParams,
    GeneratorOutcome, GeneratorReport, PrimitiveTable, WeightSearch,
};

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Generator polynomials and minimum-distance bounds of cyclic codes over GF(2^b)."
)]
struct Args {
    /// Code length n
    #[arg(long, default_value_t = 5u64)]
    n: u64,

    /// Field size q (a power of two)
    #[arg(long, default_value_t = 4u64)]
    q: u64,

    /// Explicit generator as base-field digits, highest degree first (e.g. 1011)
    #[arg(long)]
    gen: Option<String>,

    /// Trace cosets, roots and every bound search step
    #[arg(long, default_value_t = false)]
    verbose: bool,

    /// Most information vectors searched exhaustively
    #[arg(long, default_value_t = DEFAULT_WEIGHT_LIMIT)]
    weight_limit: u64,

    /// Random information vectors to try above the limit (0 skips the search)
    #[arg(long, default_value_t = 0usize)]
    samples: usize,

    /// Seed for sampled weight searches
    #[arg(long, default_value_t = 0u64)]
    seed: u64,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Abort on the first generator that fails a consistency check
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Bound(#[from] BoundError),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "cyclobound=trace" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let params = CodeParams::new(args.n, args.q, &PrimitiveTable::standard())?;
    let config = AnalysisConfig {
        weight_limit: args.weight_limit,
        samples: args.samples,
        seed: args.seed,
        strict: args.strict,
        ..AnalysisConfig::default()
    };
    let analyzer = Analyzer::new(params, config);

    let batch = match &args.gen {
        // a single explicit generator keeps the fail-fast behaviour
        Some(digits) => {
            let g = parse_generator(digits, analyzer.params())?;
            let report = analyzer.analyze(&g)?;
            BatchReport {
                n: args.n,
                q: args.q,
                m: analyzer.params().m(),
                entries: vec![GeneratorOutcome {
                    generator: g,
                    report: Some(report),
                    error: None,
                }],
            }
        }
        None => analyzer.analyze_code()?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        print_batch(&batch);
    }
    Ok(())
}

fn print_batch(batch: &BatchReport) {
    println!(
        "=== Cyclic codes of length {} over GF({}), roots in GF({}^{}) ===",
        batch.n, batch.q, batch.q, batch.m
    );
    for (i, entry) in batch.entries.iter().enumerate() {
        println!();
        println!("[{}] g(x) = {}", i, entry.generator);
        match (&entry.report, &entry.error) {
            (Some(report), _) => print_report(report),
            (None, Some(e)) => println!("    rejected: {}", e),
            (None, None) => {}
        }
    }
    if batch.failures() > 0 {
        println!();
        println!("{} generator(s) rejected", batch.failures());
    }
}

fn print_report(r: &GeneratorReport) {
    println!("    degree: {}", r.degree);
    println!("    roots (powers of alpha): {:?}", r.roots);
    println!("    BCH bound: {}", r.bch.value());
    println!("    extended BCH bound: {}", r.ext_bch.value());
    match r.tzeng.witness() {
        Some(w) => println!(
            "    Tzeng bound: {}  (b0, s, d0, s2, k0) = ({}, {}, {}, {}, {})",
            r.tzeng.value(),
            w.b0,
            w.s,
            w.d0,
            w.s2,
            w.k0
        ),
        None => println!("    Tzeng bound: {}", r.tzeng.value()),
    }
    match &r.weight {
        WeightSearch::Exhaustive(w) => println!(
            "    min weight: {}  u(x) = {}  c(x) = {}",
            w.weight, w.information, w.codeword
        ),
        WeightSearch::Sampled {
            best: Some(w),
            samples,
        } => println!(
            "    min weight <= {} over {} samples  u(x) = {}",
            w.weight, samples, w.information
        ),
        WeightSearch::Sampled { best: None, samples } => {
            println!("    min weight: no nonzero codeword in {} samples", samples)
        }
        WeightSearch::Skipped {
            information_vectors,
            limit,
        } => match information_vectors {
            Some(count) => println!(
                "    min weight: skipped ({} information vectors > limit {})",
                count, limit
            ),
            None => println!("    min weight: skipped (search space overflows u64)"),
        },
        WeightSearch::Trivial => println!("    min weight: code has no nonzero codewords"),
    }
}
