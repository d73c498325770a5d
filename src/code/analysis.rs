//! Per-generator driver: consistency checks, bounds and weight search.
//!
//! A generator is trusted only after it divides `x^n - 1` and has exactly
//! `deg g` roots among the powers of `alpha`; the Tzeng witness is replayed
//! inside [`tzeng`]. Any failure aborts that generator. In a batch the other
//! generators still get their reports unless [`AnalysisConfig::strict`] is set.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::code::bounds::{bch, ext_bch, tzeng, Bound, Rectangle, Run};
use crate::code::generator::{check_divides, find_generators};
use crate::code::params::CodeParams;
use crate::code::roots::find_roots;
use crate::code::weight::{search_min_weight, WeightLimits, WeightSearch, DEFAULT_WEIGHT_LIMIT};
use crate::error::{BoundResult, ConfigurationError, ConsistencyError};
use crate::structures::gf2n::Gf2n;
use crate::structures::poly::Poly;

/// Knobs for a run of the analyzer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Largest number of information vectors searched exhaustively.
    pub weight_limit: u64,
    /// Random information vectors to try when over the limit.
    pub samples: usize,
    pub seed: u64,
    /// Analyze generators of a batch on the rayon pool.
    pub parallel: bool,
    /// Stop a batch at the first failing generator.
    pub strict: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weight_limit: DEFAULT_WEIGHT_LIMIT,
            samples: 0,
            seed: 0,
            parallel: true,
            strict: false,
        }
    }
}

impl AnalysisConfig {
    pub fn weight_limits(&self) -> WeightLimits {
        WeightLimits {
            limit: self.weight_limit,
            samples: self.samples,
            seed: self.seed,
        }
    }
}

/// Everything computed for one generator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneratorReport {
    pub generator: Poly,
    pub degree: usize,
    /// Exponents `i` with `g(alpha^i) = 0`, ascending.
    pub roots: Vec<u64>,
    pub bch: Bound<Run>,
    pub ext_bch: Bound<Run>,
    pub tzeng: Bound<Rectangle>,
    pub weight: WeightSearch,
}

impl GeneratorReport {
    /// Whether `bch <= ext_bch <= tzeng <= d_min` holds, where `d_min` is
    /// known only after an exhaustive weight search.
    pub fn bounds_are_ordered(&self) -> bool {
        let ordered = self.bch.value() <= self.ext_bch.value()
            && self.ext_bch.value() <= self.tzeng.value();
        match self.weight.exact() {
            Some(d) => ordered && self.tzeng.value() <= d as u64,
            None => ordered,
        }
    }
}

/// One entry of a batch: the report, or why the generator was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneratorOutcome {
    pub generator: Poly,
    pub report: Option<GeneratorReport>,
    pub error: Option<String>,
}

/// Reports for every generator of a code, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchReport {
    pub n: u64,
    pub q: u64,
    pub m: u32,
    pub entries: Vec<GeneratorOutcome>,
}

impl BatchReport {
    pub fn reports(&self) -> impl Iterator<Item = &GeneratorReport> {
        self.entries.iter().filter_map(|e| e.report.as_ref())
    }

    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| e.error.is_some()).count()
    }
}

/// Runs the checks, bounds and weight search for generators of one code.
///
/// # Example
///
/// ```
/// use cyclobound::gf2n::PrimitiveTable;
/// use cyclobound::{AnalysisConfig, Analyzer, CodeParams};
///
/// let params = CodeParams::new(7, 2, &PrimitiveTable::standard()).unwrap();
/// let analyzer = Analyzer::new(params, AnalysisConfig::default());
///
/// let batch = analyzer.analyze_code().unwrap();
/// assert_eq!(batch.entries.len(), 6);
/// assert_eq!(batch.failures(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Analyzer {
    params: CodeParams,
    config: AnalysisConfig,
    alpha_powers: Vec<Gf2n>,
}

impl Analyzer {
    pub fn new(params: CodeParams, config: AnalysisConfig) -> Self {
        let alpha_powers = params.ext().powers_of_alpha();
        for (i, a) in alpha_powers.iter().enumerate() {
            debug!(power = i, value = %a, "alpha");
        }
        Self {
            params,
            config,
            alpha_powers,
        }
    }

    pub fn params(&self) -> &CodeParams {
        &self.params
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Check `g` and compute its bounds and minimum weight.
    ///
    /// # Errors
    ///
    /// - `ConsistencyError::FieldMismatch` if `g` is not over GF(q)
    /// - `ConfigurationError::ConstantGenerator` if `g` has degree 0
    /// - `ConsistencyError::NotDivisor` if `g` does not divide `x^n - 1`
    /// - `ConsistencyError::RootCountMismatch` from the root finder
    /// - `ConsistencyError::TzengWitness` if the Tzeng witness fails replay
    pub fn analyze(&self, g: &Poly) -> BoundResult<GeneratorReport> {
        let n = self.params.n();
        let base = self.params.base();
        if g.field() != base {
            return Err(ConsistencyError::FieldMismatch {
                left: g.field().nbit(),
                right: base.nbit(),
            }
            .into());
        }
        // No roots means every bound is the floor, yet d = 1.
        if g.degree() == Some(0) {
            return Err(ConfigurationError::ConstantGenerator {
                generator: g.to_string(),
            }
            .into());
        }
        check_divides(g, n)?;

        let roots = find_roots(&self.alpha_powers, g, self.params.field_map())?;
        debug!(g = %g, roots = ?roots.powers(), "roots");

        let limits = self.config.weight_limits();
        let (bounds, weight) = rayon::join(
            || -> Result<_, ConsistencyError> {
                Ok((bch(&roots), ext_bch(&roots, n), tzeng(&roots, n)?))
            },
            || search_min_weight(g, n, &limits),
        );
        let (bch, ext_bch, tzeng) = bounds?;

        info!(
            g = %g,
            bch = bch.value(),
            ext_bch = ext_bch.value(),
            tzeng = tzeng.value(),
            weight = ?weight.best().map(|w| w.weight),
            "bounds"
        );

        Ok(GeneratorReport {
            generator: g.clone(),
            degree: g.degree().unwrap_or(0),
            roots: roots.powers().to_vec(),
            bch,
            ext_bch,
            tzeng,
            weight,
        })
    }

    /// Analyze every generator, keeping going past failures.
    pub fn analyze_all(&self, generators: &[Poly]) -> BatchReport {
        let outcome = |g: &Poly| match self.analyze(g) {
            Ok(report) => GeneratorOutcome {
                generator: g.clone(),
                report: Some(report),
                error: None,
            },
            Err(e) => {
                warn!(g = %g, error = %e, "generator rejected");
                GeneratorOutcome {
                    generator: g.clone(),
                    report: None,
                    error: Some(e.to_string()),
                }
            }
        };

        let entries: Vec<GeneratorOutcome> = if self.config.parallel {
            generators.par_iter().map(outcome).collect()
        } else {
            generators.iter().map(outcome).collect()
        };
        BatchReport {
            n: self.params.n(),
            q: self.params.q(),
            m: self.params.m(),
            entries,
        }
    }

    /// Analyze every generator, failing on the first error.
    pub fn analyze_strict(&self, generators: &[Poly]) -> BoundResult<Vec<GeneratorReport>> {
        if self.config.parallel {
            generators.par_iter().map(|g| self.analyze(g)).collect()
        } else {
            generators.iter().map(|g| self.analyze(g)).collect()
        }
    }

    /// Synthesize every generator of the code and analyze them all.
    ///
    /// With [`AnalysisConfig::strict`] the first failing generator aborts
    /// the batch.
    pub fn analyze_code(&self) -> BoundResult<BatchReport> {
        let generators: Vec<Poly> = find_generators(&self.params)?
            .into_iter()
            .map(|g| g.into_poly())
            .collect();
        info!(count = generators.len(), "generators");

        if self.config.strict {
            let reports = self.analyze_strict(&generators)?;
            return Ok(BatchReport {
                n: self.params.n(),
                q: self.params.q(),
                m: self.params.m(),
                entries: reports
                    .into_iter()
                    .map(|r| GeneratorOutcome {
                        generator: r.generator.clone(),
                        report: Some(r),
                        error: None,
                    })
                    .collect(),
            });
        }
        Ok(self.analyze_all(&generators))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoundError;
    use crate::structures::gf2n::PrimitiveTable;

    fn analyzer(n: u64, q: u64) -> Analyzer {
        let params = CodeParams::new(n, q, &PrimitiveTable::standard()).unwrap();
        Analyzer::new(params, AnalysisConfig::default())
    }

    #[test]
    fn hamming_generator_report() {
        let a = analyzer(7, 2);
        let g = Poly::from_values(&[1, 1, 0, 1], a.params().base());
        let r = a.analyze(&g).unwrap();
        assert_eq!(r.degree, 3);
        assert_eq!(r.roots, vec![1, 2, 4]);
        assert_eq!(r.bch.value(), 3);
        assert_eq!(r.weight.exact(), Some(3));
        assert!(r.bounds_are_ordered());
    }

    #[test]
    fn non_divisor_is_rejected() {
        let a = analyzer(7, 2);
        let g = Poly::from_values(&[1, 0, 1], a.params().base());
        let err = a.analyze(&g).unwrap_err();
        assert!(matches!(
            err,
            BoundError::Consistency(ConsistencyError::NotDivisor { .. })
        ));
    }

    #[test]
    fn constant_generator_is_rejected() {
        let a = analyzer(7, 2);
        let one = Poly::from_values(&[1], a.params().base());
        assert_eq!(
            a.analyze(&one).unwrap_err(),
            BoundError::Configuration(ConfigurationError::ConstantGenerator {
                generator: one.to_string()
            })
        );
    }

    #[test]
    fn batch_keeps_going_after_failure() {
        let a = analyzer(7, 2);
        let base = a.params().base();
        let good = Poly::from_values(&[1, 1], base);
        let bad = Poly::from_values(&[1, 0, 1], base);
        let batch = a.analyze_all(&[bad.clone(), good.clone()]);
        assert_eq!(batch.entries.len(), 2);
        assert_eq!(batch.failures(), 1);
        assert_eq!(batch.entries[0].generator, bad);
        assert!(batch.entries[0].error.is_some());
        assert_eq!(batch.entries[1].report.as_ref().unwrap().generator, good);

        assert!(a.analyze_strict(&[good, bad]).is_err());
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let params = CodeParams::new(15, 2, &PrimitiveTable::standard()).unwrap();
        let seq = Analyzer::new(
            params.clone(),
            AnalysisConfig {
                parallel: false,
                ..AnalysisConfig::default()
            },
        );
        let par = Analyzer::new(params, AnalysisConfig::default());
        assert_eq!(seq.analyze_code().unwrap(), par.analyze_code().unwrap());
    }

    #[test]
    fn every_gf4_length_5_generator_is_consistent() {
        let batch = analyzer(5, 4).analyze_code().unwrap();
        assert_eq!(batch.failures(), 0);
        assert_eq!(batch.m, 2);
        for r in batch.reports() {
            assert_eq!(r.roots.len(), r.degree);
            assert!(r.bounds_are_ordered(), "{:?}", r.generator);
        }
    }
}
