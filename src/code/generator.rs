//! Generator polynomial synthesis.
//!
//! Every cyclotomic coset of n-th roots of unity yields one irreducible factor
//! of `x^n - 1` over GF(q):
//!
//! 1. multiply the linear terms `(x - alpha^j)` for `j` in the coset, over GF(q^m)
//! 2. project the product back to GF(q) through the [`FieldMap`]
//!
//! Generators are then the products of nonempty proper subsets of these
//! factors, one per bit pattern in [`SubsetRange`].
//!
//! [`FieldMap`]: crate::structures::field_map::FieldMap

use tracing::{debug, trace};

use crate::code::coset::{root_cosets, Coset};
use crate::code::params::CodeParams;
use crate::error::{BoundResult, ConfigurationError, ConsistencyError};
use crate::structures::poly::Poly;

/// Most irreducible factors whose subsets we are willing to enumerate.
pub const MAX_FACTORS: usize = 24;

/// An irreducible factor of `x^n - 1` together with its coset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IrreducibleFactor {
    coset: Coset,
    ext_poly: Poly,
    base_poly: Poly,
}

impl IrreducibleFactor {
    pub fn coset(&self) -> &Coset {
        &self.coset
    }

    /// The factor over GF(q^m), before projection.
    pub fn ext_poly(&self) -> &Poly {
        &self.ext_poly
    }

    /// The factor over GF(q).
    pub fn base_poly(&self) -> &Poly {
        &self.base_poly
    }
}

/// Build the minimal polynomial of every coset of n-th roots of unity.
///
/// # Errors
///
/// `ConsistencyError::NotInSubfield` if a coset product has a coefficient
/// outside GF(q), which means the cosets and the field map disagree.
pub fn irreducible_factors(params: &CodeParams) -> BoundResult<Vec<IrreducibleFactor>> {
    let ext = params.ext();
    let alpha = ext.alpha();
    let map = params.field_map();

    root_cosets(params)
        .into_iter()
        .enumerate()
        .map(|(i, coset)| -> BoundResult<IrreducibleFactor> {
            let roots: Vec<_> = coset.members().iter().map(|&j| alpha.pow(j)).collect();
            let ext_poly = Poly::from_roots(&roots, ext);
            let base_poly = map.project_poly(&ext_poly)?;
            debug!(
                index = i,
                coset = ?coset.members(),
                ext = %ext_poly,
                base = %base_poly,
                "irreducible factor"
            );
            Ok(IrreducibleFactor {
                coset,
                ext_poly,
                base_poly,
            })
        })
        .collect()
}

/// The bit patterns that select a generator from `k` factors.
///
/// Pattern `0` (the constant `1`) and pattern `2^k - 1` (all factors, i.e.
/// `x^n - 1` itself, whose code is `{0}`) are both excluded; the range is
/// `1 ..= 2^k - 2`.
///
/// The most significant of the `k` bits selects factor `0`.
///
/// # Example
///
/// ```
/// use cyclobound::code::generator::SubsetRange;
///
/// let range = SubsetRange::new(3);
/// assert_eq!(range.len(), 6);
/// assert!(!range.contains(0));
/// assert!(!range.contains(0b111));
/// assert_eq!(range.selected(0b100), vec![0]);
/// assert_eq!(range.selected(0b011), vec![1, 2]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubsetRange {
    factors: usize,
}

impl SubsetRange {
    pub fn new(factors: usize) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> usize {
        self.factors
    }

    /// Number of patterns in the range.
    pub fn len(&self) -> u64 {
        (1u64 << self.factors).saturating_sub(2)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `pattern` selects an admissible generator.
    pub fn contains(&self, pattern: u64) -> bool {
        pattern >= 1 && pattern <= self.len()
    }

    /// All admissible patterns, ascending.
    pub fn patterns(&self) -> impl Iterator<Item = u64> {
        1..=self.len()
    }

    /// Factor indices selected by `pattern`.
    pub fn selected(&self, pattern: u64) -> Vec<usize> {
        (0..self.factors)
            .filter(|&j| (pattern >> (self.factors - 1 - j)) & 1 == 1)
            .collect()
    }
}

/// A synthesized generator and the factors it was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    pattern: u64,
    factors: Vec<usize>,
    poly: Poly,
}

impl Generator {
    /// The subset pattern that produced this generator.
    pub fn pattern(&self) -> u64 {
        self.pattern
    }

    /// Indices into the factor list.
    pub fn factors(&self) -> &[usize] {
        &self.factors
    }

    /// The generator over GF(q).
    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    pub fn into_poly(self) -> Poly {
        self.poly
    }
}

/// Multiply the factors selected by each pattern of [`SubsetRange`].
///
/// # Errors
///
/// `ConfigurationError::TooManyFactors` if there are more than
/// [`MAX_FACTORS`] factors.
pub fn combine_factors(factors: &[IrreducibleFactor]) -> BoundResult<Vec<Generator>> {
    if factors.len() > MAX_FACTORS {
        return Err(ConfigurationError::TooManyFactors {
            factors: factors.len(),
            limit: MAX_FACTORS,
        }
        .into());
    }
    let Some(first) = factors.first() else {
        return Ok(Vec::new());
    };
    let base = first.base_poly().field();

    let range = SubsetRange::new(factors.len());
    let generators = range
        .patterns()
        .map(|pattern| {
            let selected = range.selected(pattern);
            let poly = selected
                .iter()
                .fold(Poly::one(base), |g, &j| g * factors[j].base_poly());
            trace!(pattern, factors = ?selected, g = %poly, "generator");
            Generator {
                pattern,
                factors: selected,
                poly,
            }
        })
        .collect();
    Ok(generators)
}

/// Every admissible generator polynomial of a cyclic code of length `n`
/// over GF(q), in pattern order.
///
/// # Example
///
/// ```
/// use cyclobound::gf2n::PrimitiveTable;
/// use cyclobound::{find_generators, CodeParams};
///
/// let params = CodeParams::new(7, 2, &PrimitiveTable::standard()).unwrap();
/// let gens = find_generators(&params).unwrap();
///
/// // Three factors: x + 1, x^3 + x + 1, x^3 + x^2 + 1
/// assert_eq!(gens.len(), 6);
/// ```
pub fn find_generators(params: &CodeParams) -> BoundResult<Vec<Generator>> {
    let factors = irreducible_factors(params)?;
    let generators = combine_factors(&factors)?;
    debug!(
        factors = factors.len(),
        generators = generators.len(),
        "synthesized generators"
    );
    Ok(generators)
}

/// Parse a generator given as base-field digits, highest degree first.
///
/// Each character is one hexadecimal digit that must be smaller than `q`.
///
/// # Errors
///
/// - `ConfigurationError::InvalidDigit` for a character outside GF(q)
/// - `ConfigurationError::EmptyGenerator` if the result is the zero polynomial
/// - `ConfigurationError::ConstantGenerator` if the result has degree 0
pub fn parse_generator(digits: &str, params: &CodeParams) -> BoundResult<Poly> {
    let q = params.q();
    let values = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(u64::from)
                .filter(|&v| v < q)
                .ok_or(ConfigurationError::InvalidDigit { digit: c, q })
        })
        .collect::<Result<Vec<u64>, _>>()?;

    let g = Poly::from_descending(&values, params.base());
    if g.is_zero() {
        return Err(ConfigurationError::EmptyGenerator.into());
    }
    if g.degree() == Some(0) {
        return Err(ConfigurationError::ConstantGenerator {
            generator: g.to_string(),
        }
        .into());
    }
    Ok(g)
}

/// Check that `g` divides `x^n - 1` exactly.
///
/// # Errors
///
/// `ConsistencyError::NotDivisor` with the nonzero remainder.
pub fn check_divides(g: &Poly, n: u64) -> Result<(), ConsistencyError> {
    let xn_1 = Poly::x_pow_n_minus_one(n as usize, g.field());
    let remainder = xn_1.rem(g).unwrap_or_else(|| xn_1.clone());
    if remainder.is_zero() {
        Ok(())
    } else {
        Err(ConsistencyError::NotDivisor {
            generator: g.to_string(),
            remainder: remainder.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoundError;
    use crate::structures::gf2n::PrimitiveTable;

    fn params(n: u64, q: u64) -> CodeParams {
        CodeParams::new(n, q, &PrimitiveTable::standard()).unwrap()
    }

    #[test]
    fn factors_of_x7_minus_1() {
        let p = params(7, 2);
        let factors = irreducible_factors(&p).unwrap();
        let base: Vec<Vec<u64>> = factors
            .iter()
            .map(|f| f.base_poly().coefficients().iter().map(|c| u64::from(*c)).collect())
            .collect();
        // x + 1, 1 + x + x^3, 1 + x^2 + x^3 with x^3 + x + 1 as the GF(8) modulus
        assert_eq!(base, vec![vec![1, 1], vec![1, 1, 0, 1], vec![1, 0, 1, 1]]);
    }

    #[test]
    fn factor_degrees_match_coset_sizes() {
        for (n, q) in [(5, 4), (15, 2), (9, 2), (21, 4), (17, 2)] {
            let p = params(n, q);
            let factors = irreducible_factors(&p).unwrap();
            let mut product = Poly::one(p.base());
            for f in &factors {
                assert_eq!(f.base_poly().degree(), Some(f.coset().len()));
                assert_eq!(f.ext_poly().degree(), Some(f.coset().len()));
                product = product * f.base_poly();
            }
            assert_eq!(product, Poly::x_pow_n_minus_one(n as usize, p.base()));
        }
    }

    #[test]
    fn subset_range_boundaries() {
        assert!(SubsetRange::new(1).is_empty());
        assert_eq!(SubsetRange::new(2).len(), 2);
        let r = SubsetRange::new(4);
        assert_eq!(r.patterns().next(), Some(1));
        assert_eq!(r.patterns().last(), Some(14));
        assert!(r.contains(14));
        assert!(!r.contains(15));
    }

    #[test]
    fn generators_exclude_trivial_products() {
        let p = params(7, 2);
        let gens = find_generators(&p).unwrap();
        let one = Poly::one(p.base());
        let full = Poly::x_pow_n_minus_one(7, p.base());
        for g in &gens {
            assert_ne!(g.poly(), &one);
            assert_ne!(g.poly(), &full);
        }
    }

    #[test]
    fn generator_degrees_sum_coset_sizes() {
        let p = params(5, 4);
        let factors = irreducible_factors(&p).unwrap();
        let gens = combine_factors(&factors).unwrap();
        assert_eq!(gens.len(), 6);
        for g in &gens {
            let expected: usize = g.factors().iter().map(|&j| factors[j].coset().len()).sum();
            assert_eq!(g.poly().degree(), Some(expected));
        }
    }

    #[test]
    fn every_generator_divides() {
        for (n, q) in [(7, 2), (5, 4), (15, 2), (9, 4)] {
            let p = params(n, q);
            for g in find_generators(&p).unwrap() {
                assert!(check_divides(g.poly(), n).is_ok());
            }
        }
    }

    #[test]
    fn too_many_factors() {
        let p = params(7, 2);
        let f = irreducible_factors(&p).unwrap();
        let many: Vec<_> = f.iter().cycle().take(MAX_FACTORS + 1).cloned().collect();
        assert!(matches!(
            combine_factors(&many),
            Err(BoundError::Configuration(ConfigurationError::TooManyFactors { .. }))
        ));
    }

    #[test]
    fn parse_generator_digits() {
        let p = params(7, 2);
        let g = parse_generator("1011", &p).unwrap();
        assert_eq!(g, Poly::from_values(&[1, 1, 0, 1], p.base()));
    }

    #[test]
    fn parse_generator_rejects_large_digit() {
        let p = params(5, 4);
        assert!(parse_generator("123", &p).is_ok());
        assert_eq!(
            parse_generator("14", &p).unwrap_err(),
            BoundError::Configuration(ConfigurationError::InvalidDigit { digit: '4', q: 4 })
        );
    }

    #[test]
    fn parse_generator_rejects_zero() {
        let p = params(7, 2);
        assert_eq!(
            parse_generator("000", &p).unwrap_err(),
            BoundError::Configuration(ConfigurationError::EmptyGenerator)
        );
        assert!(parse_generator("", &p).is_err());
    }

    #[test]
    fn parse_generator_rejects_constant() {
        let p = params(5, 4);
        assert!(matches!(
            parse_generator("003", &p).unwrap_err(),
            BoundError::Configuration(ConfigurationError::ConstantGenerator { .. })
        ));
    }

    #[test]
    fn check_divides_rejects_non_factor() {
        let p = params(7, 2);
        let g = Poly::from_values(&[1, 1, 1], p.base());
        assert!(matches!(
            check_divides(&g, 7),
            Err(ConsistencyError::NotDivisor { .. })
        ));
    }
}
