//! Brute-force minimum codeword weight.
//!
//! Every nonzero information polynomial `u(x)` of degree below
//! `k = n - deg g` is multiplied by `g(x)`; the smallest number of nonzero
//! coefficients among the products is the minimum distance of the code.
//! There are `q^k - 1` such products, so the search is capped by
//! [`WeightLimits::limit`] and falls back to random sampling or is skipped.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::structures::poly::Poly;

/// Default cap on the number of information vectors searched exhaustively.
pub const DEFAULT_WEIGHT_LIMIT: u64 = 1 << 20;

/// A codeword of smallest weight and the information vector producing it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MinWeight {
    pub weight: usize,
    pub information: Poly,
    pub codeword: Poly,
}

/// How far the search got.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum WeightSearch {
    /// Every nonzero information vector was tried; the weight is exact.
    Exhaustive(MinWeight),
    /// Only random information vectors were tried; the weight is an upper
    /// bound on the minimum distance.
    Sampled {
        best: Option<MinWeight>,
        samples: usize,
    },
    /// The search space exceeds the limit and sampling is off.
    Skipped {
        information_vectors: Option<u64>,
        limit: u64,
    },
    /// `g` has degree `n`: the code has no nonzero codewords.
    Trivial,
}

impl WeightSearch {
    /// The exact minimum weight, if the search was exhaustive.
    pub fn exact(&self) -> Option<usize> {
        match self {
            WeightSearch::Exhaustive(w) => Some(w.weight),
            _ => None,
        }
    }

    /// The lightest codeword found, exact or sampled.
    pub fn best(&self) -> Option<&MinWeight> {
        match self {
            WeightSearch::Exhaustive(w) => Some(w),
            WeightSearch::Sampled { best, .. } => best.as_ref(),
            _ => None,
        }
    }
}

/// Caps on the brute-force search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightLimits {
    /// Largest `q^k - 1` searched exhaustively.
    pub limit: u64,
    /// Random information vectors to try beyond the limit; `0` skips.
    pub samples: usize,
    pub seed: u64,
}

impl Default for WeightLimits {
    fn default() -> Self {
        Self {
            limit: DEFAULT_WEIGHT_LIMIT,
            samples: 0,
            seed: 0,
        }
    }
}

/// The `k` base-`q` digits of `index`, most significant first.
fn digits(index: u64, q: u64, k: usize) -> Vec<u64> {
    let mut out = vec![0; k];
    let mut rest = index;
    for d in out.iter_mut().rev() {
        *d = rest % q;
        rest /= q;
    }
    out
}

fn encode(info: &[u64], g: &Poly) -> (Poly, Poly) {
    let u = Poly::from_descending(info, g.field());
    let y = &u * g;
    (u, y)
}

/// Find the lightest nonzero codeword of the cyclic code generated by `g`.
///
/// Information vectors are enumerated in increasing order of their base-`q`
/// value (highest degree digit first); among codewords of equal weight the
/// first one in that order is reported.
///
/// # Example
///
/// ```
/// use cyclobound::code::weight::{search_min_weight, WeightLimits};
/// use cyclobound::gf2n::{BinaryField, PrimitiveTable};
/// use cyclobound::Poly;
///
/// let gf2 = BinaryField::new(1, &PrimitiveTable::standard()).unwrap();
/// let g = Poly::from_values(&[1, 1, 0, 1], gf2);
///
/// let search = search_min_weight(&g, 7, &WeightLimits::default());
/// assert_eq!(search.exact(), Some(3));
/// ```
pub fn search_min_weight(g: &Poly, n: u64, limits: &WeightLimits) -> WeightSearch {
    let degree = g.degree().unwrap_or(0) as u64;
    let Some(k) = n.checked_sub(degree).filter(|&k| k > 0) else {
        return WeightSearch::Trivial;
    };
    let k = k as usize;
    let q = g.field().size();

    let total = u32::try_from(k)
        .ok()
        .and_then(|k| q.checked_pow(k))
        .map(|t| t - 1);
    match total {
        Some(total) if total <= limits.limit => exhaustive(g, q, k, total),
        _ if limits.samples > 0 => sampled(g, q, k, limits),
        _ => {
            debug!(information_vectors = ?total, limit = limits.limit, "weight search skipped");
            WeightSearch::Skipped {
                information_vectors: total,
                limit: limits.limit,
            }
        }
    }
}

fn exhaustive(g: &Poly, q: u64, k: usize, total: u64) -> WeightSearch {
    debug!(k, total, "exhaustive weight search");
    let best = (1..=total)
        .into_par_iter()
        .map(|index| {
            let (u, y) = encode(&digits(index, q, k), g);
            trace!(u = %u, y = %y, weight = y.weight(), "codeword");
            (y.weight(), index)
        })
        .min();

    match best {
        Some((weight, index)) => {
            let (information, codeword) = encode(&digits(index, q, k), g);
            WeightSearch::Exhaustive(MinWeight {
                weight,
                information,
                codeword,
            })
        }
        None => WeightSearch::Trivial,
    }
}

#[cfg(feature = "rand")]
fn sampled(g: &Poly, q: u64, k: usize, limits: &WeightLimits) -> WeightSearch {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    debug!(k, samples = limits.samples, seed = limits.seed, "sampled weight search");
    let mut rng = StdRng::seed_from_u64(limits.seed);
    let mut best: Option<MinWeight> = None;
    for _ in 0..limits.samples {
        let info: Vec<u64> = (0..k).map(|_| rng.gen_range(0..q)).collect();
        if info.iter().all(|&d| d == 0) {
            continue;
        }
        let (information, codeword) = encode(&info, g);
        let weight = codeword.weight();
        if best.as_ref().map_or(true, |b| weight < b.weight) {
            best = Some(MinWeight {
                weight,
                information,
                codeword,
            });
        }
    }
    WeightSearch::Sampled {
        best,
        samples: limits.samples,
    }
}

#[cfg(not(feature = "rand"))]
fn sampled(_g: &Poly, q: u64, k: usize, limits: &WeightLimits) -> WeightSearch {
    debug!("sampling needs the `rand` feature");
    WeightSearch::Skipped {
        information_vectors: u32::try_from(k)
            .ok()
            .and_then(|k| q.checked_pow(k))
            .map(|t| t - 1),
        limit: limits.limit,
    }
}
