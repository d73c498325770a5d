//! Lower bounds on the minimum distance of a cyclic code from its roots.
//!
//! All three evaluators read a [`RootSet`] of exponents modulo `q^m - 1`:
//!
//! - [`bch`]: longest run `b0, b0 + 1, ...` of roots.
//! - [`ext_bch`]: longest run `b0, b0 + s, ...` with `gcd(n, s) = 1`.
//! - [`tzeng`]: largest rectangle `b0 + s*i1 + s2*i2` of roots, the
//!   Hartmann-Tzeng bound.
//!
//! A search that finds nothing better returns [`BOUND_FLOOR`] with no witness.
//! Every progression is capped at `q^m - 1` terms so that a root set covering
//! the whole group cannot loop forever.

use tracing::trace;

use crate::code::roots::RootSet;
use crate::error::ConsistencyError;
use crate::utils::gcd;

/// The bound every code of at least two nonzero codewords satisfies.
pub const BOUND_FLOOR: u64 = 2;

/// A designed distance and the root pattern that proves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bound<W> {
    value: u64,
    witness: Option<W>,
}

impl<W> Bound<W> {
    fn floor() -> Self {
        Self {
            value: BOUND_FLOOR,
            witness: None,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn witness(&self) -> Option<&W> {
        self.witness.as_ref()
    }

    /// Whether the search found nothing above [`BOUND_FLOOR`].
    pub fn is_floor(&self) -> bool {
        self.value <= BOUND_FLOOR
    }
}

/// An arithmetic progression of `length` roots starting at `b0` with stride `s`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Run {
    pub b0: u64,
    pub s: u64,
    pub length: u64,
}

/// The root pattern behind a Tzeng bound of `d0 + k0`.
///
/// Every exponent `b0 + s*i1 + s2*i2` with `0 <= i1 <= d0 - 2` and
/// `0 <= i2 <= k0` is a root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rectangle {
    pub b0: u64,
    pub s: u64,
    pub d0: u64,
    pub s2: u64,
    pub k0: u64,
}

impl Rectangle {
    /// Exponent at grid position `(i1, i2)`, reduced modulo `order`.
    pub fn exponent(&self, i1: u64, i2: u64, order: u64) -> u64 {
        (self.b0 + (self.s * i1) % order + (self.s2 * i2) % order) % order
    }

    /// `d0 + k0`.
    pub fn designed_distance(&self) -> u64 {
        self.d0 + self.k0
    }
}

/// Number of consecutive roots `start, start + stride, ...`.
fn run_length(roots: &RootSet, start: u64, stride: u64) -> u64 {
    let order = roots.group_order();
    let stride = stride % order;
    let mut e = start % order;
    let mut length = 0;
    while length < order && roots.contains(e) {
        length += 1;
        e = (e + stride) % order;
    }
    length
}

/// Ordered pairs `(b0, s)` of a root and a stride to another root, with
/// `gcd(n, s) = 1`.
fn coprime_strides(roots: &RootSet, n: u64) -> impl Iterator<Item = (u64, u64)> + '_ {
    let order = roots.group_order();
    roots.powers().iter().flat_map(move |&b0| {
        roots
            .powers()
            .iter()
            .filter(move |&&b0s| b0s != b0)
            .map(move |&b0s| (b0, (b0s + order - b0) % order))
            .filter(move |&(_, s)| gcd(n, s) == 1)
    })
}

/// The BCH bound: one more than the longest run of consecutive roots.
///
/// # Example
///
/// ```
/// use cyclobound::code::bounds::bch;
/// use cyclobound::code::roots::RootSet;
///
/// // roots of x^3 + x + 1 in GF(8)
/// let roots = RootSet::from_powers([1, 2, 4], 7);
/// assert_eq!(bch(&roots).value(), 3);
/// ```
pub fn bch(roots: &RootSet) -> Bound<Run> {
    let mut best = Bound::floor();
    for &b0 in roots.powers() {
        let length = run_length(roots, b0, 1);
        if length + 1 > best.value {
            best = Bound {
                value: length + 1,
                witness: Some(Run { b0, s: 1, length }),
            };
        }
    }
    trace!(bound = best.value, witness = ?best.witness, "BCH");
    best
}

/// The extended BCH bound: one more than the longest progression of roots
/// whose stride is coprime to `n`.
pub fn ext_bch(roots: &RootSet, n: u64) -> Bound<Run> {
    let mut best = Bound::floor();
    for (b0, s) in coprime_strides(roots, n) {
        let length = run_length(roots, b0, s);
        trace!(b0, s, length, "extended BCH stride");
        if length + 1 > best.value {
            best = Bound {
                value: length + 1,
                witness: Some(Run { b0, s, length }),
            };
        }
    }
    trace!(bound = best.value, witness = ?best.witness, "extended BCH");
    best
}

/// Number of leading columns `i2 = 0, 1, ...` of the grid whose `d0 - 1`
/// entries are all roots.
fn column_count(roots: &RootSet, b0: u64, s: u64, d0: u64, s2: u64) -> u64 {
    let order = roots.group_order();
    let rows: Vec<u64> = (0..=d0 - 2).map(|i1| (b0 + s * i1) % order).collect();
    let mut shift = 0;
    let mut columns = 0;
    while columns < order && rows.iter().all(|&r| roots.contains(r + shift)) {
        columns += 1;
        shift = (shift + s2) % order;
    }
    columns
}

/// The Tzeng bound: the largest `d0 + k0` over all rectangles of roots.
///
/// For each root `b0` and coprime stride `s`, `d0 - 1` ranges over the
/// prefixes of the run `b0, b0 + s, ...`. A second stride `s2` leads from
/// `b0` to any other root except `b0 + s*(d0 - 2)` and must satisfy
/// `gcd(n, s2) < d0`; `k0 + 1` is then the number of shifted copies of the
/// prefix that are still roots. Ties go to the later rectangle.
///
/// The winning rectangle is replayed against `roots` before returning.
///
/// # Errors
///
/// `ConsistencyError::TzengWitness` if a point of the winning rectangle is
/// not a root.
pub fn tzeng(roots: &RootSet, n: u64) -> Result<Bound<Rectangle>, ConsistencyError> {
    let order = roots.group_order();
    let mut best = Bound::floor();

    for (b0, s) in coprime_strides(roots, n) {
        let run = run_length(roots, b0, s);
        for d0 in 2..=run + 1 {
            let last = (b0 + s * (d0 - 2)) % order;
            trace!(b0, s, d0, "Tzeng prefix");
            for &b0s2 in roots.powers() {
                if b0s2 == b0 || b0s2 == last {
                    continue;
                }
                let s2 = (b0s2 + order - b0) % order;
                if gcd(n, s2) >= d0 {
                    continue;
                }
                let columns = column_count(roots, b0, s, d0, s2);
                let Some(k0) = columns.checked_sub(1) else {
                    continue;
                };
                trace!(b0, s, d0, s2, k0, "Tzeng rectangle");
                if d0 + k0 >= best.value {
                    best = Bound {
                        value: d0 + k0,
                        witness: Some(Rectangle { b0, s, d0, s2, k0 }),
                    };
                }
            }
        }
    }

    if let Some(rect) = &best.witness {
        verify_rectangle(roots, rect)?;
    }
    trace!(bound = best.value, witness = ?best.witness, "Tzeng");
    Ok(best)
}

/// Check that every point of `rect` is in `roots`.
///
/// # Errors
///
/// `ConsistencyError::TzengWitness` naming the first point that is missing.
pub fn verify_rectangle(roots: &RootSet, rect: &Rectangle) -> Result<(), ConsistencyError> {
    let order = roots.group_order();
    for i1 in 0..rect.d0.saturating_sub(1) {
        for i2 in 0..=rect.k0 {
            if !roots.contains(rect.exponent(i1, i2, order)) {
                return Err(ConsistencyError::TzengWitness {
                    b0: rect.b0,
                    s: rect.s,
                    i1,
                    s2: rect.s2,
                    i2,
                });
            }
        }
    }
    Ok(())
}
