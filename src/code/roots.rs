//! Root finding over the extension field.

use tracing::trace;

use crate::error::ConsistencyError;
use crate::structures::field_map::FieldMap;
use crate::structures::gf2n::Gf2n;
use crate::structures::poly::Poly;

/// Exponents `i` such that `alpha^i` is a root of a generator.
///
/// Computed once per generator and read by every bound evaluator. Membership
/// tests reduce their argument modulo `q^m - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootSet {
    powers: Vec<u64>,
    roots: Vec<Gf2n>,
    member: Vec<bool>,
}

impl RootSet {
    /// Build a root set directly from exponents modulo `group_order`.
    ///
    /// Duplicates are dropped; `powers()` is sorted ascending. The root values
    /// are left empty; use [`find_roots`] to get both.
    pub fn from_powers(powers: impl IntoIterator<Item = u64>, group_order: u64) -> Self {
        let mut member = vec![false; group_order as usize];
        for p in powers {
            member[(p % group_order) as usize] = true;
        }
        let powers = member
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(|(i, _)| i as u64)
            .collect();
        Self {
            powers,
            roots: Vec::new(),
            member,
        }
    }

    /// Root exponents, ascending.
    pub fn powers(&self) -> &[u64] {
        &self.powers
    }

    /// Root values `alpha^i`, in the same order as [`powers`](Self::powers).
    pub fn roots(&self) -> &[Gf2n] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    /// `q^m - 1`.
    pub fn group_order(&self) -> u64 {
        self.member.len() as u64
    }

    /// Whether `alpha^e` is a root, for any `e` (reduced modulo `q^m - 1`).
    #[inline]
    pub fn contains(&self, e: u64) -> bool {
        self.member[(e % self.group_order()) as usize]
    }
}

/// Find the powers of `alpha` at which `g` vanishes.
///
/// `alpha_powers[i]` must be `alpha^i` in the extension field described by
/// `map`. A generator over the base field is lifted through `map` first.
///
/// # Errors
///
/// - `ConsistencyError::FieldMismatch` if `g` lives in neither field of `map`
/// - `ConsistencyError::RootCountMismatch` if the number of roots differs from
///   the degree of `g`
///
/// # Example
///
/// ```
/// use cyclobound::gf2n::PrimitiveTable;
/// use cyclobound::{find_roots, CodeParams, Poly};
///
/// let params = CodeParams::new(7, 2, &PrimitiveTable::standard()).unwrap();
/// let alphas = params.ext().powers_of_alpha();
///
/// let g = Poly::from_values(&[1, 1, 0, 1], params.base()); // x^3 + x + 1
/// let roots = find_roots(&alphas, &g, params.field_map()).unwrap();
/// assert_eq!(roots.powers(), &[1, 2, 4]);
/// ```
pub fn find_roots(
    alpha_powers: &[Gf2n],
    g: &Poly,
    map: &FieldMap,
) -> Result<RootSet, ConsistencyError> {
    let g_ext = if g.field() == map.ext() {
        g.clone()
    } else if g.field() == map.base() {
        map.lift_poly(g)?
    } else {
        return Err(ConsistencyError::FieldMismatch {
            left: g.field().nbit(),
            right: map.ext().nbit(),
        });
    };

    let mut member = vec![false; alpha_powers.len()];
    let mut powers = Vec::new();
    let mut roots = Vec::new();
    for (i, &x) in alpha_powers.iter().enumerate() {
        if g_ext.is_root(x) {
            trace!(index = roots.len(), root = %x, power = i, "root");
            member[i] = true;
            powers.push(i as u64);
            roots.push(x);
        }
    }

    let degree = g.degree().unwrap_or(0);
    if powers.len() != degree {
        return Err(ConsistencyError::RootCountMismatch {
            generator: g.to_string(),
            degree,
            roots: powers.len(),
        });
    }

    Ok(RootSet {
        powers,
        roots,
        member,
    })
}
