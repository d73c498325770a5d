//! Embedding of a base field GF(2^a) into an extension GF(2^(a*m)).
//!
//! The base field's primitive element `gamma` is sent to an element `delta`
//! of the extension that has the same minimal polynomial, i.e. a root of the
//! base field's primitive polynomial inside the subfield of order `2^a`. The
//! map `gamma^j -> delta^j` is then a field isomorphism onto that subfield.

use tracing::debug;

use crate::error::{BoundResult, ConfigurationError, ConsistencyError};
use crate::structures::gf2n::{BinaryField, Gf2n};
use crate::structures::poly::Poly;
use crate::utils::gcd;

/// Coefficient-wise correspondence between a base field and an extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMap {
    base: BinaryField,
    ext: BinaryField,
    /// `lift[v]` is the image of the base element with value `v`.
    lift: Vec<Gf2n>,
}

impl FieldMap {
    /// Build the embedding of `base` into `ext`.
    ///
    /// # Errors
    ///
    /// `ConfigurationError::NotSubfield` if `ext` does not contain `base`
    /// as a subfield (its bit-width is not a multiple of the base's).
    ///
    /// # Example
    ///
    /// ```
    /// use cyclobound::gf2n::{BinaryField, PrimitiveTable};
    /// use cyclobound::FieldMap;
    ///
    /// let table = PrimitiveTable::standard();
    /// let gf4 = BinaryField::new(2, &table).unwrap();
    /// let gf16 = BinaryField::new(4, &table).unwrap();
    /// let map = FieldMap::new(gf4, gf16).unwrap();
    ///
    /// let a = gf4.alpha();
    /// let lifted = map.lift(a).unwrap();
    /// assert_eq!(lifted.pow(3), gf16.one());
    /// assert_eq!(map.project(lifted).unwrap(), a);
    /// ```
    pub fn new(base: BinaryField, ext: BinaryField) -> BoundResult<Self> {
        if ext.nbit() % base.nbit() != 0 {
            return Err(ConfigurationError::NotSubfield {
                base: base.nbit(),
                ext: ext.nbit(),
            }
            .into());
        }

        let base_order = base.group_order();
        let step = ext.group_order() / base_order;
        let alpha = ext.alpha();

        // delta = alpha^(t * step) generates the subfield when gcd(t, 2^a - 1) = 1;
        // pick the first one that satisfies the base primitive polynomial.
        let delta = (1..=base_order)
            .filter(|&t| gcd(t, base_order) == 1)
            .map(|t| alpha.pow(t * step))
            .find(|&d| Self::satisfies_modulus(base, d))
            .ok_or_else(|| ConfigurationError::CharacteristicMismatch {
                expected: ext.size(),
                found: ext.characteristic(),
            })?;

        let mut lift = vec![ext.zero(); base.size() as usize];
        let gamma = base.alpha();
        let mut g = base.one();
        let mut d = ext.one();
        for _ in 0..base_order {
            lift[g.value() as usize] = d;
            g = g * gamma;
            d = d * delta;
        }

        debug!(
            base = %base,
            ext = %ext,
            table = ?lift.iter().map(|e| e.value()).collect::<Vec<_>>(),
            "built field map"
        );

        Ok(Self { base, ext, lift })
    }

    /// Whether `d` is a root of the base field's reduction polynomial.
    fn satisfies_modulus(base: BinaryField, d: Gf2n) -> bool {
        let modulus = base.modulus();
        let value = (0..=base.nbit())
            .filter(|i| (modulus >> i) & 1 == 1)
            .fold(d.field().zero(), |acc, i| acc + d.pow(i as u64));
        value.is_zero()
    }

    pub fn base(&self) -> BinaryField {
        self.base
    }

    pub fn ext(&self) -> BinaryField {
        self.ext
    }

    /// `(base value, extension value)` pairs, ordered by base value.
    pub fn entries(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.lift
            .iter()
            .enumerate()
            .map(|(v, e)| (v as u32, e.value()))
    }

    /// Image of a base-field element in the extension.
    pub fn lift(&self, e: Gf2n) -> Result<Gf2n, ConsistencyError> {
        if e.field() != self.base {
            return Err(ConsistencyError::FieldMismatch {
                left: e.nbit(),
                right: self.base.nbit(),
            });
        }
        Ok(self.lift[e.value() as usize])
    }

    /// Preimage of an extension element in the base field.
    ///
    /// # Errors
    ///
    /// `ConsistencyError::NotInSubfield` if `e` is outside the subfield.
    pub fn project(&self, e: Gf2n) -> Result<Gf2n, ConsistencyError> {
        if e.field() != self.ext {
            return Err(ConsistencyError::FieldMismatch {
                left: e.nbit(),
                right: self.ext.nbit(),
            });
        }
        self.lift
            .iter()
            .position(|&l| l == e)
            .map(|v| self.base.element(v as u64))
            .ok_or(ConsistencyError::NotInSubfield {
                coefficient: e.value(),
            })
    }

    /// Lift every coefficient of a base-field polynomial.
    pub fn lift_poly(&self, p: &Poly) -> Result<Poly, ConsistencyError> {
        p.try_map(self.ext, |c| self.lift(c))
    }

    /// Project every coefficient of an extension polynomial.
    pub fn project_poly(&self, p: &Poly) -> Result<Poly, ConsistencyError> {
        p.try_map(self.base, |c| self.project(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::gf2n::PrimitiveTable;

    fn gf(nbit: u32) -> BinaryField {
        BinaryField::new(nbit, &PrimitiveTable::standard()).unwrap()
    }

    #[test]
    fn gf2_maps_to_zero_and_one() {
        let map = FieldMap::new(gf(1), gf(3)).unwrap();
        let entries: Vec<(u32, u32)> = map.entries().collect();
        assert_eq!(entries, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn identity_map() {
        let f = gf(2);
        let map = FieldMap::new(f, f).unwrap();
        for v in 0..4 {
            assert_eq!(map.lift(f.element(v)).unwrap(), f.element(v));
        }
    }

    #[test]
    fn lift_is_a_homomorphism() {
        let base = gf(2);
        let ext = gf(6);
        let map = FieldMap::new(base, ext).unwrap();
        for a in 0..4 {
            for b in 0..4 {
                let (x, y) = (base.element(a), base.element(b));
                let lx = map.lift(x).unwrap();
                let ly = map.lift(y).unwrap();
                assert_eq!(map.lift(x + y).unwrap(), lx + ly);
                assert_eq!(map.lift(x * y).unwrap(), lx * ly);
            }
        }
    }

    #[test]
    fn project_inverts_lift() {
        let base = gf(2);
        let ext = gf(4);
        let map = FieldMap::new(base, ext).unwrap();
        for v in 0..4 {
            let e = base.element(v);
            assert_eq!(map.project(map.lift(e).unwrap()).unwrap(), e);
        }
    }

    #[test]
    fn project_rejects_outside_subfield() {
        let map = FieldMap::new(gf(2), gf(4)).unwrap();
        // alpha has order 15, so it is not in GF(4)
        let alpha = gf(4).alpha();
        assert_eq!(
            map.project(alpha),
            Err(ConsistencyError::NotInSubfield {
                coefficient: alpha.value()
            })
        );
    }

    #[test]
    fn rejects_non_subfield() {
        assert_eq!(
            FieldMap::new(gf(2), gf(3)),
            Err(ConfigurationError::NotSubfield { base: 2, ext: 3 }.into())
        );
    }

    #[test]
    fn lift_rejects_wrong_field() {
        let map = FieldMap::new(gf(2), gf(4)).unwrap();
        assert!(map.lift(gf(3).one()).is_err());
    }

    #[test]
    fn poly_roundtrip() {
        let map = FieldMap::new(gf(2), gf(4)).unwrap();
        let p = Poly::from_values(&[1, 2, 3, 1], gf(2));
        let lifted = map.lift_poly(&p).unwrap();
        assert_eq!(lifted.field(), gf(4));
        assert_eq!(map.project_poly(&lifted).unwrap(), p);
    }
}
