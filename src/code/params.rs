//! Parameters of a cyclic code of length `n` over GF(q).

use tracing::debug;

use crate::error::{BoundResult, ConfigurationError};
use crate::structures::field_map::FieldMap;
use crate::structures::gf2n::{BinaryField, PrimitiveTable, MAX_NBIT};
use crate::utils::{extension_degree, log2_exact};

/// Validated `(n, q, m)` together with the base field GF(q), the extension
/// GF(q^m) holding the n-th roots of unity, and the map between them.
///
/// # Example
///
/// ```
/// use cyclobound::gf2n::PrimitiveTable;
/// use cyclobound::CodeParams;
///
/// let params = CodeParams::new(5, 4, &PrimitiveTable::standard()).unwrap();
/// assert_eq!(params.m(), 2);
/// assert_eq!(params.ext().nbit(), 4);
/// assert_eq!(params.group_order(), 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeParams {
    n: u64,
    q: u64,
    m: u32,
    base: BinaryField,
    ext: BinaryField,
    map: FieldMap,
}

impl CodeParams {
    /// Build the fields for length `n` over GF(q) from `table`.
    ///
    /// # Errors
    ///
    /// - `NotPowerOfTwo` if `q` is not `2^a` with `a >= 1`
    /// - `InvalidLength` if `n < 2`
    /// - `NoExtension` if no GF(q^m) with `a*m <= 16` contains the n-th roots
    ///   of unity (in particular for every even `n`)
    /// - `UnsupportedWidth` if `table` lacks a primitive polynomial
    /// - `CharacteristicMismatch` if `alpha` does not generate GF(q^m)^*
    pub fn new(n: u64, q: u64, table: &PrimitiveTable) -> BoundResult<Self> {
        let base_bits = log2_exact(q).ok_or(ConfigurationError::NotPowerOfTwo { q })?;
        if n < 2 {
            return Err(ConfigurationError::InvalidLength { n }.into());
        }
        let m = extension_degree(n, q, MAX_NBIT / base_bits)
            .ok_or(ConfigurationError::NoExtension { n, q })?;

        let base = BinaryField::new(base_bits, table)?;
        let ext = BinaryField::new(base_bits * m, table)?;
        Self::with_fields(n, base, ext)
    }

    /// Build from explicit fields.
    ///
    /// `ext` must have a bit-width that is a multiple of `base`'s and its
    /// group order must be divisible by `n`.
    pub fn with_fields(n: u64, base: BinaryField, ext: BinaryField) -> BoundResult<Self> {
        let q = base.size();
        if n < 2 {
            return Err(ConfigurationError::InvalidLength { n }.into());
        }
        if ext.nbit() % base.nbit() != 0 {
            return Err(ConfigurationError::NotSubfield {
                base: base.nbit(),
                ext: ext.nbit(),
            }
            .into());
        }
        if ext.group_order() % n != 0 {
            return Err(ConfigurationError::NoExtension { n, q }.into());
        }
        let m = ext.nbit() / base.nbit();

        let found = ext.characteristic();
        if found != ext.size() {
            return Err(ConfigurationError::CharacteristicMismatch {
                expected: ext.size(),
                found,
            }
            .into());
        }

        let map = FieldMap::new(base, ext)?;
        debug!(n, q, m, base = %base, ext = %ext, "code parameters");

        Ok(Self {
            n,
            q,
            m,
            base,
            ext,
            map,
        })
    }

    /// Code length.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Size of the base field.
    pub fn q(&self) -> u64 {
        self.q
    }

    /// Extension degree.
    pub fn m(&self) -> u32 {
        self.m
    }

    /// GF(q).
    pub fn base(&self) -> BinaryField {
        self.base
    }

    /// GF(q^m).
    pub fn ext(&self) -> BinaryField {
        self.ext
    }

    pub fn field_map(&self) -> &FieldMap {
        &self.map
    }

    /// `q^m`.
    pub fn qm(&self) -> u64 {
        self.ext.size()
    }

    /// `q^m - 1`, the modulus of every root exponent.
    pub fn group_order(&self) -> u64 {
        self.ext.group_order()
    }
}
