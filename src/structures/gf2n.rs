//! Binary extension fields GF(2^b) and their elements.
//!
//! This module provides:
//! - [`PrimitiveTable`], the lookup of primitive polynomials by bit-width
//! - [`BinaryField`], the explicit field parameters (bit-width and modulus)
//! - [`Gf2n`], a field element that carries its [`BinaryField`] along so that
//!   arithmetic never depends on ambient state
//!
//! Elements are bit vectors: bit `i` of the value is the coefficient of `x^i`
//! in the polynomial basis. Addition is XOR and multiplication is carry-less
//! multiplication reduced by the primitive polynomial.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::error::ConfigurationError;

/// Widest field the element representation supports.
pub const MAX_NBIT: u32 = 16;

// ============================================================================
// Primitive polynomial tables
// ============================================================================

/// Primitive polynomials over GF(2), one per degree, leading term included.
///
/// Bit `i` is the coefficient of `x^i`; e.g. `0b1011` is `x^3 + x + 1`.
const STANDARD_PRIMITIVES: [(u32, u32); 16] = [
    (1, 0b11),
    (2, 0b111),
    (3, 0b1011),
    (4, 0b1_0011),
    (5, 0b10_0101),
    (6, 0b100_0011),
    (7, 0b1000_1001),
    (8, 0x11D),
    (9, 0x211),
    (10, 0x409),
    (11, 0x805),
    (12, 0x1053),
    (13, 0x201B),
    (14, 0x4443),
    (15, 0x8003),
    (16, 0x1100B),
];

/// GF(2) and GF(4) only.
const REFERENCE_PRIMITIVES: [(u32, u32); 2] = [(1, 0b11), (2, 0b111)];

/// Lookup table from bit-width to primitive polynomial.
///
/// Passed explicitly to [`BinaryField::new`]; there is no global default.
///
/// # Example
///
/// ```
/// use cyclobound::gf2n::PrimitiveTable;
///
/// let table = PrimitiveTable::standard();
/// assert_eq!(table.lookup(3).unwrap(), 0b1011); // x^3 + x + 1
///
/// // The reference table only knows GF(2) and GF(4).
/// assert!(PrimitiveTable::reference().lookup(3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimitiveTable {
    entries: &'static [(u32, u32)],
}

impl PrimitiveTable {
    /// Primitive polynomials for every width from 1 to [`MAX_NBIT`].
    pub const fn standard() -> Self {
        Self {
            entries: &STANDARD_PRIMITIVES,
        }
    }

    /// The small reference table: widths 1 and 2 only.
    pub const fn reference() -> Self {
        Self {
            entries: &REFERENCE_PRIMITIVES,
        }
    }

    /// Primitive polynomial of degree `nbit`, leading term included.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::UnsupportedWidth` if the table has no
    /// entry for `nbit`.
    pub fn lookup(&self, nbit: u32) -> Result<u32, ConfigurationError> {
        self.entries
            .iter()
            .find(|(width, _)| *width == nbit)
            .map(|(_, poly)| *poly)
            .ok_or(ConfigurationError::UnsupportedWidth { nbit })
    }

    /// Widths covered by this table, ascending.
    pub fn widths(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|(width, _)| *width)
    }
}

impl Default for PrimitiveTable {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Field parameters
// ============================================================================

/// Parameters of a binary field GF(2^nbit).
///
/// `modulus` is the reduction polynomial with its leading term, so its
/// highest set bit is `nbit`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryField {
    nbit: u32,
    modulus: u32,
}

impl BinaryField {
    /// Build GF(2^nbit) from the primitive polynomial in `table`.
    ///
    /// # Example
    ///
    /// ```
    /// use cyclobound::gf2n::{BinaryField, PrimitiveTable};
    ///
    /// let gf8 = BinaryField::new(3, &PrimitiveTable::standard()).unwrap();
    /// assert_eq!(gf8.size(), 8);
    /// assert_eq!(gf8.characteristic(), 8);
    /// ```
    pub fn new(nbit: u32, table: &PrimitiveTable) -> Result<Self, ConfigurationError> {
        if nbit > MAX_NBIT {
            return Err(ConfigurationError::FieldTooLarge { nbit });
        }
        let modulus = table.lookup(nbit)?;
        Self::with_modulus(nbit, modulus)
    }

    /// Build GF(2^nbit) from an explicit reduction polynomial.
    ///
    /// Only the degree is validated. A reducible or non-primitive modulus is
    /// accepted here and shows up later as a characteristic mismatch.
    pub fn with_modulus(nbit: u32, modulus: u32) -> Result<Self, ConfigurationError> {
        if nbit == 0 {
            return Err(ConfigurationError::UnsupportedWidth { nbit });
        }
        if nbit > MAX_NBIT {
            return Err(ConfigurationError::FieldTooLarge { nbit });
        }
        if 32 - modulus.leading_zeros() != nbit + 1 {
            return Err(ConfigurationError::UnsupportedWidth { nbit });
        }
        Ok(Self { nbit, modulus })
    }

    /// Bit-width `b` of GF(2^b).
    pub const fn nbit(&self) -> u32 {
        self.nbit
    }

    /// Reduction polynomial, leading term included.
    pub const fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Number of elements, `2^nbit`.
    pub const fn size(&self) -> u64 {
        1u64 << self.nbit
    }

    /// Order of the multiplicative group, `2^nbit - 1`.
    pub const fn group_order(&self) -> u64 {
        self.size() - 1
    }

    /// Element from an integer, reduced by the modulus.
    pub fn element(&self, value: u64) -> Gf2n {
        Gf2n {
            value: self.reduce(value),
            field: *self,
        }
    }

    /// Element from a bit vector in ascending order (`bits[i]` is the
    /// coefficient of `x^i`). Only the low bit of each entry is used.
    pub fn from_bits(&self, bits: &[u8]) -> Gf2n {
        let alpha = self.alpha();
        bits.iter()
            .enumerate()
            .filter(|(_, bit)| **bit & 1 == 1)
            // x^i may exceed the width; reduce term by term.
            .fold(self.zero(), |acc, (i, _)| acc + alpha.pow(i as u64))
    }

    /// The additive identity.
    pub const fn zero(&self) -> Gf2n {
        Gf2n {
            value: 0,
            field: *self,
        }
    }

    /// The multiplicative identity.
    pub const fn one(&self) -> Gf2n {
        Gf2n {
            value: 1,
            field: *self,
        }
    }

    /// The element `x`, primitive when the modulus is primitive.
    pub fn alpha(&self) -> Gf2n {
        self.element(0b10)
    }

    /// `alpha^i` for `i = 0 .. 2^nbit - 2`.
    pub fn powers_of_alpha(&self) -> Vec<Gf2n> {
        let alpha = self.alpha();
        let mut acc = self.one();
        let mut powers = Vec::with_capacity(self.group_order() as usize);
        for _ in 0..self.group_order() {
            powers.push(acc);
            acc = acc * alpha;
        }
        powers
    }

    /// One plus the multiplicative order of `alpha`.
    ///
    /// Equals `2^nbit` exactly when the modulus is primitive.
    pub fn characteristic(&self) -> u64 {
        let alpha = self.alpha();
        if alpha.is_zero() {
            return 1;
        }
        let mut acc = alpha;
        let mut order = 1u64;
        while !acc.is_one() {
            acc = acc * alpha;
            order += 1;
            if order > self.group_order() {
                // alpha lies in a cycle that never reaches one: not a unit.
                return 0;
            }
        }
        order + 1
    }

    /// Reduce a polynomial over GF(2), given as bits, modulo the modulus.
    fn reduce(&self, mut value: u64) -> u32 {
        let modulus = self.modulus as u64;
        while value >> self.nbit != 0 {
            let top = 63 - value.leading_zeros();
            value ^= modulus << (top - self.nbit);
        }
        value as u32
    }

    /// Carry-less multiplication followed by reduction.
    fn mul_raw(&self, a: u32, b: u32) -> u32 {
        let mut product = 0u64;
        let mut a = a as u64;
        let mut b = b;
        while b != 0 {
            if b & 1 == 1 {
                product ^= a;
            }
            a <<= 1;
            b >>= 1;
        }
        self.reduce(product)
    }
}

impl fmt::Debug for BinaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{})[mod {:#b}]", self.nbit, self.modulus)
    }
}

impl fmt::Display for BinaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{})", self.nbit)
    }
}

// ============================================================================
// Field elements
// ============================================================================

/// An element of GF(2^b) bundled with its field parameters.
///
/// The field is `Copy`, so elements are cheap to pass around and can be sent
/// across threads. Mixing elements of different fields in an arithmetic
/// operator panics.
///
/// # Example
///
/// ```
/// use cyclobound::gf2n::{BinaryField, PrimitiveTable};
///
/// let gf4 = BinaryField::new(2, &PrimitiveTable::standard()).unwrap();
/// let a = gf4.alpha();
///
/// // alpha^2 = alpha + 1 in GF(4) with x^2 + x + 1
/// assert_eq!(a * a, a + gf4.one());
/// assert_eq!(a.pow(3), gf4.one());
/// assert_eq!(a.inverse().unwrap() * a, gf4.one());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gf2n {
    value: u32,
    field: BinaryField,
}

impl Gf2n {
    /// Create an element of `field` from an integer.
    pub fn new(value: u64, field: BinaryField) -> Self {
        field.element(value)
    }

    /// Integer value of the bit vector; always `< 2^nbit`.
    pub const fn value(self) -> u32 {
        self.value
    }

    /// The field this element belongs to.
    pub const fn field(self) -> BinaryField {
        self.field
    }

    /// Bit-width of the field.
    pub const fn nbit(self) -> u32 {
        self.field.nbit
    }

    /// Bit vector in ascending order, `nbit` entries long.
    pub fn bits(self) -> Vec<u8> {
        (0..self.field.nbit)
            .map(|i| ((self.value >> i) & 1) as u8)
            .collect()
    }

    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    pub const fn is_one(self) -> bool {
        self.value == 1
    }

    /// Hamming weight of the bit vector.
    pub const fn weight(self) -> u32 {
        self.value.count_ones()
    }

    /// Compute `self^exp` using square-and-multiply.
    ///
    /// `0^0` is one.
    pub fn pow(self, exp: u64) -> Self {
        let mut base = self;
        let mut result = self.field.one();
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            e >>= 1;
        }
        result
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn inverse(self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        // a^(2^b - 2) = a^(-1) in GF(2^b)^*
        Some(self.pow(self.field.group_order() - 1))
    }

    /// Whether `self` and `other` come from the same field.
    pub fn same_field(self, other: Self) -> bool {
        self.field == other.field
    }

    fn assert_same_field(self, other: Self) {
        assert!(
            self.same_field(other),
            "GF(2^b) elements must belong to the same field: {:?} vs {:?}",
            self.field,
            other.field
        );
    }
}

/// Number of nonzero elements in a sequence.
pub fn symbol_weight(elems: &[Gf2n]) -> usize {
    elems.iter().filter(|e| !e.is_zero()).count()
}

/// Total Hamming weight of the bit vectors of a sequence.
pub fn bit_weight(elems: &[Gf2n]) -> u32 {
    elems.iter().map(|e| e.weight()).sum()
}

impl Add for Gf2n {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_field(rhs);
        Self {
            value: self.value ^ rhs.value,
            field: self.field,
        }
    }
}

impl Sub for Gf2n {
    type Output = Self;

    /// Characteristic two: subtraction is addition.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs
    }
}

impl Neg for Gf2n {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self
    }
}

impl Mul for Gf2n {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.assert_same_field(rhs);
        Self {
            value: self.field.mul_raw(self.value, rhs.value),
            field: self.field,
        }
    }
}

impl fmt::Debug for Gf2n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{})({})", self.field.nbit, self.value)
    }
}

impl fmt::Display for Gf2n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Gf2n> for u64 {
    fn from(e: Gf2n) -> Self {
        e.value as u64
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Gf2n {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value, serializer)
    }
}
