//! Error types for field construction, generator synthesis and bound checks.
//!
//! Two kinds of failure abort the analysis of a generator:
//! - [`ConfigurationError`]: the requested field or code cannot be built.
//! - [`ConsistencyError`]: an internal invariant failed (a generator that does
//!   not divide `x^n - 1`, a wrong root count, a Tzeng witness that does not
//!   replay).
//!
//! A bound search that finds nothing is not an error; the evaluators return
//! the floor value instead (see [`crate::code::bounds::Bound::is_floor`]).

use thiserror::Error;

/// The requested field or code parameters are unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No primitive polynomial is known for this bit-width.
    #[error("no primitive polynomial for nbit = {nbit}")]
    UnsupportedWidth { nbit: u32 },

    /// Field size is not a power of two.
    #[error("field size q = {q} is not a power of two greater than 1")]
    NotPowerOfTwo { q: u64 },

    /// The primitive element does not generate the whole multiplicative group.
    #[error("characteristic of alpha is {found}, expected q^m = {expected}")]
    CharacteristicMismatch { expected: u64, found: u64 },

    /// Code length is too small.
    #[error("code length n = {n} must be at least 2")]
    InvalidLength { n: u64 },

    /// No extension GF(q^m) of supported size contains the n-th roots of unity.
    #[error("no supported extension of GF({q}) contains the {n}-th roots of unity")]
    NoExtension { n: u64, q: u64 },

    /// Extension field is wider than the element representation allows.
    #[error("extension field GF(2^{nbit}) is too large")]
    FieldTooLarge { nbit: u32 },

    /// A generator digit is not an element of GF(q).
    #[error("generator digit '{digit}' is not an element of GF({q})")]
    InvalidDigit { digit: char, q: u64 },

    /// Too many irreducible factors to enumerate every generator.
    #[error("{factors} irreducible factors is too many to enumerate (limit {limit})")]
    TooManyFactors { factors: usize, limit: usize },

    /// An explicit generator is the zero polynomial.
    #[error("generator polynomial is empty or zero")]
    EmptyGenerator,

    /// An explicit generator is a nonzero constant, so the code is all of GF(q)^n.
    #[error("generator g(x) = {generator} has degree 0; the code has minimum distance 1")]
    ConstantGenerator { generator: String },

    /// The base field is not a subfield of the extension.
    #[error("GF(2^{base}) is not a subfield of GF(2^{ext})")]
    NotSubfield { base: u32, ext: u32 },
}

/// An internal invariant of the bound engine was violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    /// The generator has a different number of roots than its degree.
    #[error("g(x) = {generator} is a {degree}-degree polynomial, but it has {roots} roots")]
    RootCountMismatch {
        generator: String,
        degree: usize,
        roots: usize,
    },

    /// The generator does not divide `x^n - 1`.
    #[error("g(x) = {generator} does not divide x^n - 1 (remainder {remainder})")]
    NotDivisor { generator: String, remainder: String },

    /// A point of the winning Tzeng rectangle is not a root.
    #[error(
        "Tzeng witness fails replay at (b0, s, i1, s2, i2) = ({b0}, {s}, {i1}, {s2}, {i2})"
    )]
    TzengWitness {
        b0: u64,
        s: u64,
        i1: u64,
        s2: u64,
        i2: u64,
    },

    /// A coefficient has no preimage in the base field.
    #[error("coefficient {coefficient} does not lie in the base field")]
    NotInSubfield { coefficient: u32 },

    /// Two operands belong to different fields.
    #[error("operands belong to different fields: GF(2^{left}) and GF(2^{right})")]
    FieldMismatch { left: u32, right: u32 },
}

/// Any fatal failure while analysing a code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

impl BoundError {
    /// Whether this error comes from unusable parameters.
    pub fn is_configuration(&self) -> bool {
        matches!(self, BoundError::Configuration(_))
    }

    /// Whether this error comes from a violated internal invariant.
    pub fn is_consistency(&self) -> bool {
        matches!(self, BoundError::Consistency(_))
    }
}

/// Result alias used throughout the crate.
pub type BoundResult<T> = Result<T, BoundError>;
