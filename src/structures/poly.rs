use core::fmt;
use core::ops::{Add, Mul};

use crate::structures::gf2n::{bit_weight, symbol_weight, BinaryField, Gf2n};

/// Polynomial over a binary field GF(2^b).
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// The zero polynomial is represented as an empty coefficient vector. The
/// field is stored alongside so that even the zero polynomial knows where its
/// coefficients live.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Poly {
    coeffs: Vec<Gf2n>,
    field: BinaryField,
}

impl Poly {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`.
    /// Trailing zeros are automatically removed.
    ///
    /// # Panics
    ///
    /// Panics if a coefficient belongs to a different field.
    ///
    /// # Example
    ///
    /// ```
    /// use cyclobound::gf2n::{BinaryField, PrimitiveTable};
    /// use cyclobound::Poly;
    ///
    /// let gf4 = BinaryField::new(2, &PrimitiveTable::standard()).unwrap();
    ///
    /// // 1 + alpha*x + x^2
    /// let p = Poly::new(vec![gf4.one(), gf4.alpha(), gf4.one()], gf4);
    /// assert_eq!(p.degree(), Some(2));
    /// ```
    pub fn new(coeffs: Vec<Gf2n>, field: BinaryField) -> Self {
        assert!(
            coeffs.iter().all(|c| c.field() == field),
            "polynomial coefficients must belong to {}",
            field
        );
        let mut poly = Self { coeffs, field };
        poly.normalize();
        poly
    }

    /// Create a polynomial from integer coefficients in ascending order.
    pub fn from_values(values: &[u64], field: BinaryField) -> Self {
        let coeffs = values.iter().map(|&v| field.element(v)).collect();
        Self::new(coeffs, field)
    }

    /// Create a polynomial from integer coefficients, highest degree first.
    ///
    /// # Example
    ///
    /// ```
    /// use cyclobound::gf2n::{BinaryField, PrimitiveTable};
    /// use cyclobound::Poly;
    ///
    /// let gf2 = BinaryField::new(1, &PrimitiveTable::standard()).unwrap();
    ///
    /// // "1011" is x^3 + x + 1
    /// let g = Poly::from_descending(&[1, 0, 1, 1], gf2);
    /// assert_eq!(g, Poly::from_values(&[1, 1, 0, 1], gf2));
    /// ```
    pub fn from_descending(values: &[u64], field: BinaryField) -> Self {
        let coeffs = values.iter().rev().map(|&v| field.element(v)).collect();
        Self::new(coeffs, field)
    }

    /// Create the zero polynomial.
    pub fn zero(field: BinaryField) -> Self {
        Self {
            coeffs: Vec::new(),
            field,
        }
    }

    /// Create the constant polynomial `1`.
    pub fn one(field: BinaryField) -> Self {
        Self::constant(field.one())
    }

    /// Create a constant polynomial.
    pub fn constant(c: Gf2n) -> Self {
        Self::new(vec![c], c.field())
    }

    /// Create the polynomial `x`.
    pub fn x(field: BinaryField) -> Self {
        Self {
            coeffs: vec![field.zero(), field.one()],
            field,
        }
    }

    /// Create a monomial `c * x^n`.
    pub fn monomial(c: Gf2n, n: usize) -> Self {
        let field = c.field();
        if c.is_zero() {
            return Self::zero(field);
        }
        let mut coeffs = vec![field.zero(); n + 1];
        coeffs[n] = c;
        Self { coeffs, field }
    }

    /// `x^n - 1`, which over characteristic two is `x^n + 1`.
    ///
    /// # Example
    ///
    /// ```
    /// use cyclobound::gf2n::{BinaryField, PrimitiveTable};
    /// use cyclobound::Poly;
    ///
    /// let gf2 = BinaryField::new(1, &PrimitiveTable::standard()).unwrap();
    /// let p = Poly::x_pow_n_minus_one(3, gf2);
    /// assert_eq!(p, Poly::from_values(&[1, 0, 0, 1], gf2));
    /// ```
    pub fn x_pow_n_minus_one(n: usize, field: BinaryField) -> Self {
        Self::monomial(field.one(), n) + Self::one(field)
    }

    /// Create a polynomial from its roots: `(x - r1)(x - r2)...(x - rn)`.
    ///
    /// The empty product is the constant `1`.
    pub fn from_roots(roots: &[Gf2n], field: BinaryField) -> Self {
        roots.iter().fold(Self::one(field), |acc, &root| {
            acc * Self::new(vec![-root, field.one()], field)
        })
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        if self.coeffs.is_empty() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<Gf2n> {
        self.coeffs.last().copied()
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> Gf2n {
        self.coeffs.get(i).copied().unwrap_or(self.field.zero())
    }

    /// Get a slice of all coefficients.
    pub fn coefficients(&self) -> &[Gf2n] {
        &self.coeffs
    }

    /// The field the coefficients live in.
    pub fn field(&self) -> BinaryField {
        self.field
    }

    /// Coefficient values, highest degree first.
    pub fn descending_values(&self) -> Vec<u32> {
        self.coeffs.iter().rev().map(|c| c.value()).collect()
    }

    /// Number of nonzero coefficients.
    pub fn weight(&self) -> usize {
        symbol_weight(&self.coeffs)
    }

    /// Total Hamming weight of the coefficient bit vectors.
    pub fn bit_weight(&self) -> u32 {
        bit_weight(&self.coeffs)
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// # Panics
    ///
    /// Panics if `x` belongs to a different field.
    pub fn eval(&self, x: Gf2n) -> Gf2n {
        let mut result = self.field.zero();
        for &coeff in self.coeffs.iter().rev() {
            result = result * x + coeff;
        }
        result
    }

    /// Whether `x` is a root of the polynomial.
    pub fn is_root(&self, x: Gf2n) -> bool {
        self.eval(x).is_zero()
    }

    /// Apply `f` to every coefficient, producing a polynomial over `field`.
    ///
    /// Stops at the first error.
    pub fn try_map<E, F>(&self, field: BinaryField, mut f: F) -> Result<Self, E>
    where
        F: FnMut(Gf2n) -> Result<Gf2n, E>,
    {
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| f(c))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Self::new(coeffs, field))
    }

    /// Remove trailing zero coefficients.
    fn normalize(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and `deg(r) < deg(divisor)`.
    ///
    /// Returns `None` if the divisor is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use cyclobound::gf2n::{BinaryField, PrimitiveTable};
    /// use cyclobound::Poly;
    ///
    /// let gf2 = BinaryField::new(1, &PrimitiveTable::standard()).unwrap();
    ///
    /// // x^7 + 1 = (x^3 + x + 1)(x^4 + x^2 + x + 1)
    /// let dividend = Poly::x_pow_n_minus_one(7, gf2);
    /// let divisor = Poly::from_values(&[1, 1, 0, 1], gf2);
    /// let (q, r) = dividend.div_rem(&divisor).unwrap();
    ///
    /// assert_eq!(q, Poly::from_values(&[1, 1, 1, 0, 1], gf2));
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Option<(Self, Self)> {
        let divisor_deg = divisor.degree()?;
        match self.degree() {
            None => return Some((Self::zero(self.field), Self::zero(self.field))),
            Some(d) if d < divisor_deg => return Some((Self::zero(self.field), self.clone())),
            _ => {}
        }

        let lc_inv = divisor.leading_coeff()?.inverse()?;
        let mut remainder = self.clone();
        let mut quotient_coeffs =
            vec![self.field.zero(); self.coeffs.len() - divisor.coeffs.len() + 1];

        while let Some(rem_deg) = remainder.degree() {
            if rem_deg < divisor_deg {
                break;
            }

            let rem_lc = remainder.leading_coeff()?;
            let coeff = rem_lc * lc_inv;
            let deg_diff = rem_deg - divisor_deg;

            quotient_coeffs[deg_diff] = coeff;

            // remainder -= coeff * x^deg_diff * divisor
            for (i, &d_coeff) in divisor.coeffs.iter().enumerate() {
                remainder.coeffs[i + deg_diff] = remainder.coeffs[i + deg_diff] - coeff * d_coeff;
            }
            remainder.normalize();
        }

        Some((Self::new(quotient_coeffs, self.field), remainder))
    }

    /// Compute the remainder of division.
    ///
    /// Returns `None` if the divisor is zero.
    pub fn rem(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Whether `self` divides `other` exactly.
    pub fn divides(&self, other: &Self) -> bool {
        other.rem(self).is_some_and(|r| r.is_zero())
    }

    fn assert_same_field(&self, other: &Self) {
        assert!(
            self.field == other.field,
            "polynomials must share a field: {} vs {}",
            self.field,
            other.field
        );
    }

    /// Naive O(n*m) convolution.
    fn convolve(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        if self.is_zero() || rhs.is_zero() {
            return Self::zero(self.field);
        }

        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut coeffs = vec![self.field.zero(); n + m - 1];

        for i in 0..n {
            for j in 0..m {
                coeffs[i + j] = coeffs[i + j] + self.coeffs[i] * rhs.coeffs[j];
            }
        }

        Self::new(coeffs, self.field)
    }

    fn sum(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        let max_len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..max_len).map(|i| self.coeff(i) + rhs.coeff(i)).collect();
        Self::new(coeffs, self.field)
    }
}

/* ---- Arithmetic operators ---- */

impl Add for Poly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(&rhs)
    }
}

impl Add<&Poly> for Poly {
    type Output = Self;

    fn add(self, rhs: &Poly) -> Self::Output {
        self.sum(rhs)
    }
}

impl Mul for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.convolve(&rhs)
    }
}

impl Mul<&Poly> for Poly {
    type Output = Self;

    fn mul(self, rhs: &Poly) -> Self::Output {
        self.convolve(rhs)
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Self::Output {
        self.convolve(rhs)
    }
}

/// Scalar multiplication: polynomial * field element
impl Mul<Gf2n> for Poly {
    type Output = Self;

    fn mul(self, rhs: Gf2n) -> Self::Output {
        let field = self.field;
        let coeffs = self.coeffs.into_iter().map(|c| c * rhs).collect();
        Self::new(coeffs, field)
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate() {
            if coeff.is_zero() {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{}", coeff.value())?,
                1 if coeff.is_one() => write!(f, "x")?,
                1 => write!(f, "{}*x", coeff.value())?,
                _ if coeff.is_one() => write!(f, "x^{}", i)?,
                _ => write!(f, "{}*x^{}", coeff.value(), i)?,
            }
        }

        Ok(())
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Poly {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as a vector of coefficient values
        let values: Vec<u32> = self.coeffs.iter().map(|c| c.value()).collect();
        serde::Serialize::serialize(&values, serializer)
    }
}
