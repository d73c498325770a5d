//! Cyclotomic cosets of exponents modulo `q^m - 1`.
//!
//! The coset of `i` is `{i, i*q, i*q^2, ...} mod (q^m - 1)`. Its members are
//! the exponents of the conjugates of `alpha^i`, which share one minimal
//! polynomial over GF(q).

use tracing::debug;

use crate::code::params::CodeParams;

/// One conjugacy class of exponents, in generation order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coset {
    members: Vec<u64>,
}

impl Coset {
    /// The coset of `leader` under multiplication by `q` modulo `modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// use cyclobound::code::coset::Coset;
    ///
    /// assert_eq!(Coset::of(1, 2, 7).members(), &[1, 2, 4]);
    /// assert_eq!(Coset::of(3, 2, 7).members(), &[3, 6, 5]);
    /// assert_eq!(Coset::of(0, 2, 7).members(), &[0]);
    /// ```
    pub fn of(leader: u64, q: u64, modulus: u64) -> Self {
        let start = leader % modulus;
        let mut members = vec![start];
        let mut e = (start * q) % modulus;
        while e != start {
            members.push(e);
            e = (e * q) % modulus;
        }
        Self { members }
    }

    /// The exponent the coset was generated from.
    pub fn leader(&self) -> u64 {
        self.members[0]
    }

    pub fn members(&self) -> &[u64] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, e: u64) -> bool {
        self.members.contains(&e)
    }
}

/// Every cyclotomic coset of `{0, ..., modulus - 1}`, ordered by leader.
///
/// The cosets partition the range: each exponent appears in exactly one.
pub fn partition(q: u64, modulus: u64) -> Vec<Coset> {
    let mut used = vec![false; modulus as usize];
    let mut cosets = Vec::new();
    for i in 0..modulus {
        if used[i as usize] {
            continue;
        }
        let coset = Coset::of(i, q, modulus);
        for &e in coset.members() {
            used[e as usize] = true;
        }
        cosets.push(coset);
    }
    cosets
}

/// The cosets whose members are exponents of n-th roots of unity.
///
/// `alpha^i` is an n-th root of unity exactly when `i * n` is a multiple of
/// `q^m - 1`. Together these cosets hold the `n` roots of `x^n - 1`.
pub fn root_cosets(params: &CodeParams) -> Vec<Coset> {
    let modulus = params.group_order();
    let n = params.n();
    let alpha = params.ext().alpha();

    let cosets: Vec<Coset> = partition(params.q(), modulus)
        .into_iter()
        .filter(|c| alpha.pow(c.leader()).pow(n).is_one())
        .collect();

    for (i, c) in cosets.iter().enumerate() {
        debug!(index = i, leader = c.leader(), members = ?c.members(), "cyclotomic coset");
    }
    cosets
}
