/// Greatest common divisor of two non-negative integers.
///
/// `gcd(0, 0)` is defined as `0`.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Exact base-2 logarithm of `q`.
///
/// Returns `None` unless `q` is a power of two greater than one.
pub const fn log2_exact(q: u64) -> Option<u32> {
    if q < 2 || !q.is_power_of_two() {
        return None;
    }
    Some(q.trailing_zeros())
}

/// Smallest `m >= 1` such that `n` divides `q^m - 1`, searching up to `max_m`.
///
/// This is the degree of the extension GF(q^m) that contains the n-th roots
/// of unity. Returns `None` if no such `m` exists within the limit (always the
/// case when `n` shares a factor with `q`).
pub fn extension_degree(n: u64, q: u64, max_m: u32) -> Option<u32> {
    if n == 0 || gcd(n, q) != 1 {
        return None;
    }

    // Track q^m mod n in u128; n may be close to u64::MAX.
    let (n, q) = (u128::from(n), u128::from(q));
    let one = 1 % n;
    let mut qm = q % n;
    for m in 1..=max_m {
        if qm == one {
            return Some(m);
        }
        qm = qm * q % n;
    }
    None
}
