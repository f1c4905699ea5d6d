use super::super::consts::*;
use super::super::error::*;

///
/// Factorials of 0..=MAX_FACTORIAL
///
/// These are precomputed rather than calculated on demand so that curves with too many control
/// points are rejected instead of silently losing precision.
///
const FACTORIAL_TABLE: [u64; MAX_FACTORIAL+1] = factorial_table();

const fn factorial_table() -> [u64; MAX_FACTORIAL+1] {
    let mut table   = [1; MAX_FACTORIAL+1];
    let mut n       = 1;

    while n <= MAX_FACTORIAL {
        table[n] = table[n-1] * (n as u64);
        n += 1;
    }

    table
}

///
/// Returns n! (for n in the range 0..=MAX_FACTORIAL)
///
pub fn factorial(n: usize) -> CurveResult<f64> {
    FACTORIAL_TABLE.get(n)
        .map(|factorial| *factorial as f64)
        .ok_or(CurveError::FactorialOutOfRange(n))
}

///
/// The binomial coefficient nCr
///
pub fn choose(n: usize, r: usize) -> CurveResult<f64> {
    if r > n {
        return Err(CurveError::FactorialOutOfRange(r));
    }

    Ok(factorial(n)? / (factorial(r)? * factorial(n-r)?))
}

///
/// nCr for values that are already known to be in range (curves check their degree when they're created)
///
#[inline]
pub(crate) fn binomial(n: usize, r: usize) -> f64 {
    debug_assert!(r <= n && n <= MAX_FACTORIAL);

    let n_factorial = FACTORIAL_TABLE[n] as f64;
    let r_factorial = FACTORIAL_TABLE[r] as f64;
    let d_factorial = FACTORIAL_TABLE[n-r] as f64;

    n_factorial / (r_factorial * d_factorial)
}
