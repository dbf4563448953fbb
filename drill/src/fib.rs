//! The Fibonacci sequence.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use std::cmp;
use std::mem;

/// Iterator of Fibonacci numbers, starting from 0.
///
/// Terms are arbitrary-precision, so the iterator never ends.
///
/// ```rust
/// use drill::{BigUint, Fibonacci};
/// let first: Vec<BigUint> = Fibonacci::new().take(7).collect();
/// let expected: Vec<BigUint> = [0u32, 1, 1, 2, 3, 5, 8].iter().map(|&t| t.into()).collect();
/// assert_eq!(first, expected);
/// ```
#[derive(Debug, Clone)]
pub struct Fibonacci {
    a: BigUint,
    b: BigUint,
}

impl Fibonacci {
    pub fn new() -> Fibonacci {
        Fibonacci { a: BigUint::zero(), b: BigUint::one() }
    }
}

impl Default for Fibonacci {
    fn default() -> Fibonacci {
        Fibonacci::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;
    fn next(&mut self) -> Option<BigUint> {
        let sum = &self.a + &self.b;
        let next_b = mem::replace(&mut self.b, sum);
        Some(mem::replace(&mut self.a, next_b))
    }
}

/// Produces the first `n` Fibonacci numbers.
///
/// A non-positive `n` gives an empty sequence, otherwise the sequence has exactly `n` terms.
///
/// ```rust
/// # use drill::{BigUint, fibonacci};
/// assert!(fibonacci(-3).is_empty());
/// assert_eq!(fibonacci(1), vec![BigUint::from(0u32)]);
/// assert_eq!(fibonacci(5).last(), Some(&BigUint::from(3u32)));
/// ```
pub fn fibonacci(n: i64) -> Vec<BigUint> {
    if n <= 0 {
        return Vec::new();
    }
    let count = cmp::min(n as u64, usize::max_value() as u64) as usize;
    debug!("generating {} Fibonacci terms", count);
    Fibonacci::new().take(count).collect()
}

#[cfg(test)]
fn terms(values: &[u64]) -> Vec<BigUint> {
    values.iter().map(|&t| BigUint::from(t)).collect()
}

#[test]
fn test_small_sequences() {
    assert!(fibonacci(0).is_empty());
    assert!(fibonacci(i64::min_value()).is_empty());
    assert_eq!(fibonacci(1), terms(&[0]));
    assert_eq!(fibonacci(2), terms(&[0, 1]));
    assert_eq!(fibonacci(10), terms(&[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]));
}

#[test]
fn test_terms_beyond_64_bits() {
    let seq = fibonacci(101);
    assert_eq!(seq.len(), 101);
    assert_eq!(seq[93], BigUint::from(12_200_160_415_121_876_738u64));
    assert_eq!(seq[94], "19740274219868223167".parse::<BigUint>().unwrap());
    assert_eq!(seq[100], "354224848179261915075".parse::<BigUint>().unwrap());
}
