//! Primality test by trial division.

/// Computes ⌊√n⌋ using integer arithmetic only.
///
/// Starts from the floating-point estimate and corrects it, so no divisor can be skipped because of rounding.
pub fn integer_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}

/// Checks whether `n` is a prime number.
///
/// Values below 2 are never prime. Otherwise every integer from 2 up to and including ⌊√n⌋ is tried as a divisor.
///
/// ```rust
/// # use drill::is_prime;
/// assert!(!is_prime(1));
/// assert!(is_prime(2));
/// assert!(is_prime(17));
/// assert!(!is_prime(100));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    let limit = integer_sqrt(n);
    match (2..limit + 1).find(|d| n % d == 0) {
        Some(divisor) => {
            trace!("{} is divisible by {}", n, divisor);
            false
        }
        None => true,
    }
}

#[test]
fn test_integer_sqrt() {
    assert_eq!(integer_sqrt(0), 0);
    assert_eq!(integer_sqrt(1), 1);
    assert_eq!(integer_sqrt(3), 1);
    assert_eq!(integer_sqrt(4), 2);
    assert_eq!(integer_sqrt(99), 9);
    assert_eq!(integer_sqrt(100), 10);
    assert_eq!(integer_sqrt(u64::max_value()), 4_294_967_295);
    assert_eq!(integer_sqrt((1 << 52) + 1), 1 << 26);
}

#[test]
fn test_is_prime() {
    let primes_below_100 = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    ];
    for n in -5..101 {
        assert_eq!(is_prime(n), primes_below_100.contains(&n), "is_prime({})", n);
    }
}

#[test]
fn test_square_of_prime_is_not_prime() {
    assert!(!is_prime(49));
    assert!(!is_prime(121));
    assert!(!is_prime(10_007 * 10_007));
    assert!(is_prime(10_007));
}
