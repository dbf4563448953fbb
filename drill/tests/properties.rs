extern crate drill;
extern crate rand;
extern crate serde_json;

use drill::*;

use rand::thread_rng;

#[test]
fn non_positive_lengths_are_empty() {
    for n in &[0, -1, -2, -100, i64::min_value()] {
        assert!(fibonacci(*n).is_empty(), "fibonacci({})", n);
    }
}

fn terms(values: &[u64]) -> Vec<BigUint> {
    values.iter().map(|&t| BigUint::from(t)).collect()
}

#[test]
fn known_prefixes() {
    assert_eq!(fibonacci(1), terms(&[0]));
    assert_eq!(fibonacci(5), terms(&[0, 1, 1, 2, 3]));
}

#[test]
fn each_term_is_the_sum_of_the_previous_two() {
    for n in 2..120 {
        let seq = fibonacci(n);
        assert_eq!(&seq[..2], &terms(&[0, 1])[..]);
        for i in 2..seq.len() {
            assert_eq!(seq[i], &seq[i - 1] + &seq[i - 2], "fibonacci({})[{}]", n, i);
        }
    }
}

#[test]
fn length_matches_request() {
    for n in -3..300 {
        let expected = if n <= 0 { 0 } else { n as usize };
        assert_eq!(fibonacci(n).len(), expected, "fibonacci({})", n);
    }
    assert_eq!(fibonacci(100).len(), 100);
}

#[test]
fn sequence_is_deterministic() {
    assert_eq!(fibonacci(40), fibonacci(40));
    assert_eq!(fibonacci(40)[..20], fibonacci(20)[..]);
}

#[test]
fn documented_primality_cases() {
    assert!(!is_prime(1));
    assert!(is_prime(2));
    assert!(is_prime(17));
    assert!(!is_prime(100));
}

#[test]
fn negative_numbers_are_not_prime() {
    assert!(!is_prime(-7));
    assert!(!is_prime(i64::min_value()));
}

#[test]
fn demo_draws_consistent_candidates() {
    let mut rng = thread_rng();
    let mut seen = [false; 101];
    for _ in 0..20_000 {
        let candidate = Candidate::draw(&mut rng, Range::DEFAULT);
        assert!(candidate.generated);
        assert!(candidate.number >= 1 && candidate.number <= 100);
        assert_eq!(candidate.prime, is_prime(candidate.number));
        seen[candidate.number as usize] = true;
    }
    // 20000 uniform draws over 100 values practically never miss one.
    assert!(seen[1..].iter().all(|&s| s));
    assert!(!seen[0]);
}

#[test]
fn candidate_serializes_to_json() {
    let json = serde_json::to_string(&Candidate::classify(17)).unwrap();
    assert_eq!(json, r#"{"number":17,"prime":true}"#);
}
