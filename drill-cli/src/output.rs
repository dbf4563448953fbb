//! Rendering subcommand results.
//!
//! Every function writes to a generic `Write` so `main` can hand over a locked stdout while tests collect the bytes.

use argparse::{FibConfig, PrimeConfig, Source};
use error::Result;

use drill::{BigUint, Candidate, fibonacci};
use rand::Rng;
use serde_json::{self, Number};

use std::io::Write;

/// Writes the first `config.count` Fibonacci numbers, one per line, or as a single-line JSON array.
pub fn write_fibonacci<W: Write>(out: &mut W, config: &FibConfig) -> Result<()> {
    let sequence = fibonacci(config.count);
    if config.json {
        let numbers = sequence.iter().map(json_number).collect::<Result<Vec<_>>>()?;
        serde_json::to_writer(&mut *out, &numbers)?;
        writeln!(out)?;
    } else {
        for term in &sequence {
            writeln!(out, "{}", term)?;
        }
    }
    Ok(())
}

/// Converts a term to a JSON number digit by digit. Requires the `arbitrary_precision` feature of `serde_json`,
/// otherwise terms past 2⁶⁴ would be rounded through `f64`.
fn json_number(term: &BigUint) -> Result<Number> {
    Ok(term.to_string().parse::<Number>()?)
}

/// Picks the number described by `source`, classifies it, and writes exactly one line.
pub fn write_prime<W: Write, R: Rng>(out: &mut W, config: &PrimeConfig, rng: &mut R) -> Result<Candidate> {
    let candidate = match config.source {
        Source::Draw(range) => Candidate::draw(rng, range),
        Source::Given(number) => Candidate::classify(number),
    };
    if config.json {
        serde_json::to_writer(&mut *out, &candidate)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", candidate)?;
    }
    Ok(candidate)
}

#[cfg(test)]
fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_write_fibonacci_lines() {
    let text = render(|out| write_fibonacci(out, &FibConfig { count: 5, json: false }));
    assert_eq!(text, "0\n1\n1\n2\n3\n");

    let text = render(|out| write_fibonacci(out, &FibConfig { count: 100, json: false }));
    assert_eq!(text.lines().count(), 100);
    assert_eq!(text.lines().last(), Some("218922995834555169026"));

    assert_eq!(render(|out| write_fibonacci(out, &FibConfig { count: -4, json: false })), "");
}

#[test]
fn test_write_fibonacci_json() {
    let text = render(|out| write_fibonacci(out, &FibConfig { count: 5, json: true }));
    assert_eq!(text, "[0,1,1,2,3]\n");

    assert_eq!(render(|out| write_fibonacci(out, &FibConfig { count: 0, json: true })), "[]\n");

    let text = render(|out| write_fibonacci(out, &FibConfig { count: 101, json: true }));
    assert_eq!(text.lines().count(), 1);
    assert!(text.ends_with(",218922995834555169026,354224848179261915075]\n"), "{}", text);
}

#[test]
fn test_write_prime_given() {
    use rand::thread_rng;

    let config = PrimeConfig { source: Source::Given(97), json: false };
    let text = render(|out| write_prime(out, &config, &mut thread_rng()).map(|_| ()));
    assert_eq!(text, "The number 97 is a prime number.\n");

    let config = PrimeConfig { source: Source::Given(91), json: true };
    let text = render(|out| write_prime(out, &config, &mut thread_rng()).map(|_| ()));
    assert_eq!(text, "{\"number\":91,\"prime\":false}\n");
}

#[test]
fn test_write_prime_drawn_is_one_line() {
    use drill::{Range, is_prime};
    use rand::thread_rng;

    let config = PrimeConfig { source: Source::Draw(Range::DEFAULT), json: false };
    for _ in 0..100 {
        let mut buf = Vec::new();
        let candidate = write_prime(&mut buf, &config, &mut thread_rng()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(Range::DEFAULT.contains(candidate.number));
        assert_eq!(candidate.prime, is_prime(candidate.number));
        assert_eq!(text, format!("{}\n", candidate));
        assert!(text.starts_with("The generated number "));
        assert_eq!(text.lines().count(), 1);
    }
}
