//! Drawing a random candidate and classifying it.

use error::{ErrorKind, Result};
use prime::is_prime;

use rand::{Rng, thread_rng};

use std::fmt;

/// An inclusive range `[low, high]` to draw candidates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    low: i64,
    high: i64,
}

impl Range {
    /// The range `[1, 100]` used by the primality demo.
    pub const DEFAULT: Range = Range { low: 1, high: 100 };

    /// Creates a new inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRange`] if `low > high`, or if `high` is `i64::MAX` (the sampler works with a half-open range
    /// internally).
    ///
    /// [`InvalidRange`]: ../error/enum.ErrorKind.html#variant.InvalidRange
    pub fn new(low: i64, high: i64) -> Result<Range> {
        ensure!(low <= high && high < i64::max_value(), ErrorKind::InvalidRange(low, high));
        Ok(Range { low, high })
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn contains(&self, n: i64) -> bool {
        self.low <= n && n <= self.high
    }
}

impl Default for Range {
    fn default() -> Range {
        Range::DEFAULT
    }
}

/// A number together with its primality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Candidate {
    pub number: i64,
    pub prime: bool,
    /// Whether the number was drawn at random rather than supplied by the caller.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub generated: bool,
}

impl Candidate {
    /// Classifies a known number.
    pub fn classify(number: i64) -> Candidate {
        Candidate {
            number,
            prime: is_prime(number),
            generated: false,
        }
    }

    /// Draws a number uniformly from `range` and classifies it.
    pub fn draw<R: Rng>(rng: &mut R, range: Range) -> Candidate {
        let number = rng.gen_range(range.low, range.high + 1);
        debug!("drew {} from [{}, {}]", number, range.low, range.high);
        Candidate {
            generated: true,
            ..Candidate::classify(number)
        }
    }
}

/// Renders the demo message, e.g. `The generated number 17 is a prime number.` A number supplied by the caller reads
/// `The number 97 is a prime number.` instead.
impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let subject = if self.generated { "The generated number" } else { "The number" };
        let verdict = if self.prime { "is" } else { "is not" };
        write!(f, "{} {} {} a prime number.", subject, self.number, verdict)
    }
}

/// Draws a number from [`Range::DEFAULT`] using the thread-local generator.
///
/// [`Range::DEFAULT`]: struct.Range.html#associatedconstant.DEFAULT
pub fn draw_default() -> Candidate {
    Candidate::draw(&mut thread_rng(), Range::DEFAULT)
}

#[test]
fn test_range_new() {
    assert_eq!(Range::new(1, 100).unwrap(), Range::DEFAULT);
    assert_eq!(Range::new(7, 7).unwrap().low(), 7);
    match *Range::new(5, 4).unwrap_err().kind() {
        ErrorKind::InvalidRange(5, 4) => {}
        ref e => panic!("unexpected error {:?}", e),
    }
    assert!(Range::new(0, i64::max_value()).is_err());
}

#[test]
fn test_display() {
    let drawn = |number| Candidate { generated: true, ..Candidate::classify(number) };
    assert_eq!(drawn(17).to_string(), "The generated number 17 is a prime number.");
    assert_eq!(drawn(100).to_string(), "The generated number 100 is not a prime number.");
    assert_eq!(drawn(1).to_string(), "The generated number 1 is not a prime number.");
}

#[test]
fn test_display_given_number() {
    assert_eq!(Candidate::classify(97).to_string(), "The number 97 is a prime number.");
    assert_eq!(Candidate::classify(-4).to_string(), "The number -4 is not a prime number.");
}

#[test]
fn test_draw_single_value_range() {
    let mut rng = thread_rng();
    let range = Range::new(97, 97).unwrap();
    for _ in 0..10 {
        assert_eq!(Candidate::draw(&mut rng, range), Candidate { number: 97, prime: true, generated: true });
    }
}

#[test]
fn test_draw_default_stays_in_range() {
    for _ in 0..1000 {
        let candidate = draw_default();
        assert!(Range::DEFAULT.contains(candidate.number), "{} out of range", candidate.number);
        assert_eq!(candidate.prime, is_prime(candidate.number));
        assert!(candidate.generated);
        assert!(candidate.to_string().starts_with("The generated number "));
    }
}
