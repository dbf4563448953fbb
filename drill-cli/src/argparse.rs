//! Command line argument parsing.
//!
//! The subcommand handlers never see `ArgMatches`; each subcommand's arguments are first collected into a config
//! struct here.

use error::Result;

use clap::{App, ArgMatches};
use drill::Range;

/// Builds the `clap` application.
#[allow(unknown_lints, dangerous_implicit_autorefs)] // clap 2 `crate_authors!` trips this newer rustc lint.
pub fn app() -> App<'static, 'static> {
    clap_app!(drill =>
        (author: crate_authors!(", "))
        (about: crate_description!())
        (version: crate_version!())
        (@setting DeriveDisplayOrder)
        (@setting SubcommandRequiredElseHelp)
        (@setting VersionlessSubcommands)
        (@subcommand fib =>
            (about: "Prints the first N Fibonacci numbers")
            (@setting AllowNegativeNumbers)
            (@arg count: +required "Number of terms to print; non-positive values print nothing")
            (@arg json: --json "Print the sequence as a JSON array")
        )
        (@subcommand prime =>
            (about: "Draws a random number and tells whether it is prime")
            (@setting AllowNegativeNumbers)
            (@arg min: --min [LOW] "Smallest number that may be drawn, default to 1")
            (@arg max: --max [HIGH] "Largest number that may be drawn, default to 100")
            (@arg number: -n --number [N] "Classify this number instead of drawing one")
            (@arg json: --json "Print the result as a JSON object")
        )
    )
}

/// Arguments of `drill fib`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibConfig {
    pub count: i64,
    pub json: bool,
}

impl FibConfig {
    pub fn parse(matches: &ArgMatches) -> Result<FibConfig> {
        Ok(FibConfig {
            count: value_t!(matches, "count", i64)?,
            json: matches.is_present("json"),
        })
    }
}

/// Where the number classified by `drill prime` comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Draw(Range),
    Given(i64),
}

/// Arguments of `drill prime`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeConfig {
    pub source: Source,
    pub json: bool,
}

impl PrimeConfig {
    /// Parses the arguments of `drill prime`.
    ///
    /// # Errors
    ///
    /// * Returns [`Clap`] if any of the numbers is not an integer.
    /// * Returns [`InvalidRange`] if `--min` exceeds `--max`.
    ///
    /// [`Clap`]: ../error/enum.ErrorKind.html#variant.Clap
    /// [`InvalidRange`]: ../../drill/error/enum.ErrorKind.html#variant.InvalidRange
    pub fn parse(matches: &ArgMatches) -> Result<PrimeConfig> {
        let json = matches.is_present("json");
        if matches.is_present("number") {
            if matches.is_present("min") || matches.is_present("max") {
                warning!("--min and --max are ignored when --number is given");
            }
            let number = value_t!(matches, "number", i64)?;
            return Ok(PrimeConfig { source: Source::Given(number), json });
        }

        let low = optional_i64(matches, "min")?.unwrap_or(Range::DEFAULT.low());
        let high = optional_i64(matches, "max")?.unwrap_or(Range::DEFAULT.high());
        let range = Range::new(low, high)?;
        Ok(PrimeConfig { source: Source::Draw(range), json })
    }
}

fn optional_i64(matches: &ArgMatches, name: &str) -> Result<Option<i64>> {
    if matches.is_present(name) {
        Ok(Some(value_t!(matches, name, i64)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
fn sub_matches<'a>(matches: &'a ArgMatches<'static>, expected: &str) -> &'a ArgMatches<'static> {
    let (name, sub) = matches.subcommand();
    assert_eq!(name, expected);
    sub.expect("subcommand matches")
}

#[test]
fn test_parse_fib() {
    let matches = app().get_matches_from(vec!["drill", "fib", "12"]);
    let config = FibConfig::parse(sub_matches(&matches, "fib")).unwrap();
    assert_eq!(config, FibConfig { count: 12, json: false });

    let matches = app().get_matches_from(vec!["drill", "fib", "--json", "-3"]);
    let config = FibConfig::parse(sub_matches(&matches, "fib")).unwrap();
    assert_eq!(config, FibConfig { count: -3, json: true });
}

#[test]
fn test_parse_fib_rejects_non_integer() {
    let matches = app().get_matches_from(vec!["drill", "fib", "five"]);
    assert!(FibConfig::parse(sub_matches(&matches, "fib")).is_err());
}

#[test]
fn test_parse_prime_defaults() {
    let matches = app().get_matches_from(vec!["drill", "prime"]);
    let config = PrimeConfig::parse(sub_matches(&matches, "prime")).unwrap();
    assert_eq!(config, PrimeConfig { source: Source::Draw(Range::DEFAULT), json: false });
}

#[test]
fn test_parse_prime_range_and_number() {
    let matches = app().get_matches_from(vec!["drill", "prime", "--min", "-10", "--max", "10", "--json"]);
    let config = PrimeConfig::parse(sub_matches(&matches, "prime")).unwrap();
    assert_eq!(config.source, Source::Draw(Range::new(-10, 10).unwrap()));
    assert!(config.json);

    let matches = app().get_matches_from(vec!["drill", "prime", "-n", "91"]);
    let config = PrimeConfig::parse(sub_matches(&matches, "prime")).unwrap();
    assert_eq!(config.source, Source::Given(91));
}

#[test]
fn test_parse_prime_invalid_range() {
    use error::ErrorKind;
    use drill::ErrorKind as DrillErrorKind;

    let matches = app().get_matches_from(vec!["drill", "prime", "--min", "50", "--max", "40"]);
    let error = PrimeConfig::parse(sub_matches(&matches, "prime")).unwrap_err();
    match *error.kind() {
        ErrorKind::Drill(DrillErrorKind::InvalidRange(50, 40)) => {}
        ref e => panic!("unexpected error {:?}", e),
    }
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    assert!(app().get_matches_from_safe(vec!["drill", "bogus"]).is_err());
    assert!(app().get_matches_from_safe(vec!["drill", "fib", "3", "extra"]).is_err());
}
