//! `drill` prints the first N Fibonacci numbers, or draws a random number and tells whether it is prime.
//!
//! ```sh
//! drill fib 10
//! drill prime --max 1000 --json
//! ```

#![recursion_limit = "128"] // needed for error_chain.

#![cfg_attr(feature = "cargo-clippy", warn(warnings, clippy_pedantic))]
#![cfg_attr(feature = "cargo-clippy", allow(missing_docs_in_private_items, non_ascii_literal, shadow_reuse))]

#[macro_use]
extern crate clap;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate drill;
extern crate env_logger;
extern crate rand;
extern crate serde_json;
extern crate termcolor;

#[macro_use]
mod ui;
mod argparse;
mod error;
mod output;

use argparse::*;
use error::Result;

use rand::thread_rng;

use std::io;
use std::process::exit;

/// Program entry. Calls [`run()`] and prints any error returned to `stderr`.
///
/// [`run()`]: ./fn.run.html
fn main() {
    if let Err(error) = run() {
        ui::print_error(&error).expect("error while printing error 🤷");
        exit(1);
    }
}

/// Runs the `drill` program.
fn run() -> Result<()> {
    let matches = app().get_matches();
    env_logger::init();

    let (subcommand, matches) = matches.subcommand();
    let matches = matches.expect("matches");
    debug!("subcommand = {}, matches = {:?}", subcommand, matches);

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    match subcommand {
        "fib" => output::write_fibonacci(&mut lock, &FibConfig::parse(matches)?)?,
        "prime" => {
            let candidate = output::write_prime(&mut lock, &PrimeConfig::parse(matches)?, &mut thread_rng())?;
            debug!("candidate = {:?}", candidate);
        }
        _ => unreachable!("clap accepted unknown subcommand {}", subcommand),
    }

    Ok(())
}
