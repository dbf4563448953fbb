//! Two small textbook routines: generating the first N Fibonacci numbers, and drawing a random integer to test it for
//! primality by trial division.
//!
//! ```rust
//! assert_eq!(drill::fibonacci(5).len(), 5);
//! assert!(drill::is_prime(17));
//! ```

#![recursion_limit="128"] // needed for error_chain.

#![cfg_attr(feature = "cargo-clippy", warn(warnings, clippy_pedantic))]
#![cfg_attr(feature = "cargo-clippy", allow(missing_docs_in_private_items, new_without_default_derive))]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
extern crate num_bigint;
extern crate num_traits;
extern crate rand;

pub mod error;
pub mod fib;
pub mod prime;
pub mod draw;

pub use draw::{Candidate, Range, draw_default};
pub use error::{ErrorKind, Result};
pub use fib::{Fibonacci, fibonacci};
pub use num_bigint::BigUint;
pub use prime::is_prime;
