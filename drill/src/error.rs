//! Errors related to the `drill` crate.
//!
//! Please see documentation of the [`error-chain` crate](https://docs.rs/error-chain/0.12.0/error_chain/) for detailed
//! usage.

error_chain! {
    errors {
        /// The bounds given to [`Range::new()`] do not describe a non-empty inclusive range that can be sampled.
        ///
        /// [`Range::new()`]: ../draw/struct.Range.html#method.new
        InvalidRange(low: i64, high: i64) {
            description("invalid range")
            display("invalid range [{}, {}], the lower bound must not exceed the upper bound", low, high)
        }
    }
}
