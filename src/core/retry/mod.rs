//! Retry engine: backoff scheduling and supervised execution
//!
//! Wraps arbitrary asynchronous operations with a per-attempt timeout,
//! failure classification, and exponential backoff between attempts.

pub mod backoff;
mod executor;

#[cfg(test)]
mod tests;

pub use executor::{RetryExecutor, RetryHook, RetryPredicate};
