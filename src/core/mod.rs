//! Core request-admission and resilient-delivery layer
//!
//! Everything with real concurrency, timing, and failure handling lives
//! here: the sliding-window limiter, the retry engine, the stream relay,
//! and the upstream generation seam they connect to.

pub mod generation;
pub mod rate_limiter;
pub mod retry;
pub mod streaming;
