//! Shared utilities
//!
//! This module contains cross-cutting helpers used throughout the gateway.

pub mod error;
