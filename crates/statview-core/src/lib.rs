//! statview core: sampling, statistics, and chart rasterization.
//!
//! This crate holds everything the HTTP service computes, with no transport
//! or runtime dependencies, so the same functions back the server, the tests
//! and the console demos.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Degenerate input (empty samples, zero variance, bad distribution
//! parameters) surfaces as `StatError` instead of a division by zero.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod chart;
pub mod distribution;
pub mod error;
pub mod sample;
pub mod stats;

#[cfg(feature = "search")]
pub mod search;

/// Shared result type.
pub use error::{Result, StatError};
