//! # Attestr Core
//!
//! Core Rust library for the numeric-outcome encoding scheme used by
//! Discreet Log Contracts (DLCs).
//!
//! A numeric oracle attests to a measured value (an asset price, a
//! hashrate, a temperature) by signing one digit per nonce in a fixed
//! base. A contract's payout curve is a small list of contiguous payout
//! ranges over that numeric domain; each range is covered by a minimal set
//! of digit prefixes so that proving an outcome falls in a range takes as
//! few oracle signatures as possible.
//!
//! ## Features
//!
//! - **Digit Codec**: Fixed-width base-N decomposition and recomposition
//!   of outcome values, including the string-digit wire convention
//! - **Prefix Grouping**: Minimal digit-prefix partition of any contiguous
//!   outcome range
//! - **Range Canonicalization**: Stretching a payout curve's edge ranges
//!   to exactly tile the outcome domain
//!
//! ## Examples
//!
//! ```rust
//! use attestr_core::group_by_ignoring_digits;
//!
//! // Digit prefixes covering prices 171..=210 over two base-16 nonces.
//! let groups = group_by_ignoring_digits(171, 210, 16, 2)?;
//!
//! // The whole 0xB0..=0xBF block collapses to the single prefix [11].
//! assert!(groups.contains(&vec![11]));
//! Ok::<(), attestr_core::OutcomeError>(())
//! ```

pub mod digits;
pub mod error;
pub mod groups;
pub mod ranges;

pub use digits::{compose_outcome_value, compose_value, decompose_outcome_value, decompose_value};
pub use error::{OutcomeError, Result};
pub use groups::group_by_ignoring_digits;
pub use ranges::{group_outcomes, max_ranges, OutcomeGroups, Payout, RangeOutcome};
