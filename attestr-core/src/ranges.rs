//! # Payout Ranges and Domain Canonicalization
//!
//! A contract's payout curve is an ordered list of contiguous
//! [`RangeOutcome`]s over the numeric outcome domain. The curve entered by
//! the contract parties often leaves the extremes implicit (everything
//! below the first range pays like the first range, everything above the
//! last pays like the last); [`max_ranges`] makes that explicit by
//! stretching the two edge ranges so the list exactly tiles
//! `[0, base^nb_nonces)`. [`group_outcomes`] then runs the grouping engine
//! once per range to obtain the digit prefixes each payout branch must
//! verify.

use std::borrow::Cow;

use bitcoin::Amount;
use serde::{Deserialize, Serialize};

use crate::error::{OutcomeError, Result};
use crate::groups::group_by_ignoring_digits;

/// Amounts each party receives when the attested outcome lands in a range.
///
/// Opaque to the encoding algorithms; carried through unchanged.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    /// Amount paid to the offering party, in satoshis
    #[serde(with = "bitcoin::amount::serde::as_sat")]
    pub offer: Amount,

    /// Amount paid to the accepting party, in satoshis
    #[serde(with = "bitcoin::amount::serde::as_sat")]
    pub accept: Amount,
}

/// A contiguous span of outcome values mapped to one payout.
///
/// Covers the closed interval `[start, start + count - 1]`. Across a
/// contract's outcome list, ranges must be ordered by `start` and pairwise
/// non-overlapping; interior gaps are an external precondition and are not
/// validated here.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOutcome {
    /// First outcome value in the range
    pub start: u64,

    /// Number of outcome values in the range, at least 1
    pub count: u64,

    /// Payout for every value in the range
    pub payout: Payout,
}

/// The digit prefixes a payout branch must pre-commit to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OutcomeGroups {
    /// Payout carried over from the originating range
    pub payout: Payout,

    /// Digit prefixes exactly covering the range, ascending
    pub groups: Vec<Vec<u64>>,
}

/// Stretch the edge ranges so the list exactly tiles `[0, base^nb_nonces)`.
///
/// The first range's lower bound is pulled down to 0 without moving its
/// upper edge; the last range's upper bound is pushed up to the domain
/// ceiling without moving its start. Interior ranges are untouched. When
/// the list already tiles the domain the input slice is returned borrowed,
/// so callers can detect the no-op.
///
/// # Errors
/// `OutcomeError::EmptyOutcomes` for an empty list,
/// `OutcomeError::DomainOverflow` when `base^nb_nonces` does not fit in
/// 64 bits.
pub fn max_ranges<'a>(
    outcomes: &'a [RangeOutcome],
    base: u64,
    nb_nonces: usize,
) -> Result<Cow<'a, [RangeOutcome]>> {
    let first = *outcomes.first().ok_or(OutcomeError::EmptyOutcomes)?;
    let last = outcomes[outcomes.len() - 1];
    let max_value = domain_size(base, nb_nonces)?;

    let stretch_low = first.start != 0;
    let stretch_high = last.start + last.count != max_value;
    if !stretch_low && !stretch_high {
        return Ok(Cow::Borrowed(outcomes));
    }

    let mut res = outcomes.to_vec();
    if stretch_low {
        res[0] = RangeOutcome {
            start: 0,
            count: first.count + first.start,
            payout: first.payout,
        };
    }
    if stretch_high {
        // Re-read the slot: with a single range, the lower stretch already
        // rewrote it.
        let last_idx = res.len() - 1;
        let cur = res[last_idx];
        res[last_idx] = RangeOutcome {
            start: cur.start,
            count: max_value - cur.start,
            payout: cur.payout,
        };
    }
    Ok(Cow::Owned(res))
}

/// Canonicalize a payout curve and compute the digit prefixes per range.
///
/// This is the contract-construction entry point: the list is first run
/// through [`max_ranges`], then the grouping engine produces the prefixes
/// for every range in order, each paired with its payout.
///
/// # Errors
/// Everything [`max_ranges`] and [`group_by_ignoring_digits`] can raise,
/// plus `OutcomeError::ZeroCount` for a range with no values in it.
pub fn group_outcomes(
    outcomes: &[RangeOutcome],
    base: u64,
    nb_nonces: usize,
) -> Result<Vec<OutcomeGroups>> {
    let tiled = max_ranges(outcomes, base, nb_nonces)?;
    tiled
        .iter()
        .map(|outcome| {
            if outcome.count == 0 {
                return Err(OutcomeError::ZeroCount {
                    start: outcome.start,
                });
            }
            let end = outcome.start + outcome.count - 1;
            Ok(OutcomeGroups {
                payout: outcome.payout,
                groups: group_by_ignoring_digits(outcome.start, end, base, nb_nonces)?,
            })
        })
        .collect()
}

/// Number of values in the outcome domain, `base^nb_nonces`.
fn domain_size(base: u64, nb_nonces: usize) -> Result<u64> {
    let exp = u32::try_from(nb_nonces)
        .map_err(|_| OutcomeError::DomainOverflow { base, nb_nonces })?;
    base.checked_pow(exp)
        .ok_or(OutcomeError::DomainOverflow { base, nb_nonces })
}
