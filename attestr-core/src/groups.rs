//! # Range-to-Prefix Grouping Engine
//!
//! Converts a closed outcome range `[start, end]` over a `base`-ary,
//! `nb_digits`-wide numeric space into the minimal ordered set of digit
//! prefixes that exactly partitions it. A prefix of length `k` stands for
//! every full-width value sharing its leading `k` digits, so membership of
//! an attested outcome in a payout range can be proven with only `k` digit
//! signatures instead of `nb_digits`.
//!
//! The construction walks from a ragged start boundary (front groupings),
//! across whole untouched blocks (middle groupings), to a ragged end
//! boundary (back groupings), all under the digits the two bounds share.

use crate::digits::decompose_value;
use crate::error::{OutcomeError, Result};

/// Compute the digit prefixes exactly covering `[start, end]`.
///
/// Returns prefixes in ascending order of the values they represent; the
/// full-width completions of distinct prefixes are pairwise disjoint and
/// their union is exactly `{start, ..., end}`.
///
/// # Arguments
/// * `start` - Lower bound of the range, inclusive
/// * `end` - Upper bound of the range, inclusive
/// * `base` - Numeral base of the outcome domain
/// * `nb_digits` - Digit width of the outcome domain
///
/// # Errors
/// `OutcomeError::InvalidRange` if `start > end`;
/// `OutcomeError::Overflow` if either bound does not fit in `nb_digits`
/// base-`base` digits.
pub fn group_by_ignoring_digits(
    start: u64,
    end: u64,
    base: u64,
    nb_digits: usize,
) -> Result<Vec<Vec<u64>>> {
    if start > end {
        return Err(OutcomeError::InvalidRange { start, end });
    }

    let start_digits = decompose_value(start, base, nb_digits)?;
    let end_digits = decompose_value(end, base, nb_digits)?;

    let shared = start_digits
        .iter()
        .zip(&end_digits)
        .take_while(|(s, e)| s == e)
        .count();
    let prefix = &start_digits[..shared];
    let start_suffix = &start_digits[shared..];
    let end_suffix = &end_digits[shared..];

    if start == end {
        return Ok(vec![start_digits]);
    }

    // The suffixes span their entire block, so the shared prefix alone
    // covers the range.
    if shared > 0
        && start_suffix.iter().all(|&d| d == 0)
        && end_suffix.iter().all(|&d| d == base - 1)
    {
        return Ok(vec![prefix.to_vec()]);
    }

    // Only the last digit position varies: one full-width group per value.
    if shared == nb_digits - 1 {
        return Ok((start_suffix[0]..=end_suffix[0])
            .map(|d| {
                let mut group = prefix.to_vec();
                group.push(d);
                group
            })
            .collect());
    }

    let front = front_groupings(start_suffix, base);
    let middle = (start_suffix[0] + 1..end_suffix[0]).map(|d| vec![d]);
    let back = back_groupings(end_suffix, base);

    Ok(front
        .into_iter()
        .chain(middle)
        .chain(back)
        .map(|suffix| {
            let mut group = Vec::with_capacity(shared + suffix.len());
            group.extend_from_slice(prefix);
            group.extend(suffix);
            group
        })
        .collect())
}

/// Groupings covering from the start bound up to the end of its top-level
/// block.
///
/// Trailing zero digits mean the bound already sits on a block boundary at
/// that depth, so they are trimmed first. The trimmed path itself is the
/// most specific group and comes first; each level above it then
/// contributes one group per digit above the path digit.
fn front_groupings(start_suffix: &[u64], base: u64) -> Vec<Vec<u64>> {
    let mut path = trim_trailing(start_suffix, 0);
    if path.is_empty() {
        // Bound is the very start of the block; a single lowest-digit
        // group covers it.
        return vec![vec![0]];
    }

    let mut res = vec![path.clone()];
    while path.len() > 1 {
        let Some(last) = path.pop() else { break };
        for d in last + 1..base {
            let mut group = path.clone();
            group.push(d);
            res.push(group);
        }
    }
    res
}

/// Groupings covering from the start of the end bound's top-level block up
/// to the bound itself.
///
/// Mirror of [`front_groupings`]: trailing `base - 1` digits are trimmed,
/// each level contributes one group per digit below the path digit, and
/// the trimmed path closes the list as the most specific group.
fn back_groupings(end_suffix: &[u64], base: u64) -> Vec<Vec<u64>> {
    let trimmed = trim_trailing(end_suffix, base - 1);
    if trimmed.is_empty() {
        return vec![vec![base - 1]];
    }

    let mut res = Vec::new();
    let mut path = vec![trimmed[0]];
    for &digit in &trimmed[1..] {
        for d in 0..digit {
            let mut group = path.clone();
            group.push(d);
            res.push(group);
        }
        path.push(digit);
    }
    res.push(path);
    res
}

/// Copy `digits` with every trailing occurrence of `value` removed.
fn trim_trailing(digits: &[u64], value: u64) -> Vec<u64> {
    let len = digits
        .iter()
        .rposition(|&d| d != value)
        .map_or(0, |i| i + 1);
    digits[..len].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::compose_value;

    struct TestVec {
        start: u64,
        end: u64,
        base: u64,
        nb_digits: usize,
        expected: Vec<Vec<u64>>,
    }

    fn grouping_test_vectors() -> Vec<TestVec> {
        vec![
            // Exact single value.
            TestVec {
                start: 123,
                end: 123,
                base: 10,
                nb_digits: 3,
                expected: vec![vec![1, 2, 3]],
            },
            // Whole block under a shared prefix.
            TestVec {
                start: 100,
                end: 199,
                base: 10,
                nb_digits: 3,
                expected: vec![vec![1]],
            },
            TestVec {
                start: 400,
                end: 499,
                base: 10,
                nb_digits: 3,
                expected: vec![vec![4]],
            },
            // Whole block plus one value past it.
            TestVec {
                start: 100,
                end: 200,
                base: 10,
                nb_digits: 3,
                expected: vec![vec![1], vec![2, 0, 0]],
            },
            // Only the last digit varies.
            TestVec {
                start: 120,
                end: 124,
                base: 10,
                nb_digits: 3,
                expected: vec![
                    vec![1, 2, 0],
                    vec![1, 2, 1],
                    vec![1, 2, 2],
                    vec![1, 2, 3],
                    vec![1, 2, 4],
                ],
            },
            // Full domain, no shared prefix: one group per top digit.
            TestVec {
                start: 0,
                end: 999,
                base: 10,
                nb_digits: 3,
                expected: (0..10).map(|d| vec![d]).collect(),
            },
            // General front/middle/back case.
            TestVec {
                start: 171,
                end: 210,
                base: 16,
                nb_digits: 2,
                expected: vec![
                    vec![10, 11],
                    vec![10, 12],
                    vec![10, 13],
                    vec![10, 14],
                    vec![10, 15],
                    vec![11],
                    vec![12],
                    vec![13, 0],
                    vec![13, 1],
                    vec![13, 2],
                ],
            },
            // Deep ragged boundaries on both sides.
            TestVec {
                start: 1234,
                end: 4321,
                base: 10,
                nb_digits: 4,
                expected: vec![
                    vec![1, 2, 3, 4],
                    vec![1, 2, 3, 5],
                    vec![1, 2, 3, 6],
                    vec![1, 2, 3, 7],
                    vec![1, 2, 3, 8],
                    vec![1, 2, 3, 9],
                    vec![1, 2, 4],
                    vec![1, 2, 5],
                    vec![1, 2, 6],
                    vec![1, 2, 7],
                    vec![1, 2, 8],
                    vec![1, 2, 9],
                    vec![1, 3],
                    vec![1, 4],
                    vec![1, 5],
                    vec![1, 6],
                    vec![1, 7],
                    vec![1, 8],
                    vec![1, 9],
                    vec![2],
                    vec![3],
                    vec![4, 0],
                    vec![4, 1],
                    vec![4, 2],
                    vec![4, 3, 0],
                    vec![4, 3, 1],
                    vec![4, 3, 2, 0],
                    vec![4, 3, 2, 1],
                ],
            },
            // Binary domain with a shared leading digit.
            TestVec {
                start: 2,
                end: 7,
                base: 2,
                nb_digits: 4,
                expected: vec![vec![0, 0, 1], vec![0, 1]],
            },
            // Start on a block boundary, end mid-block.
            TestVec {
                start: 200,
                end: 231,
                base: 10,
                nb_digits: 3,
                expected: vec![
                    vec![2, 0],
                    vec![2, 1],
                    vec![2, 2],
                    vec![2, 3, 0],
                    vec![2, 3, 1],
                ],
            },
        ]
    }

    #[test]
    fn test_grouping_literal_vectors() {
        for tv in grouping_test_vectors() {
            let groups =
                group_by_ignoring_digits(tv.start, tv.end, tv.base, tv.nb_digits).unwrap();
            assert_eq!(
                groups, tv.expected,
                "grouping mismatch for [{}, {}] base {} width {}",
                tv.start, tv.end, tv.base, tv.nb_digits
            );
        }
    }

    #[test]
    fn test_grouping_overflow() {
        assert_eq!(
            group_by_ignoring_digits(0, 100, 2, 5),
            Err(OutcomeError::Overflow {
                value: 100,
                base: 2,
                nb_digits: 5
            })
        );
    }

    #[test]
    fn test_grouping_invalid_range() {
        assert_eq!(
            group_by_ignoring_digits(5, 4, 10, 3),
            Err(OutcomeError::InvalidRange { start: 5, end: 4 })
        );
    }

    /// Expand a prefix into the closed interval of full-width values it
    /// represents.
    fn completions(prefix: &[u64], base: u64, nb_digits: usize) -> (u64, u64) {
        let free = (nb_digits - prefix.len()) as u32;
        let span = base.pow(free);
        let low = compose_value(prefix, base) * span;
        (low, low + span - 1)
    }

    #[test]
    fn test_grouping_partitions_range_exhaustive() {
        // Every (start, end) pair over small domains must be tiled exactly,
        // in ascending order, with no overlap and no spill.
        for (base, nb_digits) in [(2u64, 5usize), (3, 4), (4, 3), (10, 2)] {
            let max = base.pow(nb_digits as u32);
            for start in 0..max {
                for end in start..max {
                    let groups =
                        group_by_ignoring_digits(start, end, base, nb_digits).unwrap();
                    let mut next = start;
                    for group in &groups {
                        let (low, high) = completions(group, base, nb_digits);
                        assert_eq!(
                            low, next,
                            "gap or overlap at {} for [{}, {}] base {} width {}",
                            next, start, end, base, nb_digits
                        );
                        next = high + 1;
                    }
                    assert_eq!(
                        next,
                        end + 1,
                        "coverage stops early for [{}, {}] base {} width {}",
                        start,
                        end,
                        base,
                        nb_digits
                    );
                }
            }
        }
    }

    #[test]
    fn test_grouping_prefix_lengths_bounded() {
        let groups = group_by_ignoring_digits(1234, 4321, 10, 4).unwrap();
        assert!(groups.iter().all(|g| !g.is_empty() && g.len() <= 4));
    }
}
