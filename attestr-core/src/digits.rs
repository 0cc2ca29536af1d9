//! # Base-N Digit Codec
//!
//! Bidirectional mapping between a non-negative outcome value and its
//! fixed-width base-`b` digit vector, most-significant digit first. An
//! oracle signs one digit per nonce, so the digit width of a contract is
//! fixed up front and every decomposed vector must carry exactly that
//! many digits.

use crate::error::{OutcomeError, Result};

/// Decompose `value` into a fixed-width big-endian digit vector.
///
/// The vector is left-padded with zero digits up to `nb_digits`.
///
/// # Arguments
/// * `value` - The outcome value to decompose
/// * `base` - Numeral base, at least 2
/// * `nb_digits` - Declared digit width of the outcome domain
///
/// # Errors
/// `OutcomeError::Overflow` if `value` needs more than `nb_digits` digits,
/// `OutcomeError::InvalidBase` if `base < 2`.
pub fn decompose_value(value: u64, base: u64, nb_digits: usize) -> Result<Vec<u64>> {
    if base < 2 {
        return Err(OutcomeError::InvalidBase(base));
    }

    let mut digits = Vec::with_capacity(nb_digits);
    let mut rest = value;
    while rest > 0 {
        digits.push(rest % base);
        rest /= base;
    }

    if digits.len() > nb_digits {
        return Err(OutcomeError::Overflow {
            value,
            base,
            nb_digits,
        });
    }

    digits.resize(nb_digits, 0);
    digits.reverse();
    Ok(digits)
}

/// Recompose a big-endian digit vector into its numeric value.
///
/// Total for well-formed input; digits are expected to already be in
/// `[0, base - 1]` and the represented value to fit in 64 bits.
pub fn compose_value(digits: &[u64], base: u64) -> u64 {
    digits.iter().fold(0, |acc, &d| acc * base + d)
}

/// Decompose a decimal-string outcome value into its string digits.
///
/// This is the wire convention of numeric oracles: each attestation signs
/// the decimal rendering of one digit, so `"0"` over 4 base-8 nonces
/// becomes `["0", "0", "0", "0"]`.
///
/// # Errors
/// `OutcomeError::InvalidDigit` if `value` is not a non-negative decimal
/// integer, plus the failure modes of [`decompose_value`].
pub fn decompose_outcome_value(value: &str, base: u64, nb_digits: usize) -> Result<Vec<String>> {
    let value: u64 = value
        .trim()
        .parse()
        .map_err(|_| OutcomeError::InvalidDigit(value.to_string()))?;
    let digits = decompose_value(value, base, nb_digits)?;
    Ok(digits.iter().map(u64::to_string).collect())
}

/// Recompose string digits into the decimal rendering of their value.
///
/// # Errors
/// `OutcomeError::InvalidDigit` if any digit fails to parse or is outside
/// `[0, base - 1]`, `OutcomeError::InvalidBase` if `base < 2`.
pub fn compose_outcome_value<S: AsRef<str>>(digits: &[S], base: u64) -> Result<String> {
    if base < 2 {
        return Err(OutcomeError::InvalidBase(base));
    }

    let mut value: u64 = 0;
    for digit in digits {
        let digit = digit.as_ref();
        let d: u64 = digit
            .trim()
            .parse()
            .map_err(|_| OutcomeError::InvalidDigit(digit.to_string()))?;
        if d >= base {
            return Err(OutcomeError::InvalidDigit(digit.to_string()));
        }
        value = value * base + d;
    }
    Ok(value.to_string())
}
