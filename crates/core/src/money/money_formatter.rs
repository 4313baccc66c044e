//! Conversions between integer base-unit amounts and decimal display strings.
//!
//! Token amounts arrive from the chain as integers scaled by the token's
//! decimal count (18 for most ERC-20 style tokens). Conversions here use
//! integer and string arithmetic only, so `to_base_units(to_display_units(x,
//! d), d) == x` holds exactly for every representable amount.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::MoneyError;

/// Converts an integer base-unit amount to a decimal display string.
///
/// Trailing fractional zeros are trimmed, so the result is the shortest
/// string that `to_base_units` maps back to the same amount.
pub fn to_display_units(base_units: u128, decimals: u32) -> String {
    let digits = base_units.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let (int_part, frac_part) = if digits.len() > decimals {
        let split = digits.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{digits:0>decimals$}"))
    };

    let frac_trimmed = frac_part.trim_end_matches('0');
    if frac_trimmed.is_empty() {
        int_part
    } else {
        format!("{int_part}.{frac_trimmed}")
    }
}

/// Parses a decimal display string back to integer base units.
///
/// Accepts plain non-negative decimal notation only. Signs, exponents, and
/// anything non-numeric fail with [`MoneyError::InvalidNumberFormat`]; more
/// significant fractional digits than `decimals`, or a value wider than the
/// base-unit integer, fail with [`MoneyError::PrecisionOverflow`].
pub fn to_base_units(display: &str, decimals: u32) -> Result<u128, MoneyError> {
    let trimmed = display.trim();
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (trimmed, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part)
    {
        return Err(MoneyError::InvalidNumberFormat(display.to_string()));
    }

    let frac_significant = frac_part.trim_end_matches('0');
    if frac_significant.len() > decimals as usize {
        return Err(MoneyError::PrecisionOverflow {
            value: display.to_string(),
            decimals,
        });
    }

    let overflow = || MoneyError::PrecisionOverflow {
        value: display.to_string(),
        decimals,
    };

    let mut value: u128 = 0;
    for b in int_part.bytes().chain(frac_significant.bytes()) {
        let digit = u128::from(b - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(overflow)?;
    }
    for _ in frac_significant.len()..decimals as usize {
        value = value.checked_mul(10).ok_or_else(overflow)?;
    }

    Ok(value)
}

/// Formats a basis-point value (0-10000 covering 0%-100%) as a fixed
/// two-decimal percentage string, e.g. `1234` -> `"12.34"`.
pub fn format_basis_points(bps: u32) -> String {
    format!("{}.{:02}", bps / 100, bps % 100)
}

/// Strict parse of a non-negative decimal amount string.
///
/// Rejects negative and malformed input with an error rather than falling
/// back to zero.
pub fn parse_amount(value: &str) -> Result<Decimal, MoneyError> {
    let parsed = Decimal::from_str(value.trim())
        .map_err(|_| MoneyError::InvalidNumberFormat(value.to_string()))?;
    if parsed.is_sign_negative() {
        return Err(MoneyError::InvalidNumberFormat(value.to_string()));
    }
    Ok(parsed)
}
