//! Exact conversion between on-chain base units and human-readable token amounts.
//!
//! Every value passes through [`BigDecimal`] built from a [`BigInt`] and an explicit
//! scale, so no amount ever touches binary floating point.

use bigdecimal::BigDecimal;
use log::debug;
use num_bigint::BigInt;
use num_traits::Zero;
use serde_json::Number;

use crate::errors::CustomError;

/// Decimals assumed when a token's info query returns nothing.
pub const DEFAULT_DECIMALS: u32 = 6;

/// CW20 `token_info` reports decimals as a `u8`.
pub const MAX_CW20_DECIMALS: u32 = u8::MAX as u32;

/// Accepts decimals as sent over JSON, rejecting negative and fractional numbers.
///
/// Integral floats such as `6.0` are accepted.
pub fn decimals_from_number(value: &Number) -> Result<u32, CustomError> {
    let invalid = || {
        CustomError::InvalidDecimalsError(format!("{} is not a non-negative integer", value))
    };

    let decimals = match value.as_u64() {
        Some(decimals) => decimals,
        None => {
            let float = value.as_f64().ok_or_else(invalid)?;
            if float < 0.0 || float.fract() != 0.0 || float > f64::from(MAX_CW20_DECIMALS) {
                return Err(invalid());
            }
            float as u64
        }
    };

    if decimals > u64::from(MAX_CW20_DECIMALS) {
        return Err(CustomError::InvalidDecimalsError(format!(
            "{} exceeds the token_info maximum of {}",
            decimals, MAX_CW20_DECIMALS
        )));
    }
    Ok(decimals as u32)
}

/// Parses a base-unit amount, which must be a plain digit string.
pub fn parse_raw(raw: &str) -> Result<BigInt, CustomError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CustomError::InvalidAmountError(format!(
            "raw amount '{}' must contain digits only",
            raw
        )));
    }
    BigInt::parse_bytes(raw.as_bytes(), 10)
        .ok_or_else(|| CustomError::InvalidAmountError(raw.to_string()))
}

/// Parses a non-negative decimal string such as `12`, `12.5`, `.5` or `12.`.
pub fn parse_display(display: &str) -> Result<BigDecimal, CustomError> {
    let invalid = || CustomError::InvalidAmountError(format!("'{}' is not a decimal number", display));

    let trimmed = display.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if fraction.contains('.') {
        return Err(invalid());
    }

    let digits = format!("{}{}", whole, fraction);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let units = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
    Ok(BigDecimal::new(units, fraction.len() as i64))
}

/// Renders in plain base-10 notation with trailing fractional zeros removed.
pub fn render_plain(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}

/// Converts base units into a display amount: `raw / 10^decimals`, exactly.
pub fn to_display(raw: &str, decimals: u32) -> Result<String, CustomError> {
    let units = parse_raw(raw)?;
    Ok(render_plain(&BigDecimal::new(units, i64::from(decimals))))
}

/// Converts a display amount into base units, truncating anything below one unit.
pub fn to_raw(display: &str, decimals: u32) -> Result<String, CustomError> {
    let (units, scale) = parse_display(display)?.into_bigint_and_exponent();

    let (raw_units, _) = BigDecimal::new(units, scale - i64::from(decimals))
        .with_scale(0)
        .into_bigint_and_exponent();
    let raw_amount = raw_units.to_string();

    debug!(
        "Transfer amount calculation: input={} decimals={} raw={}",
        display.trim(),
        decimals,
        raw_amount
    );
    Ok(raw_amount)
}

/// Exact half of a display amount. `x / 2 == x * 5 / 10`, which never needs rounding.
pub fn half(display: &str) -> Result<String, CustomError> {
    let (units, scale) = parse_display(display)?.into_bigint_and_exponent();
    Ok(render_plain(&BigDecimal::new(units * 5u32, scale + 1)))
}

pub fn is_positive_amount(display: &str) -> bool {
    parse_display(display)
        .map(|value| !value.is_zero())
        .unwrap_or(false)
}

/// Cleans free-form amount input and clamps it to `max`.
///
/// Only digits and the first decimal point survive; later points are dropped and
/// their digit groups concatenated. Input without any digit becomes `"0"`. Partial
/// entries such as `"12."` are left as typed so editing can continue.
pub fn sanitize_amount_input(input: &str, max: &str) -> Result<String, CustomError> {
    let max_value = parse_display(max)?;

    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut sanitized = match cleaned.split_once('.') {
        Some((whole, rest)) => format!("{}.{}", whole, rest.replace('.', "")),
        None => cleaned,
    };
    if !sanitized.bytes().any(|b| b.is_ascii_digit()) {
        sanitized = "0".to_string();
    }

    if parse_display(&sanitized)? > max_value {
        debug!("Clamping amount {} to available {}", sanitized, max.trim());
        return Ok(render_plain(&max_value));
    }
    Ok(sanitized)
}
