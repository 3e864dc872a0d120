//! Decimal amounts <-> raw integer token units

use alloy::primitives::{
    U256,
    utils::{ParseUnits, UnitsError, format_units, parse_units},
};

#[derive(Debug, thiserror::Error)]
pub enum AmountError {
    #[error("amount must not be negative: {0}")]
    Negative(String),
    #[error("{amount} has more than {decimals} fractional digits")]
    TooPrecise { amount: String, decimals: u8 },
    #[error(transparent)]
    Units(#[from] UnitsError),
}

/// Parse a decimal string such as `"1.5"` into raw units of a token with `decimals` decimals.
///
/// Digits that would be lost to truncation are an error, trailing zeros are not.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, AmountError> {
    let amount = amount.trim();
    if amount.starts_with('-') {
        return Err(AmountError::Negative(amount.to_string()));
    }
    let fraction = amount.split_once('.').map_or("", |(_, fraction)| fraction);
    if fraction.trim_end_matches('0').len() > usize::from(decimals) {
        return Err(AmountError::TooPrecise {
            amount: amount.to_string(),
            decimals,
        });
    }
    match parse_units(amount, decimals)? {
        ParseUnits::U256(raw) => Ok(raw),
        ParseUnits::I256(_) => Err(AmountError::Negative(amount.to_string())),
    }
}

/// Format raw units as a decimal string, trimming trailing zeros (`1.500000` -> `1.5`).
pub fn format_amount(raw: U256, decimals: u8) -> Result<String, UnitsError> {
    let formatted = format_units(raw, decimals)?;
    if !formatted.contains('.') {
        return Ok(formatted);
    }
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    Ok(trimmed.to_string())
}
