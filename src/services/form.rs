use thiserror::Error;

use crate::domain::roster::{AllocationMode, MAX_HEADCOUNT, UnknownModeError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("field is empty")]
    Empty,
    #[error("not a number: {0}")]
    NotANumber(String),
    #[error("not a finite number: {0}")]
    NotFinite(String),
    #[error("not a whole number: {0}")]
    NotACount(String),
    #[error("headcount {0} exceeds the supported maximum of {max}", max = MAX_HEADCOUNT)]
    HeadcountTooLarge(usize),
    #[error(transparent)]
    UnknownMode(#[from] UnknownModeError),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("expected exactly 3 revenue figures, got {0}")]
    RevenueCount(usize),
}

/// Parses a monetary figure or a weight.
///
/// A comma is accepted as the decimal separator and blanks are ignored,
/// so `1 250,50` reads as `1250.5`.
pub fn parse_amount(raw: &str) -> Result<f64, FormError> {
    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return Err(FormError::Empty);
    }
    let value: f64 = normalized
        .parse()
        .map_err(|_| FormError::NotANumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(FormError::NotFinite(raw.to_string()));
    }
    Ok(value)
}

pub fn parse_headcount(raw: &str) -> Result<usize, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Empty);
    }
    let headcount: usize = trimmed
        .parse()
        .map_err(|_| FormError::NotACount(raw.to_string()))?;
    if headcount > MAX_HEADCOUNT {
        return Err(FormError::HeadcountTooLarge(headcount));
    }
    Ok(headcount)
}

pub fn parse_mode(raw: &str) -> Result<AllocationMode, FormError> {
    Ok(raw.parse()?)
}
