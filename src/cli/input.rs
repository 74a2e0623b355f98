//! Parsers for numeric command-line flags.
//!
//! The calculators are infallible and trust their inputs, so values they are
//! not defined on are rejected while the flags are parsed.
use anyhow::{Result, bail};

fn parse_number(s: &str) -> Result<f64> {
    let value: f64 = s.trim().parse()?;
    if !value.is_finite() {
        bail!("expected a finite number, got {s}");
    }
    Ok(value)
}

/// Any finite number, e.g. an expected rate of return.
pub fn finite(s: &str) -> Result<f64> {
    parse_number(s)
}

/// A finite number greater than zero, e.g. a contribution or principal.
pub fn positive(s: &str) -> Result<f64> {
    let value = parse_number(s)?;
    if value <= 0.0 {
        bail!("expected a positive number, got {s}");
    }
    Ok(value)
}

/// A finite number of zero or more, e.g. a duration in years.
pub fn non_negative(s: &str) -> Result<f64> {
    let value = parse_number(s)?;
    if value < 0.0 {
        bail!("expected zero or a positive number, got {s}");
    }
    Ok(value)
}
