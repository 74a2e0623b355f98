//! Time-value-of-money calculators.
//!
//! All functions are pure and return full-precision values. Rounding is left
//! to whoever displays the numbers.
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Outcome of projecting an investment forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub invested: f64,
    pub returns: f64,
    pub total: f64,
}

/// Outcome of measuring an investment that has already played out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealizedReturns {
    pub absolute_return: f64,
    pub total_return_pct: f64,
    pub cagr_pct: f64,
}

/// Inputs for a systematic monthly investment plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    pub amount: f64,
    pub annual_rate_pct: f64,
    pub years: u32,
}

/// Inputs for a single upfront investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumpSumInput {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub years: f64,
}

/// Inputs for measuring realized returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnsInput {
    pub initial: f64,
    pub final_value: f64,
    pub years: f64,
}

impl Default for SipInput {
    fn default() -> Self {
        SipInput {
            amount: 5000.0,
            annual_rate_pct: 12.0,
            years: 10,
        }
    }
}

impl Default for LumpSumInput {
    fn default() -> Self {
        LumpSumInput {
            principal: 100_000.0,
            annual_rate_pct: 12.0,
            years: 10.0,
        }
    }
}

impl Default for ReturnsInput {
    fn default() -> Self {
        ReturnsInput {
            initial: 50_000.0,
            final_value: 75_000.0,
            years: 3.0,
        }
    }
}

impl SipInput {
    pub fn project(&self) -> Projection {
        periodic_investment(self.amount, self.annual_rate_pct, self.years)
    }
}

impl LumpSumInput {
    pub fn project(&self) -> Projection {
        lump_sum(self.principal, self.annual_rate_pct, self.years)
    }
}

impl ReturnsInput {
    pub fn evaluate(&self) -> Result<RealizedReturns, DomainError> {
        realized_returns(self.initial, self.final_value, self.years)
    }
}

/// Future value of a monthly contribution made at the start of every month
/// (annuity-due), compounded at `annual_rate_pct / 12` per month.
///
/// A zero rate takes the degenerate branch `amount * months`, since the
/// general formula divides by the monthly rate. Results too large for an
/// `f64` saturate at `f64::MAX`.
pub fn periodic_investment(amount: f64, annual_rate_pct: f64, years: u32) -> Projection {
    let monthly_rate = annual_rate_pct / 12.0 / 100.0;
    let months = f64::from(years) * 12.0;
    let invested = saturate(amount * months);

    let total = if monthly_rate == 0.0 {
        invested
    } else {
        // (1 + m)^n - 1 without cancellation, so rates too small to change
        // `1.0 + m` still grow the contributions.
        let growth_minus_one = (months * monthly_rate.ln_1p()).exp_m1();
        let total = saturate(amount * (growth_minus_one / monthly_rate) * (1.0 + monthly_rate));
        if monthly_rate > 0.0 {
            total.max(invested)
        } else {
            total
        }
    };

    Projection {
        invested,
        returns: total - invested,
        total,
    }
}

/// Future value of `principal` compounded yearly. `years` may be fractional.
pub fn lump_sum(principal: f64, annual_rate_pct: f64, years: f64) -> Projection {
    let total = saturate(principal * (1.0 + annual_rate_pct / 100.0).powf(years));
    Projection {
        invested: principal,
        returns: total - principal,
        total,
    }
}

/// Absolute, total and compound annual returns between two values.
///
/// A final value of zero is a total loss and yields a CAGR of exactly -100%.
pub fn realized_returns(
    initial: f64,
    final_value: f64,
    years: f64,
) -> Result<RealizedReturns, DomainError> {
    if !initial.is_finite() {
        return Err(DomainError::NonFinite("initial value"));
    }
    if !final_value.is_finite() {
        return Err(DomainError::NonFinite("final value"));
    }
    if !years.is_finite() {
        return Err(DomainError::NonFinite("duration"));
    }
    if initial <= 0.0 {
        return Err(DomainError::NonPositiveInitial(initial));
    }
    if years <= 0.0 {
        return Err(DomainError::NonPositiveDuration(years));
    }
    if final_value < 0.0 {
        return Err(DomainError::NegativeFinal(final_value));
    }

    let absolute_return = final_value - initial;
    let total_return_pct = saturate(absolute_return / initial * 100.0);
    let cagr_pct = saturate(((final_value / initial).powf(1.0 / years) - 1.0) * 100.0);

    Ok(RealizedReturns {
        absolute_return,
        total_return_pct,
        cagr_pct,
    })
}

// Clamps an overflowed result to the largest finite value of the same sign.
fn saturate(value: f64) -> f64 {
    value.clamp(f64::MIN, f64::MAX)
}
