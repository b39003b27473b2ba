//! Envelope definitions
//!
//! An envelope is a named account/bucket with its own balance and growth
//! rule. The balance itself is runtime state owned by the ledger; the
//! plan only declares the envelope's identity and how it grows.

use serde::{Deserialize, Serialize};

/// Display grouping for an envelope.
///
/// Category is metadata: it never affects simulation math. The single
/// behavioral exception is warning classification, where a negative
/// balance on a non-`Debt` envelope is flagged as a shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeCategory {
    Cash,
    Savings,
    Debt,
    Investments,
    Retirement,
    Assets,
}

impl EnvelopeCategory {
    /// Debt envelopes are expected to carry negative balances.
    pub fn is_debt(self) -> bool {
        matches!(self, EnvelopeCategory::Debt)
    }
}

/// How an envelope's balance grows (or shrinks) over time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthMode {
    None,
    /// Continuous annualized appreciation at `rate`.
    Appreciation,
    /// Continuous annualized depreciation at `rate`.
    Depreciation,
    /// Interest compounded daily at `rate / 365`.
    DailyCompound,
    /// Interest compounded once per year at `rate`, prorated for
    /// fractional years elapsed.
    YearlyCompound,
}

/// A named account declared by the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Unique key; event parameters reference envelopes by this name.
    pub name: String,
    pub category: EnvelopeCategory,
    pub growth: GrowthMode,
    /// Annual rate for the growth mode; ignored when growth is `None`.
    #[serde(default)]
    pub rate: f64,
}

/// Balance multiplier for `elapsed_days` of growth under the given mode.
///
/// All modes use a 365-day year. Appreciation and yearly compounding
/// share the `(1 + r)^(d/365)` convention; depreciation mirrors it with
/// `(1 - r)`; daily compounding is `(1 + r/365)^d`.
pub fn growth_multiplier(mode: GrowthMode, rate: f64, elapsed_days: i64) -> f64 {
    if elapsed_days <= 0 {
        return 1.0;
    }
    let days = elapsed_days as f64;
    match mode {
        GrowthMode::None => 1.0,
        GrowthMode::Appreciation | GrowthMode::YearlyCompound => {
            (1.0 + rate).powf(days / 365.0)
        }
        GrowthMode::Depreciation => (1.0 - rate).powf(days / 365.0),
        GrowthMode::DailyCompound => (1.0 + rate / 365.0).powf(days),
    }
}
