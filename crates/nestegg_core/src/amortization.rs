//! Amortized loan math
//!
//! Fixed-payment schedules with monthly compounding on the stated
//! annual rate. The payment is computed once at origination from the
//! standard annuity formula; the interest/principal split of each
//! payment is computed at payment time from the live outstanding
//! balance (see `apply.rs`), so the final payment lands the loan on
//! exactly zero.

use jiff::civil::Date;

use crate::date_math::{add_months, date_at, day_of};

/// Fixed monthly payment for a loan of `principal` at `annual_rate`
/// over `term_months`, from the annuity formula
/// `P * r / (1 - (1 + r)^-n)` with `r = annual_rate / 12`.
///
/// A zero-rate loan degenerates to equal principal installments.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return principal;
    }
    let r = annual_rate / 12.0;
    if r.abs() < 1e-12 {
        principal / f64::from(term_months)
    } else {
        principal * r / (1.0 - (1.0 + r).powi(-(term_months as i32)))
    }
}

/// Payment days for a loan originated on `origination_day`: one per
/// calendar month, the first one month after origination, expressed in
/// the plan's day numbering.
pub fn payment_days(epoch: Date, origination_day: i64, term_months: u32) -> Vec<i64> {
    let origination = date_at(epoch, origination_day);
    (1..=term_months)
        .map(|k| day_of(epoch, add_months(origination, k as i32)))
        .collect()
}
