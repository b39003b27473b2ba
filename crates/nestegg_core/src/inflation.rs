//! Inflation normalizer
//!
//! Deflates a recorded series to day-zero dollars at a fixed annual
//! rate. Pure post-processing over the sample vector: the ledger is
//! never touched, so toggling `adjust_for_inflation` is reproducible
//! from the same raw run.

use crate::model::SimulationSample;

/// Divide every value by `(1 + rate)^((date - day_zero) / 365)`.
pub fn deflate(samples: &mut [SimulationSample], inflation_rate: f64, day_zero: i64) {
    if inflation_rate == 0.0 {
        return;
    }
    for sample in samples {
        let years = (sample.date - day_zero) as f64 / 365.0;
        let factor = (1.0 + inflation_rate).powf(years);
        sample.total_value /= factor;
        for value in sample.parts.values_mut() {
            *value /= factor;
        }
    }
}
