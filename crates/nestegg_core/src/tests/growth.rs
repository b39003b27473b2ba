//! Tests for envelope growth modes through full simulation runs.

use super::{declare, envelope, plan, test_schema};
use crate::model::{EnvelopeCategory, GrowthMode};
use crate::simulation::run_simulation;

#[test]
fn no_growth_stays_flat() {
    let p = plan(
        vec![envelope("Cash", EnvelopeCategory::Cash, GrowthMode::None, 0.0)],
        vec![declare(1, "Cash", 10_000.0)],
    );
    let out = run_simulation(&p, &test_schema(), 0, 3_650, 365).unwrap();
    for sample in &out.samples {
        assert_eq!(sample.parts["Cash"], 10_000.0);
    }
}

#[test]
fn daily_compound_over_one_year() {
    let rate = 0.05;
    let p = plan(
        vec![envelope(
            "Savings",
            EnvelopeCategory::Savings,
            GrowthMode::DailyCompound,
            rate,
        )],
        vec![declare(1, "Savings", 10_000.0)],
    );
    let out = run_simulation(&p, &test_schema(), 0, 365, 365).unwrap();
    let expected = 10_000.0 * (1.0 + rate / 365.0).powf(365.0);
    let actual = out.final_balance("Savings");
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected:.6}, got {actual:.6}"
    );
}

#[test]
fn yearly_compound_over_a_decade() {
    let rate = 0.07;
    let p = plan(
        vec![envelope(
            "Brokerage",
            EnvelopeCategory::Investments,
            GrowthMode::YearlyCompound,
            rate,
        )],
        vec![declare(1, "Brokerage", 1_000.0)],
    );
    let out = run_simulation(&p, &test_schema(), 0, 3_650, 3_650).unwrap();
    let expected = 1_000.0 * (1.0 + rate).powf(10.0);
    assert!((out.final_balance("Brokerage") - expected).abs() < 1e-6);
}

#[test]
fn depreciation_shrinks_an_asset() {
    let p = plan(
        vec![envelope(
            "Car",
            EnvelopeCategory::Assets,
            GrowthMode::Depreciation,
            0.15,
        )],
        vec![declare(1, "Car", 20_000.0)],
    );
    let out = run_simulation(&p, &test_schema(), 0, 730, 365).unwrap();
    let after_one = 20_000.0 * 0.85;
    let after_two = 20_000.0 * 0.85 * 0.85;
    assert!((out.samples[1].parts["Car"] - after_one).abs() < 1e-6);
    assert!((out.samples[2].parts["Car"] - after_two).abs() < 1e-6);
}

#[test]
fn declared_balance_grows_from_declaration_day_only() {
    let rate = 0.10;
    let mut declaration = declare(1, "Savings", 1_000.0);
    declaration.parameters[0] = super::num(0, "start_time", 365.0);

    let p = plan(
        vec![envelope(
            "Savings",
            EnvelopeCategory::Savings,
            GrowthMode::YearlyCompound,
            rate,
        )],
        vec![declaration],
    );
    let out = run_simulation(&p, &test_schema(), 0, 730, 365).unwrap();

    // Zero until declared, then exactly one year of growth by day 730
    assert_eq!(out.samples[0].parts["Savings"], 0.0);
    assert_eq!(out.samples[1].parts["Savings"], 1_000.0);
    assert!((out.samples[2].parts["Savings"] - 1_100.0).abs() < 1e-9);
}
