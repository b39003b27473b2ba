//! Tests for paycheck events: proration, withholding, 401k match, and
//! updating-event raises.

use super::{cash_envelope, envelope, event, num, plan, test_schema, text, updating};
use crate::model::{EnvelopeCategory, GrowthMode};
use crate::simulation::run_simulation;

#[test]
fn salaried_paycheck_withholding_and_match() {
    // $36,500/yr biweekly → $1,400 gross per check.
    // 6% to the 401k ($84), fed 10% + state 5% on the remaining $1,316,
    // SS 6.2% + medicare 1.45% on full gross, 50% employer match.
    let job = event(
        1,
        "get_job",
        vec![
            num(0, "start_time", 0.0),
            num(1, "frequency_days", 14.0),
            num(2, "salary", 36_500.0),
            text(3, "to_key", "Cash"),
            num(4, "federal_rate", 0.10),
            num(5, "state_rate", 0.05),
            num(6, "social_security_rate", 0.062),
            num(7, "medicare_rate", 0.0145),
            num(8, "p_401k_rate", 0.06),
            text(9, "p_401k_key", "401k"),
            num(10, "match_rate", 0.50),
        ],
    );
    let p = plan(
        vec![
            cash_envelope("Cash"),
            envelope("401k", EnvelopeCategory::Retirement, GrowthMode::None, 0.0),
        ],
        vec![job],
    );

    // Two paychecks: day 0 and day 14
    let out = run_simulation(&p, &test_schema(), 0, 14, 14).unwrap();

    let gross: f64 = 1_400.0;
    let contribution = gross * 0.06;
    let taxable = gross - contribution;
    let net = gross
        - contribution
        - taxable * 0.10
        - taxable * 0.05
        - gross * 0.062
        - gross * 0.0145;

    assert!((out.final_balance("Cash") - 2.0 * net).abs() < 1e-9);
    assert!((out.final_balance("401k") - 2.0 * contribution * 1.5).abs() < 1e-9);
}

#[test]
fn wage_job_paycheck_proration() {
    // $20/hr × 40 hrs/wk, biweekly → $1,600 gross, no withholding
    let job = event(
        1,
        "get_wage_job",
        vec![
            num(0, "start_time", 0.0),
            num(1, "frequency_days", 14.0),
            num(2, "hourly_wage", 20.0),
            num(3, "hours_per_week", 40.0),
            text(4, "to_key", "Cash"),
        ],
    );
    let p = plan(vec![cash_envelope("Cash")], vec![job]);
    let out = run_simulation(&p, &test_schema(), 0, 0, 1).unwrap();
    assert!((out.final_balance("Cash") - 1_600.0).abs() < 1e-9);
}

#[test]
fn job_ends_at_end_time() {
    let job = event(
        1,
        "get_job",
        vec![
            num(0, "start_time", 0.0),
            num(1, "end_time", 28.0),
            num(2, "frequency_days", 14.0),
            num(3, "salary", 36_500.0),
            text(4, "to_key", "Cash"),
        ],
    );
    let p = plan(vec![cash_envelope("Cash")], vec![job]);
    let out = run_simulation(&p, &test_schema(), 0, 365, 365).unwrap();
    // Paychecks at days 0, 14, 28 only
    assert!((out.final_balance("Cash") - 3.0 * 1_400.0).abs() < 1e-9);
}

#[test]
fn raise_applies_from_its_start_time_with_no_blending() {
    // $50,000 salary from day 0, raised to $55,000 at day 1095.
    // Biweekly occurrences fall on day 1092 (old) and day 1106 (new).
    let mut job = event(
        1,
        "get_job",
        vec![
            num(0, "start_time", 0.0),
            num(1, "frequency_days", 14.0),
            num(2, "salary", 50_000.0),
            text(3, "to_key", "Cash"),
        ],
    );
    job.updating_events
        .push(updating(1, "get_a_raise", 1_095, vec![num(0, "salary", 55_000.0)]));
    let p = plan(vec![cash_envelope("Cash")], vec![job]);

    let old_check = 50_000.0 * 14.0 / 365.0;
    let new_check = 55_000.0 * 14.0 / 365.0;

    // 79 checks land in [0, 1092]; all at the old salary
    let before = run_simulation(&p, &test_schema(), 0, 1_092, 1_092).unwrap();
    assert!((before.final_balance("Cash") - 79.0 * old_check).abs() < 1e-6);

    // The next check (day 1106) is the first at the new salary
    let after = run_simulation(&p, &test_schema(), 0, 1_106, 1_106).unwrap();
    assert!(
        (after.final_balance("Cash") - (79.0 * old_check + new_check)).abs() < 1e-6
    );
}

#[test]
fn later_override_wins_on_conflict() {
    // Two raises, both effective by day 200: the later one wins
    let mut job = event(
        1,
        "get_job",
        vec![
            num(0, "start_time", 200.0),
            num(1, "frequency_days", 14.0),
            num(2, "salary", 36_500.0),
            text(3, "to_key", "Cash"),
        ],
    );
    job.updating_events
        .push(updating(2, "get_a_raise", 100, vec![num(0, "salary", 73_000.0)]));
    job.updating_events
        .push(updating(1, "get_a_raise", 50, vec![num(0, "salary", 18_250.0)]));
    let p = plan(vec![cash_envelope("Cash")], vec![job]);

    let out = run_simulation(&p, &test_schema(), 0, 200, 200).unwrap();
    // First check at day 200 uses the day-100 override: 73,000 × 14/365
    assert!((out.final_balance("Cash") - 2_800.0).abs() < 1e-9);
}
