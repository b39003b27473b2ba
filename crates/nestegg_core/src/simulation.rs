//! The simulation stepper
//!
//! Walks days from `start_day` to `end_day`, applying envelope growth,
//! then the day's scheduled operations in scheduler order, then
//! recording a sample on each sampling day. Single-threaded and
//! synchronous: one run is a deterministic fold over the day sequence.
//!
//! A run is not re-entrant on a mutated ledger; every call seeds a
//! fresh ledger from the plan snapshot, so callers comparing plans
//! side by side get fully independent state.

use tracing::{debug, warn};

use crate::apply::apply_operation;
use crate::catalog::validate_plan;
use crate::error::{Result, SimulationError};
use crate::inflation::deflate;
use crate::ledger::Ledger;
use crate::model::{Plan, Schema, SimulationOutput, SimulationWarning, WarningKind};
use crate::schedule::build_schedule;

/// Run one simulation over `[start_day, end_day]` (days since the plan
/// epoch), sampling every `sample_interval_days`.
///
/// Pure in the plan and schema: identical inputs produce bit-identical
/// output. Fatal configuration errors abort with no partial output;
/// shortfalls surface as warnings beside the samples.
pub fn run_simulation(
    plan: &Plan,
    schema: &Schema,
    start_day: i64,
    end_day: i64,
    sample_interval_days: i64,
) -> Result<SimulationOutput> {
    if sample_interval_days <= 0 {
        return Err(SimulationError::InvalidSampleInterval(sample_interval_days));
    }

    let kinds = validate_plan(plan, schema)?;
    let operations = build_schedule(plan, &kinds, plan.birth_date, start_day, end_day)?;
    let mut ledger = Ledger::from_plan(plan, start_day)?;

    let mut samples = Vec::new();
    let mut warnings = Vec::new();
    // Per-envelope "currently flagged" state, in ledger order
    let mut flagged = vec![false; plan.envelopes.len()];

    let mut next_op = 0;
    let mut day = start_day;
    while day <= end_day {
        if next_op < operations.len() && operations[next_op].day == day {
            // Growth accrues before any operation fires on this day
            ledger.grow_to(day);
            while next_op < operations.len() && operations[next_op].day == day {
                apply_operation(&mut ledger, &operations[next_op])?;
                next_op += 1;
            }
        }

        if (day - start_day) % sample_interval_days == 0 {
            ledger.grow_to(day);
            for (i, (name, category, balance)) in ledger.iter().enumerate() {
                if balance < 0.0 && !category.is_debt() {
                    if !flagged[i] {
                        flagged[i] = true;
                        warn!(envelope = name, day, balance, "non-debt envelope went negative");
                        warnings.push(SimulationWarning {
                            date: day,
                            kind: WarningKind::NegativeBalance {
                                envelope: name.to_string(),
                                balance,
                            },
                        });
                    }
                } else {
                    flagged[i] = false;
                }
            }
            samples.push(ledger.snapshot(day));
        }

        day += 1;
    }

    if plan.adjust_for_inflation {
        deflate(&mut samples, plan.inflation_rate, start_day);
    }

    debug!(
        samples = samples.len(),
        warnings = warnings.len(),
        "simulation complete"
    );

    Ok(SimulationOutput { samples, warnings })
}
