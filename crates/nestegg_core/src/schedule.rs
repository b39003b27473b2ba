//! The timeline scheduler
//!
//! Converts the plan's declarative `EventInstance` list into a flat,
//! time-ordered list of atomic operations the stepper can apply. All
//! expansion is done up front: recurring events unroll across their
//! active window, updating events are resolved into each occurrence's
//! effective parameter set, and composite purchases unroll into the
//! purchase-day operation plus their amortized payment schedule.
//!
//! Same-day ordering is deterministic: operations carry the source
//! instance's position in the plan's event list (`seq`), and the sort
//! is stable on `(day, seq)`. Plan order is the tie-break, not the
//! insertion order of recurrence expansion.

use jiff::civil::Date;
use tracing::debug;

use crate::amortization::{monthly_payment, payment_days};
use crate::catalog::EventKind;
use crate::error::{Result, SimulationError};
use crate::model::{EventInstance, Plan};
use crate::params::ResolvedParams;

/// One atomic, day-tagged unit of work for the stepper.
#[derive(Debug, Clone)]
pub struct Operation {
    /// Days since the plan epoch.
    pub day: i64,
    /// The source event instance.
    pub event_id: u32,
    /// Position of the source instance in the plan's event list;
    /// same-day tie-break.
    pub seq: usize,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// Invoke the handler for `kind` with the occurrence's effective
    /// parameters.
    Fire {
        kind: EventKind,
        params: ResolvedParams,
    },
    /// One amortized loan installment, derived from a `buy_car` /
    /// `buy_house` origination.
    LoanPayment {
        /// Cash envelope the payment is drawn from.
        from: String,
        /// Loan envelope carrying the (negative) outstanding balance.
        loan: String,
        /// Fixed payment from the annuity formula.
        payment: f64,
        /// `annual_rate / 12`, for the interest split at payment time.
        monthly_rate: f64,
    },
}

/// Expand the plan into the operation list for `[start_day, end_day]`.
///
/// `kinds` is the per-event resolution produced by
/// `catalog::validate_plan`, in plan order. Occurrences before
/// `start_day` or after `end_day` are outside the run and dropped.
pub fn build_schedule(
    plan: &Plan,
    kinds: &[EventKind],
    epoch: Date,
    start_day: i64,
    end_day: i64,
) -> Result<Vec<Operation>> {
    let mut operations = Vec::new();

    for (seq, (instance, &kind)) in plan.events.iter().zip(kinds).enumerate() {
        expand_instance(instance, kind, seq, epoch, start_day, end_day, &mut operations)?;
    }

    operations.sort_by_key(|op| (op.day, op.seq));

    debug!(
        events = plan.events.len(),
        operations = operations.len(),
        start_day,
        end_day,
        "expanded plan into operation schedule"
    );

    Ok(operations)
}

fn expand_instance(
    instance: &EventInstance,
    kind: EventKind,
    seq: usize,
    epoch: Date,
    start_day: i64,
    end_day: i64,
    out: &mut Vec<Operation>,
) -> Result<()> {
    let start = instance
        .number("start_time")
        .ok_or(SimulationError::MissingParameter {
            event_id: instance.id,
            parameter: "start_time",
        })?
        .round() as i64;

    // Composite purchases are inherently one-shot and also emit their
    // loan payment schedule
    if matches!(kind, EventKind::BuyCar | EventKind::BuyHouse) {
        if (start_day..=end_day).contains(&start) {
            let params = ResolvedParams::for_occurrence(instance, start);
            expand_loan(&params, kind, start, seq, epoch, end_day, out)?;
            out.push(Operation {
                day: start,
                event_id: instance.id,
                seq,
                action: Action::Fire { kind, params },
            });
        }
        return Ok(());
    }

    let frequency = match instance.number("frequency_days") {
        // The step must be at least one whole day or the expansion
        // below would never advance
        Some(f) if f.round() >= 1.0 => Some(f.round() as i64),
        Some(f) => {
            return Err(SimulationError::InvalidRecurrence {
                event_id: instance.id,
                frequency_days: f,
            });
        }
        None if kind.requires_recurrence() => {
            return Err(SimulationError::MissingParameter {
                event_id: instance.id,
                parameter: "frequency_days",
            });
        }
        None => None,
    };

    match frequency {
        None => {
            // Single occurrence at start_time
            if (start_day..=end_day).contains(&start) {
                out.push(Operation {
                    day: start,
                    event_id: instance.id,
                    seq,
                    action: Action::Fire {
                        kind,
                        params: ResolvedParams::for_occurrence(instance, start),
                    },
                });
            }
        }
        Some(step) => {
            // Closed active window: an occurrence exactly at end_time
            // is included, nothing beyond it
            let window_end = match instance.number("end_time") {
                Some(e) => end_day.min(e.round() as i64),
                None => end_day,
            };
            let mut day = start;
            while day <= window_end {
                if day >= start_day {
                    out.push(Operation {
                        day,
                        event_id: instance.id,
                        seq,
                        action: Action::Fire {
                            kind,
                            params: ResolvedParams::for_occurrence(instance, day),
                        },
                    });
                }
                day += step;
            }
        }
    }

    Ok(())
}

/// Emit the monthly payment operations for a financed purchase.
///
/// The fixed payment is computed once here, at origination; the
/// interest/principal split is left to payment time so it tracks the
/// live outstanding balance.
fn expand_loan(
    params: &ResolvedParams,
    kind: EventKind,
    origination_day: i64,
    seq: usize,
    epoch: Date,
    end_day: i64,
    out: &mut Vec<Operation>,
) -> Result<()> {
    let price = params.number("amount")?;
    let down_payment = params.number("down_payment")?;
    let principal = price - down_payment;
    if principal <= 0.0 {
        return Ok(()); // paid in full, no loan
    }

    let annual_rate = params.number("loan_rate")?;
    let term_months = (params.number("loan_term_years")? * 12.0).round();
    if term_months < 1.0 {
        return Err(SimulationError::InvalidParameter {
            event_id: params.event_id(),
            parameter: "loan_term_years",
            expected: "at least one month of term",
        });
    }
    let term_months = term_months as u32;
    let loan_param = match kind {
        EventKind::BuyCar => "car_loan_envelope",
        _ => "house_loan_envelope",
    };
    let loan = params.text(loan_param)?.to_string();
    let from = params.text("from_key")?.to_string();

    let payment = monthly_payment(principal, annual_rate, term_months);

    for day in payment_days(epoch, origination_day, term_months) {
        if day > end_day {
            break;
        }
        out.push(Operation {
            day,
            event_id: params.event_id(),
            seq,
            action: Action::LoanPayment {
                from: from.clone(),
                loan: loan.clone(),
                payment,
                monthly_rate: annual_rate / 12.0,
            },
        });
    }

    Ok(())
}
