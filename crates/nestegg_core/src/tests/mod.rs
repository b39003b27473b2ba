//! Integration tests for the simulation engine
//!
//! Tests are organized by topic:
//! - `catalog` - Schema resolution, validation, default instantiation
//! - `scheduler` - Recurrence expansion and operation ordering
//! - `growth` - Envelope growth modes through full runs
//! - `jobs` - Paycheck events, withholding, updating-event raises
//! - `loans` - Financed purchases and amortization
//! - `transfers` - Transfers, retirement drawdown, contributions
//! - `scenarios` - Determinism, warnings, inflation adjustment
//! - `documents` - JSON plan/schema documents end to end

mod growth;
mod jobs;

use crate::model::{
    Envelope, EnvelopeCategory, EventDefinition, EventInstance, GrowthMode, ParamValue, Parameter,
    ParameterDefinition, Plan, Schema, UpdatingEventDefinition, UpdatingEventInstance,
};

pub(crate) fn envelope(
    name: &str,
    category: EnvelopeCategory,
    growth: GrowthMode,
    rate: f64,
) -> Envelope {
    Envelope {
        name: name.to_string(),
        category,
        growth,
        rate,
    }
}

pub(crate) fn cash_envelope(name: &str) -> Envelope {
    envelope(name, EnvelopeCategory::Cash, GrowthMode::None, 0.0)
}

pub(crate) fn num(id: u32, kind: &str, value: f64) -> Parameter {
    Parameter {
        id,
        kind: kind.to_string(),
        value: ParamValue::Number(value),
    }
}

pub(crate) fn text(id: u32, kind: &str, value: &str) -> Parameter {
    Parameter {
        id,
        kind: kind.to_string(),
        value: ParamValue::Text(value.to_string()),
    }
}

pub(crate) fn event(id: u32, kind: &str, parameters: Vec<Parameter>) -> EventInstance {
    EventInstance {
        id,
        kind: kind.to_string(),
        description: String::new(),
        parameters,
        updating_events: vec![],
    }
}

pub(crate) fn updating(
    id: u32,
    kind: &str,
    start_time: i64,
    parameters: Vec<Parameter>,
) -> UpdatingEventInstance {
    UpdatingEventInstance {
        id,
        kind: kind.to_string(),
        start_time,
        parameters,
    }
}

pub(crate) fn plan(envelopes: Vec<Envelope>, events: Vec<EventInstance>) -> Plan {
    Plan {
        birth_date: jiff::civil::date(1990, 1, 1),
        inflation_rate: 0.0,
        adjust_for_inflation: false,
        envelopes,
        events,
    }
}

fn param_def(kind: &str, default: ParamValue) -> ParameterDefinition {
    ParameterDefinition {
        kind: kind.to_string(),
        display_name: String::new(),
        parameter_units: String::new(),
        description: String::new(),
        default,
    }
}

fn event_def(
    kind: &str,
    parameters: Vec<ParameterDefinition>,
    updating_events: Vec<UpdatingEventDefinition>,
) -> EventDefinition {
    EventDefinition {
        kind: kind.to_string(),
        category: String::new(),
        description: String::new(),
        icon: String::new(),
        parameters,
        updating_events,
    }
}

/// A schema covering every event type the engine catalogs, with the
/// parameter shapes the handlers read.
pub(crate) fn test_schema() -> Schema {
    let n = |kind: &str| param_def(kind, ParamValue::Number(0.0));
    let k = |kind: &str| param_def(kind, ParamValue::Text(String::new()));

    Schema {
        events: vec![
            event_def("purchase", vec![n("start_time"), k("from_key"), n("amount")], vec![]),
            event_def("have_kid", vec![n("start_time"), k("from_key"), n("amount")], vec![]),
            event_def(
                "get_job",
                vec![
                    n("start_time"),
                    n("end_time"),
                    n("frequency_days"),
                    n("salary"),
                    k("to_key"),
                    n("federal_rate"),
                    n("state_rate"),
                    n("social_security_rate"),
                    n("medicare_rate"),
                    n("p_401k_rate"),
                    k("p_401k_key"),
                    n("match_rate"),
                ],
                vec![UpdatingEventDefinition {
                    kind: "get_a_raise".to_string(),
                    description: String::new(),
                    parameters: vec![n("salary")],
                }],
            ),
            event_def(
                "get_wage_job",
                vec![
                    n("start_time"),
                    n("end_time"),
                    n("frequency_days"),
                    n("hourly_wage"),
                    n("hours_per_week"),
                    k("to_key"),
                    n("federal_rate"),
                    n("state_rate"),
                    n("social_security_rate"),
                    n("medicare_rate"),
                ],
                vec![UpdatingEventDefinition {
                    kind: "get_a_raise".to_string(),
                    description: String::new(),
                    parameters: vec![n("hourly_wage")],
                }],
            ),
            event_def(
                "retirement",
                vec![
                    n("start_time"),
                    n("end_time"),
                    n("frequency_days"),
                    n("amount"),
                    k("from_key"),
                    k("to_key"),
                ],
                vec![],
            ),
            event_def(
                "buy_car",
                vec![
                    n("start_time"),
                    k("from_key"),
                    n("amount"),
                    n("down_payment"),
                    n("loan_rate"),
                    n("loan_term_years"),
                    k("car_envelope"),
                    k("car_loan_envelope"),
                ],
                vec![],
            ),
            event_def(
                "buy_house",
                vec![
                    n("start_time"),
                    k("from_key"),
                    n("amount"),
                    n("down_payment"),
                    n("loan_rate"),
                    n("loan_term_years"),
                    k("house_envelope"),
                    k("house_loan_envelope"),
                ],
                vec![],
            ),
            event_def(
                "roth_ira_contribution",
                vec![
                    n("start_time"),
                    n("end_time"),
                    n("frequency_days"),
                    n("amount"),
                    k("from_key"),
                    k("to_key"),
                ],
                vec![],
            ),
            event_def(
                "transfer_money",
                vec![
                    n("start_time"),
                    n("amount"),
                    k("from_key"),
                    k("to_key"),
                ],
                vec![],
            ),
            event_def(
                "declare_accounts",
                vec![n("start_time"), k("account_key"), n("amount")],
                vec![],
            ),
        ],
    }
}

/// A `declare_accounts` event setting an opening balance at day 0.
pub(crate) fn declare(id: u32, envelope: &str, amount: f64) -> EventInstance {
    event(
        id,
        "declare_accounts",
        vec![
            num(0, "start_time", 0.0),
            text(1, "account_key", envelope),
            num(2, "amount", amount),
        ],
    )
}
