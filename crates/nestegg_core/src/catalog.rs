//! Event catalog and schema resolver
//!
//! The catalog is the closed set of event types the engine knows how to
//! apply. The plan document tags events with a type string; resolving
//! that string here turns unknown types into a single well-defined
//! error instead of a runtime surprise deep in the day loop.
//!
//! Validation happens once, up front, so handlers can assume their
//! parameters exist: missing parameters fail with `MissingParameter`
//! at validation, never get silently defaulted at simulation time.

use crate::error::{Result, SimulationError};
use crate::model::{EventDefinition, EventInstance, ParamValue, Parameter, Plan, Schema};

/// Every event type the engine can simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// One-time debit of one envelope.
    Purchase,
    /// One-time debit for a new family member.
    HaveKid,
    /// Recurring salaried paycheck with withholding and 401k match.
    GetJob,
    /// Recurring hourly paycheck with withholding.
    GetWageJob,
    /// Recurring drawdown from one envelope to another.
    Retirement,
    /// Car purchase: down payment, asset envelope, amortized loan.
    BuyCar,
    /// House purchase: down payment, asset envelope, amortized loan.
    BuyHouse,
    /// Recurring transfer into a Roth IRA envelope.
    RothIraContribution,
    /// One-time or recurring move between two envelopes.
    TransferMoney,
    /// Overwrite an envelope's balance, resetting its growth anchor.
    DeclareAccounts,
}

impl EventKind {
    /// Resolve a plan/schema type string to a catalog entry.
    pub fn from_type(kind: &str) -> Result<Self> {
        match kind {
            "purchase" => Ok(EventKind::Purchase),
            "have_kid" => Ok(EventKind::HaveKid),
            "get_job" => Ok(EventKind::GetJob),
            "get_wage_job" => Ok(EventKind::GetWageJob),
            "retirement" => Ok(EventKind::Retirement),
            "buy_car" => Ok(EventKind::BuyCar),
            "buy_house" => Ok(EventKind::BuyHouse),
            "roth_ira_contribution" => Ok(EventKind::RothIraContribution),
            "transfer_money" => Ok(EventKind::TransferMoney),
            "declare_accounts" => Ok(EventKind::DeclareAccounts),
            other => Err(SimulationError::UnknownEventType(other.to_string())),
        }
    }

    /// Parameters the handler reads unconditionally. Optional knobs
    /// (withholding rates, `end_time`, the 401k trio) are read with
    /// fallbacks and are not listed here.
    pub fn required_parameters(self) -> &'static [&'static str] {
        match self {
            EventKind::Purchase | EventKind::HaveKid => &["start_time", "from_key", "amount"],
            EventKind::GetJob => &["start_time", "frequency_days", "salary", "to_key"],
            EventKind::GetWageJob => &[
                "start_time",
                "frequency_days",
                "hourly_wage",
                "hours_per_week",
                "to_key",
            ],
            EventKind::Retirement | EventKind::RothIraContribution => &[
                "start_time",
                "frequency_days",
                "amount",
                "from_key",
                "to_key",
            ],
            EventKind::BuyCar => &[
                "start_time",
                "from_key",
                "amount",
                "down_payment",
                "loan_rate",
                "loan_term_years",
                "car_envelope",
                "car_loan_envelope",
            ],
            EventKind::BuyHouse => &[
                "start_time",
                "from_key",
                "amount",
                "down_payment",
                "loan_rate",
                "loan_term_years",
                "house_envelope",
                "house_loan_envelope",
            ],
            EventKind::TransferMoney => &["start_time", "amount", "from_key", "to_key"],
            EventKind::DeclareAccounts => &["start_time", "account_key", "amount"],
        }
    }

    /// Whether `frequency_days` is mandatory. `transfer_money` is the
    /// one kind that recurs only when the plan says so.
    pub fn requires_recurrence(self) -> bool {
        matches!(
            self,
            EventKind::GetJob
                | EventKind::GetWageJob
                | EventKind::Retirement
                | EventKind::RothIraContribution
        )
    }
}

/// A parameter type tag naming an envelope rather than a value.
pub fn is_envelope_reference(kind: &str) -> bool {
    kind.ends_with("_key") || kind.ends_with("_envelope")
}

/// Produce the default parameter set for a definition, one parameter
/// per schema entry with sequential ids in definition order.
///
/// This is the editor's "add event" path as well as the validation
/// baseline, so the output must be stable: the same definition always
/// yields the same ids.
pub fn instantiate_defaults(definition: &EventDefinition) -> Vec<Parameter> {
    definition
        .parameters
        .iter()
        .enumerate()
        .map(|(i, p)| Parameter {
            id: i as u32,
            kind: p.kind.clone(),
            value: p.default.clone(),
        })
        .collect()
}

/// Validate one instance against its definition and the envelope set.
pub fn validate_instance(
    instance: &EventInstance,
    definition: &EventDefinition,
    envelope_names: &[&str],
) -> Result<EventKind> {
    let kind = EventKind::from_type(&instance.kind)?;

    for &required in kind.required_parameters() {
        let value = instance
            .parameter(required)
            .ok_or(SimulationError::MissingParameter {
                event_id: instance.id,
                parameter: required,
            })?;
        // Shape check: envelope references are text, everything else numeric
        if is_envelope_reference(required) {
            if value.as_text().is_none() {
                return Err(SimulationError::InvalidParameter {
                    event_id: instance.id,
                    parameter: required,
                    expected: "an envelope name",
                });
            }
        } else if value.as_number().is_none() {
            return Err(SimulationError::InvalidParameter {
                event_id: instance.id,
                parameter: required,
                expected: "a number",
            });
        }
    }

    check_envelope_references(instance.id, &instance.parameters, envelope_names)?;

    for updating in &instance.updating_events {
        if definition.updating_event(&updating.kind).is_none() {
            return Err(SimulationError::UnknownUpdatingEventType {
                event_id: instance.id,
                kind: updating.kind.clone(),
            });
        }
        check_envelope_references(instance.id, &updating.parameters, envelope_names)?;
    }

    // Recurrence sanity: the scheduler steps in whole days, so a
    // declared frequency must round to at least one day whether or not
    // the kind mandates one. Anything below half a day would round to
    // a zero step and the expansion would never advance.
    if let Some(value) = instance.parameter("frequency_days") {
        let frequency = value.as_number().unwrap_or(0.0);
        if frequency.round() < 1.0 {
            return Err(SimulationError::InvalidRecurrence {
                event_id: instance.id,
                frequency_days: frequency,
            });
        }
    }

    // A financed purchase must carry a term long enough to schedule at
    // least one monthly payment; otherwise the principal would be
    // debited to the loan envelope with no payments ever amortizing it
    if matches!(kind, EventKind::BuyCar | EventKind::BuyHouse) {
        let term_years = instance.number("loan_term_years").unwrap_or(0.0);
        if (term_years * 12.0).round() < 1.0 {
            return Err(SimulationError::InvalidParameter {
                event_id: instance.id,
                parameter: "loan_term_years",
                expected: "at least one month of term",
            });
        }
    }

    // The 401k destination must be declared up front when a
    // contribution rate is set, not discovered missing mid-run
    if kind == EventKind::GetJob
        && instance.number("p_401k_rate").unwrap_or(0.0) > 0.0
        && instance.parameter("p_401k_key").is_none()
    {
        return Err(SimulationError::MissingParameter {
            event_id: instance.id,
            parameter: "p_401k_key",
        });
    }

    Ok(kind)
}

fn check_envelope_references(
    event_id: u32,
    parameters: &[Parameter],
    envelope_names: &[&str],
) -> Result<()> {
    for parameter in parameters {
        if !is_envelope_reference(&parameter.kind) {
            continue;
        }
        if let ParamValue::Text(name) = &parameter.value
            && !envelope_names.contains(&name.as_str())
        {
            return Err(SimulationError::UnresolvedEnvelopeReference {
                event_id,
                envelope: name.clone(),
            });
        }
    }
    Ok(())
}

/// Validate a whole plan against the schema. Returns one resolved
/// `EventKind` per event, in plan order.
pub fn validate_plan(plan: &Plan, schema: &Schema) -> Result<Vec<EventKind>> {
    let mut names: Vec<&str> = Vec::with_capacity(plan.envelopes.len());
    for envelope in &plan.envelopes {
        if names.contains(&envelope.name.as_str()) {
            return Err(SimulationError::DuplicateEnvelope(envelope.name.clone()));
        }
        names.push(&envelope.name);
    }

    let mut kinds = Vec::with_capacity(plan.events.len());
    for instance in &plan.events {
        let definition = schema.resolve(&instance.kind)?;
        kinds.push(validate_instance(instance, definition, &names)?);
    }
    Ok(kinds)
}
