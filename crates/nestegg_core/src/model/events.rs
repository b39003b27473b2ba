//! Plan-side event instances
//!
//! An `EventInstance` is a scheduled occurrence of a catalog entry with
//! concrete parameter values, an optional recurrence, and an ordered
//! list of updating events that overwrite specific parameters at later
//! timestamps. Instances are declarative input: the engine treats them
//! as a read-only snapshot for the duration of a run.

use serde::{Deserialize, Serialize};

/// A parameter value as carried by the plan document: either a number
/// (amounts, rates, day offsets) or text (envelope keys).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Number(_) => None,
            ParamValue::Text(s) => Some(s),
        }
    }
}

/// One concrete parameter on an event instance.
///
/// `kind` is the parameter's type tag from the schema (`start_time`,
/// `amount`, `from_key`, ...); `id` is unique within the owning event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: ParamValue,
}

/// A timestamped override of specific parameters on a parent event.
///
/// From `start_time` onward, every occurrence of the parent resolves
/// the named parameter types to these values; prior occurrences are
/// unaffected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatingEventInstance {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub start_time: i64,
    pub parameters: Vec<Parameter>,
}

/// A dated financial event from the plan document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInstance {
    /// Unique within the plan.
    pub id: u32,
    /// Type tag resolved against the schema and the handler catalog.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub updating_events: Vec<UpdatingEventInstance>,
}

impl EventInstance {
    /// Look up a base parameter by its type tag.
    pub fn parameter(&self, kind: &str) -> Option<&ParamValue> {
        self.parameters
            .iter()
            .find(|p| p.kind == kind)
            .map(|p| &p.value)
    }

    /// Numeric base parameter, if present and numeric.
    pub fn number(&self, kind: &str) -> Option<f64> {
        self.parameter(kind).and_then(ParamValue::as_number)
    }

    /// Text base parameter, if present and textual.
    pub fn text(&self, kind: &str) -> Option<&str> {
        self.parameter(kind).and_then(ParamValue::as_text)
    }
}
