//! Effective-parameter resolution
//!
//! Each occurrence of an event sees the instance's base parameters
//! overlaid with every updating event whose `start_time` is at or
//! before the occurrence day. Overrides are applied functionally while
//! building the map; the base instance is never mutated.

use rustc_hash::FxHashMap;

use crate::error::{Result, SimulationError};
use crate::model::{EventInstance, ParamValue};

/// The parameter set one operation fires with.
#[derive(Debug, Clone)]
pub struct ResolvedParams {
    event_id: u32,
    values: FxHashMap<String, ParamValue>,
}

impl ResolvedParams {
    /// Resolve the effective parameters for an occurrence on `day`.
    ///
    /// Updating events are applied in ascending `(start_time, id)`
    /// order so later overrides win on conflicting parameter types.
    pub fn for_occurrence(instance: &EventInstance, day: i64) -> Self {
        let mut values = FxHashMap::default();
        for parameter in &instance.parameters {
            values.insert(parameter.kind.clone(), parameter.value.clone());
        }

        let mut updates: Vec<_> = instance
            .updating_events
            .iter()
            .filter(|u| u.start_time <= day)
            .collect();
        updates.sort_by_key(|u| (u.start_time, u.id));

        for update in updates {
            for parameter in &update.parameters {
                values.insert(parameter.kind.clone(), parameter.value.clone());
            }
        }

        Self {
            event_id: instance.id,
            values,
        }
    }

    pub fn event_id(&self) -> u32 {
        self.event_id
    }

    /// Required numeric parameter. Validation guarantees presence for
    /// catalog-required parameters, but updating events can in theory
    /// overwrite a number with text, so the shape is still checked.
    pub fn number(&self, kind: &'static str) -> Result<f64> {
        match self.values.get(kind) {
            Some(ParamValue::Number(n)) => Ok(*n),
            Some(ParamValue::Text(_)) => Err(SimulationError::InvalidParameter {
                event_id: self.event_id,
                parameter: kind,
                expected: "a number",
            }),
            None => Err(SimulationError::MissingParameter {
                event_id: self.event_id,
                parameter: kind,
            }),
        }
    }

    /// Optional numeric parameter with a fallback.
    pub fn number_or(&self, kind: &str, default: f64) -> f64 {
        self.values
            .get(kind)
            .and_then(ParamValue::as_number)
            .unwrap_or(default)
    }

    /// Required envelope-name parameter.
    pub fn text(&self, kind: &'static str) -> Result<&str> {
        match self.values.get(kind) {
            Some(ParamValue::Text(s)) => Ok(s),
            Some(ParamValue::Number(_)) => Err(SimulationError::InvalidParameter {
                event_id: self.event_id,
                parameter: kind,
                expected: "an envelope name",
            }),
            None => Err(SimulationError::MissingParameter {
                event_id: self.event_id,
                parameter: kind,
            }),
        }
    }
}
