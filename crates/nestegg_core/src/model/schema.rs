//! Schema-side event definitions
//!
//! The schema document enumerates every event type the editor can offer:
//! its parameter shapes, display metadata, defaults, and the updating
//! events it supports. Loaded once and immutable thereafter.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::model::ParamValue;

/// Shape and default for one parameter of an event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub parameter_units: String,
    #[serde(default)]
    pub description: String,
    pub default: ParamValue,
}

/// An updating-event shape scoped to one parent event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatingEventDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
}

/// Definition of one event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub parameters: Vec<ParameterDefinition>,
    #[serde(default)]
    pub updating_events: Vec<UpdatingEventDefinition>,
}

impl EventDefinition {
    /// Look up an updating-event shape by type tag.
    pub fn updating_event(&self, kind: &str) -> Option<&UpdatingEventDefinition> {
        self.updating_events.iter().find(|u| u.kind == kind)
    }
}

/// The full event-type catalog loaded from the schema document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    pub events: Vec<EventDefinition>,
}

impl Schema {
    /// Parse a schema document from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Resolve an event type tag to its definition.
    pub fn resolve(&self, kind: &str) -> Result<&EventDefinition> {
        self.events
            .iter()
            .find(|d| d.kind == kind)
            .ok_or_else(|| SimulationError::UnknownEventType(kind.to_string()))
    }
}
