//! The plan document
//!
//! A plan is the caller-owned description of a financial life: the
//! envelope set, the event list, and inflation settings. The host app
//! mutates it freely between runs (drag-to-reschedule and the like);
//! the engine takes an immutable snapshot per run.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::model::{Envelope, EventInstance};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Day 0 of the plan's day numbering.
    pub birth_date: Date,
    /// Fixed annual inflation rate used by the output normalizer.
    #[serde(default)]
    pub inflation_rate: f64,
    /// When true, every reported value is deflated to day-zero dollars.
    #[serde(default)]
    pub adjust_for_inflation: bool,
    pub envelopes: Vec<Envelope>,
    pub events: Vec<EventInstance>,
}

impl Plan {
    /// Parse a plan document from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Look up an envelope declaration by name.
    pub fn envelope(&self, name: &str) -> Option<&Envelope> {
        self.envelopes.iter().find(|e| e.name == name)
    }
}
