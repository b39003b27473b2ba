//! Simulation output types
//!
//! One `SimulationSample` per sampling point, plus the recoverable
//! warnings raised along the way. Produced by the stepper, consumed
//! immediately by the caller (chart, summarizer); nothing here is
//! persisted by the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One ledger snapshot at a sampling point.
///
/// `parts` is ordered by envelope name so that serialization and
/// iteration are deterministic across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSample {
    /// Days since the plan epoch.
    pub date: i64,
    /// Sum of all envelope balances, debt included.
    pub total_value: f64,
    /// Per-envelope balances.
    pub parts: BTreeMap<String, f64>,
}

/// Recoverable conditions surfaced beside the samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    /// A non-debt envelope's balance went below zero: a shortfall the
    /// caller should surface, not an engine error.
    NegativeBalance { envelope: String, balance: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationWarning {
    /// Sampling day (days since the plan epoch) the condition was seen.
    pub date: i64,
    #[serde(flatten)]
    pub kind: WarningKind,
}

/// Complete results from one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub samples: Vec<SimulationSample>,
    pub warnings: Vec<SimulationWarning>,
}

impl SimulationOutput {
    /// The series for a single envelope, as `(day, balance)` pairs.
    /// Envelopes absent from a sample (never the case today, but the
    /// caller shouldn't care) read as zero.
    pub fn series_for(&self, envelope: &str) -> Vec<(i64, f64)> {
        self.samples
            .iter()
            .map(|s| (s.date, s.parts.get(envelope).copied().unwrap_or(0.0)))
            .collect()
    }

    /// Final sampled balance of one envelope.
    pub fn final_balance(&self, envelope: &str) -> f64 {
        self.samples
            .last()
            .and_then(|s| s.parts.get(envelope))
            .copied()
            .unwrap_or(0.0)
    }

    /// Final sampled net worth.
    pub fn final_total(&self) -> f64 {
        self.samples.last().map(|s| s.total_value).unwrap_or(0.0)
    }

    /// Whether any sample flagged the given envelope as negative.
    pub fn has_negative_balance_warning(&self, envelope: &str) -> bool {
        self.warnings.iter().any(|w| {
            matches!(&w.kind, WarningKind::NegativeBalance { envelope: e, .. } if e == envelope)
        })
    }
}
