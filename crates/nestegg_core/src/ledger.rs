//! The envelope ledger
//!
//! The single owner of running balances. Handlers go through
//! `credit`/`debit`/`set_balance`; nothing else in the engine writes a
//! balance. Growth accrues lazily: each envelope remembers the day its
//! balance was last grown and catches up in one multiplication when
//! next touched, which keeps decades-long runs from accumulating
//! per-day floating-point compounding error in the non-daily modes.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::error::{Result, SimulationError};
use crate::model::{Envelope, GrowthMode, Plan, SimulationSample, growth_multiplier};

/// Index of an envelope within the ledger, valid for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeId(usize);

#[derive(Debug, Clone)]
struct EnvelopeState {
    envelope: Envelope,
    balance: f64,
    /// Day growth was last applied up to.
    growth_anchor: i64,
}

/// All envelope balances for one simulation run.
#[derive(Debug, Clone)]
pub struct Ledger {
    envelopes: Vec<EnvelopeState>,
    index: FxHashMap<String, usize>,
}

impl Ledger {
    /// Seed a fresh ledger from the plan's envelope declarations.
    /// Every balance starts at zero; `declare_accounts` events set
    /// opening balances.
    pub fn from_plan(plan: &Plan, start_day: i64) -> Result<Self> {
        let mut envelopes = Vec::with_capacity(plan.envelopes.len());
        let mut index = FxHashMap::default();

        for envelope in &plan.envelopes {
            if index.contains_key(&envelope.name) {
                return Err(SimulationError::DuplicateEnvelope(envelope.name.clone()));
            }
            index.insert(envelope.name.clone(), envelopes.len());
            envelopes.push(EnvelopeState {
                envelope: envelope.clone(),
                balance: 0.0,
                growth_anchor: start_day,
            });
        }

        Ok(Self { envelopes, index })
    }

    /// Resolve an envelope name to its id for this run.
    pub fn lookup(&self, name: &str) -> Option<EnvelopeId> {
        self.index.get(name).copied().map(EnvelopeId)
    }

    /// Resolve a name referenced by an event, turning a miss into the
    /// fatal configuration error it is.
    pub fn resolve(&self, event_id: u32, name: &str) -> Result<EnvelopeId> {
        self.lookup(name)
            .ok_or_else(|| SimulationError::UnresolvedEnvelopeReference {
                event_id,
                envelope: name.to_string(),
            })
    }

    pub fn balance(&self, id: EnvelopeId) -> f64 {
        self.envelopes[id.0].balance
    }

    pub fn category_of(&self, id: EnvelopeId) -> crate::model::EnvelopeCategory {
        self.envelopes[id.0].envelope.category
    }

    /// Add to a balance. No clamping in either direction.
    pub fn credit(&mut self, id: EnvelopeId, amount: f64) {
        self.envelopes[id.0].balance += amount;
    }

    /// Subtract from a balance. Never clamps at zero: a negative
    /// balance on a non-debt envelope is the shortfall signal the
    /// caller watches for.
    pub fn debit(&mut self, id: EnvelopeId, amount: f64) {
        self.envelopes[id.0].balance -= amount;
    }

    /// Overwrite a balance outright, bypassing growth history. The
    /// growth anchor resets to the declaration day so prior elapsed
    /// time is not re-applied on top of the declared figure.
    pub fn set_balance(&mut self, id: EnvelopeId, amount: f64, day: i64) {
        let state = &mut self.envelopes[id.0];
        state.balance = amount;
        state.growth_anchor = day;
    }

    /// Advance every envelope's growth to `day`.
    pub fn grow_to(&mut self, day: i64) {
        for state in &mut self.envelopes {
            let elapsed = day - state.growth_anchor;
            if elapsed <= 0 {
                continue;
            }
            if state.envelope.growth != GrowthMode::None {
                state.balance *= growth_multiplier(
                    state.envelope.growth,
                    state.envelope.rate,
                    elapsed,
                );
            }
            state.growth_anchor = day;
        }
    }

    /// Snapshot all balances as a sample for `day`.
    pub fn snapshot(&self, day: i64) -> SimulationSample {
        let mut parts = BTreeMap::new();
        let mut total = 0.0;
        for state in &self.envelopes {
            parts.insert(state.envelope.name.clone(), state.balance);
            total += state.balance;
        }
        SimulationSample {
            date: day,
            total_value: total,
            parts,
        }
    }

    /// Iterate `(name, category, balance)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, crate::model::EnvelopeCategory, f64)> {
        self.envelopes
            .iter()
            .map(|s| (s.envelope.name.as_str(), s.envelope.category, s.balance))
    }
}
