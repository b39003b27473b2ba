//! Financial event simulation engine
//!
//! This crate is the deterministic core behind an envelope-based retirement
//! planner. A plan is a declarative list of dated financial events (jobs,
//! purchases, loans, transfers, balance declarations) applied against a set
//! of named envelopes, each with its own growth rule. The engine walks a
//! day-granularity timeline, applies scheduled operations in a fixed order,
//! and emits a time series of balances suitable for charting:
//!
//! ```ignore
//! use nestegg_core::simulation::run_simulation;
//!
//! let plan = nestegg_core::model::Plan::from_json(plan_json)?;
//! let schema = nestegg_core::model::Schema::from_json(schema_json)?;
//! let output = run_simulation(&plan, &schema, 0, 365 * 30, 7)?;
//! for sample in &output.samples {
//!     println!("day {} net worth {:.2}", sample.date, sample.total_value);
//! }
//! ```
//!
//! A run is a pure function of `(plan, schema, start_day, end_day,
//! sample_interval_days)`: same inputs, bit-identical output. All I/O,
//! rendering, and persistence belong to the caller.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod amortization;
pub mod apply;
pub mod catalog;
pub mod date_math;
pub mod error;
pub mod inflation;
pub mod ledger;
pub mod params;
pub mod schedule;
pub mod simulation;
pub mod withholding;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{Result, SimulationError};
pub use model::{Plan, Schema, SimulationOutput, SimulationSample};
pub use simulation::run_simulation;
