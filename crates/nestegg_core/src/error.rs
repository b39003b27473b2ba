use std::fmt;

/// Fatal configuration and simulation errors.
///
/// Every variant aborts the run with no partial output: a partially
/// simulated ledger is financially meaningless to display. Recoverable
/// conditions (a non-debt envelope going negative) are reported as
/// warnings on the output instead, never as an `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// An event's `type` string is absent from the schema or the
    /// engine's handler catalog.
    UnknownEventType(String),
    /// An updating event names a type not declared by its parent
    /// event's definition.
    UnknownUpdatingEventType { event_id: u32, kind: String },
    /// A handler-required parameter is missing from the instance.
    /// Defaults are resolved once at instantiation, never at
    /// simulation time.
    MissingParameter {
        event_id: u32,
        parameter: &'static str,
    },
    /// A parameter is present but holds the wrong value shape
    /// (e.g. text where a number is required).
    InvalidParameter {
        event_id: u32,
        parameter: &'static str,
        expected: &'static str,
    },
    /// A recurring event declares a non-positive `frequency_days`,
    /// which cannot expand into a well-ordered schedule.
    InvalidRecurrence { event_id: u32, frequency_days: f64 },
    /// An event parameter names an envelope absent from the plan.
    UnresolvedEnvelopeReference { event_id: u32, envelope: String },
    /// Two envelopes in the plan share a name.
    DuplicateEnvelope(String),
    /// The requested sampling interval is non-positive.
    InvalidSampleInterval(i64),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::UnknownEventType(kind) => {
                write!(f, "unknown event type {kind:?}")
            }
            SimulationError::UnknownUpdatingEventType { event_id, kind } => {
                write!(f, "event {event_id}: unknown updating event type {kind:?}")
            }
            SimulationError::MissingParameter {
                event_id,
                parameter,
            } => {
                write!(f, "event {event_id}: missing parameter {parameter:?}")
            }
            SimulationError::InvalidParameter {
                event_id,
                parameter,
                expected,
            } => {
                write!(
                    f,
                    "event {event_id}: parameter {parameter:?} is not {expected}"
                )
            }
            SimulationError::InvalidRecurrence {
                event_id,
                frequency_days,
            } => {
                write!(
                    f,
                    "event {event_id}: frequency_days must be positive, got {frequency_days}"
                )
            }
            SimulationError::UnresolvedEnvelopeReference { event_id, envelope } => {
                write!(
                    f,
                    "event {event_id}: references envelope {envelope:?} which is not in the plan"
                )
            }
            SimulationError::DuplicateEnvelope(name) => {
                write!(f, "duplicate envelope name {name:?}")
            }
            SimulationError::InvalidSampleInterval(days) => {
                write!(f, "sample interval must be positive, got {days}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

pub type Result<T> = std::result::Result<T, SimulationError>;
