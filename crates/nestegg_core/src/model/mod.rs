mod envelopes;
mod events;
mod plan;
mod results;
mod schema;

pub use envelopes::{Envelope, EnvelopeCategory, GrowthMode, growth_multiplier};
pub use events::{EventInstance, ParamValue, Parameter, UpdatingEventInstance};
pub use plan::Plan;
pub use results::{SimulationOutput, SimulationSample, SimulationWarning, WarningKind};
pub use schema::{EventDefinition, ParameterDefinition, Schema, UpdatingEventDefinition};
