// Composition root for the assignments bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate concrete infrastructure implementations.
// - Pick the lifecycle variant and wire it into the inbound adapters.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod telemetry;
