//! Synthetic traces of cars moving stochastically through a road graph
//! whose nodes carry traffic lights, prohibitions, and occupancy lists.

pub mod config;
pub mod env;
pub mod error;
pub mod model;
pub mod scenario;
pub mod sim;

#[cfg(test)]
mod testutil;

pub use config::{EnvConfig, RunConfig};
pub use env::Environment;
pub use error::{ConfigError, SimError};
pub use model::{Car, CarId, Control, Graph, Itinerary, Node, NodeId, Outcome, Step, Trace, Vehicle};
pub use scenario::Scenario;
