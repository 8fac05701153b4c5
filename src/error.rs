//! Error types for the trace generator.

use thiserror::Error;

use crate::model::{CarId, NodeId};

/// Errors surfaced by graph construction and the per-tick operations.
///
/// A rejected move is not an error: `move_car` reports it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum SimError {
    /// A node id was referenced that the graph does not contain.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// A car id was referenced that is not in the active collection.
    #[error("unknown car {0}")]
    UnknownCar(CarId),

    /// A car was added under an id that is already active.
    #[error("car {0} is already in the environment")]
    DuplicateCar(CarId),

    /// A move was attempted along an edge with no defined weight.
    #[error("no edge weight defined from node {from} to node {to}")]
    MissingEdge { from: NodeId, to: NodeId },

    /// A car was expected in a node's occupancy list but was not there.
    #[error("occupancy corrupted: car {car} not listed at node {node}")]
    OccupancyCorrupted { car: CarId, node: NodeId },

    /// An edge weight outside [0, 1].
    #[error("edge {from} -> {to} has weight {weight}, expected a value in [0, 1]")]
    InvalidWeight { from: NodeId, to: NodeId, weight: f64 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from loading or validating an [`EnvConfig`](crate::config::EnvConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("toggle probability {0} is outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = SimError> = std::result::Result<T, E>;
