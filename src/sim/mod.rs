mod planner;
mod runner;

pub use planner::{RoutePlanner, ShortestHopPlanner};
pub use runner::{run, tick};
