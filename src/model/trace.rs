use serde::{Deserialize, Serialize};

use super::{CarId, NodeId};

/// What happened to one car during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// The car was asked to stay where it was.
    Stayed,
    Moved { to: NodeId },
    /// Neither the proposed node nor any neighbor accepted the car.
    Blocked,
    /// The car reached its goal and left the environment.
    Arrived,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub tick: u32,
    pub car: CarId,
    pub from: NodeId,
    /// Node the planner proposed; `None` for arrivals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed: Option<NodeId>,
    pub outcome: Outcome,
}

/// Full record of a run, in tick order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub steps: Vec<Step>,
    /// Number of ticks actually executed.
    pub ticks: u32,
}

impl Trace {
    /// Steps recorded for one car, in order.
    pub fn for_car(&self, car: CarId) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(move |s| s.car == car)
    }

    pub fn arrivals(&self) -> impl Iterator<Item = CarId> + '_ {
        self.steps
            .iter()
            .filter(|s| s.outcome == Outcome::Arrived)
            .map(|s| s.car)
    }
}
