use serde::{Deserialize, Serialize};

use super::graph::Graph;
use super::{CarId, NodeId};
use crate::config::EnvConfig;

/// Position state of a car that the tick operations own and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub cur_pos: NodeId,
    pub prev_pos: NodeId,
    pub goal: NodeId,
    /// Append-only history; the last entry is always `cur_pos`.
    pub visited: Vec<NodeId>,
}

impl Itinerary {
    pub fn new(start: NodeId, goal: NodeId) -> Self {
        Self {
            cur_pos: start,
            prev_pos: start,
            goal,
            visited: vec![start],
        }
    }

    /// Record a committed move to `to`.
    pub(crate) fn advance(&mut self, to: NodeId) {
        self.prev_pos = self.cur_pos;
        self.cur_pos = to;
        self.visited.push(to);
    }

    /// Record a tick spent in place.
    pub(crate) fn stay(&mut self) {
        self.visited.push(self.cur_pos);
    }

    pub fn at_goal(&self) -> bool {
        self.cur_pos == self.goal
    }
}

/// A car as seen by the environment.
///
/// Anything beyond the itinerary (speed, trust, driving style) is owned by
/// the implementor and only changes through [`Vehicle::modify_speed`].
pub trait Vehicle {
    fn id(&self) -> CarId;
    fn itinerary(&self) -> &Itinerary;
    fn itinerary_mut(&mut self) -> &mut Itinerary;

    /// Called when a fallback neighbor has been accepted, before the move is
    /// committed. The environment never inspects the effect.
    fn modify_speed(&mut self, config: &EnvConfig, graph: &Graph, candidate: NodeId);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub itinerary: Itinerary,
    pub speed: u32,
    pub trust_level: u32,
}

impl Car {
    pub fn new(id: CarId, start: NodeId, goal: NodeId) -> Self {
        Self {
            id,
            itinerary: Itinerary::new(start, goal),
            speed: 0,
            trust_level: 0,
        }
    }

    /// Set trust, clamped to the environment's bound.
    pub fn with_trust_level(mut self, trust_level: u32, config: &EnvConfig) -> Self {
        self.trust_level = trust_level.min(config.max_trust_level);
        self
    }
}

impl Vehicle for Car {
    fn id(&self) -> CarId {
        self.id
    }

    fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    fn itinerary_mut(&mut self) -> &mut Itinerary {
        &mut self.itinerary
    }

    /// Speed up by one toward `max_speed` when the candidate node lets cars
    /// through, slow down by one otherwise.
    fn modify_speed(&mut self, config: &EnvConfig, graph: &Graph, candidate: NodeId) {
        let permissive = graph
            .node(candidate)
            .map(|n| n.control.is_permissive())
            .unwrap_or(true);
        let old = self.speed;
        self.speed = if permissive {
            (self.speed + 1).min(config.max_speed)
        } else {
            self.speed.saturating_sub(1)
        };
        tracing::trace!(car = self.id, candidate, old, new = self.speed, "speed updated");
    }
}
