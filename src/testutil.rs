use std::cell::Cell;
use std::rc::Rc;

use rand::RngCore;

use crate::config::EnvConfig;
use crate::env::Environment;
use crate::model::*;

// ---------------------------------------------------------------------------
// Randomness
// ---------------------------------------------------------------------------

/// RNG that returns the same word forever, pinning every uniform draw.
pub struct ConstRng(pub u64);

impl ConstRng {
    /// Every `random_range(0.0..1.0)` lands just below 1.0.
    pub fn high() -> Self {
        Self(u64::MAX)
    }

    /// Every `random_range(0.0..1.0)` is exactly 0.0.
    pub fn low() -> Self {
        Self(0)
    }
}

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for (i, b) in dst.iter_mut().enumerate() {
            *b = bytes[i % 8];
        }
    }
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

/// Vehicle that counts how often the environment asks it to adjust speed.
pub struct CountingCar {
    pub id: CarId,
    pub itinerary: Itinerary,
    pub speed_calls: Rc<Cell<u32>>,
    pub last_candidate: Rc<Cell<Option<NodeId>>>,
}

impl CountingCar {
    pub fn new(id: CarId, start: NodeId, goal: NodeId) -> Self {
        Self {
            id,
            itinerary: Itinerary::new(start, goal),
            speed_calls: Rc::new(Cell::new(0)),
            last_candidate: Rc::new(Cell::new(None)),
        }
    }
}

impl Vehicle for CountingCar {
    fn id(&self) -> CarId {
        self.id
    }
    fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }
    fn itinerary_mut(&mut self) -> &mut Itinerary {
        &mut self.itinerary
    }
    fn modify_speed(&mut self, _config: &EnvConfig, _graph: &Graph, candidate: NodeId) {
        self.speed_calls.set(self.speed_calls.get() + 1);
        self.last_candidate.set(Some(candidate));
    }
}

// ---------------------------------------------------------------------------
// Graph helpers
// ---------------------------------------------------------------------------

/// Plain nodes `ids` with the given directed edges.
pub fn graph_of(ids: &[NodeId], edges: &[(NodeId, NodeId, f64)]) -> Graph {
    let mut g = Graph::new();
    for &id in ids {
        g.add_node(id, Control::Plain);
    }
    for &(from, to, w) in edges {
        g.add_edge(from, to, w).unwrap();
    }
    g
}

pub fn env_of<V: Vehicle>(graph: Graph, cars: Vec<V>) -> Environment<V> {
    let mut env = Environment::new(graph, EnvConfig::default()).unwrap();
    for car in cars {
        env.add_car(car).unwrap();
    }
    env
}
