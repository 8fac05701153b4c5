#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use car_trace::Environment;
use car_trace::config::EnvConfig;
use car_trace::model::*;
use rand::RngCore;

/// RNG pinned to one word; with `high()` every unit draw lands just below 1.0.
pub struct ConstRng(pub u64);

impl ConstRng {
    pub fn high() -> Self {
        Self(u64::MAX)
    }

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

/// Stock [`Car`] that also counts speed updates.
pub struct SpyCar {
    pub inner: Car,
    pub speed_calls: Rc<Cell<u32>>,
}

impl SpyCar {
    pub fn new(id: CarId, start: NodeId, goal: NodeId) -> Self {
        Self {
            inner: Car::new(id, start, goal),
            speed_calls: Rc::new(Cell::new(0)),
        }
    }
}

impl Vehicle for SpyCar {
    fn id(&self) -> CarId {
        self.inner.id()
    }
    fn itinerary(&self) -> &Itinerary {
        self.inner.itinerary()
    }
    fn itinerary_mut(&mut self) -> &mut Itinerary {
        self.inner.itinerary_mut()
    }
    fn modify_speed(&mut self, config: &EnvConfig, graph: &Graph, candidate: NodeId) {
        self.speed_calls.set(self.speed_calls.get() + 1);
        self.inner.modify_speed(config, graph, candidate);
    }
}

pub fn plain_graph(ids: &[NodeId], edges: &[(NodeId, NodeId, f64)]) -> Graph {
    let mut g = Graph::new();
    for &id in ids {
        g.add_node(id, Control::Plain);
    }
    for &(from, to, w) in edges {
        g.add_edge(from, to, w).unwrap();
    }
    g
}

/// Every active car is listed exactly once, at its current position, and
/// its `visited` history ends there.
pub fn assert_consistent<V: Vehicle>(env: &Environment<V>) {
    for (&id, car) in &env.cars {
        let it = car.itinerary();
        assert_eq!(it.visited.last(), Some(&it.cur_pos), "car {id} visited tail");
        let listings: Vec<NodeId> = env
            .graph
            .nodes()
            .flat_map(|(nid, n)| n.occupancy.iter().filter(move |&&c| c == id).map(move |_| nid))
            .collect();
        assert_eq!(listings, vec![it.cur_pos], "car {id} occupancy listings");
    }
}
