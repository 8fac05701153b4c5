use rand::{Rng, RngCore};
use tracing::{debug, trace};

use super::Environment;
use super::occupancy;
use crate::error::{Result, SimError};
use crate::model::{CarId, Graph, NodeId, Vehicle};

/// Record the move on the car, then on the occupancy lists.
fn commit<V: Vehicle>(graph: &mut Graph, car: &mut V, to: NodeId) -> Result<()> {
    let itinerary = car.itinerary_mut();
    itinerary.advance(to);
    let from = itinerary.prev_pos;
    occupancy::relocate(graph, car.id(), from, to)
}

impl<V: Vehicle> Environment<V> {
    /// Try to move a car toward `next_node`.
    ///
    /// Returns the node the car ends up on, or `None` when every option was
    /// rejected and the car stays put with no state changed.
    ///
    /// 1. `next_node == cur_pos`: the car stays and `cur_pos` is appended to
    ///    `visited` again.
    /// 2. One draw against the edge weight to `next_node`; accepted if the
    ///    draw is within the weight and no car heads the target's occupancy.
    /// 3. Otherwise the remaining successors of `cur_pos` are tried in
    ///    ascending id order, skipping `next_node`. The threshold starts at
    ///    the primary weight and grows by each neighbor's weight before that
    ///    neighbor's fresh draw. The first neighbor that passes and is free
    ///    (or headed by this same car) wins.
    pub fn move_car(
        &mut self,
        car_id: CarId,
        next_node: NodeId,
        rng: &mut dyn RngCore,
    ) -> Result<Option<NodeId>> {
        let car = self
            .cars
            .get_mut(&car_id)
            .ok_or(SimError::UnknownCar(car_id))?;
        let cur_pos = car.itinerary().cur_pos;
        debug!(car = car_id, from = cur_pos, to = next_node, "car moving");

        if cur_pos == next_node {
            car.itinerary_mut().stay();
            debug!(car = car_id, node = cur_pos, "car kept in the same place");
            return Ok(Some(cur_pos));
        }

        let graph = &mut self.graph;
        let mut threshold = graph.weight(cur_pos, next_node)?;
        let draw: f64 = rng.random_range(0.0..1.0);
        let head = graph.node(next_node)?.blocking_car();
        debug!(car = car_id, weight = threshold, draw, ?head, "primary attempt");
        if draw <= threshold && head.is_none() {
            commit(graph, car, next_node)?;
            debug!(car = car_id, node = next_node, "car moved");
            return Ok(Some(next_node));
        }

        let neighbors: Vec<NodeId> = graph
            .neighbors(cur_pos)
            .filter(|&n| n != next_node)
            .collect();
        for neighbor in neighbors {
            threshold += graph.weight(cur_pos, neighbor)?;
            let draw: f64 = rng.random_range(0.0..1.0);
            let head = graph.node(neighbor)?.blocking_car();
            trace!(car = car_id, neighbor, threshold, draw, ?head, "fallback attempt");
            if draw <= threshold && head.is_none_or(|c| c == car_id) {
                car.modify_speed(&self.config, graph, neighbor);
                commit(graph, car, neighbor)?;
                debug!(car = car_id, node = neighbor, "car moved to fallback neighbor");
                return Ok(Some(neighbor));
            }
        }

        debug!(car = car_id, node = cur_pos, "no node was available");
        Ok(None)
    }
}
