use super::Environment;
use crate::error::{Result, SimError};
use crate::model::{CarId, Graph, NodeId, Vehicle};

/// Drop `car` from `node`'s occupancy list.
///
/// The car must be listed there. A missing entry means the occupancy lists
/// no longer match car positions, which is reported as fatal.
pub(crate) fn remove(graph: &mut Graph, car: CarId, node: NodeId) -> Result<()> {
    let occupancy = &mut graph.node_mut(node)?.occupancy;
    let index = occupancy
        .iter()
        .position(|&c| c == car)
        .ok_or(SimError::OccupancyCorrupted { car, node })?;
    occupancy.remove(index);
    Ok(())
}

/// Move `car` from `from`'s occupancy list to the tail of `to`'s.
pub(crate) fn relocate(graph: &mut Graph, car: CarId, from: NodeId, to: NodeId) -> Result<()> {
    if !graph.contains(to) {
        return Err(SimError::UnknownNode(to));
    }
    remove(graph, car, from)?;
    graph.node_mut(to)?.occupancy.push(car);
    Ok(())
}

impl<V: Vehicle> Environment<V> {
    /// Sync occupancy with a move the car has already recorded, taking it
    /// out of `prev_pos` and appending it at `cur_pos`.
    pub fn update_car_position(&mut self, car_id: CarId) -> Result<()> {
        let itinerary = self.car(car_id)?.itinerary();
        let (from, to) = (itinerary.prev_pos, itinerary.cur_pos);
        relocate(&mut self.graph, car_id, from, to)
    }
}
