use tracing::info;

use super::Environment;
use super::occupancy;
use crate::error::Result;
use crate::model::{CarId, Vehicle};

impl<V: Vehicle> Environment<V> {
    /// Remove every car standing on its goal node.
    ///
    /// Arrivals are collected over a full scan first and deleted from the
    /// active collection afterwards. Returns the removed ids in ascending
    /// order.
    pub fn check_cars(&mut self) -> Result<Vec<CarId>> {
        let mut arrived = Vec::new();
        for (&id, car) in &self.cars {
            let itinerary = car.itinerary();
            if itinerary.at_goal() {
                info!(car = id, goal = itinerary.goal, "removing car, goal reached");
                occupancy::remove(&mut self.graph, id, itinerary.cur_pos)?;
                arrived.push(id);
            }
        }
        for id in &arrived {
            self.cars.remove(id);
        }
        Ok(arrived)
    }
}
