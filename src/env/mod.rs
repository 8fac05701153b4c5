//! The environment: road graph, active cars, and the per-tick operations.
//!
//! A tick is driven from outside (see [`crate::sim::tick`]) as
//! `modify()`, then `move_car()` for some cars, then `check_cars()`.
//! Every operation assumes strictly sequential access: occupancy is read
//! during the move check and written later, so running moves concurrently
//! would need a per-node lock spanning check and commit.

mod goal;
mod movement;
mod mutate;
mod occupancy;

use std::collections::BTreeMap;

use crate::config::EnvConfig;
use crate::error::{Result, SimError};
use crate::model::{Car, CarId, Graph, Vehicle};

#[derive(Debug)]
pub struct Environment<V: Vehicle = Car> {
    pub graph: Graph,
    /// Active cars; removed once they reach their goal.
    pub cars: BTreeMap<CarId, V>,
    /// Observer agents. Carried for collaborators, never read here.
    pub observers: Vec<u64>,
    /// Norm enforcer agents. Carried for collaborators, never read here.
    pub enforcers: Vec<u64>,
    pub config: EnvConfig,
}

impl<V: Vehicle> Environment<V> {
    pub fn new(graph: Graph, config: EnvConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            graph,
            cars: BTreeMap::new(),
            observers: Vec::new(),
            enforcers: Vec::new(),
            config,
        })
    }

    pub fn with_agents(mut self, observers: Vec<u64>, enforcers: Vec<u64>) -> Self {
        self.observers = observers;
        self.enforcers = enforcers;
        self
    }

    /// Place a car at its starting node and make it active.
    pub fn add_car(&mut self, car: V) -> Result<()> {
        let id = car.id();
        if self.cars.contains_key(&id) {
            return Err(SimError::DuplicateCar(id));
        }
        let itinerary = car.itinerary();
        if !self.graph.contains(itinerary.goal) {
            return Err(SimError::UnknownNode(itinerary.goal));
        }
        self.graph
            .node_mut(itinerary.cur_pos)?
            .occupancy
            .push(id);
        self.cars.insert(id, car);
        Ok(())
    }

    pub fn car(&self, id: CarId) -> Result<&V> {
        self.cars.get(&id).ok_or(SimError::UnknownCar(id))
    }

    pub fn car_ids(&self) -> Vec<CarId> {
        self.cars.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::graph_of;

    #[test]
    fn add_car_registers_occupancy() {
        let mut env = Environment::new(graph_of(&[1, 2], &[]), EnvConfig::default()).unwrap();
        env.add_car(Car::new(5, 1, 2)).unwrap();
        assert_eq!(env.graph.occupancy(1).unwrap(), &[5]);
        assert_eq!(env.car_ids(), vec![5]);
    }

    #[test]
    fn add_car_rejects_duplicates_and_unknown_nodes() {
        let mut env = Environment::new(graph_of(&[1, 2], &[]), EnvConfig::default()).unwrap();
        env.add_car(Car::new(5, 1, 2)).unwrap();
        assert!(matches!(
            env.add_car(Car::new(5, 2, 1)),
            Err(SimError::DuplicateCar(5))
        ));
        assert!(matches!(
            env.add_car(Car::new(6, 9, 1)),
            Err(SimError::UnknownNode(9))
        ));
        assert!(matches!(
            env.add_car(Car::new(7, 1, 9)),
            Err(SimError::UnknownNode(9))
        ));
        assert_eq!(env.graph.occupancy(1).unwrap(), &[5]);
    }

    #[test]
    fn rejects_invalid_config() {
        let result: Result<Environment> =
            Environment::new(Graph::new(), EnvConfig::with_toggle_probability(2.0));
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn agents_are_carried_through() {
        let env: Environment = Environment::new(Graph::new(), EnvConfig::default())
            .unwrap()
            .with_agents(vec![10, 11], vec![20]);
        assert_eq!(env.observers, vec![10, 11]);
        assert_eq!(env.enforcers, vec![20]);
    }
}
