use crate::config::{EnvConfig, RunConfig};
use crate::env::Environment;
use crate::error::Result;
use crate::model::*;
use crate::sim::{ShortestHopPlanner, run};

/// Builder for small hand-made road networks and their cars.
///
/// Edges are validated when the scenario is built, so node and edge calls
/// can come in any order. Car ids are handed out from 1 upward.
///
/// ```
/// use car_trace::config::{EnvConfig, RunConfig};
/// use car_trace::scenario::Scenario;
///
/// let mut s = Scenario::new();
/// s.node(1).signal(2, 1).node(3);
/// s.road(1, 2, 1.0).road(2, 3, 1.0);
/// let car = s.car(1, 3);
/// let (env, trace) = s.run(EnvConfig::default(), RunConfig::new(10, 42)).unwrap();
/// assert!(env.is_empty());
/// assert_eq!(trace.arrivals().collect::<Vec<_>>(), vec![car]);
/// ```
pub struct Scenario {
    graph: Graph,
    edges: Vec<(NodeId, NodeId, f64)>,
    cars: Vec<Car>,
    next_car: CarId,
}

impl Scenario {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            edges: Vec::new(),
            cars: Vec::new(),
            next_car: 1,
        }
    }

    pub fn node(&mut self, id: NodeId) -> &mut Self {
        self.graph.add_node(id, Control::Plain);
        self
    }

    /// Node with a traffic light; `state` 1 is green.
    pub fn signal(&mut self, id: NodeId, state: u8) -> &mut Self {
        self.graph.add_node(id, Control::Signal { state });
        self
    }

    /// Node with a prohibition; `state` 1 means in force.
    pub fn prohibition(&mut self, id: NodeId, state: u8) -> &mut Self {
        self.graph.add_node(id, Control::Prohibition { state });
        self
    }

    pub fn edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> &mut Self {
        self.edges.push((from, to, weight));
        self
    }

    /// Two-way edge with the same weight in both directions.
    pub fn road(&mut self, a: NodeId, b: NodeId, weight: f64) -> &mut Self {
        self.edge(a, b, weight).edge(b, a, weight)
    }

    /// Queue a car and return its id.
    pub fn car(&mut self, start: NodeId, goal: NodeId) -> CarId {
        let id = self.next_car;
        self.next_car += 1;
        self.cars.push(Car::new(id, start, goal));
        id
    }

    pub fn build(self, config: EnvConfig) -> Result<Environment> {
        let mut graph = self.graph;
        for (from, to, weight) in self.edges {
            graph.add_edge(from, to, weight)?;
        }
        let mut env = Environment::new(graph, config)?;
        for car in self.cars {
            env.add_car(car)?;
        }
        Ok(env)
    }

    /// Build and drive the scenario with [`ShortestHopPlanner`].
    pub fn run(self, config: EnvConfig, run_config: RunConfig) -> Result<(Environment, Trace)> {
        let mut env = self.build(config)?;
        let trace = run(&mut env, &mut ShortestHopPlanner, run_config)?;
        Ok((env, trace))
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}
