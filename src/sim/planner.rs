use pathfinding::prelude::bfs;

use crate::model::{Graph, NodeId, Vehicle};

/// Chooses the node each car proposes to move to on a tick.
pub trait RoutePlanner {
    fn name(&self) -> &str;
    fn next_node(&mut self, graph: &Graph, car: &dyn Vehicle) -> NodeId;
}

/// Proposes the next hop along a fewest-edges route to the goal.
///
/// Ties are broken toward lower node ids since successors are expanded in
/// ascending order. A car whose goal is unreachable proposes to stay.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortestHopPlanner;

impl RoutePlanner for ShortestHopPlanner {
    fn name(&self) -> &str {
        "shortest_hop"
    }

    fn next_node(&mut self, graph: &Graph, car: &dyn Vehicle) -> NodeId {
        let itinerary = car.itinerary();
        let goal = itinerary.goal;
        bfs(
            &itinerary.cur_pos,
            |&n| graph.neighbors(n).collect::<Vec<_>>(),
            |&n| n == goal,
        )
        .and_then(|path| path.get(1).copied())
        .unwrap_or(itinerary.cur_pos)
    }
}
