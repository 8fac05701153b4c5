use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::node::{Control, Node};
use super::{CarId, NodeId};
use crate::error::{Result, SimError};

/// Directed road graph with per-edge acceptance weights.
///
/// BTreeMaps give deterministic iteration: nodes and neighbors are always
/// visited in ascending id order. Weights leaving a node are independent
/// thresholds and need not sum to 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing the control of an existing one.
    /// Existing occupancy is kept.
    pub fn add_node(&mut self, id: NodeId, control: Control) {
        self.nodes
            .entry(id)
            .and_modify(|n| n.control = control)
            .or_insert_with(|| Node::new(control));
    }

    /// Add (or reweight) the directed edge `from -> to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(SimError::InvalidWeight { from, to, weight });
        }
        for id in [from, to] {
            if !self.nodes.contains_key(&id) {
                return Err(SimError::UnknownNode(id));
            }
        }
        self.edges.entry(from).or_default().insert(to, weight);
        Ok(())
    }

    /// Add both `a -> b` and `b -> a` with the same weight.
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<()> {
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(&id).ok_or(SimError::UnknownNode(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(&id).ok_or(SimError::UnknownNode(id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(&id, n)| (id, n))
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut Node)> {
        self.nodes.iter_mut().map(|(&id, n)| (id, n))
    }

    /// Weight of the edge `from -> to`. A missing edge is a configuration error.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Result<f64> {
        self.edges
            .get(&from)
            .and_then(|out| out.get(&to))
            .copied()
            .ok_or(SimError::MissingEdge { from, to })
    }

    /// Successors of `id` in ascending node id order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges
            .get(&id)
            .into_iter()
            .flat_map(|out| out.keys().copied())
    }

    pub fn occupancy(&self, id: NodeId) -> Result<&[CarId]> {
        Ok(&self.node(id)?.occupancy)
    }
}
