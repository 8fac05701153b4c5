use serde::{Deserialize, Serialize};

use super::CarId;

/// Control attribute carried by a node.
///
/// A node carries at most one control. `state` is binary: for a signal `1`
/// is green and `0` is red; for a prohibition `1` means the prohibition is
/// in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Control {
    #[default]
    Plain,
    Signal { state: u8 },
    Prohibition { state: u8 },
}

impl Control {
    /// Whether a car may pass through a node with this control right now.
    pub fn is_permissive(self) -> bool {
        match self {
            Control::Plain => true,
            Control::Signal { state } => state == 1,
            Control::Prohibition { state } => state == 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    pub control: Control,
    /// Cars currently at this node, in arrival order.
    #[serde(default)]
    pub occupancy: Vec<CarId>,
}

impl Node {
    pub fn new(control: Control) -> Self {
        Self {
            control,
            occupancy: Vec::new(),
        }
    }

    /// The car that blocks new arrivals, if any.
    ///
    /// Only the head of the occupancy list blocks. Later entries coexist
    /// without blocking, so more than one car can end up listed here.
    /// Suspect as a model of single occupancy: a strict check would treat
    /// any non-empty list as taken.
    pub fn blocking_car(&self) -> Option<CarId> {
        self.occupancy.first().copied()
    }
}
