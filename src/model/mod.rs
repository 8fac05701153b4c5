pub mod car;
pub mod graph;
pub mod node;
pub mod trace;

pub use car::{Car, Itinerary, Vehicle};
pub use graph::Graph;
pub use node::{Control, Node};
pub use trace::{Outcome, Step, Trace};

pub type NodeId = u64;
pub type CarId = u64;
