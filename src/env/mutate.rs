use rand::{Rng, RngCore};
use tracing::debug;

use super::Environment;
use crate::model::{Control, Vehicle};

fn flip(state: u8) -> u8 {
    u8::from(state == 0)
}

impl<V: Vehicle> Environment<V> {
    /// Give every controlled node a chance to flip its state.
    ///
    /// Signals and prohibitions both flip with `toggle_probability`. Plain
    /// nodes are skipped and draw nothing from `rng`.
    pub fn modify(&mut self, rng: &mut dyn RngCore) {
        let p = self.config.toggle_probability;
        for (id, node) in self.graph.nodes_mut() {
            match &mut node.control {
                Control::Signal { state } => {
                    if rng.random_range(0.0..1.0) <= p {
                        let old = *state;
                        *state = flip(old);
                        debug!(node = id, old, new = *state, "traffic light changed");
                    }
                }
                Control::Prohibition { state } => {
                    if rng.random_range(0.0..1.0) <= p {
                        let old = *state;
                        *state = flip(old);
                        debug!(node = id, old, new = *state, "prohibition changed");
                    }
                }
                Control::Plain => {}
            }
        }
    }
}
