use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

use super::planner::RoutePlanner;
use crate::config::RunConfig;
use crate::env::Environment;
use crate::error::Result;
use crate::model::{CarId, NodeId, Outcome, Step, Trace, Vehicle};

/// Run one tick: mutate controls, move every active car once, then remove
/// arrivals.
///
/// Cars move in ascending id order, each seeing the occupancy left by the
/// cars before it. Returns one step per move plus one per arrival.
pub fn tick<V: Vehicle>(
    env: &mut Environment<V>,
    planner: &mut dyn RoutePlanner,
    rng: &mut dyn RngCore,
    tick_no: u32,
) -> Result<Vec<Step>> {
    env.modify(rng);

    let mut steps = Vec::with_capacity(env.cars.len());
    for car_id in env.car_ids() {
        let car = env.car(car_id)?;
        let from = car.itinerary().cur_pos;
        let proposed = planner.next_node(&env.graph, car);
        let outcome = match env.move_car(car_id, proposed, rng)? {
            Some(to) if to == from => Outcome::Stayed,
            Some(to) => Outcome::Moved { to },
            None => Outcome::Blocked,
        };
        steps.push(Step {
            tick: tick_no,
            car: car_id,
            from,
            proposed: Some(proposed),
            outcome,
        });
    }

    let goals: BTreeMap<CarId, NodeId> = env
        .cars
        .iter()
        .map(|(&id, car)| (id, car.itinerary().goal))
        .collect();
    for car_id in env.check_cars()? {
        steps.push(Step {
            tick: tick_no,
            car: car_id,
            from: goals[&car_id],
            proposed: None,
            outcome: Outcome::Arrived,
        });
    }

    Ok(steps)
}

/// Run up to `config.ticks` ticks, stopping early once no cars remain.
///
/// Creates a deterministic RNG from `config.seed`, so the same seed over
/// the same environment always produces the same trace.
pub fn run<V: Vehicle>(
    env: &mut Environment<V>,
    planner: &mut dyn RoutePlanner,
    config: RunConfig,
) -> Result<Trace> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut trace = Trace::default();

    for tick_no in 0..config.ticks {
        if env.is_empty() {
            break;
        }
        let steps = tick(env, planner, &mut rng, tick_no)?;
        trace.steps.extend(steps);
        trace.ticks += 1;
    }

    info!(
        planner = planner.name(),
        ticks = trace.ticks,
        steps = trace.steps.len(),
        remaining = env.cars.len(),
        "run finished"
    );
    Ok(trace)
}
