#[cfg(test)]
#[path = "../../tests/unit/checker/simulator_test.rs"]
mod simulator_test;

use super::*;
use carp_core::models::common::Demand;
use carp_core::models::problem::{ArcIdx, NodeIdx, VehicleIdx};
use carp_core::models::solution::Route;
use carp_core::utils::compare_floats;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// An outcome of replaying one route: counted totals, local violations and the
/// coverage claims the route makes.
#[derive(Clone, Debug)]
pub struct RouteReplay {
    /// A replayed vehicle.
    pub vehicle: VehicleIdx,
    /// Counted travelled distance, the trailing home leg excluded.
    pub distance: Distance,
    /// Counted duration, the trailing home leg excluded.
    pub duration: Duration,
    /// Violations local to this route.
    pub violations: Vec<Violation>,
    /// Accepted coverage claims in position order.
    pub claims: Vec<CoverageClaim>,
}

/// Tracks the vehicle movement along its route. Owned by the replay and destroyed
/// when the route finishes.
struct RouteState {
    current: NodeIdx,
    load: Demand,
    distance: Distance,
    duration: Duration,
    prev: Option<ArcIdx>,
}

/// Replays one route's arc sequence as a state machine, enforcing connectivity, load,
/// turning and timing rules. A pure function of its inputs: distinct routes replay
/// independently, possibly on parallel workers.
pub fn replay_route(network: &Network, fleet: &Fleet, route: &Route, max_time: Option<Duration>) -> RouteReplay {
    let vehicle = fleet.vehicle_at(route.vehicle);
    let mut state = RouteState {
        current: vehicle.home,
        load: vehicle.capacity,
        distance: 0.,
        duration: 0.,
        prev: None,
    };
    let mut violations = Vec::new();
    let mut claims = Vec::new();
    let mut claimed = FxHashSet::default();
    let mut over_budget = false;

    for (position, step, counted) in route.steps() {
        let arc = network.arc(step.arc);

        if arc.from != state.current {
            violations.push(Violation {
                vehicle: Some(vehicle.id.clone()),
                position: Some(position),
                kind: ViolationKind::Disconnected {
                    expected: network.label(state.current).to_string(),
                    found: network.label(arc.from).to_string(),
                },
            });
            // fatal to this route only: stop its replay, other routes are unaffected
            break;
        }

        if let Some(prev) = state.prev {
            let prev = network.arc(prev);
            if prev.from == arc.to && prev.to == arc.from && !network.can_u_turn(state.current) {
                violations.push(Violation {
                    vehicle: Some(vehicle.id.clone()),
                    position: Some(position),
                    kind: ViolationKind::IllegalUTurn { node: network.label(state.current).to_string() },
                });
            }
        }

        if step.serviced {
            // a serviced flag on an unrequired arc changes nothing
            if let Some(requirement) = arc.requirement {
                if claimed.contains(&requirement) {
                    violations.push(Violation {
                        vehicle: Some(vehicle.id.clone()),
                        position: Some(position),
                        kind: ViolationKind::DoubleCoverage {
                            element: network.requirement(requirement).describe(network),
                        },
                    });
                } else if compare_floats(state.load, arc.demand) == Ordering::Less {
                    violations.push(Violation {
                        vehicle: Some(vehicle.id.clone()),
                        position: Some(position),
                        kind: ViolationKind::InsufficientLoad { demand: arc.demand, residual: state.load },
                    });
                } else {
                    state.load -= arc.demand;
                    claimed.insert(requirement);
                    claims.push(CoverageClaim { requirement, vehicle: route.vehicle, position });
                }
            }
        }

        state.current = arc.to;
        state.prev = Some(step.arc);

        if counted {
            state.distance += arc.length;
            state.duration += arc.time;

            if let Some(limit) = max_time {
                if !over_budget && compare_floats(state.duration, limit) == Ordering::Greater {
                    over_budget = true;
                    violations.push(Violation {
                        vehicle: Some(vehicle.id.clone()),
                        position: Some(position),
                        kind: ViolationKind::TimeBudgetExceeded { duration: state.duration, limit },
                    });
                }
            }
        }

        // reload applies on every depot arrival, not only at trip ends
        if let Some(depot) = fleet.depot_at(state.current) {
            state.load = (state.load + depot.refill).min(vehicle.capacity);
        }
    }

    RouteReplay { vehicle: route.vehicle, distance: state.distance, duration: state.duration, violations, claims }
}
