#[cfg(test)]
#[path = "../../../tests/unit/models/solution/route_test.rs"]
mod route_test;

use crate::models::problem::{ArcIdx, VehicleIdx};

/// One arc traversal with its service flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArcStep {
    /// A traversed arc.
    pub arc: ArcIdx,
    /// Whether the traversal services the arc.
    pub serviced: bool,
}

/// The portion of a route between a start point (home or depot) and an ending depot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trip {
    /// Ordered arc traversals; the last one arrives at a depot.
    pub steps: Vec<ArcStep>,
}

/// The ordered trips assigned to one vehicle. The trailing leg holds any encoded steps
/// after the final depot arrival: they are connectivity checked, but excluded from
/// time and length accounting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// An index of the assigned vehicle.
    pub vehicle: VehicleIdx,
    /// Ordered trips, each ending at a depot.
    pub trips: Vec<Trip>,
    /// Steps of the implicit home-bound leg, when encoded.
    pub trailing: Vec<ArcStep>,
}

/// A candidate solution as ordered routes, one per vehicle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    /// Routes in solution order.
    pub routes: Vec<Route>,
}

impl Route {
    /// Iterates over all steps in traversal order together with their route position
    /// and whether the step belongs to counted accounting.
    pub fn steps(&self) -> impl Iterator<Item = (usize, ArcStep, bool)> + '_ {
        self.trips
            .iter()
            .flat_map(|trip| trip.steps.iter())
            .map(|step| (step, true))
            .chain(self.trailing.iter().map(|step| (step, false)))
            .enumerate()
            .map(|(position, (step, counted))| (position, *step, counted))
    }

    /// Returns total amount of steps including the trailing leg.
    pub fn len(&self) -> usize {
        self.trips.iter().map(|trip| trip.steps.len()).sum::<usize>() + self.trailing.len()
    }

    /// Checks whether the route has no steps at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
