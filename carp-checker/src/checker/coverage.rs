#[cfg(test)]
#[path = "../../tests/unit/checker/coverage_test.rs"]
mod coverage_test;

use super::*;
use carp_core::models::problem::{RequirementIdx, VehicleIdx};

/// A claim that one traversal serviced a required element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoverageClaim {
    /// A requirement index in the network.
    pub requirement: RequirementIdx,
    /// A claiming vehicle.
    pub vehicle: VehicleIdx,
    /// A step position within the claiming route.
    pub position: usize,
}

/// A ledger mapping each required element to its unique covering traversal. Populated
/// by a sequential fold of per route coverage claims after all replays have
/// completed, so no shared state is mutated during the parallel phase.
pub struct CoverageTracker {
    assignments: Vec<Option<CoverageClaim>>,
}

impl CoverageTracker {
    /// Creates a tracker with every requirement of the network uncovered.
    pub fn new(network: &Network) -> Self {
        Self { assignments: vec![None; network.requirements().len()] }
    }

    /// Folds claims in the given stable order: the first claim on an element wins,
    /// any later claim yields a double coverage violation attributed to it.
    /// Same route duplicates were already rejected during replay and never reach
    /// this fold.
    pub fn fold(
        &mut self,
        claims: impl IntoIterator<Item = CoverageClaim>,
        network: &Network,
        fleet: &Fleet,
    ) -> Vec<Violation> {
        claims
            .into_iter()
            .filter_map(|claim| {
                let assignment = &mut self.assignments[claim.requirement];
                if assignment.is_none() {
                    *assignment = Some(claim);
                    None
                } else {
                    Some(Violation {
                        vehicle: Some(fleet.vehicle_at(claim.vehicle).id.clone()),
                        position: Some(claim.position),
                        kind: ViolationKind::DoubleCoverage {
                            element: network.requirement(claim.requirement).describe(network),
                        },
                    })
                }
            })
            .collect()
    }

    /// Returns the covering claim of given requirement, or none when it is uncovered.
    pub fn assignment(&self, requirement: RequirementIdx) -> Option<&CoverageClaim> {
        self.assignments[requirement].as_ref()
    }

    /// Reports a missing coverage violation for every uncovered requirement, in
    /// requirement definition order.
    pub fn missing(&self, network: &Network) -> Vec<Violation> {
        self.assignments
            .iter()
            .enumerate()
            .filter(|(_, assignment)| assignment.is_none())
            .map(|(requirement, _)| Violation {
                vehicle: None,
                position: None,
                kind: ViolationKind::MissingCoverage {
                    element: network.requirement(requirement).describe(network),
                },
            })
            .collect()
    }
}
