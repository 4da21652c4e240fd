#[cfg(test)]
#[path = "../../tests/unit/checker/parser_test.rs"]
mod parser_test;

use super::*;
use carp_core::models::problem::{ArcIdx, NodeIdx, RequirementIdx, VehicleIdx};
use carp_core::models::solution::{ArcStep, Route, Solution, Trip};
use carp_core::models::{StructuralError, StructuralResult};
use rustc_hash::FxHashSet;

/// Normalises an encoded solution into the canonical per vehicle trip structure
/// required by route replay. Fails with the first structural error found: such input
/// aborts the whole validation before any replay starts.
pub fn parse_solution(
    network: &Network,
    fleet: &Fleet,
    solution: &format::Solution,
) -> StructuralResult<(Solution, Vec<AmbiguityNote>)> {
    let mut resolver = StepResolver { network, inferred: FxHashSet::default() };
    let mut notes = Vec::new();
    let mut seen = FxHashSet::default();
    let mut routes = Vec::new();

    let encoded_routes: Vec<(&str, EncodedRoute<'_>)> = match solution {
        format::Solution::ArcSequence(encoded) => {
            encoded.iter().map(|route| (route.vehicle.as_str(), EncodedRoute::Arcs(&route.route))).collect()
        }
        format::Solution::NodeSequence(encoded) => {
            encoded.iter().map(|route| (route.id.as_str(), EncodedRoute::Nodes(&route.route))).collect()
        }
    };

    for (vehicle_id, encoded) in encoded_routes {
        let vehicle = fleet.vehicle(vehicle_id)?;
        if !seen.insert(vehicle) {
            return Err(StructuralError::MalformedSolution(format!("duplicate route for vehicle '{vehicle_id}'")));
        }

        let steps = match encoded {
            EncodedRoute::Arcs(entries) => resolver.resolve_arc_entries(vehicle_id, entries, &mut notes)?,
            EncodedRoute::Nodes(labels) => resolver.resolve_node_sequence(vehicle_id, labels, &mut notes)?,
        };

        routes.push(split_into_trips(network, fleet, vehicle, steps)?);
    }

    Ok((Solution { routes }, notes))
}

enum EncodedRoute<'a> {
    Arcs(&'a [format::ArcEntry]),
    Nodes(&'a [String]),
}

/// Resolves encoded steps to network arcs, applying the documented deterministic tie
/// break at positions which admit more than one legal arc.
struct StepResolver<'a> {
    network: &'a Network,
    /// Requirements taken as serviced so far, across the whole solution.
    inferred: FxHashSet<RequirementIdx>,
}

impl StepResolver<'_> {
    fn resolve_arc_entries(
        &mut self,
        vehicle: &str,
        entries: &[format::ArcEntry],
        notes: &mut Vec<AmbiguityNote>,
    ) -> StructuralResult<Vec<ArcStep>> {
        entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let from = self.network.node(&entry.arc[0])?;
                let to = self.network.node(&entry.arc[1])?;
                let arc = self.pick(vehicle, position, from, to, entry.salted, notes)?;

                if entry.salted {
                    if let Some(requirement) = self.network.arc(arc).requirement {
                        self.inferred.insert(requirement);
                    }
                }

                Ok(ArcStep { arc, serviced: entry.salted })
            })
            .collect()
    }

    fn resolve_node_sequence(
        &mut self,
        vehicle: &str,
        labels: &[String],
        notes: &mut Vec<AmbiguityNote>,
    ) -> StructuralResult<Vec<ArcStep>> {
        labels
            .windows(2)
            .enumerate()
            .map(|(position, pair)| {
                let from = self.network.node(&pair[0])?;
                let to = self.network.node(&pair[1])?;
                let arc = self.pick(vehicle, position, from, to, true, notes)?;

                // the encoding has no service flags: a traversal of a still uncovered
                // requirement is taken as its service
                let serviced = match self.network.arc(arc).requirement {
                    Some(requirement) => self.inferred.insert(requirement),
                    None => false,
                };

                Ok(ArcStep { arc, serviced })
            })
            .collect()
    }

    /// Picks one arc among the candidates between two nodes. A single candidate wins
    /// as is; otherwise prefer an arc whose requirement is still uncovered, else take
    /// the lowest indexed one, and flag the position instead of guessing silently.
    fn pick(
        &self,
        vehicle: &str,
        position: usize,
        from: NodeIdx,
        to: NodeIdx,
        prefer_required: bool,
        notes: &mut Vec<AmbiguityNote>,
    ) -> StructuralResult<ArcIdx> {
        let candidates = self.network.arcs_between(from, to)?;

        if candidates.len() == 1 {
            return Ok(candidates[0]);
        }

        let chosen = if prefer_required {
            candidates
                .iter()
                .copied()
                .find(|arc| {
                    self.network
                        .arc(*arc)
                        .requirement
                        .is_some_and(|requirement| !self.inferred.contains(&requirement))
                })
                .unwrap_or(candidates[0])
        } else {
            candidates[0]
        };

        notes.push(AmbiguityNote {
            vehicle: vehicle.to_string(),
            position,
            chosen: describe_arc(self.network, chosen),
        });

        Ok(chosen)
    }
}

fn describe_arc(network: &Network, arc: ArcIdx) -> String {
    match network.arc(arc).requirement {
        Some(requirement) => network.requirement(requirement).describe(network),
        None => {
            let arc = network.arc(arc);
            format!("arc ({}, {})", network.label(arc.from), network.label(arc.to))
        }
    }
}

/// Splits resolved steps into trips, one per depot arrival. Steps after the last
/// depot arrival form the trailing home leg: connectivity checked during replay, but
/// excluded from accounting and required to be unserviced.
fn split_into_trips(
    network: &Network,
    fleet: &Fleet,
    vehicle: VehicleIdx,
    steps: Vec<ArcStep>,
) -> StructuralResult<Route> {
    let home = fleet.vehicle_at(vehicle).home;
    let id = fleet.vehicle_at(vehicle).id.as_str();

    if steps.is_empty() {
        return Ok(Route { vehicle, trips: vec![], trailing: vec![] });
    }

    if network.arc(steps[0].arc).from != home {
        return Err(StructuralError::MalformedSolution(format!(
            "route of vehicle '{id}' does not start at its home node '{}'",
            network.label(home)
        )));
    }

    let mut trips = Vec::new();
    let mut current = Vec::new();

    for step in steps {
        current.push(step);
        if fleet.depot_at(network.arc(step.arc).to).is_some() {
            trips.push(Trip { steps: std::mem::take(&mut current) });
        }
    }

    if trips.is_empty() {
        return Err(StructuralError::MalformedSolution(format!(
            "route of vehicle '{id}' does not end at a refilling depot"
        )));
    }

    if current.iter().any(|step| step.serviced) {
        return Err(StructuralError::MalformedSolution(format!(
            "route of vehicle '{id}' services an element after its last depot visit"
        )));
    }

    Ok(Route { vehicle, trips, trailing: current })
}
