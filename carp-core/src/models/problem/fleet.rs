#[cfg(test)]
#[path = "../../../tests/unit/models/problem/fleet_test.rs"]
mod fleet_test;

use crate::models::common::Demand;
use crate::models::problem::{Network, NodeIdx};
use crate::models::{StructuralError, StructuralResult};
use rustc_hash::FxHashMap;

/// An index of a vehicle in the fleet.
pub type VehicleIdx = usize;

/// Represents a vehicle which carries and spreads material along its route.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// A unique vehicle id from the instance.
    pub id: String,
    /// A maximum amount of material the vehicle can carry.
    pub capacity: Demand,
    /// A node where the vehicle dwells before and after its route.
    pub home: NodeIdx,
}

/// A node where a vehicle replenishes its load, bounded by a refill limit per visit.
#[derive(Clone, Debug)]
pub struct Depot {
    /// A node the depot is placed at.
    pub node: NodeIdx,
    /// A maximum amount of material added per visit.
    pub refill: Demand,
}

/// Aggregated fleet statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FleetSummary {
    /// Amount of vehicles.
    pub vehicles: usize,
    /// Amount of refilling depots.
    pub depots: usize,
    /// Total capacity over all vehicles.
    pub total_capacity: Demand,
}

/// An immutable registry of vehicles and refilling depots.
pub struct Fleet {
    vehicles: Vec<Vehicle>,
    depots: FxHashMap<NodeIdx, Depot>,
    vehicle_index: FxHashMap<String, VehicleIdx>,
}

impl Fleet {
    /// Resolves a vehicle id to its index.
    pub fn vehicle(&self, id: &str) -> StructuralResult<VehicleIdx> {
        self.vehicle_index.get(id).copied().ok_or_else(|| StructuralError::UnknownVehicle(id.to_string()))
    }

    /// Returns a vehicle by its index.
    pub fn vehicle_at(&self, vehicle: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle]
    }

    /// Returns all vehicles in definition order.
    pub fn vehicles(&self) -> &[Vehicle] {
        self.vehicles.as_slice()
    }

    /// Returns the depot at given node or none when the node has no refilling point.
    pub fn depot_at(&self, node: NodeIdx) -> Option<&Depot> {
        self.depots.get(&node)
    }

    /// Returns aggregated statistics about the fleet.
    pub fn summary(&self) -> FleetSummary {
        FleetSummary {
            vehicles: self.vehicles.len(),
            depots: self.depots.len(),
            total_capacity: self.vehicles.iter().map(|vehicle| vehicle.capacity).sum(),
        }
    }
}

/// Provides a way to build [Fleet] using the builder pattern.
#[derive(Default)]
pub struct FleetBuilder {
    vehicles: Vec<(String, Demand, String)>,
    depots: Vec<(String, Demand)>,
}

impl FleetBuilder {
    /// Adds a vehicle with given id, capacity and home node label.
    pub fn add_vehicle(mut self, id: &str, capacity: Demand, home: &str) -> Self {
        self.vehicles.push((id.to_string(), capacity, home.to_string()));
        self
    }

    /// Adds a refilling depot at the node with given label.
    pub fn add_depot(mut self, label: &str, refill: Demand) -> Self {
        self.depots.push((label.to_string(), refill));
        self
    }

    /// Builds a [Fleet], resolving node labels against the network.
    pub fn build(self, network: &Network) -> StructuralResult<Fleet> {
        let vehicles = self
            .vehicles
            .into_iter()
            .map(|(id, capacity, home)| Ok(Vehicle { id, capacity, home: network.node(&home)? }))
            .collect::<StructuralResult<Vec<_>>>()?;

        let depots = self
            .depots
            .into_iter()
            .map(|(label, refill)| {
                let node = network.node(&label).map_err(|_| StructuralError::UnknownDepot(label))?;
                Ok((node, Depot { node, refill }))
            })
            .collect::<StructuralResult<FxHashMap<_, _>>>()?;

        let vehicle_index =
            vehicles.iter().enumerate().map(|(idx, vehicle)| (vehicle.id.clone(), idx)).collect::<FxHashMap<_, _>>();

        Ok(Fleet { vehicles, depots, vehicle_index })
    }
}
