#[cfg(test)]
#[path = "../../tests/unit/format/problem_test.rs"]
mod problem_test;

use carp_core::models::StructuralResult;
use carp_core::models::common::{Demand, Distance, Duration};
use carp_core::models::problem::{Fleet, FleetBuilder, Network, NetworkBuilder};
use serde::{Deserialize, Serialize};

/// A network node.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Node {
    /// A unique node label.
    pub label: String,
}

/// A vehicle definition.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Vehicle {
    /// A unique vehicle id.
    pub id: String,
    /// A maximum load the vehicle can carry.
    pub capacity: Demand,
    /// A label of the node where the vehicle dwells.
    pub home: String,
}

/// A refilling depot definition.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Depot {
    /// A label of the node the depot is placed at.
    pub label: String,
    /// A maximum amount of material added per visit.
    pub refill: Demand,
}

/// A directed arc without a service requirement.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Arc {
    /// Tail and head node labels.
    pub arc: [String; 2],
    /// Arc length.
    pub len: Distance,
    /// Arc travel time.
    pub time: Duration,
}

/// A directed arc which must be serviced.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RequiredArc {
    /// Tail and head node labels.
    pub arc: [String; 2],
    /// Service demand.
    pub dem: Demand,
    /// Arc length.
    pub len: Distance,
    /// Arc travel time.
    pub time: Duration,
}

/// An undirected edge which must be serviced in either direction.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RequiredEdge {
    /// Endpoint node labels.
    pub edge: [String; 2],
    /// Service demand.
    pub dem: Demand,
    /// Edge length.
    pub len: Distance,
    /// Edge travel time.
    pub time: Duration,
}

/// A salt spreading problem instance.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Instance {
    /// An instance name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A global duration budget per route, unbounded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time: Option<Duration>,
    /// Network nodes.
    pub nodes: Vec<Node>,
    /// Fleet vehicles.
    pub vehicles: Vec<Vehicle>,
    /// Refilling depots.
    pub depots: Vec<Depot>,
    /// Deadheading arcs. Unrequired undirected edges are listed here as arc pairs.
    #[serde(rename = "A", default)]
    pub arcs: Vec<Arc>,
    /// Required directed arcs.
    #[serde(rename = "A_R", default)]
    pub required_arcs: Vec<RequiredArc>,
    /// Required undirected edges.
    #[serde(rename = "E_R", default)]
    pub required_edges: Vec<RequiredEdge>,
    /// Nodes where U-turns are permitted.
    #[serde(rename = "U", default)]
    pub u_turn_nodes: Vec<Node>,
}

impl Instance {
    /// Builds the core network and fleet models from instance data. Each required
    /// edge is expanded into two mirror arcs sharing one requirement.
    pub fn to_models(&self) -> StructuralResult<(Network, Fleet)> {
        let mut builder = NetworkBuilder::default();

        for node in &self.nodes {
            builder = builder.add_node(&node.label);
        }

        for arc in &self.arcs {
            builder = builder.add_arc(&arc.arc[0], &arc.arc[1], arc.len, arc.time)?;
        }

        for arc in &self.required_arcs {
            builder = builder.add_required_arc(&arc.arc[0], &arc.arc[1], arc.dem, arc.len, arc.time)?;
        }

        for edge in &self.required_edges {
            builder = builder.add_required_edge(&edge.edge[0], &edge.edge[1], edge.dem, edge.len, edge.time)?;
        }

        for node in &self.u_turn_nodes {
            builder = builder.allow_u_turn(&node.label)?;
        }

        let network = builder.build();

        let fleet = self
            .vehicles
            .iter()
            .fold(FleetBuilder::default(), |builder, vehicle| {
                builder.add_vehicle(&vehicle.id, vehicle.capacity, &vehicle.home)
            });
        let fleet = self
            .depots
            .iter()
            .fold(fleet, |builder, depot| builder.add_depot(&depot.label, depot.refill))
            .build(&network)?;

        Ok((network, fleet))
    }
}
