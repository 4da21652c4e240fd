#[cfg(test)]
#[path = "../../../tests/unit/models/problem/network_test.rs"]
mod network_test;

use crate::models::common::{Demand, Distance, Duration};
use crate::models::{StructuralError, StructuralResult};
use rustc_hash::FxHashMap;
use tinyvec::TinyVec;

/// A node index in the network.
pub type NodeIdx = usize;

/// An arc index in the network.
pub type ArcIdx = usize;

/// An index of a required element.
pub type RequirementIdx = usize;

/// A network node. Nodes carry identity only: depot and home roles are defined by the
/// fleet, U-turn permission by the network itself.
#[derive(Clone, Debug)]
pub struct Node {
    /// A unique label from the instance.
    pub label: String,
    /// Whether a vehicle may reverse direction at this node.
    pub can_u_turn: bool,
}

/// A one-way traversable connection between two nodes. An undirected edge is stored as
/// two mirror arcs which share one requirement slot.
#[derive(Clone, Debug)]
pub struct Arc {
    /// A tail node.
    pub from: NodeIdx,
    /// A head node.
    pub to: NodeIdx,
    /// Travelled distance.
    pub length: Distance,
    /// Travel time.
    pub time: Duration,
    /// Service demand, zero for unrequired arcs.
    pub demand: Demand,
    /// A requirement satisfied by servicing this arc, if any.
    pub requirement: Option<RequirementIdx>,
}

/// Specifies an element which must be serviced by exactly one traversal across the
/// whole solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequiredElement {
    /// A single directed arc.
    DirectedArc(ArcIdx),
    /// An undirected edge as a pair of mirror arcs: servicing either direction
    /// satisfies the requirement, never both.
    UndirectedEdge(ArcIdx, ArcIdx),
}

/// A requirement created once from instance data and covered at most once during
/// validation.
#[derive(Clone, Debug)]
pub struct Requirement {
    /// An element to be serviced.
    pub element: RequiredElement,
    /// An amount of material the service consumes.
    pub demand: Demand,
}

impl Requirement {
    /// Returns a short human readable description of the required element.
    pub fn describe(&self, network: &Network) -> String {
        match self.element {
            RequiredElement::DirectedArc(arc) => {
                let arc = network.arc(arc);
                format!("arc ({}, {})", network.label(arc.from), network.label(arc.to))
            }
            RequiredElement::UndirectedEdge(forward, _) => {
                let arc = network.arc(forward);
                format!("edge ({}, {})", network.label(arc.from), network.label(arc.to))
            }
        }
    }
}

/// Aggregated network statistics in the shape operators usually log before a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkSummary {
    /// Amount of nodes.
    pub nodes: usize,
    /// Amount of directed arcs, edge mirrors counted separately.
    pub arcs: usize,
    /// Amount of required elements.
    pub requirements: usize,
    /// Total length over all directed arcs.
    pub total_length: Distance,
    /// Total length of required elements, an edge counted once.
    pub required_length: Distance,
    /// Total demand over all requirements.
    pub total_demand: Demand,
    /// Amount of nodes where U-turns are allowed.
    pub u_turn_nodes: usize,
}

/// An immutable transport network built once from instance data.
pub struct Network {
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
    requirements: Vec<Requirement>,
    node_index: FxHashMap<String, NodeIdx>,
    adjacency: FxHashMap<(NodeIdx, NodeIdx), TinyVec<[ArcIdx; 2]>>,
}

impl Network {
    /// Resolves a node label to its index.
    pub fn node(&self, label: &str) -> StructuralResult<NodeIdx> {
        self.node_index.get(label).copied().ok_or_else(|| StructuralError::UnknownNode(label.to_string()))
    }

    /// Returns the label of the node at given index.
    pub fn label(&self, node: NodeIdx) -> &str {
        self.nodes[node].label.as_str()
    }

    /// Returns candidate arcs connecting the given pair of nodes: parallel arcs and
    /// the matching direction of an undirected edge.
    pub fn arcs_between(&self, from: NodeIdx, to: NodeIdx) -> StructuralResult<&[ArcIdx]> {
        self.adjacency
            .get(&(from, to))
            .map(|arcs| arcs.as_slice())
            .ok_or_else(|| StructuralError::UnknownArc(self.label(from).to_string(), self.label(to).to_string()))
    }

    /// Returns an arc by its index.
    pub fn arc(&self, arc: ArcIdx) -> &Arc {
        &self.arcs[arc]
    }

    /// Checks whether U-turns are permitted at given node.
    pub fn can_u_turn(&self, node: NodeIdx) -> bool {
        self.nodes[node].can_u_turn
    }

    /// Returns a requirement by its index.
    pub fn requirement(&self, requirement: RequirementIdx) -> &Requirement {
        &self.requirements[requirement]
    }

    /// Returns all requirements in definition order.
    pub fn requirements(&self) -> &[Requirement] {
        self.requirements.as_slice()
    }

    /// Returns all nodes.
    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    /// Returns all arcs.
    pub fn arcs(&self) -> &[Arc] {
        self.arcs.as_slice()
    }

    /// Returns aggregated statistics about the network.
    pub fn summary(&self) -> NetworkSummary {
        let required_length = self
            .requirements
            .iter()
            .map(|requirement| match requirement.element {
                RequiredElement::DirectedArc(arc) | RequiredElement::UndirectedEdge(arc, _) => self.arcs[arc].length,
            })
            .sum();

        NetworkSummary {
            nodes: self.nodes.len(),
            arcs: self.arcs.len(),
            requirements: self.requirements.len(),
            total_length: self.arcs.iter().map(|arc| arc.length).sum(),
            required_length,
            total_demand: self.requirements.iter().map(|requirement| requirement.demand).sum(),
            u_turn_nodes: self.nodes.iter().filter(|node| node.can_u_turn).count(),
        }
    }
}

/// Provides a way to build [Network] using the builder pattern.
#[derive(Default)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
    requirements: Vec<Requirement>,
    node_index: FxHashMap<String, NodeIdx>,
    adjacency: FxHashMap<(NodeIdx, NodeIdx), TinyVec<[ArcIdx; 2]>>,
}

impl NetworkBuilder {
    /// Adds a node with given label. Adding the same label twice has no effect.
    pub fn add_node(mut self, label: &str) -> Self {
        if !self.node_index.contains_key(label) {
            let idx = self.nodes.len();
            self.nodes.push(Node { label: label.to_string(), can_u_turn: false });
            self.node_index.insert(label.to_string(), idx);
        }

        self
    }

    /// Marks the node with given label as a permitted U-turn location.
    pub fn allow_u_turn(mut self, label: &str) -> StructuralResult<Self> {
        let node = self.resolve(label)?;
        self.nodes[node].can_u_turn = true;

        Ok(self)
    }

    /// Adds a directed arc without a service requirement.
    pub fn add_arc(mut self, from: &str, to: &str, length: Distance, time: Duration) -> StructuralResult<Self> {
        let (from, to) = (self.resolve(from)?, self.resolve(to)?);
        self.push_arc(from, to, length, time, 0., None);

        Ok(self)
    }

    /// Adds a directed arc which must be serviced by exactly one traversal.
    pub fn add_required_arc(
        mut self,
        from: &str,
        to: &str,
        demand: Demand,
        length: Distance,
        time: Duration,
    ) -> StructuralResult<Self> {
        let (from, to) = (self.resolve(from)?, self.resolve(to)?);
        let requirement = self.requirements.len();
        let arc = self.push_arc(from, to, length, time, demand, Some(requirement));
        self.requirements.push(Requirement { element: RequiredElement::DirectedArc(arc), demand });

        Ok(self)
    }

    /// Adds an undirected edge which must be serviced by exactly one traversal in
    /// either direction. Internally the edge becomes two mirror arcs sharing one
    /// requirement slot.
    pub fn add_required_edge(
        mut self,
        left: &str,
        right: &str,
        demand: Demand,
        length: Distance,
        time: Duration,
    ) -> StructuralResult<Self> {
        let (left, right) = (self.resolve(left)?, self.resolve(right)?);
        let requirement = self.requirements.len();
        let forward = self.push_arc(left, right, length, time, demand, Some(requirement));
        let backward = self.push_arc(right, left, length, time, demand, Some(requirement));
        self.requirements.push(Requirement { element: RequiredElement::UndirectedEdge(forward, backward), demand });

        Ok(self)
    }

    /// Builds a [Network].
    pub fn build(self) -> Network {
        Network {
            nodes: self.nodes,
            arcs: self.arcs,
            requirements: self.requirements,
            node_index: self.node_index,
            adjacency: self.adjacency,
        }
    }

    fn resolve(&self, label: &str) -> StructuralResult<NodeIdx> {
        self.node_index.get(label).copied().ok_or_else(|| StructuralError::UnknownNode(label.to_string()))
    }

    fn push_arc(
        &mut self,
        from: NodeIdx,
        to: NodeIdx,
        length: Distance,
        time: Duration,
        demand: Demand,
        requirement: Option<RequirementIdx>,
    ) -> ArcIdx {
        let idx = self.arcs.len();
        self.arcs.push(Arc { from, to, length, time, demand, requirement });
        self.adjacency.entry((from, to)).or_default().push(idx);

        idx
    }
}
