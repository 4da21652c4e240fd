use std::fmt;

/// An error caused by a reference to an entity which does not exist in the instance,
/// or by a route which cannot be partitioned into well formed trips. A structural
/// error aborts the whole validation: no cost is meaningful for such input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StructuralError {
    /// A node label which is not present in the network.
    UnknownNode(String),
    /// A pair of node labels with no connecting arc in the network.
    UnknownArc(String, String),
    /// A vehicle id which is not present in the fleet.
    UnknownVehicle(String),
    /// A depot definition which refers to a node missing from the network.
    UnknownDepot(String),
    /// A route which cannot be split into trips, with details.
    MalformedSolution(String),
}

/// A type alias for a result with `StructuralError`.
pub type StructuralResult<T> = Result<T, StructuralError>;

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(label) => write!(f, "cannot find node with label '{label}'"),
            Self::UnknownArc(from, to) => write!(f, "cannot find an arc between '{from}' and '{to}'"),
            Self::UnknownVehicle(id) => write!(f, "cannot find vehicle with id '{id}'"),
            Self::UnknownDepot(label) => write!(f, "cannot find depot at node '{label}'"),
            Self::MalformedSolution(details) => write!(f, "malformed solution: {details}"),
        }
    }
}

impl std::error::Error for StructuralError {}
