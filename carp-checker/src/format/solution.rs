#[cfg(test)]
#[path = "../../tests/unit/format/solution_test.rs"]
mod solution_test;

use serde::{Deserialize, Serialize};

/// One step of an arc-sequence route: a traversed arc with its service flag.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ArcEntry {
    /// Tail and head node labels of the traversed arc.
    pub arc: [String; 2],
    /// Whether the traversal services the arc.
    pub salted: bool,
}

/// A route encoded as explicit arc traversals.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ArcSequenceRoute {
    /// A vehicle id.
    pub vehicle: String,
    /// Ordered arc traversals.
    pub route: Vec<ArcEntry>,
}

/// A route encoded as the ordered list of visited nodes.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NodeSequenceRoute {
    /// A vehicle id.
    pub id: String,
    /// Ordered visited node labels.
    pub route: Vec<String>,
}

/// A candidate solution in either accepted encoding. The encoding is selected once
/// when the document is deserialized, not per entry.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Solution {
    /// Routes as explicit arc traversals with service flags.
    ArcSequence(Vec<ArcSequenceRoute>),
    /// Routes as visited node lists; service status is inferred.
    NodeSequence(Vec<NodeSequenceRoute>),
}
