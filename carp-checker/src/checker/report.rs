use carp_core::models::common::{Demand, Distance, Duration};
use serde::Serialize;
use std::fmt;

/// A single recoverable constraint violation. Violations are recorded, not thrown, so
/// that one run yields the complete diagnostic list.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// An id of the vehicle whose route violates the constraint, absent for solution
    /// wide violations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    /// A zero based step position within the route, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// A violation kind with details.
    #[serde(flatten)]
    pub kind: ViolationKind,
}

/// Specifies a type of violation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(tag = "type")]
pub enum ViolationKind {
    /// A step which departs from a node different from the vehicle's current one.
    /// Fatal to the owning route: its replay stops, other routes are unaffected.
    Disconnected {
        /// A label of the expected departure node.
        expected: String,
        /// A label of the encoded departure node.
        found: String,
    },
    /// A reversal at a node where U-turns are not permitted.
    IllegalUTurn {
        /// A label of the turn node.
        node: String,
    },
    /// A serviced step whose demand exceeds the residual load.
    InsufficientLoad {
        /// A demanded amount.
        demand: Demand,
        /// A residual load at the step.
        residual: Demand,
    },
    /// A service of an element which is already covered by an earlier traversal.
    DoubleCoverage {
        /// A description of the required element.
        element: String,
    },
    /// A required element which no route services.
    MissingCoverage {
        /// A description of the required element.
        element: String,
    },
    /// A counted route duration exceeding the global budget.
    TimeBudgetExceeded {
        /// A counted duration when the budget was exceeded.
        duration: Duration,
        /// A maximum allowed duration.
        limit: Duration,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vehicle = self.vehicle.as_deref().unwrap_or("?");
        let position = self.position.unwrap_or(0);
        match &self.kind {
            ViolationKind::Disconnected { expected, found } => write!(
                f,
                "route of vehicle '{vehicle}' is disconnected at position {position}: \
                 expected departure from '{expected}', got '{found}'"
            ),
            ViolationKind::IllegalUTurn { node } => {
                write!(f, "U-turn at node '{node}' is not allowed for vehicle '{vehicle}' at position {position}")
            }
            ViolationKind::InsufficientLoad { demand, residual } => write!(
                f,
                "vehicle '{vehicle}' has not enough load at position {position}: required {demand}, carried {residual}"
            ),
            ViolationKind::DoubleCoverage { element } => {
                write!(f, "required {element} is serviced more than once, last by vehicle '{vehicle}' at position {position}")
            }
            ViolationKind::MissingCoverage { element } => {
                write!(f, "required {element} is not serviced by any route")
            }
            ViolationKind::TimeBudgetExceeded { duration, limit } => {
                write!(f, "route of vehicle '{vehicle}' exceeds the maximum duration: {duration} > {limit}")
            }
        }
    }
}

/// An explicit flag for a route position where the encoding admitted more than one
/// legal arc and the checker applied its deterministic tie break: prefer an arc whose
/// requirement is still uncovered, else the lowest indexed arc. Notes never affect
/// feasibility.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbiguityNote {
    /// A vehicle id.
    pub vehicle: String,
    /// A zero based step position within the route.
    pub position: usize,
    /// A description of the chosen arc.
    pub chosen: String,
}

/// Replay statistics of one route.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    /// A vehicle id.
    pub vehicle: String,
    /// Counted travelled distance, the trailing home leg excluded.
    pub distance: Distance,
    /// Counted duration, the trailing home leg excluded.
    pub duration: Duration,
}

/// A verdict of one validation run. Costs are always present so that an infeasible
/// solution still gets full diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckerReport {
    /// Total counted distance over all routes: the objective value. Meaningful as an
    /// objective only when the solution is feasible.
    pub total_distance: Distance,
    /// Per route replay statistics in solution order.
    pub routes: Vec<RouteSummary>,
    /// All violations in deterministic order: per route violations in solution order
    /// and position, then cross route double coverage, then missing coverage.
    pub violations: Vec<Violation>,
    /// Ambiguity flags raised while normalising the solution encoding.
    pub notes: Vec<AmbiguityNote>,
}

impl CheckerReport {
    /// Checks whether the solution is feasible: no violation was recorded.
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }

    /// Serializes the report into a json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap()
    }
}
