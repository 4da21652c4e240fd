//! This module provides functionality to automatically check that a given solution
//! is feasible, which means that there is no constraint violation, and to compute
//! its objective value: the total counted travelled distance.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::format;
use carp_core::models::StructuralResult;
use carp_core::models::common::{Distance, Duration};
use carp_core::models::problem::{Fleet, Network};
use carp_core::models::solution::Solution;
use carp_core::utils::{InfoLogger, ThreadPool, create_noop_logger, get_cpus, parallel_into_collect};

mod coverage;
pub use self::coverage::{CoverageClaim, CoverageTracker};

mod parser;
pub use self::parser::parse_solution;

mod report;
pub use self::report::*;

mod simulator;
pub use self::simulator::{RouteReplay, replay_route};

/// Controls execution aspects of a validation run.
pub struct CheckerConfig {
    /// Amount of workers replaying routes in parallel.
    pub parallelism: usize,
    /// A progress logger.
    pub logger: InfoLogger,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self { parallelism: get_cpus(), logger: create_noop_logger() }
    }
}

/// Stores problem and solution together and provides feasibility checking.
pub struct CheckerContext {
    /// A transport network.
    pub network: Network,
    /// A fleet with its refilling depots.
    pub fleet: Fleet,
    /// A canonical solution normalised from one of the accepted encodings.
    pub solution: Solution,
    /// A global duration budget per route, unbounded when absent.
    pub max_time: Option<Duration>,

    notes: Vec<AmbiguityNote>,
    config: CheckerConfig,
}

impl CheckerContext {
    /// Creates an instance of `CheckerContext`, normalising the given encoded
    /// solution. Fails on the first structural error: such input aborts the whole
    /// validation and no replay is attempted.
    pub fn new(
        network: Network,
        fleet: Fleet,
        max_time: Option<Duration>,
        solution: &format::Solution,
    ) -> StructuralResult<Self> {
        Self::new_with_config(network, fleet, max_time, solution, CheckerConfig::default())
    }

    /// Creates an instance of `CheckerContext` with a custom config.
    pub fn new_with_config(
        network: Network,
        fleet: Fleet,
        max_time: Option<Duration>,
        solution: &format::Solution,
        config: CheckerConfig,
    ) -> StructuralResult<Self> {
        let network_summary = network.summary();
        let fleet_summary = fleet.summary();
        (config.logger)(&format!(
            "nodes {}, arcs {}, of which {} required with total demand {}",
            network_summary.nodes, network_summary.arcs, network_summary.requirements, network_summary.total_demand
        ));
        (config.logger)(&format!(
            "vehicles {} with total capacity {}, depots {}",
            fleet_summary.vehicles, fleet_summary.total_capacity, fleet_summary.depots
        ));

        let (solution, notes) = parse_solution(&network, &fleet, solution)?;

        Ok(Self { network, fleet, solution, max_time, notes, config })
    }

    /// Performs the solution check: replays every route independently on a fixed
    /// size worker pool, then folds coverage claims sequentially and assembles one
    /// ordered diagnostic report.
    pub fn check(&self) -> CheckerReport {
        let pool = ThreadPool::new(self.config.parallelism.max(1));
        let replays = pool.execute(|| {
            parallel_into_collect(self.solution.routes.iter().collect::<Vec<_>>(), |route| {
                (self.config.logger)(&format!(
                    "checking route for vehicle '{}'",
                    self.fleet.vehicle_at(route.vehicle).id
                ));
                replay_route(&self.network, &self.fleet, route, self.max_time)
            })
        });

        let mut violations = Vec::new();
        let mut routes = Vec::new();
        let mut claims = Vec::new();

        for replay in replays {
            let vehicle = self.fleet.vehicle_at(replay.vehicle);
            routes.push(RouteSummary { vehicle: vehicle.id.clone(), distance: replay.distance, duration: replay.duration });
            violations.extend(replay.violations);
            claims.extend(replay.claims);
        }

        let mut tracker = CoverageTracker::new(&self.network);
        violations.extend(tracker.fold(claims, &self.network, &self.fleet));
        violations.extend(tracker.missing(&self.network));

        let total_distance: Distance = routes.iter().map(|route| route.distance).sum();
        (self.config.logger)(&format!("total counted distance: {total_distance}"));

        CheckerReport { total_distance, routes, violations, notes: self.notes.clone() }
    }
}
