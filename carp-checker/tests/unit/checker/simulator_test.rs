use super::*;
use crate::format::Instance;
use crate::helpers::*;

fn replay_first_route(instance: &Instance, solution: &crate::format::Solution) -> RouteReplay {
    let (network, fleet) = instance.to_models().expect("cannot build models");
    let (solution, _) = parse_solution(&network, &fleet, solution).expect("cannot parse solution");

    replay_route(&network, &fleet, &solution.routes[0], instance.max_time)
}

#[test]
fn can_count_length_and_time_of_feasible_route() {
    let replay = replay_first_route(&create_two_node_instance(), &create_out_and_back_solution("v1"));

    assert_eq!(replay.distance, 20.);
    assert_eq!(replay.duration, 20.);
    assert!(replay.violations.is_empty());
    assert_eq!(replay.claims, vec![CoverageClaim { requirement: 0, vehicle: 0, position: 0 }]);
}

#[test]
fn can_detect_insufficient_load() {
    let replay = replay_first_route(&create_two_node_instance_with_demand(10.), &create_out_and_back_solution("v1"));

    assert_eq!(replay.violations.len(), 1);
    assert_eq!(replay.violations[0].position, Some(0));
    assert_eq!(replay.violations[0].kind, ViolationKind::InsufficientLoad { demand: 10., residual: 5. });
    assert!(replay.claims.is_empty());
}

#[test]
fn can_detect_illegal_u_turn() {
    let solution = create_arc_sequence_solution(vec![create_arc_route("v1", &[("1", "2", false), ("2", "1", false)])]);

    let replay = replay_first_route(&create_two_node_instance_without_u_turns(), &solution);

    assert_eq!(replay.violations.len(), 1);
    assert_eq!(replay.violations[0].position, Some(1));
    assert_eq!(replay.violations[0].kind, ViolationKind::IllegalUTurn { node: "2".to_string() });
}

#[test]
fn can_allow_u_turn_at_permitted_node() {
    let solution = create_arc_sequence_solution(vec![create_arc_route("v1", &[("1", "2", false), ("2", "1", false)])]);

    let replay = replay_first_route(&create_two_node_instance(), &solution);

    assert!(replay.violations.is_empty());
}

parameterized_test! {can_reload_at_depot_arrivals, (refill, expected_violations, expected_claims), {
    can_reload_at_depot_arrivals_impl(refill, expected_violations, expected_claims);
}}

can_reload_at_depot_arrivals! {
    case01_full_refill: (5., vec![], 2),
    case02_partial_refill: (2., vec![ViolationKind::InsufficientLoad { demand: 4., residual: 3. }], 1),
    case03_saturated_refill: (100., vec![], 2),
}

fn can_reload_at_depot_arrivals_impl(refill: f64, expected_violations: Vec<ViolationKind>, expected_claims: usize) {
    let solution = create_arc_sequence_solution(vec![create_arc_route(
        "v1",
        &[("1", "2", true), ("2", "1", false), ("1", "2", false), ("2", "1", true)],
    )]);

    let replay = replay_first_route(&create_refill_instance(refill), &solution);

    assert_eq!(replay.violations.iter().map(|violation| violation.kind.clone()).collect::<Vec<_>>(), expected_violations);
    assert_eq!(replay.claims.len(), expected_claims);
}

#[test]
fn can_detect_disconnected_route_and_stop_replay() {
    let solution = create_arc_sequence_solution(vec![create_arc_route(
        "v1",
        &[("1", "2", false), ("1", "2", true), ("2", "1", false)],
    )]);

    let replay = replay_first_route(&create_two_node_instance(), &solution);

    assert_eq!(replay.violations.len(), 1);
    assert_eq!(replay.violations[0].position, Some(1));
    assert_eq!(
        replay.violations[0].kind,
        ViolationKind::Disconnected { expected: "2".to_string(), found: "1".to_string() }
    );
    // replay stopped at the disconnection: only the first step is counted
    assert_eq!(replay.distance, 10.);
    assert!(replay.claims.is_empty());
}

#[test]
fn can_exclude_trailing_leg_from_accounting() {
    let mut instance = create_two_node_instance();
    instance.u_turn_nodes = create_nodes(&["1", "2"]);
    let solution = create_arc_sequence_solution(vec![create_arc_route(
        "v1",
        &[("1", "2", true), ("2", "1", false), ("1", "2", false)],
    )]);

    let replay = replay_first_route(&instance, &solution);

    assert!(replay.violations.is_empty());
    assert_eq!(replay.distance, 20.);
    assert_eq!(replay.duration, 20.);
}

#[test]
fn can_check_turns_on_trailing_leg() {
    // the reversal onto the trailing leg happens at node "1" where U-turns stay forbidden
    let solution = create_arc_sequence_solution(vec![create_arc_route(
        "v1",
        &[("1", "2", true), ("2", "1", false), ("1", "2", false)],
    )]);

    let replay = replay_first_route(&create_two_node_instance(), &solution);

    assert_eq!(replay.violations.len(), 1);
    assert_eq!(replay.violations[0].position, Some(2));
    assert_eq!(replay.violations[0].kind, ViolationKind::IllegalUTurn { node: "1".to_string() });
    assert_eq!(replay.distance, 20.);
}

#[test]
fn can_check_connectivity_of_trailing_leg() {
    let mut instance = create_two_node_instance();
    instance.u_turn_nodes = create_nodes(&["1", "2"]);
    let solution = create_arc_sequence_solution(vec![create_arc_route(
        "v1",
        &[("1", "2", true), ("2", "1", false), ("2", "1", false)],
    )]);

    let replay = replay_first_route(&instance, &solution);

    assert_eq!(replay.violations.len(), 1);
    assert_eq!(replay.violations[0].position, Some(2));
    assert_eq!(
        replay.violations[0].kind,
        ViolationKind::Disconnected { expected: "1".to_string(), found: "2".to_string() }
    );
    assert_eq!(replay.distance, 20.);
}

#[test]
fn can_detect_time_budget_violation() {
    let mut instance = create_two_node_instance();
    instance.max_time = Some(15.);

    let replay = replay_first_route(&instance, &create_out_and_back_solution("v1"));

    assert_eq!(replay.violations.len(), 1);
    assert_eq!(replay.violations[0].position, Some(1));
    assert_eq!(replay.violations[0].kind, ViolationKind::TimeBudgetExceeded { duration: 20., limit: 15. });
}

#[test]
fn can_ignore_service_flag_on_unrequired_arc() {
    let solution = create_arc_sequence_solution(vec![create_arc_route("v1", &[("1", "2", true), ("2", "1", true)])]);

    let replay = replay_first_route(&create_two_node_instance(), &solution);

    assert!(replay.violations.is_empty());
    assert_eq!(replay.claims.len(), 1);
}
