use super::*;
use crate::helpers::*;

#[test]
fn can_resolve_vehicle_ids() {
    let network = create_two_node_network();
    let fleet = create_default_fleet(&network);

    assert_eq!(fleet.vehicle("v1"), Ok(0));
    assert_eq!(fleet.vehicle_at(0).capacity, DEFAULT_VEHICLE_CAPACITY);
    assert_eq!(fleet.vehicle("v2"), Err(StructuralError::UnknownVehicle("v2".to_string())));
}

#[test]
fn can_lookup_depots_by_node() {
    let network = create_two_node_network();
    let fleet = create_default_fleet(&network);

    let depot = fleet.depot_at(network.node("1").unwrap());
    assert_eq!(depot.map(|depot| depot.refill), Some(DEFAULT_DEPOT_REFILL));
    assert!(fleet.depot_at(network.node("2").unwrap()).is_none());
}

parameterized_test! {cannot_build_fleet_with_unknown_references, (home, depot, expected), {
    cannot_build_fleet_with_unknown_references_impl(home, depot, expected);
}}

cannot_build_fleet_with_unknown_references! {
    case01_unknown_home: ("9", "1", StructuralError::UnknownNode("9".to_string())),
    case02_unknown_depot: ("1", "9", StructuralError::UnknownDepot("9".to_string())),
}

fn cannot_build_fleet_with_unknown_references_impl(home: &str, depot: &str, expected: StructuralError) {
    let network = create_two_node_network();

    let result = FleetBuilder::default().add_vehicle("v1", 5., home).add_depot(depot, 5.).build(&network);

    assert_eq!(result.err(), Some(expected));
}

#[test]
fn can_collect_fleet_summary() {
    let network = create_two_node_network();
    let fleet = FleetBuilder::default()
        .add_vehicle("v1", 5., "1")
        .add_vehicle("v2", 7., "2")
        .add_depot("1", 5.)
        .build(&network)
        .unwrap();

    assert_eq!(fleet.summary(), FleetSummary { vehicles: 2, depots: 1, total_capacity: 12. });
}
