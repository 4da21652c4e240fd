use crate::models::problem::*;

pub const DEFAULT_VEHICLE_CAPACITY: f64 = 5.;
pub const DEFAULT_DEPOT_REFILL: f64 = 5.;

/// Creates a network with two nodes, a required arc (1,2) and a plain return arc (2,1).
pub fn create_two_node_network() -> Network {
    NetworkBuilder::default()
        .add_node("1")
        .add_node("2")
        .add_required_arc("1", "2", 5., 10., 10.)
        .expect("cannot add required arc")
        .add_arc("2", "1", 10., 10.)
        .expect("cannot add return arc")
        .build()
}

/// Creates a triangle network with one required edge (2,3) and deadhead arcs between
/// all other node pairs in both directions.
pub fn create_triangle_network() -> Network {
    let mut builder = NetworkBuilder::default().add_node("1").add_node("2").add_node("3");

    for (from, to) in [("1", "2"), ("2", "1"), ("1", "3"), ("3", "1")] {
        builder = builder.add_arc(from, to, 1., 1.).expect("cannot add arc");
    }

    builder.add_required_edge("2", "3", 2., 4., 3.).expect("cannot add required edge").build()
}

/// Creates a fleet with a single vehicle dwelling at node "1" and a depot at the
/// same node.
pub fn create_default_fleet(network: &Network) -> Fleet {
    FleetBuilder::default()
        .add_vehicle("v1", DEFAULT_VEHICLE_CAPACITY, "1")
        .add_depot("1", DEFAULT_DEPOT_REFILL)
        .build(network)
        .expect("cannot build fleet")
}
