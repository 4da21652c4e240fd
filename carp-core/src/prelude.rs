//! This module reimports commonly used types.

pub use crate::models::StructuralError;
pub use crate::models::StructuralResult;

pub use crate::models::problem::Fleet;
pub use crate::models::problem::FleetBuilder;
pub use crate::models::problem::Network;
pub use crate::models::problem::NetworkBuilder;

pub use crate::models::solution::Route;
pub use crate::models::solution::Solution;

// Reimport utils
pub use crate::utils::compare_floats;
pub use crate::utils::InfoLogger;
