//! Core crate contains the domain models of the ***capacitated arc routing***
//! problem with refilling depots and turn restrictions: the transport network,
//! the fleet, and candidate route structures together with the shared
//! infrastructure used to evaluate them.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod utils;

pub mod prelude;
