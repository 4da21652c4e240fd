//! Checker crate decides whether a candidate solution of the salt spreading problem
//! is feasible against capacity, coverage, duration and turning constraints, and
//! computes its objective value: the total travelled distance.
//!
//! It accepts instances and solutions as already deserialized wire models; reading
//! and writing files is left to the calling tool.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/property/mod.rs"]
mod property;

pub mod checker;
pub mod format;
