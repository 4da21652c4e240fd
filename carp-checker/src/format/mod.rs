//! This module defines the wire models of the salt spreading instance document and
//! the two accepted solution encodings.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
