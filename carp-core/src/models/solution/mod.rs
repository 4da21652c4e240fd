//! Solution domain models: the canonical per-vehicle route structure replayed by the
//! evaluation engine.

mod route;
pub use self::route::*;
