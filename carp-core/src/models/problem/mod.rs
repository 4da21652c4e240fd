//! Problem domain models: the transport network and the fleet.

mod network;
pub use self::network::*;

mod fleet;
pub use self::fleet::*;
