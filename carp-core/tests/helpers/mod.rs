
#[macro_use]
pub mod macros;

pub use self::models::*;
