//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod logging;
pub use self::logging::*;

mod parallel;
pub use self::parallel::*;
