// Library entry point
pub mod constants;
pub mod error;
pub mod level;
pub mod resolver;

pub use error::{Error, Result};
pub use level::Level;
pub use resolver::{as_level, as_level_or};
