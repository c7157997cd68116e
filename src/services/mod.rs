pub mod fetch;
pub mod log;

pub use fetch::*;
pub use log::*;
