pub mod fetch;
pub mod log;
pub mod store;

pub use fetch::*;
pub use log::*;
pub use store::*;
