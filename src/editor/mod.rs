pub mod contract;
pub mod session;

pub use contract::*;
pub use session::*;
