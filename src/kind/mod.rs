pub mod connection;
pub mod metadata;

pub use connection::*;
pub use metadata::*;
