pub mod definition;
pub mod merge;

pub use definition::*;
pub use merge::*;
