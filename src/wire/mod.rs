pub mod encode;
pub mod request;

pub use encode::*;
pub use request::*;
