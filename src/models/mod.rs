pub mod farming;
pub mod request;
pub mod risk;
pub mod weather;

pub use farming::*;
pub use request::*;
pub use risk::*;
pub use weather::*;
