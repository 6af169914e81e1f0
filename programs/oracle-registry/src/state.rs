pub mod pin;
pub mod registry;
pub mod reporter;

pub use pin::*;
pub use registry::*;
pub use reporter::*;
