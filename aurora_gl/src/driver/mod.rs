/// Driver module - the graphics API facade and its value types

pub mod driver;
pub mod types;
pub mod debug;

pub use driver::*;
pub use types::*;
pub use debug::*;

// In-memory driver recording every call (no GPU required)
#[cfg(feature = "mock")]
pub mod mock_driver;

#[cfg(feature = "mock")]
pub use mock_driver::{MockDriver, MockFaults};
