/// Shared kernel - error types and result aliases used by every layer
pub mod error;
pub mod result;

pub use result::{GraphResult, Result};
