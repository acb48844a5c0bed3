//! Cart domain model and wire formatting.

pub mod errors;
pub mod format;
pub mod models;
pub mod wire;

pub use errors::FormatError;
pub use format::format_cart;
pub use models::*;
