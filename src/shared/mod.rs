/// Shared kernel - errors, result alias and file guards used across layers
pub mod error;
pub mod result;
pub mod security;

pub use error::{BomError, ValidationError, ValidatorError};
pub use result::Result;
