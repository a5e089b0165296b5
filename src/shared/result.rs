/// Type alias for Result with anyhow::Error as the error type.
/// Used by the configuration layer.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
