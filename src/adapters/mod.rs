/// Adapters layer - Implementations of the ports
///
/// Output adapters render a BOM, parsers read one back, and validators
/// check rendered documents against the bundled schemas.
pub mod outbound;
