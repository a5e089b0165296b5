/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the library has no inbound use case
/// surface of its own.
pub mod outbound;
