/// Application layer - Factories and DTOs
///
/// This layer selects the adapter implementations for a requested format
/// and schema version.
pub mod dto;
pub mod factories;
