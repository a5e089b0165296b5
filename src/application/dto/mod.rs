/// Data Transfer Objects for application layer
///
/// DTOs are shared between the application layer and adapters.
mod output_format;

pub use output_format::OutputFormat;
