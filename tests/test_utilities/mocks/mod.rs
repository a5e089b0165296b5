/// Mock implementations for testing
mod mock_schema_engine;

pub use mock_schema_engine::MockSchemaEngine;
