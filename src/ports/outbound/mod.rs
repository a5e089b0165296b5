/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the application layer uses to render,
/// read and validate BOM documents.
pub mod output;
pub mod reader;
pub mod schema_engine;
pub mod validator;

pub use output::BomOutput;
pub use reader::BomReader;
pub use schema_engine::{CompiledXmlSchema, XmlSchemaEngine};
pub use validator::SchemaValidator;
