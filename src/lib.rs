//! cyclonedx-lib - CycloneDX Bill of Materials model and codecs
//!
//! This library models a Software Bill of Materials and reads and writes it
//! as CycloneDX JSON or XML for schema versions 1.0 through 1.4. One
//! in-memory graph is projected onto each version: whatever a version cannot
//! express is dropped on output, and documents of any supported version are
//! read back into the same graph.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Model** (`model`): The BOM object graph, independent of wire formats
//! - **Schema** (`schema`): Schema versions, their capabilities and bundled schemas
//! - **Application Layer** (`application`): Factories and DTOs
//! - **Ports** (`ports`): Interface definitions for adapters
//! - **Adapters** (`adapters`): Output adapters, readers and validators
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use cyclonedx_lib::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let bom = Bom::new().with_component(
//!     Component::new("setuptools")
//!         .with_version("50.3.2")
//!         .with_purl("pkg:pypi/setuptools@50.3.2?extension=tar.gz"),
//! );
//!
//! let mut output = OutputFactory::create(&bom, OutputFormat::Json, SchemaVersion::V1_4);
//! let document = output.output_as_string()?;
//!
//! let read_back = Bom::from_json(&document)?;
//! assert_eq!(read_back.components[0].name, "setuptools");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod model;
pub mod ports;
pub mod schema;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::formatters::{JsonOutput, XmlOutput};
    pub use crate::adapters::outbound::parsers::{JsonBomReader, XmlBomReader};
    pub use crate::adapters::outbound::validators::{JsonValidator, XmlValidator};
    pub use crate::application::dto::OutputFormat;
    pub use crate::application::factories::{OutputFactory, ValidatorFactory};
    pub use crate::model::{
        Bom, BomRef, Component, ComponentType, Dependency, ExternalReference,
        ExternalReferenceType, HashAlgorithm, HashType, License, LicenseChoice, Metadata,
        Property, Service, Tool, Vulnerability,
    };
    pub use crate::ports::outbound::{
        BomOutput, BomReader, CompiledXmlSchema, SchemaValidator, XmlSchemaEngine,
    };
    pub use crate::schema::{Capability, SchemaVersion};
    pub use crate::shared::{BomError, ValidationError, ValidatorError};
}
