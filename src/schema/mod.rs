//! CycloneDX schema generations and what each of them can express.
//!
//! Every version-conditional decision in the adapters goes through
//! [`SchemaVersion::capabilities`]; nothing else compares version numbers.

mod capabilities;
pub mod resources;

pub use capabilities::{Capability, SchemaCapabilities};

use crate::shared::BomError;
use std::fmt;
use std::str::FromStr;

const XML_NAMESPACE_PREFIX: &str = "http://cyclonedx.org/schema/bom/";

/// Supported CycloneDX schema versions, ordered oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaVersion {
    V1_0,
    V1_1,
    V1_2,
    V1_3,
    V1_4,
}

impl SchemaVersion {
    /// The newest schema version this crate can write
    pub const LATEST: SchemaVersion = SchemaVersion::V1_4;

    /// All versions, oldest first
    pub const ALL: [SchemaVersion; 5] = [
        SchemaVersion::V1_0,
        SchemaVersion::V1_1,
        SchemaVersion::V1_2,
        SchemaVersion::V1_3,
        SchemaVersion::V1_4,
    ];

    /// Version string as written into `specVersion`, e.g. `"1.4"`
    pub fn to_version(self) -> &'static str {
        match self {
            SchemaVersion::V1_0 => "1.0",
            SchemaVersion::V1_1 => "1.1",
            SchemaVersion::V1_2 => "1.2",
            SchemaVersion::V1_3 => "1.3",
            SchemaVersion::V1_4 => "1.4",
        }
    }

    /// Default XML namespace of a document written for this version
    pub fn xml_namespace(self) -> String {
        format!("{}{}", XML_NAMESPACE_PREFIX, self.to_version())
    }

    /// Infers the schema version from a root-element namespace URI
    pub fn from_xml_namespace(namespace: &str) -> Result<Self, BomError> {
        namespace
            .strip_prefix(XML_NAMESPACE_PREFIX)
            .ok_or_else(|| BomError::UnsupportedSchemaVersion(namespace.to_string()))?
            .parse()
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_version())
    }
}

impl FromStr for SchemaVersion {
    type Err = BomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaVersion::ALL
            .into_iter()
            .find(|version| version.to_version() == s.trim())
            .ok_or_else(|| BomError::UnsupportedSchemaVersion(s.to_string()))
    }
}
