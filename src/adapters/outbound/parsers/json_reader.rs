use crate::adapters::outbound::tree::BomTree;
use crate::model::Bom;
use crate::ports::outbound::BomReader;
use crate::schema::SchemaVersion;
use crate::shared::BomError;
use serde_json::Value;

/// JsonBomReader adapter for CycloneDX JSON documents
///
/// The schema version comes from `specVersion`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonBomReader;

impl JsonBomReader {
    pub fn new() -> Self {
        Self
    }
}

impl BomReader for JsonBomReader {
    fn read(&self, document: &str) -> Result<Bom, BomError> {
        let value: Value = serde_json::from_str(document)?;

        if value.get("bomFormat").and_then(Value::as_str) != Some("CycloneDX") {
            return Err(BomError::InvalidDocument(
                "'bomFormat' must be \"CycloneDX\"".to_string(),
            ));
        }
        let spec_version = value
            .get("specVersion")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                BomError::UnsupportedSchemaVersion("<missing specVersion>".to_string())
            })?;
        let version: SchemaVersion = spec_version.parse()?;
        tracing::debug!(%version, "reading JSON BOM");

        let tree: BomTree = serde_json::from_value(value)?;
        tree.into_bom(version)
    }
}

impl Bom {
    /// Reads a CycloneDX JSON document of any supported version
    pub fn from_json(document: &str) -> Result<Bom, BomError> {
        JsonBomReader.read(document)
    }
}
