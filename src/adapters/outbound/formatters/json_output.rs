use crate::adapters::outbound::tree::BomTree;
use crate::application::dto::OutputFormat;
use crate::model::Bom;
use crate::ports::outbound::BomOutput;
use crate::schema::SchemaVersion;
use crate::shared::BomError;
use serde::Serialize;
use std::borrow::{Borrow, BorrowMut};

/// Top-level JSON object: envelope keys first, then the document body
#[derive(Serialize)]
struct JsonDocument<'t> {
    #[serde(rename = "bomFormat")]
    bom_format: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'static str,
    #[serde(flatten)]
    tree: &'t BomTree,
}

/// JsonOutput adapter rendering CycloneDX JSON for one schema version
///
/// This adapter implements the BomOutput port. The rendered document is
/// cached; later changes to the BOM are only picked up by
/// `generate(true)`.
pub struct JsonOutput<B: Borrow<Bom>> {
    bom: B,
    schema_version: SchemaVersion,
    cached: Option<String>,
}

impl<B: Borrow<Bom>> JsonOutput<B> {
    /// Creates the adapter over a borrowed (`&Bom`) or owned (`Bom`) BOM
    pub fn new(bom: B, schema_version: SchemaVersion) -> Self {
        Self {
            bom,
            schema_version,
            cached: None,
        }
    }

    pub fn bom(&self) -> &Bom {
        <B as Borrow<Bom>>::borrow(&self.bom)
    }

    fn render(&self) -> Result<String, BomError> {
        self.bom().validate()?;
        let tree = BomTree::for_version(self.bom(), self.schema_version);
        let document = JsonDocument {
            bom_format: "CycloneDX",
            spec_version: self.schema_version.to_version(),
            tree: &tree,
        };
        serde_json::to_string_pretty(&document).map_err(|e| BomError::OutputGeneration {
            format: OutputFormat::Json.to_string(),
            details: e.to_string(),
        })
    }
}

impl<B: BorrowMut<Bom>> JsonOutput<B> {
    /// Mutable access to an owned BOM; the cached document is kept until
    /// `generate(true)` is called
    pub fn bom_mut(&mut self) -> &mut Bom {
        <B as BorrowMut<Bom>>::borrow_mut(&mut self.bom)
    }
}

impl<B: Borrow<Bom>> BomOutput for JsonOutput<B> {
    fn output_format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    fn generate(&mut self, force_regeneration: bool) -> Result<(), BomError> {
        if self.cached.is_some() && !force_regeneration {
            tracing::debug!(version = %self.schema_version, "reusing cached JSON output");
            return Ok(());
        }
        tracing::debug!(version = %self.schema_version, "generating JSON output");
        self.cached = Some(self.render()?);
        Ok(())
    }

    fn output_as_string(&mut self) -> Result<String, BomError> {
        self.generate(false)?;
        Ok(self.cached.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, Dependency, Vulnerability};
    use serde_json::Value;

    fn render(bom: &Bom, version: SchemaVersion) -> Value {
        let mut output = JsonOutput::new(bom, version);
        serde_json::from_str(&output.output_as_string().unwrap()).unwrap()
    }

    #[test]
    fn test_envelope_fields() {
        let bom = Bom::new();
        let json = render(&bom, SchemaVersion::V1_4);

        assert_eq!(json["bomFormat"], "CycloneDX");
        assert_eq!(json["specVersion"], "1.4");
        assert_eq!(json["serialNumber"], bom.urn_uuid());
        assert_eq!(json["version"], 1);
    }

    #[test]
    fn test_envelope_keys_come_first() {
        let bom = Bom::new();
        let mut output = JsonOutput::new(&bom, SchemaVersion::V1_3);
        let text = output.output_as_string().unwrap();

        let keys = [
            "\"bomFormat\"",
            "\"specVersion\"",
            "\"serialNumber\"",
            "\"version\"",
            "\"metadata\"",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| text.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_components_and_dependencies() {
        let requests = Component::new("requests")
            .with_version("2.31.0")
            .with_bom_ref("requests");
        let urllib3 = Component::new("urllib3")
            .with_version("2.0.0")
            .with_bom_ref("urllib3");
        let mut bom = Bom::new().with_component(requests).with_component(urllib3);
        bom.dependencies
            .push(Dependency::new("requests").with_depends_on("urllib3"));

        let json = render(&bom, SchemaVersion::V1_4);
        assert_eq!(json["components"][0]["name"], "requests");
        assert_eq!(json["components"][0]["bom-ref"], "requests");
        assert_eq!(json["components"][0]["type"], "library");
        assert_eq!(json["dependencies"][0]["ref"], "requests");
        assert_eq!(json["dependencies"][0]["dependsOn"][0], "urllib3");

        let json = render(&bom, SchemaVersion::V1_1);
        assert!(json.get("dependencies").is_none());
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn test_vulnerabilities_only_in_1_4() {
        let component = Component::new("jackson-databind").with_bom_ref("jackson");
        let mut bom = Bom::new().with_component(component);
        bom.vulnerabilities.push(
            Vulnerability::new("CVE-2018-7489").affecting(&bom.components[0].bom_ref),
        );

        let json = render(&bom, SchemaVersion::V1_4);
        assert_eq!(json["vulnerabilities"][0]["id"], "CVE-2018-7489");
        assert_eq!(json["vulnerabilities"][0]["affects"][0]["ref"], "jackson");

        let json = render(&bom, SchemaVersion::V1_3);
        assert!(json.get("vulnerabilities").is_none());
    }

    #[test]
    fn test_cache_and_forced_regeneration() {
        let mut output = JsonOutput::new(Bom::new(), SchemaVersion::V1_4);
        let first = output.output_as_string().unwrap();

        output
            .bom_mut()
            .components
            .push(Component::new("added-later").with_version("1.0"));
        output.generate(false).unwrap();
        assert_eq!(output.output_as_string().unwrap(), first);

        output.generate(true).unwrap();
        let second = output.output_as_string().unwrap();
        assert_ne!(second, first);
        assert!(second.contains("added-later"));
    }

    #[test]
    fn test_adapter_reports_format_and_version() {
        let bom = Bom::new();
        let output = JsonOutput::new(&bom, SchemaVersion::V1_2);
        assert_eq!(output.output_format(), OutputFormat::Json);
        assert_eq!(output.schema_version(), SchemaVersion::V1_2);
    }
}
