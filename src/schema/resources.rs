//! Bundled schema documents, keyed by version.

use super::SchemaVersion;

const BOM_1_2_JSON: &str = include_str!("../../schemas/bom-1.2.schema.json");
const BOM_1_3_JSON: &str = include_str!("../../schemas/bom-1.3.schema.json");
const BOM_1_4_JSON: &str = include_str!("../../schemas/bom-1.4.schema.json");

const BOM_1_0_XSD: &str = include_str!("../../schemas/bom-1.0.xsd");
const BOM_1_1_XSD: &str = include_str!("../../schemas/bom-1.1.xsd");
const BOM_1_2_XSD: &str = include_str!("../../schemas/bom-1.2.xsd");
const BOM_1_3_XSD: &str = include_str!("../../schemas/bom-1.3.xsd");
const BOM_1_4_XSD: &str = include_str!("../../schemas/bom-1.4.xsd");

/// JSON Schema for a version; JSON documents only exist from 1.2 on
pub fn json_schema(version: SchemaVersion) -> Option<&'static str> {
    match version {
        SchemaVersion::V1_0 | SchemaVersion::V1_1 => None,
        SchemaVersion::V1_2 => Some(BOM_1_2_JSON),
        SchemaVersion::V1_3 => Some(BOM_1_3_JSON),
        SchemaVersion::V1_4 => Some(BOM_1_4_JSON),
    }
}

/// XML Schema for a version
pub fn xml_schema(version: SchemaVersion) -> Option<&'static str> {
    Some(match version {
        SchemaVersion::V1_0 => BOM_1_0_XSD,
        SchemaVersion::V1_1 => BOM_1_1_XSD,
        SchemaVersion::V1_2 => BOM_1_2_XSD,
        SchemaVersion::V1_3 => BOM_1_3_XSD,
        SchemaVersion::V1_4 => BOM_1_4_XSD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_availability() {
        assert!(json_schema(SchemaVersion::V1_0).is_none());
        assert!(json_schema(SchemaVersion::V1_1).is_none());
        for version in &SchemaVersion::ALL[2..] {
            let schema = json_schema(*version).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(schema).unwrap();
            assert_eq!(
                parsed["properties"]["specVersion"]["enum"][0],
                version.to_version()
            );
        }
    }

    #[test]
    fn test_xml_schema_target_namespace() {
        for version in SchemaVersion::ALL {
            let schema = xml_schema(version).unwrap();
            let expected = format!("targetNamespace=\"{}\"", version.xml_namespace());
            assert!(schema.contains(&expected), "{}", version);
        }
    }
}
