use crate::adapters::outbound::formatters::{JsonOutput, XmlOutput};
use crate::application::dto::OutputFormat;
use crate::config::ConfigFile;
use crate::model::Bom;
use crate::ports::outbound::BomOutput;
use crate::schema::SchemaVersion;
use crate::shared::Result;

/// Factory for creating output adapters
///
/// This factory encapsulates the choice of output adapter for a format and
/// schema version, following the Factory Pattern.
pub struct OutputFactory;

impl OutputFactory {
    /// Creates an output adapter borrowing `bom`
    ///
    /// # Examples
    /// ```
    /// use cyclonedx_lib::application::dto::OutputFormat;
    /// use cyclonedx_lib::application::factories::OutputFactory;
    /// use cyclonedx_lib::model::Bom;
    /// use cyclonedx_lib::schema::SchemaVersion;
    ///
    /// let bom = Bom::new();
    /// let mut output = OutputFactory::create(&bom, OutputFormat::Xml, SchemaVersion::V1_3);
    /// assert!(output.output_as_string().unwrap().contains("schema/bom/1.3"));
    /// ```
    pub fn create<'a>(
        bom: &'a Bom,
        format: OutputFormat,
        schema_version: SchemaVersion,
    ) -> Box<dyn BomOutput + 'a> {
        match format {
            OutputFormat::Json => Box::new(JsonOutput::new(bom, schema_version)),
            OutputFormat::Xml => Box::new(XmlOutput::new(bom, schema_version)),
        }
    }

    /// Creates an output adapter for the format and version named in a config file
    ///
    /// Unset values fall back to JSON and the latest schema version.
    pub fn from_config<'a>(bom: &'a Bom, config: &ConfigFile) -> Result<Box<dyn BomOutput + 'a>> {
        let settings = config.output_settings()?;
        Ok(Self::create(bom, settings.format, settings.schema_version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_json_output() {
        let bom = Bom::new();
        let output = OutputFactory::create(&bom, OutputFormat::Json, SchemaVersion::V1_4);
        assert_eq!(output.output_format(), OutputFormat::Json);
        assert_eq!(output.schema_version(), SchemaVersion::V1_4);
    }

    #[test]
    fn test_create_xml_output() {
        let bom = Bom::new();
        let output = OutputFactory::create(&bom, OutputFormat::Xml, SchemaVersion::V1_0);
        assert_eq!(output.output_format(), OutputFormat::Xml);
        assert_eq!(output.schema_version(), SchemaVersion::V1_0);
    }

    #[test]
    fn test_from_config() {
        let bom = Bom::new();
        let config = ConfigFile {
            format: Some("xml".to_string()),
            schema_version: Some("1.2".to_string()),
            ..ConfigFile::default()
        };
        let output = OutputFactory::from_config(&bom, &config).unwrap();
        assert_eq!(output.output_format(), OutputFormat::Xml);
        assert_eq!(output.schema_version(), SchemaVersion::V1_2);
    }

    #[test]
    fn test_from_empty_config_uses_defaults() {
        let bom = Bom::new();
        let output = OutputFactory::from_config(&bom, &ConfigFile::default()).unwrap();
        assert_eq!(output.output_format(), OutputFormat::Json);
        assert_eq!(output.schema_version(), SchemaVersion::LATEST);
    }
}
