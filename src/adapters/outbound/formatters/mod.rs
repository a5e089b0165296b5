/// Output adapters rendering a BOM as a CycloneDX document
mod json_output;
mod xml_output;

pub use json_output::JsonOutput;
pub use xml_output::XmlOutput;
