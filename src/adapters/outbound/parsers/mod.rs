/// Input adapters reconstructing a BOM from a CycloneDX document
mod json_reader;
mod xml_reader;

pub use json_reader::JsonBomReader;
pub use xml_reader::XmlBomReader;
