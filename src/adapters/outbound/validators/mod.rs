/// Schema validators for serialized documents
mod json_validator;
mod xml_validator;

pub use json_validator::JsonValidator;
pub use xml_validator::XmlValidator;
