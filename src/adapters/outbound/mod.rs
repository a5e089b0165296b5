/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod formatters;
pub mod parsers;
pub(crate) mod tree;
pub mod validators;
pub(crate) mod xml;
