//! In-memory CycloneDX object graph, independent of any wire format or
//! schema version.

mod bom;
mod bom_ref;
mod component;
mod dependency;
mod external_reference;
mod hash;
mod license;
mod metadata;
mod organization;
mod release_note;
mod service;
mod tool;
mod vulnerability;

pub use bom::Bom;
pub use bom_ref::BomRef;
pub use component::{Component, ComponentScope, ComponentType};
pub use dependency::Dependency;
pub use external_reference::{ExternalReference, ExternalReferenceType};
pub use hash::{HashAlgorithm, HashType};
pub use license::{License, LicenseChoice};
pub use metadata::Metadata;
pub use organization::{OrganizationalContact, OrganizationalEntity, Property};
pub use release_note::{Note, ReleaseNotes};
pub use service::{DataClassification, DataFlow, Service};
pub use tool::Tool;
pub use vulnerability::{
    Advisory, ScoreMethod, Severity, Vulnerability, VulnerabilityRating, VulnerabilitySource,
};

use crate::shared::BomError;
use std::str::FromStr;

/// Parses an enum wire value, reporting failures as an invalid document
pub(crate) fn parse_wire<T: FromStr>(kind: &str, value: &str) -> Result<T, BomError> {
    value
        .parse()
        .map_err(|_| BomError::InvalidDocument(format!("unknown {} '{}'", kind, value)))
}
