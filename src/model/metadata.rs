use super::{Component, LicenseChoice, OrganizationalContact, OrganizationalEntity, Property, Tool};
use chrono::{DateTime, Utc};

/// Document-level information about the BOM itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub timestamp: Option<DateTime<Utc>>,
    pub tools: Vec<Tool>,
    pub authors: Vec<OrganizationalContact>,
    /// The component the BOM describes
    pub component: Option<Component>,
    pub manufacture: Option<OrganizationalEntity>,
    pub supplier: Option<OrganizationalEntity>,
    pub licenses: Vec<LicenseChoice>,
    pub properties: Vec<Property>,
}

impl Metadata {
    /// Metadata for a freshly created BOM: current time and this library as tool
    pub fn generated() -> Self {
        Self {
            timestamp: Some(Utc::now()),
            tools: vec![Tool::this_library()],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
