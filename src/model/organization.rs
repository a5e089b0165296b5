/// A person reachable about the BOM or one of its entities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationalContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl OrganizationalContact {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// An organization acting as supplier, manufacturer or service provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationalEntity {
    pub name: Option<String>,
    pub urls: Vec<String>,
    pub contacts: Vec<OrganizationalContact>,
}

impl OrganizationalEntity {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Name/value pair; a name may appear more than once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
