use super::{BomRef, ExternalReference, LicenseChoice, OrganizationalEntity, Property, ReleaseNotes};
use strum::{Display, EnumString, IntoStaticStr};

/// Direction in which classified data flows through a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum DataFlow {
    Inbound,
    Outbound,
    BiDirectional,
    Unknown,
}

impl DataFlow {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Sensitivity label of data handled by a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataClassification {
    pub flow: DataFlow,
    pub classification: String,
}

impl DataClassification {
    pub fn new(flow: DataFlow, classification: impl Into<String>) -> Self {
        Self {
            flow,
            classification: classification.into(),
        }
    }
}

/// An external or internal service the described software talks to
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub bom_ref: BomRef,
    pub provider: Option<OrganizationalEntity>,
    pub group: Option<String>,
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub endpoints: Vec<String>,
    pub authenticated: Option<bool>,
    pub x_trust_boundary: Option<bool>,
    pub data: Vec<DataClassification>,
    pub licenses: Vec<LicenseChoice>,
    pub external_references: Vec<ExternalReference>,
    pub properties: Vec<Property>,
    pub services: Vec<Service>,
    pub release_notes: Option<ReleaseNotes>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            bom_ref: BomRef::unset(),
            provider: None,
            group: None,
            name: name.into(),
            version: None,
            description: None,
            endpoints: Vec::new(),
            authenticated: None,
            x_trust_boundary: None,
            data: Vec::new(),
            licenses: Vec::new(),
            external_references: Vec::new(),
            properties: Vec::new(),
            services: Vec::new(),
            release_notes: None,
        }
    }

    pub fn with_bom_ref(mut self, bom_ref: impl Into<BomRef>) -> Self {
        self.bom_ref = bom_ref.into();
        self
    }

    pub fn with_service(mut self, child: Service) -> Self {
        self.services.push(child);
        self
    }

    /// The service and all nested services, depth first
    pub fn walk(&self) -> Vec<&Service> {
        let mut out = vec![self];
        for child in &self.services {
            out.extend(child.walk());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_flow_wire_names() {
        assert_eq!(DataFlow::BiDirectional.as_str(), "bi-directional");
        assert_eq!("inbound".parse::<DataFlow>().unwrap(), DataFlow::Inbound);
    }

    #[test]
    fn test_walk_nested_services() {
        let auth = Service::new("auth").with_service(Service::new("token-store"));
        let service = Service::new("gateway").with_service(auth);
        let names: Vec<&str> = service.walk().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["gateway", "auth", "token-store"]);
    }
}
