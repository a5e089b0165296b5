use super::{BomRef, Component, Dependency, ExternalReference, Metadata, Service, Vulnerability};
use crate::shared::BomError;
use std::collections::HashSet;
use uuid::Uuid;

/// A CycloneDX Bill of Materials
///
/// The BOM owns its whole graph. Entities refer to each other only through
/// [`BomRef`] values: dependencies and vulnerability `affects` entries must
/// name the ref of a component or service somewhere in the same BOM.
#[derive(Debug, Clone, PartialEq)]
pub struct Bom {
    serial_number: Uuid,
    /// Revision of this BOM document, starting at 1
    pub version: u32,
    pub metadata: Metadata,
    pub components: Vec<Component>,
    pub services: Vec<Service>,
    pub external_references: Vec<ExternalReference>,
    pub dependencies: Vec<Dependency>,
    pub vulnerabilities: Vec<Vulnerability>,
}

impl Default for Bom {
    /// An empty BOM with unspecified metadata
    fn default() -> Self {
        Self {
            serial_number: Uuid::new_v4(),
            version: 1,
            metadata: Metadata::default(),
            components: Vec::new(),
            services: Vec::new(),
            external_references: Vec::new(),
            dependencies: Vec::new(),
            vulnerabilities: Vec::new(),
        }
    }
}

impl Bom {
    /// Creates a BOM stamped with the current time and this library as tool
    pub fn new() -> Self {
        Self {
            metadata: Metadata::generated(),
            ..Self::default()
        }
    }

    pub fn serial_number(&self) -> Uuid {
        self.serial_number
    }

    pub fn set_serial_number(&mut self, serial_number: Uuid) {
        self.serial_number = serial_number;
    }

    /// Serial number in the `urn:uuid:` form used on the wire
    pub fn urn_uuid(&self) -> String {
        self.serial_number.urn().to_string()
    }

    pub fn regenerate_serial_number(&mut self) {
        self.serial_number = Uuid::new_v4();
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// Whether the component appears anywhere in the BOM, nested ones included
    pub fn has_component(&self, component: &Component) -> bool {
        self.all_components().into_iter().any(|c| c == component)
    }

    /// Every component in the BOM: the metadata component, then the
    /// component tree depth first
    pub fn all_components(&self) -> Vec<&Component> {
        let mut out = Vec::new();
        if let Some(component) = &self.metadata.component {
            out.extend(component.walk());
        }
        for component in &self.components {
            out.extend(component.walk());
        }
        out
    }

    pub fn all_services(&self) -> Vec<&Service> {
        self.services.iter().flat_map(|s| s.walk()).collect()
    }

    /// Records that `target` depends on each of `depends_on`
    ///
    /// Unset refs are materialized. Edges already present are not duplicated.
    pub fn register_dependency<'a>(
        &mut self,
        target: &BomRef,
        depends_on: impl IntoIterator<Item = &'a BomRef>,
    ) {
        let index = match self
            .dependencies
            .iter()
            .position(|d| d.bom_ref.get() == Some(target.value()))
        {
            Some(index) => index,
            None => {
                self.dependencies.push(Dependency::new(target.value()));
                self.dependencies.len() - 1
            }
        };

        let dependency = &mut self.dependencies[index];
        for dep in depends_on {
            let value = dep.value();
            if !dependency.depends_on.iter().any(|d| d.get() == Some(value)) {
                dependency.depends_on.push(BomRef::new(value));
            }
        }
    }

    /// Vulnerabilities whose `affects` list names the component's ref
    pub fn vulnerabilities_for(&self, component: &Component) -> Vec<&Vulnerability> {
        self.vulnerabilities
            .iter()
            .filter(|v| v.affects_ref(&component.bom_ref))
            .collect()
    }

    /// Checks that the BOM can be written as a valid document
    ///
    /// The version must be at least 1 and every dependency ref must resolve
    /// to a declared component or service.
    pub fn validate(&self) -> Result<(), BomError> {
        if self.version == 0 {
            return Err(BomError::InvalidBomVersion(self.version));
        }

        let known = self.known_refs();
        for dependency in &self.dependencies {
            for bom_ref in std::iter::once(&dependency.bom_ref).chain(&dependency.depends_on) {
                let value = bom_ref.get().unwrap_or_default();
                if !known.contains(value) {
                    return Err(BomError::UnknownComponentDependency {
                        bom_ref: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn known_refs(&self) -> HashSet<&str> {
        let components = self.all_components().into_iter().map(|c| &c.bom_ref);
        let services = self.all_services().into_iter().map(|s| &s.bom_ref);
        components.chain(services).filter_map(BomRef::get).collect()
    }
}
