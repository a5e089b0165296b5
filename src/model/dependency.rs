use super::BomRef;

/// One node of the dependency graph: `bom_ref` depends on each of `depends_on`
#[derive(Debug, Clone, PartialEq)]
pub struct Dependency {
    pub bom_ref: BomRef,
    pub depends_on: Vec<BomRef>,
}

impl Dependency {
    pub fn new(bom_ref: impl Into<BomRef>) -> Self {
        Self {
            bom_ref: bom_ref.into(),
            depends_on: Vec::new(),
        }
    }

    pub fn with_depends_on(mut self, target: impl Into<BomRef>) -> Self {
        self.depends_on.push(target.into());
        self
    }
}
