//! Intermediate document tree shared by every output and input adapter.
//!
//! Output: model -> [`BomTree::from_bom`] -> [`specialise`] -> render.
//! Input: parse -> [`BomTree`] -> `into_bom(version)`.

mod build;
mod rebuild;
mod specialise;
mod wire;

pub(crate) use specialise::specialise;
pub(crate) use wire::*;

use crate::model::Bom;
use crate::schema::SchemaVersion;

impl BomTree {
    /// Builds the tree for `bom` with everything `version` cannot express removed
    pub(crate) fn for_version(bom: &Bom, version: SchemaVersion) -> Self {
        let mut tree = BomTree::from_bom(bom);
        specialise(&mut tree, version.capabilities());
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, Dependency, Service};
    use crate::shared::BomError;

    #[test]
    fn test_tree_round_trip_preserves_bom() {
        let mut bom = Bom::new()
            .with_component(Component::new("a").with_bom_ref("a").with_version("1"))
            .with_service(Service::new("api").with_bom_ref("api"));
        bom.dependencies
            .push(Dependency::new("a").with_depends_on("api"));

        let rebuilt = BomTree::from_bom(&bom)
            .into_bom(SchemaVersion::V1_4)
            .unwrap();
        assert_eq!(rebuilt, bom);
    }

    #[test]
    fn test_forward_reference_resolves() {
        let mut tree = BomTree::from_bom(
            &Bom::default().with_component(Component::new("late").with_bom_ref("late")),
        );
        tree.dependencies.insert(
            0,
            DependencyNode {
                bom_ref: "late".to_string(),
                depends_on: vec!["late".to_string()],
            },
        );
        assert!(tree.into_bom(SchemaVersion::V1_4).is_ok());
    }

    #[test]
    fn test_unknown_dependency_names_ref() {
        let mut tree = BomTree::from_bom(&Bom::default());
        tree.dependencies.push(DependencyNode {
            bom_ref: "ghost".to_string(),
            depends_on: Vec::new(),
        });
        match tree.into_bom(SchemaVersion::V1_4) {
            Err(BomError::UnknownComponentDependency { bom_ref }) => assert_eq!(bom_ref, "ghost"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_version_reads_as_absent_where_mandatory() {
        for version in [SchemaVersion::V1_0, SchemaVersion::V1_3] {
            let mut tree = BomTree::from_bom(
                &Bom::default()
                    .with_component(Component::new("x").with_component(Component::new("y"))),
            );
            tree.components[0].version = Some(String::new());
            tree.components[0].components[0].version = Some(String::new());
            let bom = tree.into_bom(version).unwrap();
            let component = &bom.components[0];
            assert!(component.version.is_none(), "{}", version);
            assert!(component.components[0].version.is_none(), "{}", version);
        }
    }

    #[test]
    fn test_empty_version_kept_where_optional() {
        let mut tree = BomTree::from_bom(&Bom::default().with_component(Component::new("x")));
        tree.components[0].version = Some(String::new());
        let bom = tree.into_bom(SchemaVersion::V1_4).unwrap();
        assert_eq!(bom.components[0].version.as_deref(), Some(""));
    }

    #[test]
    fn test_malformed_serial_number() {
        let mut tree = BomTree::from_bom(&Bom::default());
        tree.serial_number = Some("not-a-uuid".to_string());
        assert!(matches!(
            tree.into_bom(SchemaVersion::V1_4),
            Err(BomError::InvalidDocument(_))
        ));
    }
}
