use super::HashType;
use strum::{Display, EnumString, IntoStaticStr};

/// Kind of resource an external reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ExternalReferenceType {
    Vcs,
    IssueTracker,
    Website,
    Advisories,
    Bom,
    MailingList,
    Social,
    Chat,
    Documentation,
    Support,
    Distribution,
    License,
    BuildMeta,
    BuildSystem,
    ReleaseNotes,
    Other,
}

impl ExternalReferenceType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Link to a resource outside the BOM, optionally pinned by hashes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    pub reference_type: ExternalReferenceType,
    pub url: String,
    pub comment: Option<String>,
    pub hashes: Vec<HashType>,
}

impl ExternalReference {
    pub fn new(reference_type: ExternalReferenceType, url: impl Into<String>) -> Self {
        Self {
            reference_type,
            url: url.into(),
            comment: None,
            hashes: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_hash(mut self, hash: HashType) -> Self {
        self.hashes.push(hash);
        self
    }
}
