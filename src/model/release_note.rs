use super::Property;
use chrono::{DateTime, Utc};

/// Localized release-note text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub locale: Option<String>,
    pub text: String,
}

/// Release notes attached to a component or service (CycloneDX 1.4+)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    /// Release type such as `major`, `minor`, `patch` or `internal`
    pub release_type: String,
    pub title: Option<String>,
    pub featured_image: Option<String>,
    pub social_image: Option<String>,
    pub description: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub aliases: Vec<String>,
    pub tags: Vec<String>,
    pub notes: Vec<Note>,
    pub properties: Vec<Property>,
}

impl ReleaseNotes {
    pub fn new(release_type: impl Into<String>) -> Self {
        Self {
            release_type: release_type.into(),
            title: None,
            featured_image: None,
            social_image: None,
            description: None,
            timestamp: None,
            aliases: Vec::new(),
            tags: Vec::new(),
            notes: Vec::new(),
            properties: Vec::new(),
        }
    }
}
