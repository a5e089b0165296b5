use super::BomRef;
use chrono::{DateTime, Utc};
use strum::{Display, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
    None,
    Unknown,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Risk scoring methodology used by a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum ScoreMethod {
    #[strum(serialize = "CVSSv2")]
    CvssV2,
    #[strum(serialize = "CVSSv3")]
    CvssV3,
    #[strum(serialize = "CVSSv31")]
    CvssV31,
    #[strum(serialize = "OWASP")]
    Owasp,
    #[strum(serialize = "other")]
    Other,
}

impl ScoreMethod {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Where a vulnerability or rating was published
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VulnerabilitySource {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl VulnerabilitySource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: Some(url.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VulnerabilityRating {
    pub source: Option<VulnerabilitySource>,
    pub score: Option<f64>,
    pub severity: Option<Severity>,
    pub method: Option<ScoreMethod>,
    pub vector: Option<String>,
    pub justification: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub title: Option<String>,
    pub url: String,
}

impl Advisory {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            title: None,
            url: url.into(),
        }
    }
}

/// A known vulnerability and the BOM entities it affects (CycloneDX 1.4+)
#[derive(Debug, Clone, PartialEq)]
pub struct Vulnerability {
    pub bom_ref: BomRef,
    pub id: Option<String>,
    pub source: Option<VulnerabilitySource>,
    pub ratings: Vec<VulnerabilityRating>,
    pub cwes: Vec<u32>,
    pub description: Option<String>,
    pub detail: Option<String>,
    pub recommendation: Option<String>,
    pub advisories: Vec<Advisory>,
    pub created: Option<DateTime<Utc>>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    /// Refs of the components or services this vulnerability applies to
    pub affects: Vec<BomRef>,
}

impl Vulnerability {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            bom_ref: BomRef::unset(),
            id: Some(id.into()),
            source: None,
            ratings: Vec::new(),
            cwes: Vec::new(),
            description: None,
            detail: None,
            recommendation: None,
            advisories: Vec::new(),
            created: None,
            published: None,
            updated: None,
            affects: Vec::new(),
        }
    }

    pub fn with_bom_ref(mut self, bom_ref: impl Into<BomRef>) -> Self {
        self.bom_ref = bom_ref.into();
        self
    }

    pub fn with_rating(mut self, rating: VulnerabilityRating) -> Self {
        self.ratings.push(rating);
        self
    }

    pub fn affecting(mut self, target: &BomRef) -> Self {
        self.affects.push(BomRef::new(target.value()));
        self
    }

    pub fn affects_ref(&self, target: &BomRef) -> bool {
        self.affects.iter().any(|r| r == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(ScoreMethod::CvssV31.as_str(), "CVSSv31");
        assert_eq!("OWASP".parse::<ScoreMethod>().unwrap(), ScoreMethod::Owasp);
        assert_eq!(Severity::Critical.as_str(), "critical");
        assert_eq!("none".parse::<Severity>().unwrap(), Severity::None);
    }

    #[test]
    fn test_affecting_materializes_target() {
        let target = BomRef::unset();
        let vulnerability = Vulnerability::new("CVE-2018-7489").affecting(&target);
        assert!(target.is_set());
        assert!(vulnerability.affects_ref(&target));
        assert!(!vulnerability.affects_ref(&BomRef::new("other")));
    }
}
