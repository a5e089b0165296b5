/// A license identified by SPDX id or by free-form name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

impl License {
    pub fn spdx(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
            url: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            url: None,
        }
    }
}

/// Either a single license or an SPDX license expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseChoice {
    License(License),
    Expression(String),
}

impl LicenseChoice {
    pub fn is_expression(&self) -> bool {
        matches!(self, LicenseChoice::Expression(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spdx_license() {
        let license = License::spdx("MIT");
        assert_eq!(license.id.as_deref(), Some("MIT"));
        assert!(license.name.is_none());
    }

    #[test]
    fn test_is_expression() {
        let expression = LicenseChoice::Expression("MIT OR Apache-2.0".to_string());
        let named = LicenseChoice::License(License::named("Custom"));
        assert!(expression.is_expression());
        assert!(!named.is_expression());
    }
}
