//! Operating profile selection.

use serde::Serialize;

use super::constants::PRODUCTION_SELECTOR;

/// Named configuration variant, selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Development,
    Production,
}

impl Profile {
    /// Select a profile from the raw selector value.
    ///
    /// Only an exact `prod` selects production; unset or any other value
    /// falls back to development.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some(PRODUCTION_SELECTOR) => Profile::Production,
            _ => Profile::Development,
        }
    }

    /// Check if this is the production profile
    pub fn is_production(&self) -> bool {
        matches!(self, Profile::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Production => "production",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_selector_is_development() {
        assert_eq!(Profile::from_selector(None), Profile::Development);
    }

    #[test]
    fn test_prod_selector() {
        assert_eq!(Profile::from_selector(Some("prod")), Profile::Production);
    }

    #[test]
    fn test_prod_selector_is_exact() {
        for value in ["PROD", "Prod", " prod ", "prod\n", "production"] {
            assert_eq!(
                Profile::from_selector(Some(value)),
                Profile::Development,
                "selector {value:?}"
            );
        }
    }

    #[test]
    fn test_unrecognized_selector_is_development() {
        for value in ["", "dev", "staging", "prod1", "producción", "test"] {
            assert_eq!(
                Profile::from_selector(Some(value)),
                Profile::Development,
                "selector {value:?}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Profile::Production.to_string(), "production");
        assert_eq!(Profile::Development.to_string(), "development");
    }
}
