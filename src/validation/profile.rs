//! Validation strictness profiles

use crate::error::ParseProfileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which rule variant applies to each field.
///
/// `Strict` strips mask characters and counts digits. `Lenient` only checks
/// presence of the name and the raw length of masked values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationProfile {
    #[default]
    Strict,
    Lenient,
}

impl ValidationProfile {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ValidationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ValidationProfile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(ParseProfileError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ValidationProfile::default(), ValidationProfile::Strict);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Lenient".parse::<ValidationProfile>(),
            Ok(ValidationProfile::Lenient)
        );
        assert_eq!(
            " strict ".parse::<ValidationProfile>(),
            Ok(ValidationProfile::Strict)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "loose".parse::<ValidationProfile>().unwrap_err();
        assert_eq!(err, ParseProfileError("loose".to_string()));
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&ValidationProfile::Lenient).unwrap();
        assert_eq!(json, "\"lenient\"");
        let parsed: ValidationProfile = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(parsed, ValidationProfile::Strict);
    }
}
