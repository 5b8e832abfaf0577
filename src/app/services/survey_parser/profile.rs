//! Parsing profiles for the two historical survey report layouts
//!
//! Two incompatible report layouts exist in the wild and the caller must
//! pick one explicitly. The formats carry no marker a parser could
//! auto-detect, and their error policies differ deliberately.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named parsing profile selecting the report layout and its error policy
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ParserProfile {
    /// Tab-delimited header keys; data rows must match the fixed template
    /// of eleven space-separated numeric fields. A malformed row is dropped
    /// whole and logged; partial stations are never appended.
    #[default]
    Strict,

    /// Free-text `Key:` header prefixes; data rows are whitespace-split.
    /// A row with eleven tokens is always appended, substituting zero for
    /// any token that fails numeric coercion.
    Lenient,
}

impl ParserProfile {
    /// Profile name as used in CLI arguments and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ParserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_names() {
        assert_eq!(ParserProfile::Strict.to_string(), "strict");
        assert_eq!(ParserProfile::Lenient.to_string(), "lenient");
    }

    #[test]
    fn test_default_profile_is_strict() {
        assert_eq!(ParserProfile::default(), ParserProfile::Strict);
    }
}
