use std::fmt;
use std::str::FromStr;

use crate::error::PolicyError;

/// Biometric modality of a record
///
/// Selects which part of the ISO/IEC 19794 family governs the record layout:
/// Part 5 (face), Part 6 (iris) or Part 4 (finger). Finger records share the
/// general/representation split but their representation body is not
/// implemented, so the facade rejects the tag up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Face,
    Iris,
    Finger,
}
impl Modality {
    /// Canonical uppercase token for this modality
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Face => "FACE",
            Self::Iris => "IRIS",
            Self::Finger => "FINGER",
        }
    }
}

impl FromStr for Modality {
    type Err = PolicyError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_uppercase().as_str() {
            "FACE" => Ok(Self::Face),
            "IRIS" => Ok(Self::Iris),
            "FINGER" => Ok(Self::Finger),
            _ => Err(PolicyError::UnknownModality(token.to_string())),
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
