use std::fmt;
use std::str::FromStr;

use crate::error::PolicyError;

/// Intended use of a captured record
///
/// The purpose selects the compression and cropping profile enforced by the
/// validation engine and applied as encoder defaults: authentication records
/// carry lossy, tightly cropped imagery sized for matching; registration
/// records carry lossless imagery suitable for re-enrolment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    Auth,
    Registration,
}
impl Purpose {
    /// Canonical uppercase token for this purpose
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "AUTH",
            Self::Registration => "REGISTRATION",
        }
    }

    /// Whether this purpose requires lossless image compression
    #[must_use]
    pub fn requires_lossless(&self) -> bool {
        matches!(self, Self::Registration)
    }
}

impl FromStr for Purpose {
    type Err = PolicyError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_uppercase().as_str() {
            "AUTH" => Ok(Self::Auth),
            "REGISTRATION" => Ok(Self::Registration),
            _ => Err(PolicyError::UnknownPurpose(token.to_string())),
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_tokens() {
        assert_eq!("AUTH".parse::<Purpose>().unwrap(), Purpose::Auth);
        assert_eq!(
            "registration".parse::<Purpose>().unwrap(),
            Purpose::Registration
        );
        assert!(matches!(
            "enrol".parse::<Purpose>(),
            Err(PolicyError::UnknownPurpose(_))
        ));
    }

    #[test]
    fn test_lossless_requirement() {
        assert!(Purpose::Registration.requires_lossless());
        assert!(!Purpose::Auth.requires_lossless());
    }
}
