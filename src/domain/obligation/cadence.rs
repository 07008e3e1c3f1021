//! Cadence enum for how often an obligation falls due.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const EXPECTED: &str = "none|weekly|biweekly|monthly";

/// Repeat interval of an obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// One-time obligation, due on the anchor date only.
    None,
    Weekly,
    Biweekly,
    /// Same day-of-month every month, clamped to short months.
    Monthly,
}

impl Cadence {
    /// Fixed step in days for day-based cadences.
    pub fn step_days(&self) -> Option<u64> {
        match self {
            Cadence::Weekly => Some(7),
            Cadence::Biweekly => Some(14),
            Cadence::None | Cadence::Monthly => None,
        }
    }

    /// Returns true if the obligation repeats.
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Cadence::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::None => "none",
            Cadence::Weekly => "weekly",
            Cadence::Biweekly => "biweekly",
            Cadence::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = ValidationError;

    /// Accepts exactly the four lowercase names; anything else is rejected
    /// rather than defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Cadence::None),
            "weekly" => Ok(Cadence::Weekly),
            "biweekly" => Ok(Cadence::Biweekly),
            "monthly" => Ok(Cadence::Monthly),
            other => Err(ValidationError::unknown_variant("cadence", other, EXPECTED)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_days_only_for_day_based_cadences() {
        assert_eq!(Cadence::Weekly.step_days(), Some(7));
        assert_eq!(Cadence::Biweekly.step_days(), Some(14));
        assert_eq!(Cadence::Monthly.step_days(), None);
        assert_eq!(Cadence::None.step_days(), None);
    }

    #[test]
    fn parses_known_names() {
        for cadence in [Cadence::None, Cadence::Weekly, Cadence::Biweekly, Cadence::Monthly] {
            assert_eq!(cadence.as_str().parse::<Cadence>().unwrap(), cadence);
        }
    }

    #[test]
    fn rejects_unknown_names_without_defaulting() {
        for raw in ["", "daily", "Weekly", "bi-weekly", " monthly"] {
            let err = raw.parse::<Cadence>().unwrap_err();
            assert!(matches!(err, ValidationError::UnknownVariant { .. }), "{raw}");
        }
    }

    #[test]
    fn serializes_to_lowercase_json() {
        assert_eq!(serde_json::to_string(&Cadence::Biweekly).unwrap(), "\"biweekly\"");
        let parsed: Cadence = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(parsed, Cadence::Monthly);
    }

    #[test]
    fn only_none_is_not_recurring() {
        assert!(!Cadence::None.is_recurring());
        assert!(Cadence::Monthly.is_recurring());
    }
}
