//! Notice codes carried across redirects.
//!
//! The original UI relied on session-backed flash messages; this app has no
//! session state, so a redirect carries a stable code in its query string
//! (`?notice=occupation_recorded`) and the receiving view resolves the code
//! to its user-facing message. Forms that re-render put the message straight
//! into the template context instead.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    OccupationRecorded,
    CheckpointLimit,
    OccupationInvalid,
    RiskRecorded,
    RiskDescriptionMissing,
}

impl Notice {
    /// Stable code used in redirect query strings.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::OccupationRecorded => "occupation_recorded",
            Self::CheckpointLimit => "checkpoint_limit",
            Self::OccupationInvalid => "occupation_invalid",
            Self::RiskRecorded => "risk_recorded",
            Self::RiskDescriptionMissing => "risk_description_missing",
        }
    }

    /// User-facing message shown by the view.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::OccupationRecorded => "Occupation data uploaded successfully!",
            Self::CheckpointLimit => "Maximum checkpoints reached.",
            Self::OccupationInvalid => "Could not read the submitted occupation data.",
            Self::RiskRecorded => "Geopolitical risk added successfully!",
            Self::RiskDescriptionMissing => "Please provide a valid risk description.",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "occupation_recorded" => Some(Self::OccupationRecorded),
            "checkpoint_limit" => Some(Self::CheckpointLimit),
            "occupation_invalid" => Some(Self::OccupationInvalid),
            "risk_recorded" => Some(Self::RiskRecorded),
            "risk_description_missing" => Some(Self::RiskDescriptionMissing),
            _ => None,
        }
    }

    /// Resolve a `?notice=` query value to its message; unknown codes are
    /// silently dropped.
    pub fn resolve(query: Option<&str>) -> Option<&'static str> {
        query.and_then(Self::from_code).map(|notice| notice.message())
    }
}
