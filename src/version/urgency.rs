//! Upgrade urgency classification

use std::cmp::Ordering;

use crate::version::quarter::QuarterYear;

/// How soon a release must be upgraded relative to its EOCP quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyTier {
    /// EOCP was in an earlier year
    Expired,
    /// EOCP was an earlier quarter of the current year
    PastQuarter,
    /// EOCP is the current quarter
    CurrentQuarter,
    /// EOCP is a later quarter of the current year
    Upcoming,
    /// EOCP is in a later year
    Safe,
}

impl UrgencyTier {
    /// Advisory message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            UrgencyTier::Expired => "You need to update, eocp was last year or earlier.",
            UrgencyTier::PastQuarter => "You need to update, eocp was one or more quarters back.",
            UrgencyTier::CurrentQuarter => "This quarter you need to update.",
            UrgencyTier::Upcoming => "You will need to update in the near future.",
            UrgencyTier::Safe => "No need to worry.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyTier::Expired => "expired",
            UrgencyTier::PastQuarter => "past_quarter",
            UrgencyTier::CurrentQuarter => "current_quarter",
            UrgencyTier::Upcoming => "upcoming",
            UrgencyTier::Safe => "safe",
        }
    }

    /// Whether this tier fails the build when failing on urgent EOCP is enabled
    ///
    /// CurrentQuarter is reported but does not fail the build: the release is
    /// still provisioned until the quarter ends.
    pub fn fails_build(&self) -> bool {
        matches!(self, UrgencyTier::Expired | UrgencyTier::PastQuarter)
    }
}

/// Classify an EOCP quarter against the current quarter
pub fn classify(eocp: QuarterYear, current: QuarterYear) -> UrgencyTier {
    match (
        eocp.year().cmp(&current.year()),
        eocp.quarter().cmp(&current.quarter()),
    ) {
        (Ordering::Less, _) => UrgencyTier::Expired,
        (Ordering::Greater, _) => UrgencyTier::Safe,
        (Ordering::Equal, Ordering::Less) => UrgencyTier::PastQuarter,
        (Ordering::Equal, Ordering::Equal) => UrgencyTier::CurrentQuarter,
        (Ordering::Equal, Ordering::Greater) => UrgencyTier::Upcoming,
    }
}
