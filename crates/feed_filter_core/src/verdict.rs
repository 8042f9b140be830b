use std::fmt;

use serde::{Deserialize, Serialize};

use crate::count::{parse_count, ParsedCount};

/// Minimum view count a card needs to stay in the feed.
pub const DEFAULT_THRESHOLD: u64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Keep,
    Remove,
    /// No positive evidence either way; see [`AmbiguityPolicy`].
    Unknown,
}

/// How a card without a readable count is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Ambiguity keeps the card. Nothing is removed without a count below the threshold.
    #[default]
    Conservative,
    /// Ambiguity removes the card. Only a readable count at or above the threshold keeps it.
    Aggressive,
}

impl AmbiguityPolicy {
    /// Settle an `Unknown` verdict; `Keep` and `Remove` pass through unchanged.
    pub fn resolve(self, verdict: Verdict) -> Verdict {
        match (verdict, self) {
            (Verdict::Unknown, AmbiguityPolicy::Conservative) => Verdict::Keep,
            (Verdict::Unknown, AmbiguityPolicy::Aggressive) => Verdict::Remove,
            (settled, _) => settled,
        }
    }
}

/// Why a card got its verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Reason {
    /// Members-only or otherwise restricted content.
    RestrictedAccess,
    /// No label could be located in the card.
    NoLabel,
    /// A label was found but did not parse to a count.
    Unparsed,
    BelowThreshold { count: u64 },
    MeetsThreshold { count: u64 },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::RestrictedAccess => write!(f, "restricted access"),
            Reason::NoLabel => write!(f, "no count label"),
            Reason::Unparsed => write!(f, "unparsed count label"),
            Reason::BelowThreshold { count } => write!(f, "{count} below threshold"),
            Reason::MeetsThreshold { count } => write!(f, "{count} meets threshold"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub verdict: Verdict,
    pub reason: Reason,
}

impl Decision {
    fn new(verdict: Verdict, reason: Reason) -> Self {
        Self { verdict, reason }
    }

    /// Apply the ambiguity policy, leaving the reason intact.
    pub fn resolve(self, policy: AmbiguityPolicy) -> Self {
        Self {
            verdict: policy.resolve(self.verdict),
            reason: self.reason,
        }
    }
}

/// What the host told us about one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evidence<'a> {
    /// The card carries a members-only style marker.
    pub restricted: bool,
    /// Count label located in the card, if any.
    pub label: Option<&'a str>,
}

/// Raw decision for one card. May return [`Verdict::Unknown`].
pub fn assess(evidence: &Evidence<'_>, threshold: u64) -> Decision {
    if evidence.restricted {
        return Decision::new(Verdict::Remove, Reason::RestrictedAccess);
    }
    let Some(label) = evidence.label else {
        return Decision::new(Verdict::Unknown, Reason::NoLabel);
    };
    match parse_count(label) {
        ParsedCount::Unknown => Decision::new(Verdict::Unknown, Reason::Unparsed),
        ParsedCount::Count(count) if count >= threshold => {
            Decision::new(Verdict::Keep, Reason::MeetsThreshold { count })
        }
        ParsedCount::Count(count) => Decision::new(Verdict::Remove, Reason::BelowThreshold { count }),
    }
}

/// Final decision for one card: [`assess`] followed by the ambiguity policy.
/// Never returns [`Verdict::Unknown`].
pub fn classify(evidence: &Evidence<'_>, threshold: u64, policy: AmbiguityPolicy) -> Decision {
    assess(evidence, threshold).resolve(policy)
}
