use serde::{Deserialize, Serialize};

use crate::verdict::{AmbiguityPolicy, DEFAULT_THRESHOLD};

/// Settings consumed by every scan pass.
///
/// Passed in explicitly on each invocation; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Filter the regular video feeds.
    pub videos_filtering: bool,
    /// Skip bad items on the short-form feed.
    pub shorts_filtering: bool,
    /// Inclusive minimum view count.
    pub threshold: u64,
    pub policy: AmbiguityPolicy,
    /// Reclassify a checked card when its label text changes. Costs one
    /// label lookup per checked card on every pass. Cards kept without any
    /// label are always looked at again.
    pub recheck_on_label_change: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            videos_filtering: true,
            shorts_filtering: true,
            threshold: DEFAULT_THRESHOLD,
            policy: AmbiguityPolicy::Conservative,
            recheck_on_label_change: false,
        }
    }
}
