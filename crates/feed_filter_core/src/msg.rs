use serde::Serialize;

use crate::PageKind;

/// Delay between a finished navigation and the pass it schedules.
pub const NAVIGATION_DELAY_MS: u64 = 350;

/// Host events that can change which cards are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSource {
    /// A window message was posted.
    Message,
    /// The page finished loading.
    Load,
    /// Scrolling came to rest.
    ScrollEnd,
    Click,
    /// Nodes were added somewhere under the document body.
    SubtreeMutation,
}

impl TriggerSource {
    /// Delay before the pass this trigger asks for.
    pub fn delay_ms(self) -> u64 {
        match self {
            TriggerSource::Message | TriggerSource::Load | TriggerSource::Click => 200,
            TriggerSource::ScrollEnd => 0,
            TriggerSource::SubtreeMutation => 100,
        }
    }

    /// Whether this trigger schedules anything on the given page.
    ///
    /// The short-form feed only rescans on navigation, and subtree mutations
    /// are only watched on watch pages.
    pub fn applies_to(self, page: PageKind) -> bool {
        match self {
            TriggerSource::SubtreeMutation => page == PageKind::Watch,
            _ => page != PageKind::Shorts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The host finished navigating to `location` (URL or path).
    Navigated { location: String, at_ms: u64 },
    /// A host event fired at `at_ms`.
    Triggered { source: TriggerSource, at_ms: u64 },
    /// Clock tick; a due pass fires.
    Tick { now_ms: u64 },
}
