use feed_filter_core::{classify, Decision, Evidence, FilterConfig};
use scraper::ElementRef;

use crate::layout::{MEMBERS_BADGE, REEL_LABEL};
use crate::locate::{element_text, locate_label, LocatedLabel};

const MEMBERS_ONLY_TEXT: &str = "Members only";

/// Members-only badge, or the literal "Members only" text anywhere in the card.
pub fn is_restricted(card: ElementRef<'_>) -> bool {
    let has_badge = MEMBERS_BADGE
        .as_ref()
        .is_some_and(|badge| card.select(badge).next().is_some());
    has_badge || element_text(card).contains(MEMBERS_ONLY_TEXT)
}

/// Decision for one card together with the label it was based on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardReading {
    pub decision: Decision,
    pub label: Option<LocatedLabel>,
}

/// Locate, parse and decide for a single card. Never returns `Verdict::Unknown`.
pub fn read_card(card: ElementRef<'_>, config: &FilterConfig) -> CardReading {
    let label = locate_label(card);
    let evidence = Evidence {
        restricted: is_restricted(card),
        label: label.as_ref().map(|found| found.text.as_str()),
    };
    CardReading {
        decision: classify(&evidence, config.threshold, config.policy),
        label,
    }
}

/// Count label of a short-form reel, if it renders one.
pub fn reel_label(reel: ElementRef<'_>) -> Option<String> {
    let selector = REEL_LABEL.as_ref()?;
    reel.select(selector).next().map(element_text)
}
