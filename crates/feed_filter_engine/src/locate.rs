//! Finding the count label inside a card.
//!
//! Strategies run in priority order and the first hit wins:
//! 1. classic metadata block (oldest layout)
//! 2. content metadata rows (newer layouts)
//! 3. any small leaf element mentioning views
//! 4. the accessible label of the card's link

use feed_filter_core::is_no_views_phrase;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

/// Longest leaf text the generic scan will consider a label.
const MAX_LEAF_CHARS: usize = 64;

static CLASSIC_META: Lazy<Option<Selector>> =
    Lazy::new(|| Selector::parse(".inline-metadata-item.style-scope.ytd-video-meta-block").ok());

static CONTENT_METADATA: Lazy<Option<Selector>> = Lazy::new(|| {
    Selector::parse(
        ".yt-content-metadata-view-model-wiz__metadata-text, \
         .yt-content-metadata-view-model__metadata-text",
    )
    .ok()
});

static VIEW_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bviews?\b").expect("view word regex"));

static LABELLED_LINK: Lazy<Option<Selector>> = Lazy::new(|| Selector::parse("a[aria-label]").ok());

/// A view-count fragment inside longer prose, such as an accessible label
/// `Title by Channel 1,234 views 3 days ago`.
static COUNT_FRAGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d+(?:[.,\x{a0}\x{202f} ]\d{2,3})*(?:[.,]\d+)?(?:\s*(?:lakh|crore|million|billion|[kmb])\b)?\s*views?\b",
    )
    .expect("count fragment regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedLabel {
    pub text: String,
    /// Name of the strategy that found it.
    pub strategy: &'static str,
}

/// One way of pulling a label out of a card subtree.
pub struct LabelStrategy {
    pub name: &'static str,
    pub find: fn(ElementRef<'_>) -> Option<String>,
}

/// Label strategies in priority order.
pub const LABEL_STRATEGIES: &[LabelStrategy] = &[
    LabelStrategy {
        name: "classic_meta",
        find: classic_meta,
    },
    LabelStrategy {
        name: "content_metadata",
        find: content_metadata,
    },
    LabelStrategy {
        name: "leaf_text",
        find: leaf_text,
    },
    LabelStrategy {
        name: "link_aria_label",
        find: link_aria_label,
    },
];

/// Best-candidate count label for a card, or `None` when no strategy finds one.
pub fn locate_label(card: ElementRef<'_>) -> Option<LocatedLabel> {
    LABEL_STRATEGIES.iter().find_map(|strategy| {
        (strategy.find)(card).map(|text| LocatedLabel {
            text,
            strategy: strategy.name,
        })
    })
}

/// Rendered text of an element: ASCII whitespace runs collapse to one space
/// and the ends are trimmed. Non-breaking spaces are kept as they are.
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for ch in element.text().flat_map(str::chars) {
        if ch.is_ascii_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(ch);
    }
    out
}

fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Mentions views and carries a number, or is the "no views" wording.
fn mentions_views(text: &str) -> bool {
    if is_no_views_phrase(text) {
        return true;
    }
    has_digit(text) && VIEW_WORD_RE.is_match(text)
}

/// The classic block is locale-dependent, so the view word is not required.
/// Dates and clock times (`5/1/25`, `10:00`) are not counts.
fn plausible_count(text: &str) -> bool {
    if is_no_views_phrase(text) {
        return true;
    }
    has_digit(text) && !text.contains(['/', ':'])
}

fn classic_meta(card: ElementRef<'_>) -> Option<String> {
    let selector = CLASSIC_META.as_ref()?;
    let first = card.select(selector).next()?;
    Some(element_text(first)).filter(|text| plausible_count(text))
}

fn content_metadata(card: ElementRef<'_>) -> Option<String> {
    let selector = CONTENT_METADATA.as_ref()?;
    card.select(selector)
        .map(element_text)
        .find(|text| mentions_views(text))
}

fn leaf_text(card: ElementRef<'_>) -> Option<String> {
    card.descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.children().all(|child| !child.value().is_element()))
        .map(element_text)
        .find(|text| text.chars().count() <= MAX_LEAF_CHARS && mentions_views(text))
}

fn link_aria_label(card: ElementRef<'_>) -> Option<String> {
    let selector = LABELLED_LINK.as_ref()?;
    card.select(selector)
        .filter_map(|link| link.value().attr("aria-label"))
        .find_map(|label| COUNT_FRAGMENT_RE.find(label))
        .map(|fragment| fragment.as_str().trim().to_string())
}
