//! Known card layouts and the selectors that find them.
//!
//! Each entry names a card selector and the node to detach when the card is
//! removed. Adding a layout variant means adding a row to `LAYOUT_TABLE`.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use crate::host::CardId;

/// Short-form reels in the player sequence.
pub(crate) static REEL: Lazy<Option<Selector>> =
    Lazy::new(|| Selector::parse(".reel-video-in-sequence.style-scope.ytd-shorts").ok());

/// Count label on a short-form reel's action buttons.
pub(crate) static REEL_LABEL: Lazy<Option<Selector>> =
    Lazy::new(|| Selector::parse(".yt-spec-button-shape-with-label__label").ok());

pub(crate) static MEMBERS_BADGE: Lazy<Option<Selector>> =
    Lazy::new(|| Selector::parse(".badge-style-type-members-only").ok());

#[derive(Debug, Clone, Copy)]
enum RemovalRule {
    Itself,
    Parent,
    Closest(&'static str),
}

struct LayoutRow {
    name: &'static str,
    selector: &'static str,
    removal: RemovalRule,
    watch_only: bool,
}

const LAYOUT_TABLE: &[LayoutRow] = &[
    LayoutRow {
        name: "compact_video",
        selector: ".style-scope.ytd-compact-video-renderer",
        removal: RemovalRule::Parent,
        watch_only: false,
    },
    LayoutRow {
        name: "rich_item",
        selector: "#content.style-scope.ytd-rich-item-renderer",
        removal: RemovalRule::Parent,
        watch_only: false,
    },
    LayoutRow {
        name: "rich_grid_media",
        selector: "ytd-rich-grid-media",
        removal: RemovalRule::Itself,
        watch_only: false,
    },
    LayoutRow {
        name: "video_preview",
        selector: ".style-scope.ytd-video-preview",
        removal: RemovalRule::Closest("ytd-compact-video-renderer, ytd-video-preview"),
        watch_only: true,
    },
    LayoutRow {
        name: "compact_video_renderer",
        selector: "ytd-compact-video-renderer",
        removal: RemovalRule::Itself,
        watch_only: true,
    },
    LayoutRow {
        name: "lockup_view_model",
        selector: "yt-lockup-view-model",
        removal: RemovalRule::Itself,
        watch_only: true,
    },
];

/// Which node goes away when a card is removed.
#[derive(Debug, Clone)]
pub enum Removal {
    Itself,
    Parent,
    /// Nearest inclusive ancestor matching the selector.
    Closest(Selector),
}

#[derive(Debug, Clone)]
pub struct CardLayout {
    pub name: &'static str,
    pub selector: Selector,
    pub removal: Removal,
    /// Only scanned on watch pages.
    pub watch_only: bool,
}

impl CardLayout {
    fn compile(row: &LayoutRow) -> Option<Self> {
        let selector = Selector::parse(row.selector).ok()?;
        let removal = match row.removal {
            RemovalRule::Itself => Removal::Itself,
            RemovalRule::Parent => Removal::Parent,
            RemovalRule::Closest(css) => Removal::Closest(Selector::parse(css).ok()?),
        };
        Some(Self {
            name: row.name,
            selector,
            removal,
            watch_only: row.watch_only,
        })
    }

    /// Node to detach for `card`, or `None` when the expected container is absent.
    pub fn removal_target(&self, card: ElementRef<'_>) -> Option<CardId> {
        match &self.removal {
            Removal::Itself => Some(card.id()),
            Removal::Parent => card.parent().and_then(ElementRef::wrap).map(|p| p.id()),
            Removal::Closest(selector) => std::iter::once(card)
                .chain(card.ancestors().filter_map(ElementRef::wrap))
                .find(|el| selector.matches(el))
                .map(|el| el.id()),
        }
    }
}

/// Card layouts in scan order.
pub static CARD_LAYOUTS: Lazy<Vec<CardLayout>> =
    Lazy::new(|| LAYOUT_TABLE.iter().filter_map(CardLayout::compile).collect());
