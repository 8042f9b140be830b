use scraper::{ElementRef, Html, Selector};

use crate::host::{CardId, FeedDocument, HostError};
use crate::layout::REEL;

/// A parsed HTML page acting as the host document.
///
/// Removal detaches nodes from the tree, so later queries no longer see them
/// and [`HtmlFeed::html`] serializes the filtered page. Advancing moves the
/// active reel to the next one in document order.
#[derive(Debug)]
pub struct HtmlFeed {
    document: Html,
    location: String,
    active_reel: Option<CardId>,
    advances: usize,
}

impl HtmlFeed {
    pub fn parse(html: &str, location: impl Into<String>) -> Self {
        let document = Html::parse_document(html);
        let active_reel = initial_active_reel(&document);
        Self {
            document,
            location: location.into(),
            active_reel,
            advances: 0,
        }
    }

    pub fn document(&self) -> &Html {
        &self.document
    }

    /// Serialized document with every removal applied.
    pub fn html(&self) -> String {
        self.document.html()
    }

    /// How many times the short-form player was advanced.
    pub fn advances(&self) -> usize {
        self.advances
    }

    pub fn active_reel(&self) -> Option<CardId> {
        self.active_reel
    }

    fn is_attached(&self, id: CardId) -> bool {
        let root = self.document.tree.root().id();
        match self.document.tree.get(id) {
            Some(node) => node.id() == root || node.ancestors().any(|a| a.id() == root),
            None => false,
        }
    }

    fn reels(&self) -> Vec<CardId> {
        match REEL.as_ref() {
            Some(selector) => self.query(selector),
            None => Vec::new(),
        }
    }
}

/// First reel flagged with the `is-active` attribute.
fn initial_active_reel(document: &Html) -> Option<CardId> {
    let selector = REEL.as_ref()?;
    document
        .select(selector)
        .find(|reel| reel.value().attr("is-active").is_some())
        .map(|reel| reel.id())
}

impl FeedDocument for HtmlFeed {
    fn location(&self) -> &str {
        &self.location
    }

    fn query(&self, selector: &Selector) -> Vec<CardId> {
        // `Html::select` walks the whole arena, detached nodes included.
        self.document
            .select(selector)
            .map(|el| el.id())
            .filter(|&id| self.is_attached(id))
            .collect()
    }

    fn element(&self, id: CardId) -> Option<ElementRef<'_>> {
        if !self.is_attached(id) {
            return None;
        }
        self.document.tree.get(id).and_then(ElementRef::wrap)
    }

    fn is_active(&self, id: CardId) -> bool {
        self.active_reel == Some(id)
    }

    fn remove(&mut self, id: CardId) -> Result<(), HostError> {
        if self.document.tree.get(id).is_none() {
            return Err(HostError::Missing(id));
        }
        if !self.is_attached(id) {
            return Err(HostError::Detached(id));
        }
        if let Some(mut node) = self.document.tree.get_mut(id) {
            node.detach();
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<(), HostError> {
        let active = self.active_reel.ok_or(HostError::NothingToAdvance)?;
        let reels = self.reels();
        let next = reels
            .iter()
            .skip_while(|&&reel| reel != active)
            .nth(1)
            .copied()
            .ok_or(HostError::NothingToAdvance)?;
        self.active_reel = Some(next);
        self.advances += 1;
        Ok(())
    }
}
