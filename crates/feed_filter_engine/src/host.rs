use scraper::{ElementRef, Selector};
use thiserror::Error;

/// Stable identity of a node in the host document.
pub type CardId = ego_tree::NodeId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("node {0:?} is not part of the document")]
    Missing(CardId),
    #[error("node {0:?} was already detached")]
    Detached(CardId),
    #[error("card {0:?} has no container to remove")]
    NoContainer(CardId),
    #[error("no next item to advance to")]
    NothingToAdvance,
}

/// The live document the scanner works on.
///
/// Queries only see attached nodes. Side effects report failures instead of
/// panicking; the scanner logs and moves on.
pub trait FeedDocument {
    /// Current URL or path.
    fn location(&self) -> &str;

    /// Attached elements matching `selector`, in document order.
    fn query(&self, selector: &Selector) -> Vec<CardId>;

    /// Element handle for an attached node.
    fn element(&self, id: CardId) -> Option<ElementRef<'_>>;

    /// Whether a short-form reel is the one currently playing.
    fn is_active(&self, id: CardId) -> bool;

    /// Detach a node and its subtree.
    fn remove(&mut self, id: CardId) -> Result<(), HostError>;

    /// Move the short-form player to the next item.
    fn advance(&mut self) -> Result<(), HostError>;
}
