use feed_filter_core::{Decision, PageKind};
use serde::Serialize;

use crate::host::CardId;

/// What happened to one card during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardOutcome {
    #[serde(skip)]
    pub card: CardId,
    pub layout: &'static str,
    pub label: Option<String>,
    pub label_strategy: Option<&'static str>,
    pub decision: Decision,
    /// Set when the removal side effect failed.
    pub failure: Option<String>,
}

/// Summary of one scan pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub pass: u64,
    pub page: PageKind,
    /// Cards matched by any layout selector.
    pub seen: usize,
    /// Cards already decided in an earlier pass.
    pub skipped: usize,
    pub kept: usize,
    pub removed: usize,
    /// Side effects that failed and were dropped.
    pub failures: usize,
    /// The short-form player was moved to the next item.
    pub advanced: bool,
    pub outcomes: Vec<CardOutcome>,
}

impl PassReport {
    pub(crate) fn new(pass: u64, page: PageKind) -> Self {
        Self {
            pass,
            page,
            seen: 0,
            skipped: 0,
            kept: 0,
            removed: 0,
            failures: 0,
            advanced: false,
            outcomes: Vec::new(),
        }
    }

    /// Number of cards classified in this pass.
    pub fn classified(&self) -> usize {
        self.outcomes.len()
    }
}
