use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mark {
    /// Classified and kept; holds the label text observed at that time.
    Checked { label: Option<String> },
    /// Removal is terminal.
    Removed,
}

/// Per-card idempotency markers, keyed on card identity.
///
/// Repeated scan passes over an unchanged document skip every card already
/// recorded here, so bursts of host notifications cost one lookup per card.
#[derive(Debug, Clone)]
pub struct ScanCache<K> {
    entries: HashMap<K, Mark>,
}

impl<K: Eq + Hash> ScanCache<K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn is_checked(&self, card: &K) -> bool {
        self.entries.contains_key(card)
    }

    pub fn is_removed(&self, card: &K) -> bool {
        matches!(self.entries.get(card), Some(Mark::Removed))
    }

    /// True when the card was kept with a located label. Cards kept without
    /// one are worth another look once their label renders.
    pub fn has_label(&self, card: &K) -> bool {
        matches!(self.entries.get(card), Some(Mark::Checked { label: Some(_) }))
    }

    /// True when the card was checked and the label observed then matches
    /// `label`. Removed cards always count as current.
    pub fn is_current(&self, card: &K, label: Option<&str>) -> bool {
        match self.entries.get(card) {
            Some(Mark::Removed) => true,
            Some(Mark::Checked { label: seen }) => seen.as_deref() == label,
            None => false,
        }
    }

    /// Record a kept card. Has no effect on a card already removed.
    pub fn mark_checked(&mut self, card: K, label: Option<String>) {
        match self.entries.entry(card) {
            Entry::Occupied(mut slot) => {
                if !matches!(slot.get(), Mark::Removed) {
                    slot.insert(Mark::Checked { label });
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(Mark::Checked { label });
            }
        }
    }

    pub fn mark_removed(&mut self, card: K) {
        self.entries.insert(card, Mark::Removed);
    }

    /// Forget everything; card identities do not survive a navigation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash> Default for ScanCache<K> {
    fn default() -> Self {
        Self::new()
    }
}
