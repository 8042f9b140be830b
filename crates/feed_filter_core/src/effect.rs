use crate::PageKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Drop all scan markers; the document was replaced.
    ResetCache,
    /// Run one scan pass over the current document.
    RunPass { page: PageKind },
}
