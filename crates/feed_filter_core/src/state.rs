use crate::PageKind;

/// Scheduling state for scan passes.
///
/// Triggers collapse into at most one pending pass. A pending pass keeps its
/// earliest deadline, so a steady stream of triggers cannot postpone it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanState {
    location: String,
    page: PageKind,
    due_at: Option<u64>,
    passes: u64,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn page(&self) -> PageKind {
        self.page
    }

    /// Deadline of the pending pass, if one is scheduled.
    pub fn due_at(&self) -> Option<u64> {
        self.due_at
    }

    /// Number of passes released so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub(crate) fn navigate(&mut self, location: String) {
        self.page = PageKind::from_location(&location);
        self.location = location;
    }

    pub(crate) fn schedule(&mut self, deadline: u64) {
        self.due_at = Some(match self.due_at {
            Some(pending) => pending.min(deadline),
            None => deadline,
        });
    }

    /// Releases the pending pass if its deadline has been reached.
    pub(crate) fn take_due(&mut self, now_ms: u64) -> bool {
        match self.due_at {
            Some(deadline) if deadline <= now_ms => {
                self.due_at = None;
                self.passes += 1;
                true
            }
            _ => false,
        }
    }
}
