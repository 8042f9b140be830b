use feed_filter_core::{update, Effect, FilterConfig, Msg, PageKind, ScanState};
use scan_logging::scan_debug;

use crate::host::FeedDocument;
use crate::scanner::FeedScanner;
use crate::types::PassReport;

/// Feeds host events through the scheduler and runs the passes it releases.
pub struct ScanSession {
    state: ScanState,
    scanner: FeedScanner,
    config: FilterConfig,
}

impl ScanSession {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            state: ScanState::new(),
            scanner: FeedScanner::new(),
            config,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn scanner(&self) -> &FeedScanner {
        &self.scanner
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Apply one host message and execute the resulting effects against `doc`.
    pub fn dispatch<D>(&mut self, msg: Msg, doc: &mut D) -> Vec<PassReport>
    where
        D: FeedDocument + ?Sized,
    {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let mut reports = Vec::new();
        for effect in effects {
            match effect {
                Effect::ResetCache => self.scanner.reset(),
                Effect::RunPass { page } => {
                    let current = PageKind::from_location(doc.location());
                    if current != page {
                        scan_debug!("pass scheduled for {:?} runs on {:?}", page, current);
                    }
                    reports.push(self.scanner.scan(doc, &self.config));
                }
            }
        }
        reports
    }

    /// Tick until the pending pass, if any, has run.
    pub fn flush<D>(&mut self, doc: &mut D) -> Vec<PassReport>
    where
        D: FeedDocument + ?Sized,
    {
        match self.state.due_at() {
            Some(now_ms) => self.dispatch(Msg::Tick { now_ms }, doc),
            None => Vec::new(),
        }
    }
}
