use feed_filter_core::{is_bad_short, FilterConfig, PageKind, ScanCache, Verdict};
use scan_logging::{scan_debug, scan_info, scan_warn};

use crate::host::{CardId, FeedDocument, HostError};
use crate::inspect::{read_card, reel_label, CardReading};
use crate::layout::{CardLayout, CARD_LAYOUTS, REEL};
use crate::locate::locate_label;
use crate::types::{CardOutcome, PassReport};

/// Walks the current document once per pass and applies verdicts.
///
/// Decisions come from [`read_card`]; this type only enumerates cards, keeps
/// the scan cache and issues the host side effects.
#[derive(Debug, Default)]
pub struct FeedScanner {
    cache: ScanCache<CardId>,
    passes: u64,
}

/// Result of looking at one card, computed while the document is borrowed.
enum Step {
    Skip,
    Decide {
        reading: CardReading,
        target: Option<CardId>,
    },
}

impl FeedScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &ScanCache<CardId> {
        &self.cache
    }

    /// Forget all markers. Called when the host navigates to a new document.
    pub fn reset(&mut self) {
        self.cache.clear();
    }

    /// Run one pass over `doc`.
    pub fn scan<D>(&mut self, doc: &mut D, config: &FilterConfig) -> PassReport
    where
        D: FeedDocument + ?Sized,
    {
        self.passes += 1;
        scan_logging::set_scan_pass(self.passes);

        let page = PageKind::from_location(doc.location());
        let mut report = PassReport::new(self.passes, page);

        if page.is_excluded() {
            scan_debug!("{:?} page is never filtered", page);
            return report;
        }

        match page {
            PageKind::Shorts if config.shorts_filtering => self.scan_shorts(doc, &mut report),
            PageKind::Shorts => scan_debug!("shorts filtering disabled"),
            _ if config.videos_filtering => self.scan_videos(doc, page, config, &mut report),
            _ => scan_debug!("video filtering disabled"),
        }

        scan_info!(
            "{:?}: seen={} skipped={} kept={} removed={} failures={} advanced={}",
            page,
            report.seen,
            report.skipped,
            report.kept,
            report.removed,
            report.failures,
            report.advanced
        );
        report
    }

    fn scan_videos<D>(
        &mut self,
        doc: &mut D,
        page: PageKind,
        config: &FilterConfig,
        report: &mut PassReport,
    ) where
        D: FeedDocument + ?Sized,
    {
        let layouts = CARD_LAYOUTS
            .iter()
            .filter(|layout| !layout.watch_only || page == PageKind::Watch);

        for layout in layouts {
            // Earlier removals in this pass may have detached some of these.
            for card in doc.query(&layout.selector) {
                report.seen += 1;
                match self.inspect(&*doc, card, layout, config) {
                    Step::Skip => report.skipped += 1,
                    Step::Decide { reading, target } => {
                        let outcome = self.apply(doc, card, layout, reading, target);
                        match (&outcome.failure, outcome.decision.verdict) {
                            (Some(_), _) => report.failures += 1,
                            (None, Verdict::Remove) => report.removed += 1,
                            (None, _) => report.kept += 1,
                        }
                        report.outcomes.push(outcome);
                    }
                }
            }
        }
    }

    fn inspect<D>(&self, doc: &D, card: CardId, layout: &CardLayout, config: &FilterConfig) -> Step
    where
        D: FeedDocument + ?Sized,
    {
        let Some(element) = doc.element(card) else {
            return Step::Skip;
        };

        if self.cache.is_removed(&card) {
            return Step::Skip;
        }
        if self.cache.is_checked(&card) {
            if !config.recheck_on_label_change && self.cache.has_label(&card) {
                return Step::Skip;
            }
            let label = locate_label(element).map(|found| found.text);
            if self.cache.is_current(&card, label.as_deref()) {
                return Step::Skip;
            }
            scan_debug!("label changed on a {} card, rechecking", layout.name);
        }

        Step::Decide {
            reading: read_card(element, config),
            target: layout.removal_target(element),
        }
    }

    fn apply<D>(
        &mut self,
        doc: &mut D,
        card: CardId,
        layout: &CardLayout,
        reading: CardReading,
        target: Option<CardId>,
    ) -> CardOutcome
    where
        D: FeedDocument + ?Sized,
    {
        let CardReading { decision, label } = reading;
        let mut failure = None;

        if decision.verdict == Verdict::Remove {
            let removed = target
                .ok_or(HostError::NoContainer(card))
                .and_then(|target| doc.remove(target));
            match removed {
                Ok(()) => scan_debug!(
                    "removed {} card ({}): {:?}",
                    layout.name,
                    decision.reason,
                    label.as_ref().map(|l| l.text.as_str())
                ),
                Err(err) => {
                    scan_warn!("could not remove {} card: {}", layout.name, err);
                    failure = Some(err.to_string());
                }
            }
            // Not retried either way.
            self.cache.mark_removed(card);
        } else {
            self.cache
                .mark_checked(card, label.as_ref().map(|l| l.text.clone()));
        }

        CardOutcome {
            card,
            layout: layout.name,
            label_strategy: label.as_ref().map(|l| l.strategy),
            label: label.map(|l| l.text),
            decision,
            failure,
        }
    }

    fn scan_shorts<D>(&mut self, doc: &mut D, report: &mut PassReport)
    where
        D: FeedDocument + ?Sized,
    {
        let Some(reel_selector) = REEL.as_ref() else {
            return;
        };

        let mut advance = false;
        for reel in doc.query(reel_selector) {
            if !doc.is_active(reel) {
                continue;
            }
            report.seen += 1;
            if self.cache.is_checked(&reel) {
                report.skipped += 1;
                continue;
            }
            let label = doc.element(reel).and_then(reel_label);
            if is_bad_short(label.as_deref()) {
                scan_debug!("bad short: {:?}", label);
                advance = true;
            }
            self.cache.mark_checked(reel, label);
        }

        if advance {
            match doc.advance() {
                Ok(()) => report.advanced = true,
                Err(err) => {
                    scan_warn!("could not advance past short: {}", err);
                    report.failures += 1;
                }
            }
        }
    }
}
