use std::fs;

use anyhow::{Context, Result};
use feed_filter_core::{
    classify, parse_count, Evidence, FilterConfig, Msg, ParsedCount, TriggerSource,
};
use feed_filter_engine::{decode_snapshot, write_atomically, HtmlFeed, PassReport, ScanSession};
use scan_logging::scan_info;
use serde::Serialize;

use crate::cli::{ParseArgs, ScanArgs};
use crate::config::load_config;

/// Gap between simulated scroll triggers.
const RESCAN_INTERVAL_MS: u64 = 1_000;

/// JSON report printed by `feed-filter scan`.
#[derive(Debug, Serialize)]
pub struct ScanSummary {
    pub location: String,
    pub encoding: String,
    pub config: FilterConfig,
    pub removed: usize,
    pub failures: usize,
    pub advances: usize,
    pub passes: Vec<PassReport>,
}

/// Run the scheduler over a loaded snapshot: one navigation, then `rescans`
/// scroll-end triggers, flushing after each.
pub fn filter_snapshot(
    feed: &mut HtmlFeed,
    location: &str,
    config: FilterConfig,
    rescans: u32,
) -> Vec<PassReport> {
    let mut session = ScanSession::new(config);
    let mut reports = session.dispatch(
        Msg::Navigated {
            location: location.to_string(),
            at_ms: 0,
        },
        feed,
    );
    reports.extend(session.flush(feed));

    for round in 1..=u64::from(rescans) {
        let trigger = Msg::Triggered {
            source: TriggerSource::ScrollEnd,
            at_ms: round * RESCAN_INTERVAL_MS,
        };
        reports.extend(session.dispatch(trigger, feed));
        reports.extend(session.flush(feed));
    }
    reports
}

/// `feed-filter scan`
pub fn scan_run(args: ScanArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    args.overrides.apply(&mut config);

    let bytes = fs::read(&args.input)
        .with_context(|| format!("reading snapshot {}", args.input.display()))?;
    let decoded = decode_snapshot(&bytes, args.charset.as_deref())
        .with_context(|| format!("decoding snapshot {}", args.input.display()))?;
    scan_info!(
        "Loaded {:?} ({} bytes, {})",
        args.input,
        bytes.len(),
        decoded.encoding_label
    );

    let mut feed = HtmlFeed::parse(&decoded.html, args.location.clone());
    let passes = filter_snapshot(&mut feed, &args.location, config.clone(), args.rescans);

    let summary = ScanSummary {
        location: args.location,
        encoding: decoded.encoding_label,
        config,
        removed: passes.iter().map(|p| p.removed).sum(),
        failures: passes.iter().map(|p| p.failures).sum(),
        advances: feed.advances(),
        passes,
    };

    if let Some(output) = &args.output {
        write_atomically(output, &feed.html())
            .with_context(|| format!("writing filtered page {}", output.display()))?;
        scan_info!("Wrote filtered page to {:?}", output);
    }

    let json = serde_json::to_string_pretty(&summary).context("serializing report")?;
    match &args.report {
        Some(path) => write_atomically(path, &json)
            .with_context(|| format!("writing report {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

/// One line of `feed-filter parse` output.
pub fn describe_label(label: &str, config: &FilterConfig) -> String {
    let count = match parse_count(label) {
        ParsedCount::Count(value) => value.to_string(),
        ParsedCount::Unknown => "unknown".to_string(),
    };
    let evidence = Evidence {
        restricted: false,
        label: Some(label),
    };
    let decision = classify(&evidence, config.threshold, config.policy);
    format!("{label:?}\t{count}\t{:?} ({})", decision.verdict, decision.reason)
}

/// `feed-filter parse`
pub fn parse_run(args: ParseArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    args.overrides.apply(&mut config);

    for label in &args.labels {
        println!("{}", describe_label(label, &config));
    }
    Ok(())
}
