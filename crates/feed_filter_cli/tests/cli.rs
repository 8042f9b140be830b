use clap::Parser;
use feed_filter_cli::cli::{Cli, Commands, FilterOverrides, LogTarget, ScanArgs, DEFAULT_LOCATION};
use feed_filter_core::{AmbiguityPolicy, FilterConfig};
use log::LevelFilter;
use pretty_assertions::assert_eq;

#[test]
fn scan_flags_are_captured() {
    let argv = [
        "feed-filter",
        "scan",
        "home.html",
        "--location",
        "https://www.youtube.com/watch?v=abc",
        "--threshold",
        "5000",
        "--aggressive",
        "--rescans",
        "2",
        "--output",
        "filtered.html",
        "--log",
        "both",
        "--log-level",
        "debug",
    ];

    let cli = Cli::parse_from(argv);

    assert_eq!(cli.log, LogTarget::Both);
    assert_eq!(cli.log_level, LevelFilter::Debug);
    match cli.command {
        Commands::Scan(ScanArgs {
            input,
            location,
            overrides,
            rescans,
            output,
            report,
            ..
        }) => {
            assert!(input.ends_with("home.html"));
            assert_eq!(location, "https://www.youtube.com/watch?v=abc");
            assert_eq!(overrides.threshold, Some(5_000));
            assert!(overrides.aggressive);
            assert_eq!(rescans, 2);
            assert!(output.is_some());
            assert!(report.is_none());
        }
        _ => panic!("expected Scan command"),
    }
}

#[test]
fn scan_defaults() {
    let cli = Cli::parse_from(["feed-filter", "scan", "page.html"]);

    assert_eq!(cli.log, LogTarget::File);
    assert_eq!(cli.log_level, LevelFilter::Info);
    match cli.command {
        Commands::Scan(args) => {
            assert_eq!(args.location, DEFAULT_LOCATION);
            assert_eq!(args.overrides, FilterOverrides::default());
            assert_eq!(args.rescans, 0);
        }
        _ => panic!("expected Scan command"),
    }
}

#[test]
fn parse_requires_a_label() {
    assert!(Cli::try_parse_from(["feed-filter", "parse"]).is_err());
}

#[test]
fn overrides_only_touch_given_fields() {
    let mut config = FilterConfig {
        threshold: 250,
        ..FilterConfig::default()
    };
    FilterOverrides::default().apply(&mut config);
    assert_eq!(config.threshold, 250);

    let overrides = FilterOverrides {
        threshold: Some(10_000),
        aggressive: true,
        no_videos: false,
        no_shorts: true,
        recheck: true,
    };
    overrides.apply(&mut config);

    assert_eq!(
        config,
        FilterConfig {
            videos_filtering: true,
            shorts_filtering: false,
            threshold: 10_000,
            policy: AmbiguityPolicy::Aggressive,
            recheck_on_label_change: true,
        }
    );
}
