use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use feed_filter_core::{AmbiguityPolicy, FilterConfig};
use log::LevelFilter;
use scan_logging::LogDestination;

/// Location assumed for a snapshot when none is given.
pub const DEFAULT_LOCATION: &str = "https://www.youtube.com/";

#[derive(Parser, Debug)]
#[command(name = "feed-filter")]
#[command(about = "Remove low-view videos from saved video feed pages")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::File, global = true)]
    pub log: LogTarget,

    /// Minimum level that gets logged
    #[arg(long, default_value = "info", global = true)]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter a saved feed page and report what was removed
    Scan(ScanArgs),

    /// Show how count labels are read and judged
    Parse(ParseArgs),

    /// Write a config file with the default settings
    Init(InitArgs),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

/// Flags that override single fields of the loaded config.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOverrides {
    /// Minimum view count a video needs to stay
    #[arg(long)]
    pub threshold: Option<u64>,

    /// Also remove videos whose count cannot be read
    #[arg(long)]
    pub aggressive: bool,

    /// Leave the regular video feeds alone
    #[arg(long)]
    pub no_videos: bool,

    /// Leave the short-form player alone
    #[arg(long)]
    pub no_shorts: bool,

    /// Reclassify kept videos whose label changed
    #[arg(long)]
    pub recheck: bool,
}

impl FilterOverrides {
    pub fn apply(&self, config: &mut FilterConfig) {
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if self.aggressive {
            config.policy = AmbiguityPolicy::Aggressive;
        }
        if self.no_videos {
            config.videos_filtering = false;
        }
        if self.no_shorts {
            config.shorts_filtering = false;
        }
        if self.recheck {
            config.recheck_on_label_change = true;
        }
    }
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Saved HTML page to filter
    pub input: PathBuf,

    /// URL the page was saved from; decides which feed rules apply
    #[arg(short, long, default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Charset of the saved page, when known
    #[arg(long)]
    pub charset: Option<String>,

    /// RON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: FilterOverrides,

    /// Extra passes to run after the first, one per simulated scroll
    #[arg(long, default_value_t = 0)]
    pub rescans: u32,

    /// Write the filtered page here
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the JSON report here instead of stdout
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Count labels such as "1.2K views"
    #[arg(required = true)]
    pub labels: Vec<String>,

    /// RON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: FilterOverrides,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the config
    #[arg(default_value = "feed_filter.ron")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
