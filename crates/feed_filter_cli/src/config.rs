//! RON config files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use feed_filter_core::FilterConfig;
use feed_filter_engine::write_atomically;
use scan_logging::scan_info;

use crate::cli::InitArgs;

/// Config from `path`, or the defaults when no path is given.
///
/// Missing fields in the file take their default values. A path that cannot
/// be read or parsed is an error rather than a silent fallback.
pub fn load_config(path: Option<&Path>) -> Result<FilterConfig> {
    let Some(path) = path else {
        return Ok(FilterConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: FilterConfig =
        ron::from_str(&content).with_context(|| format!("parsing config {}", path.display()))?;
    scan_info!("Loaded config from {:?}", path);
    Ok(config)
}

pub fn render_config(config: &FilterConfig) -> Result<String> {
    let pretty = ron::ser::PrettyConfig::new();
    ron::ser::to_string_pretty(config, pretty).context("serializing config")
}

/// `feed-filter init`
pub fn init(args: InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists; pass --force to overwrite",
            args.path.display()
        );
    }
    let content = render_config(&FilterConfig::default())?;
    write_atomically(&args.path, &content)
        .with_context(|| format!("writing config {}", args.path.display()))?;
    println!("Wrote {}", args.path.display());
    Ok(())
}
