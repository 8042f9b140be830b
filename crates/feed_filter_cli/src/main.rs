use anyhow::Result;
use clap::Parser;
use feed_filter_cli::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    scan_logging::initialize(cli.log.into(), cli.log_level);

    match cli.command {
        Commands::Scan(args) => feed_filter_cli::run::scan_run(args),
        Commands::Parse(args) => feed_filter_cli::run::parse_run(args),
        Commands::Init(args) => feed_filter_cli::config::init(args),
    }
}
