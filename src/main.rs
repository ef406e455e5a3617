use crate::{
    master::summary::print_generate_summary,
    types::config::{
        DEFAULT_CONCURRENCY, DEFAULT_OUTPUT, DEFAULT_OWNER, DEFAULT_PLUGINS_DIR, GenerateConfig,
    },
    utils::{
        api::get_release_api_base_url,
        logger::{LogLevel, Logger},
    },
};
use clap::Parser;
use std::path::PathBuf;
use tokio::io;

mod master;
mod types;
mod utils;

#[derive(Parser)]
#[command(name = "pluginmaster")]
#[command(author = "ReiwaTech")]
#[command(version)]
#[command(about = "Aggregates plugin manifests into a single pluginmaster.json")]
struct Cli {
    /// Directory holding one <name>/<name>.json manifest per plugin
    #[arg(long, default_value = DEFAULT_PLUGINS_DIR)]
    plugins_dir: PathBuf,

    /// Master file to write (also read back for LastUpdate history)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Release owner used for download count lookups
    #[arg(long, default_value = DEFAULT_OWNER)]
    owner: String,

    /// Maximum number of release lookups in flight
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_parser = clap::value_parser!(u16).range(1..))]
    concurrency: u16,

    /// Print debug diagnostics
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let logger = Logger::with_verbose(cli.verbose);

    let config = GenerateConfig {
        plugins_dir: cli.plugins_dir,
        output: cli.output,
        owner: cli.owner,
        api_base_url: get_release_api_base_url(),
        concurrency: usize::from(cli.concurrency),
    };

    logger.log_message(
        LogLevel::Debug,
        &format!("Release API: {}", config.api_base_url),
    );

    match master::generate_master(&config, &logger).await {
        Ok(summary) => {
            print_generate_summary(&summary, &config.output, &logger);
            Ok(())
        }
        Err(e) => Err(io::Error::other(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_fixed_defaults() {
        let cli = Cli::try_parse_from(["pluginmaster"]).unwrap();
        assert_eq!(cli.plugins_dir, PathBuf::from(DEFAULT_PLUGINS_DIR));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.owner, DEFAULT_OWNER);
        assert_eq!(cli.concurrency, DEFAULT_CONCURRENCY);
        assert!(!cli.verbose);
    }

    #[test]
    fn concurrency_must_be_positive() {
        assert!(Cli::try_parse_from(["pluginmaster", "--concurrency", "0"]).is_err());
        let cli = Cli::try_parse_from(["pluginmaster", "--concurrency", "4"]).unwrap();
        assert_eq!(usize::from(cli.concurrency), 4);
    }
}
