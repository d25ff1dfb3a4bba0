use anyhow::Context;
use clap::{Args, Subcommand};

use leadsheet_core::ConfigStore;

use crate::commands::{CommandOutcome, CommandResult};
use crate::reporter::ConsoleReporter;

#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: Option<CacheCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Print the cache location and entry TTL.
    Info,
    /// Remove all cached API responses.
    Clear {
        /// Confirm cache deletion without interactive prompt.
        #[arg(long, short = 'y', alias = "yes")]
        force: bool,
    },
}

pub fn run(store: &ConfigStore, reporter: &ConsoleReporter, args: CacheArgs) -> CommandResult {
    match args.command.unwrap_or(CacheCommand::Info) {
        CacheCommand::Info => {
            reporter.info(format!("Cache directory: {}", store.cache_dir().display()));
            reporter.info(format!("Entry TTL: {}s", store.cache_ttl().as_secs()));
            Ok(CommandOutcome::Completed)
        }
        CacheCommand::Clear { force } => {
            if !force {
                reporter.warn("Cache not cleared. Re-run with `--force` to confirm deletion.");
                return Ok(CommandOutcome::NoOp);
            }

            store.clear_cache().context("failed to clear cache")?;
            reporter.info("Cached responses removed.");
            Ok(CommandOutcome::Completed)
        }
    }
}
