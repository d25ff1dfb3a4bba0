mod commands;
mod reporter;
mod util;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{cache, config, endpoint, entries, submit, test};
use leadsheet_core::{ApiClient, ConfigStore};
use reporter::ConsoleReporter;

#[derive(Parser, Debug)]
#[command(
    name = "leadsheet",
    version,
    about = "Collect and manage sales leads in a Google Sheets backend",
    author = "Leadsheet Contributors"
)]
struct Cli {
    /// Override the Apps Script endpoint for this run (env: LEADSHEET_ENDPOINT_URL)
    #[arg(long, global = true, env = "LEADSHEET_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show or change the backend endpoint URL.
    Endpoint(endpoint::EndpointArgs),
    /// Submit a new lead.
    Submit(submit::SubmitArgs),
    /// List previously submitted leads.
    Entries(entries::EntriesArgs),
    /// Test connectivity against the endpoint.
    Test(test::TestArgs),
    /// Show the effective application configuration.
    Config(config::ConfigArgs),
    /// Inspect or clear the response cache.
    Cache(cache::CacheArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let reporter = ConsoleReporter::new();

    let mut store = ConfigStore::open()?;
    if let Some(url) = cli.endpoint_url {
        store.override_endpoint_url(url);
    }

    match cli.command {
        Commands::Endpoint(args) => endpoint::run(&mut store, &reporter, args),
        Commands::Cache(args) => cache::run(&store, &reporter, args),
        Commands::Submit(args) => submit::run(&ApiClient::new(&store), &reporter, args),
        Commands::Entries(args) => entries::run(&ApiClient::new(&store), &reporter, args),
        Commands::Test(args) => test::run(&ApiClient::new(&store), &reporter, args),
        Commands::Config(args) => config::run(&ApiClient::new(&store), &reporter, args),
    }?;

    Ok(())
}
