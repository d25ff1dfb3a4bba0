use clap::{Args, Subcommand};
use dialoguer::{Input, theme::ColorfulTheme};
use owo_colors::OwoColorize;

use leadsheet_core::constants::endpoint as endpoint_constants;
use leadsheet_core::{ApiClient, ConfigStore, StoreError};

use crate::commands::{CommandOutcome, CommandResult};
use crate::reporter::ConsoleReporter;
use crate::util::create_spinner;

#[derive(Args, Debug)]
pub struct EndpointArgs {
    #[command(subcommand)]
    pub command: Option<EndpointCommand>,
}

#[derive(Subcommand, Debug)]
pub enum EndpointCommand {
    /// Print the configured endpoint URL.
    Show,
    /// Validate and persist a new endpoint URL.
    Set {
        /// Apps Script deployment URL; prompted for when omitted.
        url: Option<String>,
    },
}

pub fn run(
    store: &mut ConfigStore,
    reporter: &ConsoleReporter,
    args: EndpointArgs,
) -> CommandResult {
    match args.command.unwrap_or(EndpointCommand::Show) {
        EndpointCommand::Show => {
            if store.endpoint_url().is_empty() {
                reporter.warn("No endpoint configured.");
                reporter.info(format!(
                    "Set one with: {}",
                    "leadsheet endpoint set <url>".dimmed()
                ));
            } else {
                reporter.info(store.endpoint_url());
            }
            Ok(CommandOutcome::Completed)
        }
        EndpointCommand::Set { url } => {
            let url = match url {
                Some(url) => url,
                None => Input::<String>::with_theme(&ColorfulTheme::default())
                    .with_prompt("Apps Script deployment URL")
                    .interact_text()?,
            };

            match store.set_endpoint_url(&url) {
                Ok(()) => {}
                Err(StoreError::Invalid(err)) => {
                    reporter.error(format!("Invalid endpoint URL: {err}"));
                    reporter.info(format!(
                        "Expected something like {}",
                        endpoint_constants::EXAMPLE_URL.dimmed()
                    ));
                    return Ok(CommandOutcome::NoOp);
                }
                Err(err @ StoreError::Settings(_)) => return Err(err.into()),
            }
            reporter.success("Endpoint saved. Cached responses were cleared.");

            let pb = create_spinner("Checking connection...");
            let client = ApiClient::new(store);
            let result = client.test_connection();
            pb.finish_and_clear();
            match result {
                Ok(response) => reporter.status(
                    true,
                    response.message.as_deref().unwrap_or("API connection OK"),
                ),
                Err(err) => reporter.status(false, format!("Connection check failed: {err}")),
            }
            Ok(CommandOutcome::Completed)
        }
    }
}
