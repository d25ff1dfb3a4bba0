use clap::Args;
use owo_colors::OwoColorize;

use leadsheet_core::ApiClient;

use crate::commands::{CommandOutcome, CommandResult};
use crate::reporter::ConsoleReporter;
use crate::util::create_spinner;

#[derive(Args, Debug, Clone, Default)]
pub struct TestArgs {}

pub fn run(client: &ApiClient, reporter: &ConsoleReporter, _args: TestArgs) -> CommandResult {
    if !client.has_endpoint() {
        reporter.error("No endpoint configured.");
        reporter.info(format!(
            "Run {} first.",
            "leadsheet endpoint set <url>".dimmed()
        ));
        return Ok(CommandOutcome::NoOp);
    }

    let pb = create_spinner("Testing connection...");
    let result = client.test_connection();
    pb.finish_and_clear();

    match result {
        Ok(response) => {
            reporter.status(
                true,
                response.message.as_deref().unwrap_or("API connection OK"),
            );
            Ok(CommandOutcome::Completed)
        }
        Err(err) => {
            reporter.status(false, format!("Connection failed: {err}"));
            Ok(CommandOutcome::NoOp)
        }
    }
}
