use clap::Args;
use owo_colors::OwoColorize;

use leadsheet_core::ApiClient;
use leadsheet_core::types::EntryRow;

use crate::commands::{CommandOutcome, CommandResult};
use crate::reporter::ConsoleReporter;
use crate::util::create_spinner;

#[derive(Args, Debug, Clone, Default)]
pub struct EntriesArgs {}

pub fn run(client: &ApiClient, reporter: &ConsoleReporter, _args: EntriesArgs) -> CommandResult {
    if !client.has_endpoint() {
        reporter.error("No endpoint configured.");
        reporter.info(format!(
            "Run {} first.",
            "leadsheet endpoint set <url>".dimmed()
        ));
        return Ok(CommandOutcome::NoOp);
    }

    let pb = create_spinner("Loading entries...");
    let result = client.fetch_entries();
    pb.finish_and_clear();
    let entries = result?;

    if entries.rows.is_empty() {
        reporter.info(format!("{}", "No entries yet.".dimmed()));
        return Ok(CommandOutcome::Completed);
    }

    reporter.info(format!(
        "{}",
        format!("{} entries", entries.rows.len()).blue().bold()
    ));
    reporter.blank();
    render_table(reporter, &entries.rows);
    Ok(CommandOutcome::Completed)
}

const HEADERS: [&str; 6] = ["Submitted", "Name", "Phone", "Service", "Contact", "Memo"];

fn render_table(reporter: &ConsoleReporter, rows: &[EntryRow]) {
    let cells: Vec<[&str; 6]> = rows
        .iter()
        .map(|row| {
            [
                row.timestamp.as_str(),
                row.name.as_str(),
                row.phone.as_str(),
                row.service.as_str(),
                row.contact_preference.as_str(),
                row.memo.as_str(),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = HEADERS.map(str::len);
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header = HEADERS
        .iter()
        .zip(widths)
        .map(|(title, width)| format!("{title:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    reporter.info(format!("{}", header.bold()));

    for row in &cells {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        reporter.info(line);
    }
}
