use clap::Args;
use owo_colors::OwoColorize;

use leadsheet_core::ApiClient;

use crate::commands::{CommandOutcome, CommandResult};
use crate::reporter::ConsoleReporter;
use crate::util::create_spinner;

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {}

/// Render the effective application configuration: remote when reachable,
/// the built-in defaults otherwise.
pub fn run(client: &ApiClient, reporter: &ConsoleReporter, _args: ConfigArgs) -> CommandResult {
    let pb = create_spinner("Loading configuration...");
    let config = client.fetch_app_config();
    pb.finish_and_clear();

    let branding = &config.branding;
    if !branding.brand_name.is_empty() {
        reporter.info(format!("{}", branding.brand_name.blue().bold()));
    }
    if !branding.landing_title.is_empty() {
        reporter.info(&branding.landing_title);
    }
    if !branding.landing_subtitle.is_empty() {
        reporter.info(format!("{}", branding.landing_subtitle.dimmed()));
    }
    reporter.blank();

    if !config.features.is_empty() {
        reporter.info(format!("{}", "Features".yellow().bold()));
        for feature in &config.features {
            reporter.info(format!("  {}", feature.title.green()));
            reporter.info(format!("    {}", feature.description.clone().dimmed()));
        }
        reporter.blank();
    }

    reporter.info(format!("{}", "Form fields".yellow().bold()));
    let fields = &config.forms.fields;
    for (key, field) in [
        ("name", &fields.name),
        ("phone", &fields.phone),
        ("service", &fields.service),
        ("contactPreference", &fields.contact_preference),
        ("memo", &fields.memo),
    ] {
        let required = if field.required { " (required)" } else { "" };
        reporter.info(format!("  {}{}", key.green(), required.dimmed()));
        if !field.label.is_empty() {
            reporter.info(format!("    {}", field.label));
        }
        if !field.options.is_empty() {
            reporter.info(format!(
                "    {} {}",
                "Options:".blue(),
                field.options.join(", ")
            ));
        }
    }

    if !branding.footer_text.is_empty() {
        reporter.blank();
        reporter.info(format!("{}", branding.footer_text.dimmed()));
    }
    Ok(CommandOutcome::Completed)
}
