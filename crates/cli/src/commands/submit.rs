use anyhow::Result;
use clap::Args;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use owo_colors::OwoColorize;

use leadsheet_core::types::FieldSpec;
use leadsheet_core::validate::{normalize_phone, validate_lead};
use leadsheet_core::{ApiClient, Lead};

use crate::commands::{CommandOutcome, CommandResult};
use crate::reporter::ConsoleReporter;
use crate::util::create_spinner;

#[derive(Args, Debug, Clone, Default)]
pub struct SubmitArgs {
    /// Lead name.
    #[arg(long)]
    pub name: Option<String>,
    /// Contact phone number, e.g. 010-1234-5678.
    #[arg(long)]
    pub phone: Option<String>,
    /// Service of interest.
    #[arg(long)]
    pub service: Option<String>,
    /// Preferred contact method.
    #[arg(long = "contact")]
    pub contact_preference: Option<String>,
    /// Free-form memo.
    #[arg(long)]
    pub memo: Option<String>,
}

pub fn run(client: &ApiClient, reporter: &ConsoleReporter, args: SubmitArgs) -> CommandResult {
    if !client.has_endpoint() {
        reporter.error("No endpoint configured.");
        reporter.info(format!(
            "Run {} first.",
            "leadsheet endpoint set <url>".dimmed()
        ));
        return Ok(CommandOutcome::NoOp);
    }

    // Remote config drives the prompts, exactly like it drives the web form.
    let pb = create_spinner("Loading form configuration...");
    let config = client.fetch_app_config();
    pb.finish_and_clear();

    let theme = ColorfulTheme::default();
    let fields = &config.forms.fields;

    let name = resolve_text(args.name, &fields.name, "Name", &theme)?;
    let phone = normalize_phone(&resolve_text(args.phone, &fields.phone, "Phone", &theme)?);
    let service = resolve_choice(args.service, &fields.service, "Service of interest", &theme)?;
    let contact_preference = resolve_choice(
        args.contact_preference,
        &fields.contact_preference,
        "Preferred contact method",
        &theme,
    )?;
    let memo = match args.memo {
        Some(memo) => memo,
        None => Input::<String>::with_theme(&theme)
            .with_prompt(label_or(&fields.memo, "Memo"))
            .allow_empty(true)
            .interact_text()?,
    };

    let lead = Lead {
        name,
        phone,
        service,
        contact_preference,
        memo,
    };
    if let Err(err) = validate_lead(&lead) {
        reporter.error(format!("Not submitted: {err}"));
        return Ok(CommandOutcome::NoOp);
    }

    let pb = create_spinner(message_or(&config.forms.submitting_message, "Submitting..."));
    let result = client.submit_lead(&lead);
    pb.finish_and_clear();

    match result {
        Ok(response) if response.is_success() => {
            let message = response
                .message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| {
                    message_or(&config.forms.success_message, "Your request has been received.")
                });
            reporter.success(message);
            Ok(CommandOutcome::Completed)
        }
        Ok(response) => {
            let message = response
                .error
                .filter(|error| !error.trim().is_empty())
                .unwrap_or_else(|| {
                    message_or(&config.forms.error_message, "Submission failed.")
                });
            reporter.error(message);
            Ok(CommandOutcome::NoOp)
        }
        Err(err) => Err(err.into()),
    }
}

fn label_or(field: &FieldSpec, fallback: &str) -> String {
    let label = field.label.trim().trim_end_matches('*').trim();
    if label.is_empty() {
        fallback.to_string()
    } else {
        label.to_string()
    }
}

fn message_or(message: &str, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

fn resolve_text(
    value: Option<String>,
    field: &FieldSpec,
    fallback_label: &str,
    theme: &ColorfulTheme,
) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::with_theme(theme)
            .with_prompt(label_or(field, fallback_label))
            .interact_text()?),
    }
}

fn resolve_choice(
    value: Option<String>,
    field: &FieldSpec,
    fallback_label: &str,
    theme: &ColorfulTheme,
) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    let prompt = label_or(field, fallback_label);
    if field.options.is_empty() {
        return Ok(Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .interact_text()?);
    }

    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&field.options)
        .default(0)
        .interact()?;
    Ok(field.options[index].clone())
}
