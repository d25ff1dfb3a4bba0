use crate::types::{AppConfig, Branding, Feature, FieldSpec, FormFields, FormsConfig};

/// Compiled-in application configuration used whenever the remote document
/// cannot be fetched. Same shape as a full `getConfig` response.
pub fn default_app_config() -> AppConfig {
    AppConfig {
        branding: Branding {
            brand_name: "Spreadsheet Automation".to_string(),
            landing_title: "Collect and manage leads with nothing but Google Sheets".to_string(),
            landing_subtitle:
                "Leave a phone number and what you are interested in, and we will prepare a \
                 tailored consultation and get right back to you."
                    .to_string(),
            footer_text: "Spreadsheet Automation. All rights reserved.".to_string(),
        },
        forms: FormsConfig {
            submitting_message: "Submitting...".to_string(),
            success_message: "Your request has been received. We will be in touch shortly!"
                .to_string(),
            error_message: "Submission failed. Please try again.".to_string(),
            fields: FormFields {
                name: FieldSpec {
                    label: "Name *".to_string(),
                    placeholder: "Jane Doe".to_string(),
                    required: true,
                    ..FieldSpec::default()
                },
                phone: FieldSpec {
                    label: "Phone *".to_string(),
                    placeholder: "010-1234-5678".to_string(),
                    required: true,
                    pattern: Some(r"^\d{2,3}-\d{3,4}-\d{4}$".to_string()),
                    ..FieldSpec::default()
                },
                service: FieldSpec {
                    label: "Service of interest *".to_string(),
                    placeholder: "Pick a service".to_string(),
                    required: true,
                    options: vec![
                        "Data collection automation".to_string(),
                        "Sales lead management".to_string(),
                        "Marketing campaign tracking".to_string(),
                        "Custom dashboard setup".to_string(),
                    ],
                    ..FieldSpec::default()
                },
                contact_preference: FieldSpec {
                    label: "Preferred contact method *".to_string(),
                    placeholder: "Pick a contact method".to_string(),
                    required: true,
                    options: vec![
                        "Phone call".to_string(),
                        "Online meeting".to_string(),
                        "Email reply".to_string(),
                    ],
                    ..FieldSpec::default()
                },
                memo: FieldSpec {
                    label: "Anything else we should know?".to_string(),
                    placeholder: "Preferred schedule, context, or questions.".to_string(),
                    rows: Some(4),
                    ..FieldSpec::default()
                },
            },
        },
        features: vec![
            Feature {
                title: "Up and running in ten minutes".to_string(),
                description: "A single Apps Script deployment starts collecting data with no \
                              server of your own."
                    .to_string(),
            },
            Feature {
                title: "Built for team collaboration".to_string(),
                description: "Anyone with access to the sheet can browse fresh leads and leave \
                              notes."
                    .to_string(),
            },
            Feature {
                title: "Plugs into your dashboards".to_string(),
                description: "Connect Looker Studio or any BI tool directly to the backing \
                              spreadsheet."
                    .to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_fully_populated() {
        let config = default_app_config();
        assert!(!config.branding.brand_name.is_empty());
        assert!(!config.forms.success_message.is_empty());
        assert!(config.forms.fields.name.required);
        assert!(!config.forms.fields.service.options.is_empty());
        assert!(!config.forms.fields.contact_preference.options.is_empty());
        assert_eq!(config.features.len(), 3);
    }

    #[test]
    fn default_document_round_trips_as_json() {
        let config = default_app_config();
        let json = serde_json::to_value(&config).unwrap();
        let back: AppConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
