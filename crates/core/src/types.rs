use serde::{Deserialize, Serialize};

use crate::constants::api;

/// Remote application configuration document served by `getConfig`.
///
/// Every field is optional on the wire; partial documents deserialize with
/// empty defaults so a trimmed-down backend config still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub branding: Branding,
    #[serde(default)]
    pub forms: FormsConfig,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub landing_title: String,
    #[serde(default)]
    pub landing_subtitle: String,
    #[serde(default)]
    pub footer_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormsConfig {
    #[serde(default)]
    pub submitting_message: String,
    #[serde(default)]
    pub success_message: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub fields: FormFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    #[serde(default)]
    pub name: FieldSpec,
    #[serde(default)]
    pub phone: FieldSpec,
    #[serde(default)]
    pub service: FieldSpec,
    #[serde(default)]
    pub contact_preference: FieldSpec,
    #[serde(default)]
    pub memo: FieldSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// A lead record as collected from the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub contact_preference: String,
    #[serde(default)]
    pub memo: String,
}

/// Wire payload for the `submitLead` action: the action tag plus the lead
/// fields flattened alongside it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLeadPayload<'a> {
    pub action: &'static str,
    #[serde(flatten)]
    pub lead: &'a Lead,
}

impl Lead {
    pub fn submit_payload(&self) -> SubmitLeadPayload<'_> {
        SubmitLeadPayload {
            action: api::ACTION_SUBMIT_LEAD,
            lead: self,
        }
    }
}

/// Envelope the backend returns for `submitLead`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        self.status == api::STATUS_SUCCESS
    }
}

/// Response body of `getEntries`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntriesResponse {
    #[serde(default)]
    pub rows: Vec<EntryRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EntryRow {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub contact_preference: String,
    #[serde(default)]
    pub memo: String,
}

/// Response body of the `test` probe.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TestResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
