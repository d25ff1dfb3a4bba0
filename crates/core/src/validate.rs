use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::constants::endpoint;
use crate::types::Lead;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2,3}-\d{3,4}-\d{4}$").expect("valid phone pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`{0}` is not a valid absolute URL")]
    MalformedUrl(String),
    #[error("unexpected host `{0}`; deployed scripts are served from script.google.com")]
    UnexpectedHost(String),
    #[error("unexpected path `{0}`; expected a /macros/s/<id>/exec deployment URL")]
    UnexpectedPath(String),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("phone number `{0}` does not match the 010-1234-5678 format")]
    InvalidPhone(String),
}

/// Check that `url` points at an executable Apps Script web-app deployment.
pub fn validate_endpoint_url(url: &str) -> Result<(), ValidationError> {
    let parsed =
        Url::parse(url.trim()).map_err(|_| ValidationError::MalformedUrl(url.to_string()))?;

    if parsed.host_str() != Some(endpoint::EXPECTED_HOST) {
        return Err(ValidationError::UnexpectedHost(
            parsed.host_str().unwrap_or_default().to_string(),
        ));
    }

    let path = parsed.path();
    if !path.contains(endpoint::SCRIPT_PATH_SEGMENT) || !path.ends_with(endpoint::EXEC_SUFFIX) {
        return Err(ValidationError::UnexpectedPath(path.to_string()));
    }

    Ok(())
}

/// Check a lead before it goes anywhere near the network.
pub fn validate_lead(lead: &Lead) -> Result<(), ValidationError> {
    if lead.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if lead.phone.trim().is_empty() {
        return Err(ValidationError::MissingField("phone"));
    }
    if lead.service.trim().is_empty() {
        return Err(ValidationError::MissingField("service"));
    }
    if lead.contact_preference.trim().is_empty() {
        return Err(ValidationError::MissingField("contact preference"));
    }
    if !PHONE_RE.is_match(lead.phone.trim()) {
        return Err(ValidationError::InvalidPhone(lead.phone.clone()));
    }
    Ok(())
}

/// Insert hyphens into a bare 10- or 11-digit phone number. Anything else is
/// returned unchanged.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        11 => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
        10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => raw.trim().to_string(),
    }
}
