use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Durable client-side settings. Currently a single value: the Apps Script
/// deployment URL the client talks to.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub endpoint_url: String,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Read(io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(serde_json::Error),
    #[error("failed to serialize settings file: {0}")]
    Serialize(serde_json::Error),
    #[error("failed to write settings file: {0}")]
    Write(io::Error),
}

pub fn read_settings_from<P: AsRef<Path>>(path: P) -> Result<Option<Settings>, SettingsError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(path).map_err(SettingsError::Read)?;
    if data.trim().is_empty() {
        return Ok(None);
    }

    let settings = serde_json::from_str::<Settings>(&data).map_err(SettingsError::Parse)?;
    Ok(Some(settings))
}

pub fn write_settings_to<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<(), SettingsError> {
    let path = path.as_ref();
    ensure_parent_dir(path).map_err(SettingsError::Write)?;

    let json = serde_json::to_string_pretty(settings).map_err(SettingsError::Serialize)?;
    fs::write(path, json).map_err(SettingsError::Write)
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        assert!(read_settings_from(&path).unwrap().is_none());
    }

    #[test]
    fn empty_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "  \n").unwrap();
        assert!(read_settings_from(&path).unwrap().is_none());
    }

    #[test]
    fn settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            endpoint_url: "https://script.google.com/macros/s/abc/exec".to_string(),
        };

        write_settings_to(&path, &settings).unwrap();
        let back = read_settings_from(&path).unwrap().unwrap();
        assert_eq!(back.endpoint_url, settings.endpoint_url);
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            read_settings_from(&path),
            Err(SettingsError::Parse(_))
        ));
    }
}
