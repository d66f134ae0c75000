use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use netra_diagnostics::DiagnosticConfig;

/// Default settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "netra.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// CLI settings, currently the diagnostic thresholds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub diagnostics: DiagnosticConfig,
}

/// Load settings. An explicit `--config` path must exist; otherwise
/// `netra.toml` in the working directory is used when present, and defaults
/// apply when it is not.
pub fn load(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(SettingsError::NotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let default = Path::new(SETTINGS_FILE);
            if !default.exists() {
                return Ok(Settings::default());
            }
            default.to_path_buf()
        }
    };

    let contents = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&contents)?;
    tracing::debug!(event = "settings_loaded", path = %path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            "[diagnostics]\nskew_threshold = 3.5\n",
        )
        .expect("parse settings");

        assert_eq!(settings.diagnostics.skew_threshold, 3.5);
        assert_eq!(settings.diagnostics.null_critical_threshold, 0.95);
        assert_eq!(settings.diagnostics.min_rows_for_id_check, 100);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = load(Some(Path::new("/definitely/not/here/netra.toml")));
        assert!(matches!(result, Err(SettingsError::NotFound(_))));
    }
}
