//! Application configuration module
//!
//! Settings are stored with `confy` in the OS-specific config directory.
//! History and drafts live under the data directory from `directories`.

use crate::compare::{AlignmentPolicy, CompareOptions, EmptyInputGuard, EngineLimits};
use crate::constant::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_JSON_INDENT, DEFAULT_MAX_INPUT_BYTES,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the application data directory
    /// Falls back to a local "data" directory if platform dirs are unavailable
    pub fn data_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from("data")
        }
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// "light" or "dark"
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(default)]
    pub compare: CompareSettings,

    #[serde(default)]
    pub json: JsonSettings,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_font_size() -> f32 {
    14.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font_size: default_font_size(),
            compare: CompareSettings::default(),
            json: JsonSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareSettings {
    /// Policy selected at startup
    #[serde(default)]
    pub policy: AlignmentPolicy,

    /// Overrides the guard that comes with the selected policy
    #[serde(default)]
    pub empty_guard: Option<EmptyInputGuard>,

    /// Overrides whether the selected policy records history
    #[serde(default)]
    pub record_history: Option<bool>,

    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    /// 0 disables the deadline
    #[serde(default)]
    pub diff_timeout_ms: u64,
}

fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

impl Default for CompareSettings {
    fn default() -> Self {
        Self {
            policy: AlignmentPolicy::default(),
            empty_guard: None,
            record_history: None,
            max_input_bytes: default_max_input_bytes(),
            diff_timeout_ms: 0,
        }
    }
}

impl CompareSettings {
    /// Options for `policy`: its preset with any configured overrides applied.
    pub fn options_for(&self, policy: AlignmentPolicy) -> CompareOptions {
        let mut options = match policy {
            AlignmentPolicy::Padded => CompareOptions::padded(),
            AlignmentPolicy::Filtered => CompareOptions::filtered(),
        };
        if let Some(guard) = self.empty_guard {
            options.empty_guard = guard;
        }
        if let Some(record) = self.record_history {
            options.record_history = record;
        }
        options
    }

    pub fn limits(&self) -> EngineLimits {
        EngineLimits {
            max_input_bytes: self.max_input_bytes,
            timeout: (self.diff_timeout_ms > 0).then(|| Duration::from_millis(self.diff_timeout_ms)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSettings {
    /// Spaces per nesting level when formatting
    #[serde(default = "default_json_indent")]
    pub indent: usize,
}

fn default_json_indent() -> usize {
    DEFAULT_JSON_INDENT
}

impl Default for JsonSettings {
    fn default() -> Self {
        Self {
            indent: default_json_indent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_follow_policy() {
        let settings = CompareSettings::default();
        assert_eq!(
            settings.options_for(AlignmentPolicy::Padded),
            CompareOptions::padded()
        );
        assert_eq!(
            settings.options_for(AlignmentPolicy::Filtered),
            CompareOptions::filtered()
        );
    }

    #[test]
    fn overrides_replace_preset_values() {
        let settings = CompareSettings {
            empty_guard: Some(EmptyInputGuard::BothEmpty),
            record_history: Some(false),
            ..CompareSettings::default()
        };
        let options = settings.options_for(AlignmentPolicy::Padded);
        assert_eq!(options.policy, AlignmentPolicy::Padded);
        assert_eq!(options.empty_guard, EmptyInputGuard::BothEmpty);
        assert!(!options.record_history);
    }

    #[test]
    fn timeout_zero_means_none() {
        let mut settings = CompareSettings::default();
        assert_eq!(settings.limits().timeout, None);
        settings.diff_timeout_ms = 250;
        assert_eq!(settings.limits().timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"compare":{"policy":"filtered"}}"#).unwrap();
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.json.indent, 2);
        assert_eq!(settings.compare.policy, AlignmentPolicy::Filtered);
        assert_eq!(settings.compare.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }
}
