//! User settings, persisted as TOML in the platform config directory.
//!
//! - macOS: ~/Library/Application Support/com.dyntable.Dynamic-Table/
//! - Windows: %APPDATA%/dyntable/Dynamic Table/config/
//! - Linux: ~/.config/dynamictable/

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use dyntable_core::Label1Policy;
use dyntable_model::{DEFAULT_OPTIONS, OptionSet, TableState};
use dyntable_persistence::STORAGE_KEY;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "dyntable";
const APP_NAME: &str = "Dynamic Table";
const CONFIG_FILENAME: &str = "settings.toml";

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub editing: EditingSettings,
    pub vocabulary: VocabularySettings,
}

/// Where the table snapshot lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the snapshot. Platform data directory when unset.
    pub data_dir: Option<PathBuf>,
    /// Key the snapshot is stored under.
    pub key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingSettings {
    pub label1_policy: PolicySetting,
}

/// Serializable wrapper for [`Label1Policy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicySetting {
    #[default]
    Reject,
    Permit,
}

impl From<PolicySetting> for Label1Policy {
    fn from(setting: PolicySetting) -> Self {
        match setting {
            PolicySetting::Reject => Self::Reject,
            PolicySetting::Permit => Self::Permit,
        }
    }
}

/// Vocabularies used when no snapshot exists yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularySettings {
    pub column1: Vec<String>,
    pub column2: Vec<String>,
}

impl Default for VocabularySettings {
    fn default() -> Self {
        let defaults: Vec<String> = DEFAULT_OPTIONS.iter().map(|s| (*s).to_string()).collect();
        Self {
            column1: defaults.clone(),
            column2: defaults,
        }
    }
}

impl VocabularySettings {
    /// Fresh table state seeded from these vocabularies.
    ///
    /// A vocabulary with blank or repeated entries falls back to the built-in
    /// default.
    pub fn initial_state(&self) -> TableState {
        TableState::with_options(
            vocabulary_or_default("column1", &self.column1),
            vocabulary_or_default("column2", &self.column2),
        )
    }
}

fn vocabulary_or_default(name: &str, values: &[String]) -> OptionSet {
    match OptionSet::try_from_values(values.iter().cloned()) {
        Ok(set) => set,
        Err(e) => {
            tracing::warn!("Invalid {} vocabulary in settings: {}, using defaults", name, e);
            DEFAULT_OPTIONS.iter().copied().collect()
        }
    }
}

impl Settings {
    /// Directory the snapshot is read from and written to.
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.storage.data_dir.clone().or_else(|| {
            ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
                .map(|dirs| dirs.data_dir().to_path_buf())
        })
    }
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from the platform settings file.
///
/// Returns default settings if the file is missing or unparsable, or the
/// platform directory cannot be determined.
pub fn load_settings() -> Settings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => {
            tracing::warn!("Could not determine settings path, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from a specific file with the same fallbacks as
/// [`load_settings`].
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}
