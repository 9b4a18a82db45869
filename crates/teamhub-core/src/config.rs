use crate::error::{Result, TeamHubError};
use crate::paths;
use crate::store::JsonFileStore;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// File name under `.teamhub/`.
    #[serde(default = "default_store_file")]
    pub file: String,
}

fn default_store_file() -> String {
    paths::DEFAULT_STORE_FILE.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file: default_store_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    #[serde(default = "default_true")]
    pub skip_intro_when_empty: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            skip_intro_when_empty: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_true")]
    pub newest_first: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { newest_first: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_version() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            store: StoreConfig::default(),
            wizard: WizardConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}

impl Config {
    /// Load `<root>/.teamhub/config.yaml`. A missing file means defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        match crate::io::read_if_exists(&path)? {
            Some(data) => Ok(serde_yaml::from_str(&data)?),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// The team store this config points at. Refuses to build one while
    /// `validate` reports an error, so a `store.file` such as
    /// `../elsewhere.json` never escapes `.teamhub/`.
    pub fn store(&self, root: &Path) -> Result<JsonFileStore> {
        if let Some(w) = self
            .validate()
            .into_iter()
            .find(|w| w.level == WarnLevel::Error)
        {
            return Err(TeamHubError::InvalidConfig(w.message));
        }
        Ok(JsonFileStore::in_root(root, self.store.file.trim()))
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let file = self.store.file.trim();
        if file.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "store.file is empty".to_string(),
            });
        } else if file.contains('/') || file.contains('\\') || file == "." || file == ".." {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("store.file '{file}' must be a plain file name"),
            });
        } else if !file.ends_with(".json") {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("store.file '{file}' does not end in .json"),
            });
        }

        if self.version != default_version() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("unknown config version {}", self.version),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
