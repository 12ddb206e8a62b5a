// Settings persistence

use super::{Settings, SettingsError};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "swordman";
const SETTINGS_FILE: &str = "settings.json";

/// Where settings live between runs
pub trait SettingsStore {
    /// Read stored settings; `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Settings>, SettingsError>;

    /// Persist settings
    fn save(&mut self, settings: &Settings) -> Result<(), SettingsError>;
}

/// Settings stored as pretty-printed JSON on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at an explicit path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store in the platform's user config directory
    pub fn in_config_dir() -> Result<Self, SettingsError> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::new(dir.join(APP_DIR).join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Settings>, SettingsError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        Ok(Some(settings))
    }

    fn save(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        log::debug!("Settings written to {}", self.path.display());
        Ok(())
    }
}

/// Settings kept in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    stored: Option<Settings>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `settings`
    pub fn with(settings: Settings) -> Self {
        Self {
            stored: Some(settings),
            saves: 0,
        }
    }

    pub fn stored(&self) -> Option<&Settings> {
        self.stored.as_ref()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Settings>, SettingsError> {
        Ok(self.stored.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        self.stored = Some(settings.clone());
        self.saves += 1;
        Ok(())
    }
}
