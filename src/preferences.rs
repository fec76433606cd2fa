//! Editor preferences.
//!
//! Stands in for Unity's `EditorPrefs`: a flat string key/value store with typed
//! accessors that fall back to documented defaults when a key is unset.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::APP_DIRECTORY_NAME;
use crate::error::{IoContext, JsonContext, ZedResult, ZedUnityError};

/// Explicitly configured Zed executable
pub const EDITOR_PATH_KEY: &str = "zed_unity.editor_path";
/// The host's currently selected external editor, may be any editor
pub const CURRENT_EDITOR_PATH_KEY: &str = "zed_unity.current_editor_path";
/// Whether asset changes trigger project regeneration
pub const SYNC_ON_CHANGE_KEY: &str = "zed_unity.sync_on_change";

const PREFERENCES_FILE_NAME: &str = "preferences.json";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> ZedResult<()>;
    fn remove(&mut self, key: &str) -> ZedResult<()>;

    /// Defaults to none; empty values count as unset
    fn editor_path(&self) -> Option<String> {
        self.get(EDITOR_PATH_KEY).filter(|p| !p.is_empty())
    }

    fn set_editor_path(&mut self, path: &str) -> ZedResult<()> {
        self.set(EDITOR_PATH_KEY, path)
    }

    /// Defaults to none; empty values count as unset
    fn current_editor_path(&self) -> Option<String> {
        self.get(CURRENT_EDITOR_PATH_KEY).filter(|p| !p.is_empty())
    }

    fn set_current_editor_path(&mut self, path: &str) -> ZedResult<()> {
        self.set(CURRENT_EDITOR_PATH_KEY, path)
    }

    /// Defaults to true; anything but `false` counts as enabled
    fn sync_on_change(&self) -> bool {
        self.get(SYNC_ON_CHANGE_KEY)
            .map(|v| !v.trim().eq_ignore_ascii_case("false"))
            .unwrap_or(true)
    }

    fn set_sync_on_change(&mut self, enabled: bool) -> ZedResult<()> {
        self.set(SYNC_ON_CHANGE_KEY, if enabled { "true" } else { "false" })
    }
}

/// In-memory store, used when nothing needs to outlive the process
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> ZedResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> ZedResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store persisted as a flat JSON object, rewritten on every change
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonPreferenceStore {
    /// Loads the store; a missing file means every key is unset
    pub fn open(path: PathBuf) -> ZedResult<Self> {
        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_io_context(|| format!("Failed to read preferences {}", path.display()))?;
            serde_json::from_str::<BTreeMap<String, String>>(&content)
                .with_json_context(|| format!("Failed to parse preferences {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// `{config_dir}/ZedUnity/preferences.json`
    pub fn default_path() -> ZedResult<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or(ZedUnityError::NoDataDirectory { kind: "config" })?;
        Ok(config_dir.join(APP_DIRECTORY_NAME).join(PREFERENCES_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> ZedResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_io_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.values)
            .with_json_context(|| "Failed to serialize preferences".to_string())?;
        fs::write(&self.path, json)
            .with_io_context(|| format!("Failed to write preferences {}", self.path.display()))
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> ZedResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> ZedResult<()> {
        if self.values.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}
