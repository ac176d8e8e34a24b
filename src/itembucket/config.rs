use crate::error::{IbError, Result};
use crate::store::fs::DEFAULT_FILE_NAME;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = ".ibconfig.json";

/// Environment variable that overrides the storage directory.
pub const HOME_ENV: &str = "IB_HOME";

/// Configuration for itembucket, stored next to the data in `.ibconfig.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IbConfig {
    /// Name of the storage file inside the storage directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for IbConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl IbConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(IbError::Io)?;
        let config: IbConfig = serde_json::from_str(&content).map_err(IbError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(IbError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(IbError::Serialization)?;
        fs::write(config_path, content).map_err(IbError::Io)?;
        Ok(())
    }

    pub fn get_file_name(&self) -> &str {
        &self.file_name
    }

    /// Set the storage file name. It must be a bare file name, not a path.
    pub fn set_file_name(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        let is_bare = Path::new(name).file_name().map(|n| n == name).unwrap_or(false);
        if name.is_empty() || !is_bare {
            return Err(IbError::Api(format!("Invalid file name: '{}'", name)));
        }
        self.file_name = name.to_string();
        Ok(())
    }

    /// Look up a value by its user-facing key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "file-name" => Some(self.file_name.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "file-name" => self.set_file_name(value),
            _ => Err(unknown_key(key)),
        }
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![("file-name", self.file_name.clone())]
    }

    pub fn config_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILENAME)
    }
}

pub(crate) fn unknown_key(key: &str) -> IbError {
    IbError::Api(format!("Unknown config key: {}", key))
}

/// Pick the storage directory: explicit flag, then `IB_HOME`, then the
/// user's home directory.
pub fn resolve_storage_dir(flag: Option<PathBuf>, env: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = env.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| IbError::Api("Could not determine home directory".to_string()))
}
