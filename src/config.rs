use crate::word::CaseMode;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted player settings. `keyboard_enabled` and `volume` are
/// preferences the front-end consumes; the core treats keyboard and
/// pointer input identically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub case_mode: CaseMode,
    pub keyboard_enabled: bool,
    pub volume: f32,
    pub total_rounds: usize,
    pub excluded_characters: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_mode: CaseMode::Upper,
            keyboard_enabled: false,
            volume: 0.5,
            total_rounds: 5,
            excluded_characters: vec!["naruto".to_string()],
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "chalkspell") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("chalkspell_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg;
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
