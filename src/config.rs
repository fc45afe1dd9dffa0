use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SkillcheckError};

/// Package-local config file. Hidden, so never part of the file inventory.
pub const PROJECT_CONFIG_FILE: &str = ".skillcheck.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

impl Config {
    /// Load configuration for the package at `package_root`.
    ///
    /// An explicit path (argument or `SKILLCHECK_CONFIG`) replaces the
    /// global and package-local files. Environment overrides apply last.
    pub fn load(explicit_path: Option<&Path>, package_root: &Path) -> Result<Self> {
        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env_string("SKILLCHECK_CONFIG").map(PathBuf::from));
        Self::load_with_global(explicit.as_deref(), package_root, global_config_path())
    }

    fn load_with_global(
        explicit: Option<&Path>,
        package_root: &Path,
        global: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = explicit {
            let patch = Self::load_patch(path)?.ok_or_else(|| {
                SkillcheckError::Config(format!("config file not found: {}", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = global {
                if let Some(patch) = Self::load_patch(&global)? {
                    config.merge_patch(patch);
                }
            }
            if let Some(patch) = Self::load_patch(&package_root.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(patch);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            SkillcheckError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            SkillcheckError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        debug!(path = %path.display(), "merged config file");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.limits {
            self.limits.merge(patch);
        }
        if let Some(patch) = patch.files {
            self.files.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_usize("SKILLCHECK_MAX_LINES")? {
            self.limits.max_lines = value;
        }
        if let Some(value) = env_usize("SKILLCHECK_MAX_BODY_WORDS")? {
            self.limits.max_body_words = value;
        }
        if let Some(value) = env_usize("SKILLCHECK_MIN_DESCRIPTION_CHARS")? {
            self.limits.min_description_chars = value;
        }
        if let Some(value) = env_usize("SKILLCHECK_MAX_DESCRIPTION_CHARS")? {
            self.limits.max_description_chars = value;
        }
        if let Some(value) = env_usize("SKILLCHECK_MAX_NAME_CHARS")? {
            self.limits.max_name_chars = value;
        }
        if let Some(values) = env_list("SKILLCHECK_EXTRANEOUS_FILES") {
            self.files.extraneous = values;
        }
        Ok(())
    }

    /// Reject limit combinations no document could satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.limits.min_description_chars > self.limits.max_description_chars {
            return Err(SkillcheckError::Config(format!(
                "limits.min_description_chars ({}) exceeds limits.max_description_chars ({})",
                self.limits.min_description_chars, self.limits.max_description_chars
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_lines: usize,
    pub max_body_words: usize,
    pub min_description_chars: usize,
    pub max_description_chars: usize,
    pub max_name_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_lines: 500,
            max_body_words: 5000,
            min_description_chars: 50,
            max_description_chars: 1024,
            max_name_chars: 64,
        }
    }
}

impl LimitsConfig {
    fn merge(&mut self, patch: LimitsPatch) {
        if let Some(value) = patch.max_lines {
            self.max_lines = value;
        }
        if let Some(value) = patch.max_body_words {
            self.max_body_words = value;
        }
        if let Some(value) = patch.min_description_chars {
            self.min_description_chars = value;
        }
        if let Some(value) = patch.max_description_chars {
            self.max_description_chars = value;
        }
        if let Some(value) = patch.max_name_chars {
            self.max_name_chars = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Base names flagged as extraneous anywhere in the package.
    pub extraneous: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extraneous: [
                "README.md",
                "INSTALLATION_GUIDE.md",
                "QUICK_REFERENCE.md",
                "CHANGELOG.md",
                "CONTRIBUTING.md",
                "SETUP.md",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl FilesConfig {
    fn merge(&mut self, patch: FilesPatch) {
        if let Some(values) = patch.extraneous {
            self.extraneous = values;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub limits: Option<LimitsPatch>,
    pub files: Option<FilesPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LimitsPatch {
    pub max_lines: Option<usize>,
    pub max_body_words: Option<usize>,
    pub min_description_chars: Option<usize>,
    pub max_description_chars: Option<usize>,
    pub max_name_chars: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FilesPatch {
    pub extraneous: Option<Vec<String>>,
}

fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skillcheck/config.toml"))
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse::<usize>().map(Some).map_err(|err| {
            SkillcheckError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_list(key: &str) -> Option<Vec<String>> {
    std::env::var(key).ok().map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToString::to_string)
            .collect()
    })
}
