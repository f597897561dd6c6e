use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::EnumResult;
use crate::core::multi::MultiSelectEnum;
use crate::core::single::SingleSelectEnum;
use crate::core::vocabulary::Vocabulary;

/// One enumerated option as written in an option file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OptionDecl {
    pub name: String,
    /// Declaration string, e.g. `"first=1 second=2"`.
    pub declaration: String,
    /// Whether the option takes a list of names instead of one.
    #[serde(default)]
    pub multi: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Retired name -> replacement.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub deprecated: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OptionFile {
    pub version: String,
    #[serde(default)]
    pub options: Vec<OptionDecl>,
}

impl Default for OptionFile {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            options: Vec::new(),
        }
    }
}

/// On-disk formats understood for option files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    /// Picks the format from the file extension; anything unknown is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            _ => FileFormat::Toml,
        }
    }
}

/// An option whose declaration, deprecations and value have all been checked.
#[derive(Debug, Clone)]
pub enum BoundOption {
    Single(SingleSelectEnum),
    Multi(MultiSelectEnum),
}

impl BoundOption {
    pub fn vocabulary(&self) -> &Vocabulary {
        match self {
            BoundOption::Single(choice) => choice.vocabulary().as_ref(),
            BoundOption::Multi(choices) => choices.vocabulary().as_ref(),
        }
    }

    /// Whether `name` is part of the current value.
    pub fn is_selected(&self, name: &str) -> bool {
        match self {
            BoundOption::Single(choice) => choice == name,
            BoundOption::Multi(choices) => choices.contains(name),
        }
    }
}

impl fmt::Display for BoundOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundOption::Single(choice) => write!(f, "{choice}"),
            BoundOption::Multi(choices) => {
                let names: Vec<&str> = choices.iter().collect();
                write!(f, "{}", names.join(" "))
            }
        }
    }
}

impl OptionDecl {
    /// Builds the vocabulary, registers every deprecation, then assigns
    /// `value` if there is one.
    pub fn bind(&self) -> EnumResult<BoundOption> {
        let vocabulary = Vocabulary::shared(&self.declaration)?;
        for (old, new) in &self.deprecated {
            vocabulary.deprecate(old, new)?;
        }

        let value = self.value.as_deref();
        if self.multi {
            MultiSelectEnum::new(vocabulary, value).map(BoundOption::Multi)
        } else {
            SingleSelectEnum::new(vocabulary, value).map(BoundOption::Single)
        }
    }
}

impl OptionFile {
    pub fn from_str_as(content: &str, format: FileFormat) -> Result<Self> {
        match format {
            FileFormat::Toml => toml::from_str(content).context("Failed to parse TOML option file"),
            FileFormat::Yaml => {
                serde_yaml::from_str(content).context("Failed to parse YAML option file")
            }
            FileFormat::Json => {
                serde_json::from_str(content).context("Failed to parse JSON option file")
            }
        }
    }

    pub fn to_string_as(&self, format: FileFormat) -> Result<String> {
        match format {
            FileFormat::Toml => toml::to_string_pretty(self).context("Failed to serialize to TOML"),
            FileFormat::Yaml => serde_yaml::to_string(self).context("Failed to serialize to YAML"),
            FileFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize to JSON")
            }
        }
    }

    /// Binds every option in file order, stopping at the first failure.
    pub fn bind(&self) -> Result<Vec<(String, BoundOption)>> {
        self.options
            .iter()
            .map(|decl| {
                let bound = decl
                    .bind()
                    .with_context(|| format!("Option '{}' is invalid", decl.name))?;
                Ok((decl.name.clone(), bound))
            })
            .collect()
    }
}

/// Reads and writes an option file at a fixed path.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Writes a default option file unless one already exists.
    /// Returns whether a file was created.
    pub fn initialize(&self) -> Result<bool> {
        if self.config_path.exists() {
            return Ok(false);
        }

        self.save_config(&OptionFile::default())?;
        Ok(true)
    }

    pub fn format(&self) -> FileFormat {
        FileFormat::from_path(&self.config_path)
    }
}

pub trait ConfigProvider {
    fn load_config(&self) -> Result<OptionFile>;
    fn save_config(&self, config: &OptionFile) -> Result<()>;
    fn get_config_path(&self) -> &Path;
}

impl ConfigProvider for ConfigManager {
    fn load_config(&self) -> Result<OptionFile> {
        let content = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read option file {}", self.config_path.display())
        })?;

        OptionFile::from_str_as(&content, self.format())
    }

    fn save_config(&self, config: &OptionFile) -> Result<()> {
        let content = config.to_string_as(self.format())?;

        fs::write(&self.config_path, content).context("Failed to write option file")?;

        Ok(())
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}
