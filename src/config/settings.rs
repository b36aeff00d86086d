//! Extension settings backed by a config file.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use xdg::BaseDirectories;

use super::{Config, FolderPosition};
use crate::errors::Result;

/// On-disk settings. Every key is optional and falls back to its default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub folder_position: FolderPosition,
    pub sort_folder_contents: bool,
    pub logging_enabled: bool,
    pub folder_children: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            folder_position: FolderPosition::Top,
            sort_folder_contents: false,
            logging_enabled: false,
            folder_children: Vec::new(),
        }
    }
}

impl Settings {
    /// Load the settings file, writing a default one on first run.
    ///
    /// # Errors
    ///
    /// Errors if the config file cannot be placed, read, parsed or created.
    pub fn load() -> Result<Self> {
        let path =
            BaseDirectories::with_prefix("appgrid-order")?.place_config_file("config.toml")?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            let settings = Self::default();
            fs::write(&path, toml::to_string(&settings)?)?;
            Ok(settings)
        }
    }

    /// # Errors
    ///
    /// Errors if the file cannot be read or is not valid TOML.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

impl Config for Settings {
    fn folder_position(&self) -> FolderPosition {
        self.folder_position
    }

    fn sort_folder_contents(&self) -> bool {
        self.sort_folder_contents
    }

    fn logging_enabled(&self) -> bool {
        self.logging_enabled
    }

    fn folder_children(&self) -> Vec<String> {
        self.folder_children.clone()
    }
}
