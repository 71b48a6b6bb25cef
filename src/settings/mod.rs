//! Persisted defaults for generation.

mod file;

use serde::{Deserialize, Serialize};

use crate::pass::Configuration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub number_of_passwords: usize,
    pub generator: Configuration,
}

impl Settings {
    pub fn load_from_file() -> anyhow::Result<Self> {
        file::load(&file::default_path())
    }

    pub fn save_to_file(&self) -> anyhow::Result<()> {
        file::save(self, &file::default_path())
    }

    pub fn path() -> std::path::PathBuf {
        file::default_path()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number_of_passwords: 1,
            generator: Configuration::default(),
        }
    }
}
