// std imports
use std::include_str;
use std::path::Path;

// third-party imports
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub mode: Mode,
    pub format: Format,
    pub positions: bool,
}

impl Settings {
    /// Loads the embedded defaults, overridden by the configuration file at `path` if it is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        if let Some(path) = path {
            log::debug!("loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Yaml));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Tokens,
            format: Format::Plain,
            positions: true,
        }
    }
}

// ---

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Tokens,
    Blocks,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Plain,
    Json,
}
