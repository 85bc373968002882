// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::{
    app::Options,
    input::Input,
    settings::{Format, Mode, Settings},
};

// ---

/// Dump tokens or blocks of lightweight markup documents.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// What to print for each document [default: from configuration].
    #[arg(long, short, env = "TOKDUMP_MODE", value_enum)]
    pub mode: Option<Mode>,

    /// Output format [default: from configuration].
    #[arg(long, short, env = "TOKDUMP_FORMAT", value_enum)]
    pub format: Option<Format>,

    /// Do not print byte offsets.
    #[arg(long, short = 'P')]
    pub no_positions: bool,

    /// Configuration file to load on top of the defaults.
    #[arg(long, env = "TOKDUMP_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Files to process, use '-' for standard input.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Merges command line options over the loaded settings.
    pub fn options(&self, settings: &Settings) -> Options {
        Options {
            mode: self.mode.unwrap_or(settings.mode),
            format: self.format.unwrap_or(settings.format),
            positions: settings.positions && !self.no_positions,
        }
    }

    /// Returns the inputs to process, standard input if no files are given.
    pub fn inputs(&self) -> Vec<Input> {
        if self.files.is_empty() {
            return vec![Input::Stdin];
        }
        self.files.iter().cloned().map(Input::from_arg).collect()
    }
}

#[cfg(test)]
mod tests;
