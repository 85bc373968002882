// std imports
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

// local imports
use crate::error::{Error, Result};

// ---

/// Input is a reference to a document to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Creates an input from a command line argument, where `-` means standard input.
    pub fn from_arg(arg: PathBuf) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg)
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Reads the whole document into memory.
    pub fn read(&self) -> Result<String> {
        log::debug!("reading {}", self.name());
        let result = match self {
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin().lock().read_to_string(&mut buf).map(|_| buf)
            }
            Self::File(path) => fs::read_to_string(path),
        };

        result.map_err(|source| Error::ReadInput {
            name: self.name(),
            source,
        })
    }
}
