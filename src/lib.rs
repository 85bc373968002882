// public modules
pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod settings;

// public uses
pub use app::{App, Options};
pub use error::{Error, Result};
pub use input::Input;
pub use settings::{Format, Mode, Settings};
