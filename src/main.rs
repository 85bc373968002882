// std imports
use std::io::{self, Write};
use std::process;

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use tokdump::{App, Result, Settings, cli};

// ---

const TOKDUMP_DEBUG_LOG: &str = "TOKDUMP_DEBUG_LOG";
const TOKDUMP_DEBUG_LOG_STYLE: &str = "TOKDUMP_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(TOKDUMP_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(TOKDUMP_DEBUG_LOG).write_style(TOKDUMP_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = cli::Opt::parse();
    let settings = Settings::load(opt.config.as_deref())?;
    log::debug!("settings: {settings:?}");

    let app = App::new(opt.options(&settings));
    let mut output = io::BufWriter::new(io::stdout().lock());
    app.run(&opt.inputs(), &mut output)?;
    output.flush()?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        log::debug!("{err:?}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}
