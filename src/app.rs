// std imports
use std::io::Write;

// third-party imports
use serde::Serialize;

// local imports
use crate::{
    error::{Error, Result},
    input::Input,
    settings::{Format, Mode, Settings},
};

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub format: Format,
    pub positions: bool,
}

impl From<Settings> for Options {
    fn from(settings: Settings) -> Self {
        Self {
            mode: settings.mode,
            format: settings.format,
            positions: settings.positions,
        }
    }
}

// ---

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Reads each input and dumps it to `output`.
    ///
    /// In plain format, each document is preceded by its name if there is more than one input.
    pub fn run(&self, inputs: &[Input], output: &mut impl Write) -> Result<()> {
        for (i, input) in inputs.iter().enumerate() {
            let text = input.read()?;
            if inputs.len() > 1 && self.options.format == Format::Plain {
                if i != 0 {
                    writeln!(output)?;
                }
                writeln!(output, "==> {} <==", input.name())?;
            }
            self.dump(&input.name(), &text, output)?;
        }
        Ok(())
    }

    /// Dumps a single document named `name` to `output`.
    pub fn dump(&self, name: &str, text: &str, output: &mut impl Write) -> Result<()> {
        let result = match self.options.mode {
            Mode::Tokens => self.dump_tokens(text, output),
            Mode::Blocks => self.dump_blocks(text, output),
        };

        match result {
            Err(Failure::Document(source)) => Err(Error::Document {
                name: name.to_owned(),
                source,
            }),
            Err(Failure::Output(err)) => Err(err),
            Ok(()) => Ok(()),
        }
    }

    fn dump_tokens(&self, text: &str, output: &mut impl Write) -> std::result::Result<(), Failure> {
        for token in adoc::tokenize(text) {
            let token = token.map_err(adoc::Error::from)?;
            let record = TokenRecord {
                pos: self.options.positions.then_some(token.pos),
                kind: token.kind().map_or("eof", |kind| kind.as_str()),
                text: token.text(),
            };
            self.write(output, &record, |output| {
                if let Some(pos) = record.pos {
                    write!(output, "{pos:>6} ")?;
                }
                writeln!(output, "{:<8} {:?}", record.kind, record.text)
            })?;
        }
        Ok(())
    }

    fn dump_blocks(&self, text: &str, output: &mut impl Write) -> std::result::Result<(), Failure> {
        for block in adoc::blocks(text) {
            let block = block?;
            let pos = self.options.positions.then_some(block.pos());
            let record = match &block {
                adoc::Block::Header { title, .. } => BlockRecord::Header {
                    pos,
                    level: block.level().unwrap_or_default(),
                    title: title.text(),
                },
                adoc::Block::Paragraph(_) => BlockRecord::Paragraph {
                    pos,
                    text: &text[block.span()],
                },
            };
            self.write(output, &record, |output| {
                if let Some(pos) = pos {
                    write!(output, "{pos:>6} ")?;
                }
                match &record {
                    BlockRecord::Header { level, title, .. } => {
                        writeln!(output, "{:<12} {:?}", format!("header({level})"), title)
                    }
                    BlockRecord::Paragraph { text, .. } => writeln!(output, "{:<12} {:?}", "paragraph", text),
                }
            })?;
        }
        Ok(())
    }

    fn write<W, R, F>(&self, output: &mut W, record: &R, plain: F) -> Result<()>
    where
        W: Write,
        R: Serialize,
        F: FnOnce(&mut W) -> std::io::Result<()>,
    {
        match self.options.format {
            Format::Plain => plain(output)?,
            Format::Json => {
                json::to_writer(&mut *output, record)?;
                writeln!(output)?;
            }
        }
        Ok(())
    }
}

// ---

enum Failure {
    Document(adoc::Error),
    Output(Error),
}

impl From<adoc::Error> for Failure {
    fn from(err: adoc::Error) -> Self {
        Self::Document(err)
    }
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        Self::Output(err)
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pos: Option<usize>,
    kind: &'static str,
    text: &'a str,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum BlockRecord<'a> {
    Header {
        #[serde(skip_serializing_if = "Option::is_none")]
        pos: Option<usize>,
        level: usize,
        title: &'a str,
    },
    Paragraph {
        #[serde(skip_serializing_if = "Option::is_none")]
        pos: Option<usize>,
        text: &'a str,
    },
}
