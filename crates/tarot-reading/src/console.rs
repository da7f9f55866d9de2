//! The line-based console a session talks through.
//!
//! The controller only ever sees the [`Console`] trait. [`LineConsole`]
//! implements it over any `BufRead`/`Write` pair, so the binary wires it to
//! stdin/stdout and tests wire it to in-memory buffers.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::error::{ReadingError, ReadingResult};

/// How a line of output should be emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// No emphasis.
    Plain,
    /// Title and subtitle banners.
    Banner,
    /// The reader speaking.
    Dialogue,
    /// Position descriptions and meanings.
    Detail,
    /// The drawn card.
    Highlight,
    /// Input problems reported to the user.
    Warning,
}

/// A line-oriented, blocking text console.
pub trait Console {
    /// Read one line, without its line terminator.
    ///
    /// Returns [`ReadingError::InputClosed`] at end of input.
    fn read_line(&mut self) -> ReadingResult<String>;

    /// Write one line of output.
    fn say(&mut self, tone: Tone, text: &str) -> ReadingResult<()>;

    /// Write a prompt without a line break and flush it.
    fn prompt(&mut self, text: &str) -> ReadingResult<()>;

    /// Write one numbered menu entry.
    fn menu_option(&mut self, number: usize, label: &str) -> ReadingResult<()> {
        self.say(Tone::Dialogue, &format!("  [{number}] {label}"))
    }

    /// Write an empty line.
    fn blank(&mut self) -> ReadingResult<()> {
        self.say(Tone::Plain, "")
    }
}

/// A [`Console`] over a reader and a writer, with optional ANSI colour.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
    styled: bool,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// Create an unstyled console.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            styled: false,
        }
    }

    /// Enable or disable colour output.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Consume the console and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> ReadingResult<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ReadingError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, tone: Tone, text: &str) -> ReadingResult<()> {
        if self.styled {
            writeln!(self.writer, "{}", paint(tone, text))?;
        } else {
            writeln!(self.writer, "{text}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> ReadingResult<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn menu_option(&mut self, number: usize, label: &str) -> ReadingResult<()> {
        if self.styled {
            let key = format!("  [{number}]");
            writeln!(self.writer, "{}{}", key.blue(), format!(" {label}").cyan())?;
            Ok(())
        } else {
            self.say(Tone::Plain, &format!("  [{number}] {label}"))
        }
    }
}

fn paint(tone: Tone, text: &str) -> String {
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Banner | Tone::Highlight | Tone::Warning => text.red().to_string(),
        Tone::Dialogue => text.cyan().to_string(),
        Tone::Detail => text.blue().to_string(),
    }
}
