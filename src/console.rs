//! Line-oriented terminal I/O.
//!
//! All prompts go through [`Console`], which reads whole lines from any
//! `BufRead` and writes to any `Write`. Styling uses crossterm's ANSI
//! helpers and is only applied when enabled.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::style::Stylize;

use crate::QuizError;

/// How a line should look when styling is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Failure,
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
    styled: bool,
}

pub type StdConsole = Console<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio(styled: bool) -> Self {
        Console::new(io::stdin().lock(), io::stdout()).styled(styled)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            styled: false,
        }
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Print `message` without a newline and block for one line of input.
    ///
    /// The returned line has its terminator stripped and nothing else;
    /// surrounding whitespace is part of the answer. Bytes that are not
    /// valid UTF-8 are replaced rather than rejected.
    pub fn prompt(&mut self, message: &str) -> Result<String, QuizError> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(QuizError::InputClosed);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    pub fn toned(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        if !self.styled {
            return self.line(text);
        }
        match tone {
            Tone::Plain => self.line(text),
            Tone::Heading => self.line(text.bold()),
            Tone::Success => self.line(text.green()),
            Tone::Failure => self.line(text.red()),
        }
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
