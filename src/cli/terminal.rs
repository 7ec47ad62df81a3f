use crate::errors::AppError;
use std::io::{self, BufRead, Write};

/// Line-oriented prompt over any reader/writer pair.
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn print(&mut self, text: &str) -> Result<(), AppError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Next input line without its line ending, `None` once input is exhausted.
    pub fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }

        let trimmed_len = input.trim_end_matches(['\n', '\r']).len();
        input.truncate(trimmed_len);
        Ok(Some(input))
    }

    /// Prints `prompt` and reads the answer. Exhausted input reads as blank.
    pub fn get_input(&mut self, prompt: &str) -> Result<String, AppError> {
        self.print(prompt)?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
