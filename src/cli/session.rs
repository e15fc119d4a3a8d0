use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::error::PhonebookError;
use crate::model::Contact;
use crate::store::PhoneBook;

/// One interactive run: the book being edited, the file it syncs with, and
/// the handles user text flows through. Constructed explicitly by the
/// caller; there is no global state.
///
/// The reader/writer pair is generic so tests can drive a session from a
/// scripted buffer and inspect what it printed.
pub struct Session<R, W> {
    pub book: PhoneBook,
    pub file_path: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(book: PhoneBook, file_path: PathBuf, input: R, output: W) -> Self {
        Self {
            book,
            file_path,
            input,
            output,
        }
    }

    /// Prints `prompt` without a newline and reads one line, stripped of its
    /// line ending. `None` on EOF.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(
            buf.trim_end_matches('\n').trim_end_matches('\r').to_string(),
        ))
    }

    pub fn show(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Renders a recoverable error as its message text. The loop goes on.
    pub fn show_error(&mut self, err: &PhonebookError) -> io::Result<()> {
        writeln!(self.output, "{}", err)
    }

    pub fn show_contacts(&mut self, contacts: &[Contact]) -> io::Result<()> {
        for contact in contacts {
            writeln!(self.output, "{}", contact)?;
        }
        Ok(())
    }
}
