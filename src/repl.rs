//! The interactive command loop.
//!
//! One line in, one reply out. The loop owns the address book for the
//! lifetime of the session and is generic over its input and output so it
//! can be driven from tests.

use crate::book::AddressBook;
use crate::commands::{self, Command};
use crate::config::Config;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, error, info};

pub const PROMPT: &str = ">>>";
pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";

/// What the loop should do after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next line
    Continue(String),
    /// Print the text and stop
    Exit(String),
}

/// A command session over one address book.
#[derive(Debug)]
pub struct Shell {
    book: AddressBook,
    book_file: PathBuf,
}

impl Shell {
    /// Create a session over `book`, using the configured default file for
    /// `save`/`load` without an argument.
    pub fn new(book: AddressBook, config: &Config) -> Self {
        Self {
            book,
            book_file: config.book_file.clone(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Dispatch a single input line.
    pub fn handle(&mut self, line: &str) -> Reply {
        let command = Command::parse(line);
        debug!(?command, "Dispatching");

        let text = match command {
            Command::Hello => GREETING.to_string(),
            Command::Add => commands::add(line, &mut self.book),
            Command::Change => commands::change(line, &mut self.book),
            Command::Remove => commands::remove(line, &mut self.book),
            Command::ShowAll => commands::show_all(&self.book),
            Command::Search => commands::search(line, &self.book),
            Command::Save => commands::save(line, &self.book, &self.book_file)
                .unwrap_or_else(|e| {
                    error!(error = %e, "Save failed");
                    format!("Error: {}", e)
                }),
            Command::Load => commands::load(line, &mut self.book, &self.book_file)
                .unwrap_or_else(|e| {
                    error!(error = %e, "Load failed");
                    format!("Error: {}", e)
                }),
            Command::Exit => return Reply::Exit(FAREWELL.to_string()),
            Command::Unknown => "Invalid command".to_string(),
        };
        Reply::Continue(text)
    }

    /// Run the loop until an exit word or end of input.
    ///
    /// Lines are decoded lossily, so bytes that are not UTF-8 end up as an
    /// unknown command instead of ending the session.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", GREETING)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("End of input");
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            match self.handle(line.trim()) {
                Reply::Continue(text) => writeln!(output, "{}", text)?,
                Reply::Exit(text) => {
                    writeln!(output, "{}", text)?;
                    break;
                }
            }
        }
        Ok(())
    }
}
