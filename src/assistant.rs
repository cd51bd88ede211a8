//! The interactive assistant loop.
//!
//! Reads one command per line, runs it against the address book and writes
//! the reply. Generic over its input and output so sessions can be driven
//! from memory in tests and from stdin/stdout in the binary.

use crate::book::AddressBook;
use crate::commands::{execute_line, render_error, Outcome};
use crate::config::Config;
use crate::error::{BookError, BookResult};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Greeting printed once at the start of a session.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before every command.
pub const PROMPT: &str = "Enter a command: ";

/// A single assistant session over a line reader and a writer.
pub struct Assistant<R, W> {
    reader: R,
    writer: W,
    book: AddressBook,
    config: Config,
}

impl<R, W> Assistant<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a session with an empty address book.
    pub fn new(reader: R, writer: W, config: Config) -> Self {
        Self {
            reader,
            writer,
            book: AddressBook::new(),
            config,
        }
    }

    /// Start the session from an existing address book.
    pub fn with_book(mut self, book: AddressBook) -> Self {
        self.book = book;
        self
    }

    /// Run until `close`/`exit` or end of input, returning the address book.
    ///
    /// Command errors and lines that are not valid UTF-8 are printed and the
    /// loop continues; only I/O errors end the session early.
    pub async fn run(mut self) -> BookResult<AddressBook> {
        self.write_line(WELCOME).await?;

        let mut buf = Vec::new();
        loop {
            self.writer.write_all(PROMPT.as_bytes()).await?;
            self.writer.flush().await?;

            buf.clear();
            if self.reader.read_until(b'\n', &mut buf).await? == 0 {
                info!("input closed, ending session");
                break;
            }

            while matches!(buf.last(), Some(b'\n' | b'\r')) {
                buf.pop();
            }
            if buf.is_empty() {
                continue;
            }

            let input = match std::str::from_utf8(&buf) {
                Ok(input) => input,
                Err(err) => {
                    warn!(error = %err, "input line is not valid UTF-8");
                    self.write_line(&render_error(&BookError::InvalidEncoding)).await?;
                    continue;
                }
            };

            match execute_line(&mut self.book, input, &self.config) {
                Ok(Outcome::Exit(message)) => {
                    self.write_line(&message).await?;
                    info!(contacts = self.book.len(), "session ended by user");
                    break;
                }
                Ok(Outcome::Reply(message)) => {
                    debug!(contacts = self.book.len(), "command completed");
                    self.write_line(&message).await?;
                }
                Err(BookError::Validation(invalid)) => {
                    warn!(input = invalid.input(), error = %invalid, "validation failed");
                    self.write_line(&render_error(&invalid.into())).await?;
                }
                Err(err) => {
                    warn!(error = %err, "command failed");
                    self.write_line(&render_error(&err)).await?;
                }
            }
        }

        self.writer.flush().await?;
        Ok(self.book)
    }

    async fn write_line(&mut self, text: &str) -> BookResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        Ok(())
    }
}

/// Run a session with an empty address book.
pub async fn run_session<R, W>(reader: R, writer: W, config: Config) -> BookResult<AddressBook>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    Assistant::new(reader, writer, config).run().await
}
