//! Async readline input handling for the REPL.
//!
//! Wraps `rustyline_async::Readline` to provide async line reading with
//! proper handling of EOF (Ctrl+D) and interrupt (Ctrl+C) signals.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (trimmed).
    Message(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Async input handler wrapping rustyline_async.
pub struct ReplInput {
    rl: Readline,
    prompt: String,
}

impl ReplInput {
    /// Create an input handler showing `prompt` for commands.
    ///
    /// The returned `SharedWriter` must be kept alive for as long as the
    /// input is read.
    pub fn new(prompt: &str) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt.to_string())?;
        Ok((
            Self {
                rl,
                prompt: prompt.to_string(),
            },
            stdout,
        ))
    }

    /// Read the next command line.
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => InputEvent::Message(line.trim().to_string()),
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Ask for one value under a temporary prompt.
    ///
    /// Returns `None` if the user pressed Ctrl+C or Ctrl+D, which cancels
    /// the command being filled in.
    pub async fn read_field(&mut self, label: &str) -> Option<String> {
        let _ = self.rl.update_prompt(label);
        let event = self.read_line().await;
        let _ = self.rl.update_prompt(&self.prompt);

        match event {
            InputEvent::Message(value) => Some(value),
            InputEvent::Eof | InputEvent::Interrupted => None,
        }
    }
}
