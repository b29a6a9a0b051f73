//! One interactive conversation.
//!
//! The session owns the loop policy: blank lines are skipped, exit commands
//! end the conversation, and a failed turn is reported as a [`Turn::Fault`]
//! so the caller can print it and keep going. Reading and printing lines is
//! left to the caller.

use log::warn;
use serde::Serialize;

use super::bot::Chatbot;

/// Result of feeding one line to a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Turn {
    /// Nothing to say (blank line).
    Skip,
    /// The chatbot's reply.
    Reply(String),
    /// The user asked to leave; carries the farewell message.
    Exit(String),
    /// The turn failed; carries the error message. The session continues.
    Fault(String),
}

impl Turn {
    /// Whether the session should stop after this turn.
    pub fn is_exit(&self) -> bool {
        matches!(self, Turn::Exit(_))
    }
}

/// An interactive conversation with a [`Chatbot`].
#[derive(Debug)]
pub struct Session<'a> {
    bot: &'a Chatbot,
    turns: usize,
    faults: usize,
    finished: bool,
}

impl<'a> Session<'a> {
    /// Start a session.
    pub fn new(bot: &'a Chatbot) -> Self {
        Session {
            bot,
            turns: 0,
            faults: 0,
            finished: false,
        }
    }

    /// Handle one line of user input.
    pub fn respond(&mut self, line: &str) -> Turn {
        if self.finished {
            return Turn::Exit(self.bot.config().farewell.clone());
        }

        let input = line.trim();
        if input.is_empty() {
            return Turn::Skip;
        }
        if self.bot.config().is_exit_command(input) {
            return self.end();
        }

        self.turns += 1;
        match self.bot.get_response(input) {
            Ok(reply) => Turn::Reply(reply),
            Err(e) => self.fault(e.to_string()),
        }
    }

    /// Handle one raw line as read from a byte stream. A line that is not
    /// valid UTF-8 fails only its own turn.
    pub fn respond_bytes(&mut self, line: &[u8]) -> Turn {
        match std::str::from_utf8(line) {
            Ok(text) => self.respond(text),
            Err(_) if self.finished => self.respond(""),
            Err(e) => {
                self.turns += 1;
                self.fault(format!("input is not valid UTF-8: {e}"))
            }
        }
    }

    fn fault(&mut self, message: String) -> Turn {
        self.faults += 1;
        warn!("turn {} failed: {message}", self.turns);
        Turn::Fault(message)
    }

    /// End the session (end of input or an exit command).
    pub fn end(&mut self) -> Turn {
        self.finished = true;
        Turn::Exit(self.bot.config().farewell.clone())
    }

    /// Number of answered or failed turns so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Number of failed turns so far.
    pub fn faults(&self) -> usize {
        self.faults
    }

    /// Whether the session has ended.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
