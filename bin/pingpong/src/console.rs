// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Console actor: serializes text output from any number of callers.

use std::io::{self, Write};

use actorlib_runtime::{Actor, ActorRef, Result};
use tracing::warn;

/// State owned by the console worker.
pub struct Terminal {
	out: Box<dyn Write + Send>,
}

impl Terminal {
	pub fn new(out: impl Write + Send + 'static) -> Self {
		Self {
			out: Box::new(out),
		}
	}

	pub fn stdout() -> Self {
		Self::new(io::stdout())
	}

	fn print(&mut self, text: String) {
		if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
			warn!(error = %err, "console write failed");
		}
	}
}

/// Address of a console actor.
#[derive(Debug, Clone)]
pub struct Console {
	actor: ActorRef<Terminal>,
}

impl Console {
	pub fn spawn(terminal: Terminal) -> Result<(Actor<Terminal>, Self)> {
		let actor = Actor::spawn("console", terminal)?;
		let console = Self::from(actor.handle());
		Ok((actor, console))
	}

	/// Writes `text` verbatim; no newline is appended.
	pub fn print(&self, text: impl Into<String>) {
		self.actor.post(Terminal::print, (text.into(),));
	}
}

impl From<ActorRef<Terminal>> for Console {
	fn from(actor: ActorRef<Terminal>) -> Self {
		Self {
			actor,
		}
	}
}
