// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Actor runner.
//!
//! Drives an actor's mailbox on its dedicated OS thread with blocking pops.

use std::sync::Arc;

use tracing::{debug, error, trace};

use crate::actor::{
	mailbox::{ActorState, Mailbox},
	traits::Flow,
};

/// Internal runner that owns an actor's state on its worker thread.
///
/// The runner implements a simple blocking run loop:
/// 1. Mark the actor running
/// 2. Loop: block on pop, execute the call
/// 3. On the stop marker, leave the loop without popping again
/// 4. Drop the state, then close the mailbox, dropping whatever is still queued
pub(crate) struct ActorRunner<S> {
	name: Arc<str>,
	mailbox: Arc<Mailbox<S>>,
	state: S,
}

impl<S> ActorRunner<S> {
	pub fn new(name: Arc<str>, mailbox: Arc<Mailbox<S>>, state: S) -> Self {
		Self {
			name,
			mailbox,
			state,
		}
	}

	/// Run the actor to completion.
	///
	/// The state is always dropped before the mailbox is closed, so once the
	/// actor reports [`ActorState::Stopped`] its state is gone. The mailbox is
	/// closed on the way out even if a handler panics.
	pub fn run(self) {
		let Self {
			name,
			mailbox,
			state,
		} = self;

		let _closer = CloseOnExit {
			name: &name,
			mailbox: &mailbox,
		};
		// declared after the guard: an unwinding handler drops it first
		let mut state = state;

		mailbox.set_state(ActorState::Running);
		debug!(actor = %name, "actor thread starting");

		run_loop(&name, &mailbox, &mut state);
		drop(state);
	}
}

fn run_loop<S>(name: &str, mailbox: &Mailbox<S>, state: &mut S) {
	loop {
		let Some(call) = mailbox.pop() else {
			error!(actor = %name, "mailbox signalled with no queued call");
			continue;
		};

		match call.execute(state) {
			Flow::Continue => trace!(actor = %name, "call executed"),
			Flow::Stop => {
				debug!(actor = %name, "stop marker reached");
				mailbox.set_state(ActorState::Draining);
				return;
			}
		}
	}
}

struct CloseOnExit<'a, S> {
	name: &'a str,
	mailbox: &'a Mailbox<S>,
}

impl<S> Drop for CloseOnExit<'_, S> {
	fn drop(&mut self) {
		let dropped = self.mailbox.close();
		if !dropped.is_empty() {
			debug!(actor = %self.name, dropped = dropped.len(), "dropping calls queued behind the stop marker");
		}
		drop(dropped);
		debug!(actor = %self.name, "actor thread stopped");
	}
}
