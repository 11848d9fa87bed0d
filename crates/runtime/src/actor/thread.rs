// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Thread-per-actor ownership.
//!
//! Each actor runs on its own dedicated OS thread, and its state is only ever
//! touched by that thread, so handlers need no locks.

use std::{ops::Deref, sync::Arc, thread};

use tracing::{debug, error, warn};

use crate::{
	actor::{mailbox::ActorRef, runner::ActorRunner, traits::ActorConfig},
	error::{ActorError, Result},
};

/// Owner of an actor running on a dedicated thread.
///
/// Dereferences to the actor's [`ActorRef`], so the owner can enqueue calls
/// directly; [`Actor::handle`] hands out addresses to other threads.
///
/// Dropping the owner enqueues the stop marker and joins the worker. Calls
/// already queued ahead of the marker run first; calls queued after it are
/// dropped, and their result cells are never written.
///
/// # Deadlocks
///
/// A handler that blocks on a [`ResultCell`](crate::cell::ResultCell)
/// produced by another actor must not be reachable from that actor's own
/// blocking reads: two workers each waiting on the other never wake up.
pub struct Actor<S: Send + 'static> {
	actor_ref: ActorRef<S>,
	join_handle: Option<thread::JoinHandle<()>>,
}

impl<S: Send + 'static> Actor<S> {
	/// Spawn an actor named `name` owning `state`.
	pub fn spawn(name: &str, state: S) -> Result<Self> {
		Self::spawn_with(ActorConfig::new().name(name), state)
	}

	/// Spawn an actor with explicit thread configuration.
	pub fn spawn_with(config: ActorConfig, state: S) -> Result<Self> {
		let actor_ref = ActorRef::new(&config.name);
		let runner = ActorRunner::new(Arc::from(config.name.as_str()), Arc::clone(actor_ref.mailbox()), state);

		let mut builder = thread::Builder::new().name(config.name.clone());
		if let Some(stack_size) = config.stack_size {
			builder = builder.stack_size(stack_size);
		}

		let join_handle = builder.spawn(move || runner.run()).map_err(|source| ActorError::Spawn {
			name: config.name.clone(),
			source,
		})?;

		debug!(actor = %config.name, "actor spawned");

		Ok(Self {
			actor_ref,
			join_handle: Some(join_handle),
		})
	}

	/// A cloneable address for this actor.
	pub fn handle(&self) -> ActorRef<S> {
		self.actor_ref.clone()
	}

	/// Stop the actor and wait for its thread to finish.
	///
	/// Returns [`ActorError::Panicked`] if a handler panicked.
	pub fn join(mut self) -> Result<()> {
		self.stop_and_join()
	}

	fn stop_and_join(&mut self) -> Result<()> {
		let Some(join_handle) = self.join_handle.take() else {
			return Ok(());
		};

		self.actor_ref.request_stop();

		if join_handle.thread().id() == thread::current().id() {
			warn!(actor = %self.actor_ref.name(), "actor released from its own thread, not joining");
			return Ok(());
		}

		join_handle.join().map_err(|payload| ActorError::panicked(self.actor_ref.name(), payload))
	}
}

impl<S: Send + 'static> Deref for Actor<S> {
	type Target = ActorRef<S>;

	fn deref(&self) -> &ActorRef<S> {
		&self.actor_ref
	}
}

impl<S: Send + 'static> std::fmt::Debug for Actor<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Actor").field("actor_ref", &self.actor_ref).finish()
	}
}

impl<S: Send + 'static> Drop for Actor<S> {
	fn drop(&mut self) {
		if let Err(err) = self.stop_and_join() {
			error!(actor = %self.actor_ref.name(), %err, "actor thread ended abnormally");
		}
	}
}
