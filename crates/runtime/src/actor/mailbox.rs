// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Actor mailboxes and addresses.
//!
//! A mailbox is an unbounded FIFO of deferred calls guarded by a mutex,
//! paired with a counting semaphore whose count is the number of calls not
//! yet popped. Any number of threads push; only the actor's own worker pops.
//!
//! An [`ActorRef`] is the cloneable address producers enqueue through. It
//! holds the mailbox, never the worker thread, so peers may hold each other's
//! addresses without keeping each other alive.

use std::{
	collections::VecDeque,
	fmt,
	sync::{
		Arc,
		atomic::{AtomicU8, Ordering},
	},
};

use parking_lot::Mutex;
use tracing::trace;

use crate::{
	actor::{
		call::{BoundCall, StopCall},
		traits::{Deferred, Method},
	},
	cell::{Detached, Reply, ResultCell},
	sync::Semaphore,
};

/// Lifecycle of an actor's worker thread.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorState {
	/// Worker thread spawned, loop not yet entered.
	Starting = 0,
	/// Worker thread is popping and executing calls.
	Running = 1,
	/// Stop marker executed; the worker is dropping the actor's state.
	Draining = 2,
	/// State dropped and mailbox closed; calls are no longer accepted.
	Stopped = 3,
}

impl ActorState {
	fn from_u8(value: u8) -> Self {
		match value {
			0 => ActorState::Starting,
			1 => ActorState::Running,
			2 => ActorState::Draining,
			_ => ActorState::Stopped,
		}
	}
}

/// The queue of pending calls for one actor.
pub(crate) struct Mailbox<S> {
	queue: Mutex<VecDeque<Box<dyn Deferred<S>>>>,
	pending: Semaphore,
	state: AtomicU8,
}

impl<S> Mailbox<S> {
	pub(crate) fn new() -> Self {
		Self {
			queue: Mutex::new(VecDeque::new()),
			pending: Semaphore::new(0),
			state: AtomicU8::new(ActorState::Starting as u8),
		}
	}

	/// Appends `call` and signals the consumer once. Never blocks on capacity.
	///
	/// Once the worker has stopped the call is dropped unexecuted.
	pub(crate) fn push(&self, call: Box<dyn Deferred<S>>) -> bool {
		let mut queue = self.queue.lock();
		if self.state() == ActorState::Stopped {
			return false;
		}
		queue.push_back(call);
		drop(queue);
		self.pending.post();
		true
	}

	/// Blocks until a call is pending, then removes the head.
	///
	/// Must only be called from the owning worker thread.
	pub(crate) fn pop(&self) -> Option<Box<dyn Deferred<S>>> {
		self.pending.wait();
		self.queue.lock().pop_front()
	}

	/// Marks the mailbox stopped and removes every queued call.
	///
	/// Later pushes are rejected, so nothing accumulates after the worker is
	/// gone. The returned calls are meant to be dropped unexecuted.
	pub(crate) fn close(&self) -> Vec<Box<dyn Deferred<S>>> {
		let mut queue = self.queue.lock();
		self.set_state(ActorState::Stopped);
		while self.pending.try_wait() {}
		queue.drain(..).collect()
	}

	/// Number of calls queued and not yet popped.
	pub(crate) fn len(&self) -> usize {
		self.queue.lock().len()
	}

	pub(crate) fn state(&self) -> ActorState {
		ActorState::from_u8(self.state.load(Ordering::Acquire))
	}

	pub(crate) fn set_state(&self, state: ActorState) {
		self.state.store(state as u8, Ordering::Release);
	}
}

impl<S> fmt::Debug for Mailbox<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Mailbox").field("len", &self.len()).field("state", &self.state()).finish()
	}
}

/// Address of an actor whose state has type `S`.
///
/// Cheap to clone and safe to send to other threads, including other actors'
/// workers. Enqueueing never blocks.
///
/// Concrete actors normally hide these primitives behind their own typed
/// methods; callers of a concrete actor never name a handler directly.
pub struct ActorRef<S> {
	name: Arc<str>,
	mailbox: Arc<Mailbox<S>>,
}

impl<S: 'static> ActorRef<S> {
	pub(crate) fn new(name: &str) -> Self {
		Self {
			name: Arc::from(name),
			mailbox: Arc::new(Mailbox::new()),
		}
	}

	pub(crate) fn mailbox(&self) -> &Arc<Mailbox<S>> {
		&self.mailbox
	}

	/// Enqueues `method(state, args..)` and discards its return value.
	pub fn post<M, Args>(&self, method: M, args: Args)
	where
		M: Method<S, Args>,
		Args: Send + 'static,
	{
		self.enqueue(Box::new(BoundCall::new(method, args, Detached)));
	}

	/// Enqueues `method(state, args..)` and returns the cell its return value
	/// will be written to.
	///
	/// The cell is returned before the call runs; [`ResultCell::read`] blocks
	/// until it has.
	pub fn call<M, Args>(&self, method: M, args: Args) -> ResultCell<M::Output>
	where
		M: Method<S, Args>,
		Args: Send + 'static,
	{
		let cell = ResultCell::new();
		self.call_into(method, args, cell.clone());
		cell
	}

	/// Enqueues `method(state, args..)`, delivering its return value to
	/// `reply`.
	pub fn call_into<M, Args, P>(&self, method: M, args: Args, reply: P)
	where
		M: Method<S, Args>,
		Args: Send + 'static,
		P: Reply<M::Output>,
	{
		self.enqueue(Box::new(BoundCall::new(method, args, reply)));
	}

	/// Enqueues the stop marker.
	///
	/// Calls queued before it still run; calls queued after it never do.
	pub fn request_stop(&self) {
		self.enqueue(Box::new(StopCall));
	}

	fn enqueue(&self, call: Box<dyn Deferred<S>>) {
		if !self.mailbox.push(call) {
			trace!(actor = %self.name, "actor stopped, call dropped");
		}
	}

	/// The actor's name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Number of queued calls not yet picked up by the worker.
	pub fn pending(&self) -> usize {
		self.mailbox.len()
	}

	pub fn state(&self) -> ActorState {
		self.mailbox.state()
	}

	/// Whether the worker thread has left its loop.
	pub fn is_stopped(&self) -> bool {
		self.state() == ActorState::Stopped
	}
}

impl<S> Clone for ActorRef<S> {
	fn clone(&self) -> Self {
		Self {
			name: Arc::clone(&self.name),
			mailbox: Arc::clone(&self.mailbox),
		}
	}
}

impl<S> fmt::Debug for ActorRef<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActorRef").field("name", &self.name).field("mailbox", &self.mailbox).finish()
	}
}

#[cfg(test)]
mod tests {
	use std::{sync::Arc, thread};

	use super::*;
	use crate::actor::traits::Flow;

	fn drain(actor: &ActorRef<Vec<u32>>, state: &mut Vec<u32>) -> Vec<Flow> {
		let mut flows = Vec::new();
		while actor.pending() > 0 {
			let call = actor.mailbox().pop().unwrap();
			flows.push(call.execute(state));
		}
		flows
	}

	#[test]
	fn test_pop_is_fifo() {
		let actor = ActorRef::new("fifo");
		for i in 0..10u32 {
			actor.post(|log: &mut Vec<u32>, i: u32| log.push(i), (i,));
		}
		assert_eq!(actor.pending(), 10);

		let mut log = Vec::new();
		drain(&actor, &mut log);
		assert_eq!(log, (0..10).collect::<Vec<_>>());
		assert_eq!(actor.pending(), 0);
	}

	#[test]
	fn test_call_returns_unwritten_cell() {
		let actor = ActorRef::new("cell");
		let len = actor.call(|log: &mut Vec<u32>| log.len(), ());
		assert!(!len.is_written());

		drain(&actor, &mut vec![1, 2]);
		assert_eq!(len.read(), 2);
	}

	#[test]
	fn test_request_stop_yields_stop_flow() {
		let actor = ActorRef::new("stop");
		actor.post(|log: &mut Vec<u32>| log.push(1), ());
		actor.request_stop();

		let flows = drain(&actor, &mut Vec::new());
		assert_eq!(flows, vec![Flow::Continue, Flow::Stop]);
	}

	#[test]
	fn test_push_after_close_is_dropped() {
		let actor: ActorRef<Vec<u32>> = ActorRef::new("closed");
		actor.post(|log: &mut Vec<u32>| log.push(1), ());

		let dropped = actor.mailbox().close();
		assert_eq!(dropped.len(), 1);
		assert!(actor.is_stopped());

		let cell = actor.call(|log: &mut Vec<u32>| log.len(), ());
		assert_eq!(actor.pending(), 0);
		assert_eq!(cell.handle_count(), 1);
	}

	#[test]
	fn test_concurrent_producers() {
		let actor: ActorRef<Vec<u32>> = ActorRef::new("producers");
		let producers: Vec<_> = (0..4u32)
			.map(|p| {
				let actor = actor.clone();
				thread::spawn(move || {
					for i in 0..25u32 {
						actor.post(|log: &mut Vec<u32>, v: u32| log.push(v), (p * 100 + i,));
					}
				})
			})
			.collect();
		for producer in producers {
			producer.join().unwrap();
		}

		let mut log = Vec::new();
		drain(&actor, &mut log);
		assert_eq!(log.len(), 100);

		for p in 0..4u32 {
			let from_producer: Vec<u32> = log.iter().copied().filter(|v| v / 100 == p).collect();
			assert_eq!(from_producer, (0..25).map(|i| p * 100 + i).collect::<Vec<_>>());
		}
	}

	#[test]
	fn test_clone_shares_mailbox() {
		let actor: ActorRef<Vec<u32>> = ActorRef::new("shared");
		let other = actor.clone();
		other.request_stop();
		assert_eq!(actor.pending(), 1);
		assert!(Arc::ptr_eq(actor.mailbox(), other.mailbox()));
		assert_eq!(other.name(), "shared");
	}

	#[test]
	fn test_state_starts_as_starting() {
		let actor: ActorRef<()> = ActorRef::new("fresh");
		assert_eq!(actor.state(), ActorState::Starting);
		assert!(!actor.is_stopped());
	}
}
