// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Core actor traits and associated types.
//!
//! This module defines the abstractions deferred calls are built from:
//! - `Deferred`: A type-erased call the worker thread executes against the actor's state
//! - [`Method`]: A handler taking the state plus a tuple of arguments
//! - `Flow`: What the worker loop does after a call
//! - [`ActorConfig`]: Configuration for the worker thread

/// What the worker loop does after executing a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
	/// Pop the next call.
	Continue,

	/// Leave the loop. Calls still queued are dropped, not executed.
	Stop,
}

/// A unit of work queued on an actor's mailbox.
///
/// Implementors are built at the call site with full knowledge of argument
/// and return types; the mailbox only sees `Box<dyn Deferred<S>>`. A call is
/// executed at most once, on the actor's own thread, and then dropped.
pub(crate) trait Deferred<S>: Send {
	/// Runs the call against the actor's state.
	fn execute(self: Box<Self>, state: &mut S) -> Flow;
}

/// A handler that can be bound into a deferred call.
///
/// Implemented for every `FnOnce(&mut S, A1, .., An) -> R` with
/// `Args = (A1, .., An)` for up to six arguments, so both plain handler
/// methods (`State::handler`) and closures qualify:
///
/// ```ignore
/// struct Counter {
///     value: i64,
/// }
///
/// impl Counter {
///     fn add(&mut self, delta: i64) -> i64 {
///         self.value += delta;
///         self.value
///     }
/// }
///
/// let total: ResultCell<i64> = counter.call(Counter::add, (5,));
/// ```
///
/// Arguments are moved into the call, so they outlive the caller's frame.
pub trait Method<S, Args>: Send + 'static {
	/// The handler's return type.
	type Output: Send + 'static;

	/// Calls the handler.
	fn invoke(self, state: &mut S, args: Args) -> Self::Output;
}

macro_rules! impl_method {
	($($arg:ident),*) => {
		impl<S, F, R, $($arg,)*> Method<S, ($($arg,)*)> for F
		where
			F: FnOnce(&mut S, $($arg),*) -> R + Send + 'static,
			R: Send + 'static,
		{
			type Output = R;

			#[inline]
			#[allow(non_snake_case)]
			fn invoke(self, state: &mut S, ($($arg,)*): ($($arg,)*)) -> R {
				self(state, $($arg),*)
			}
		}
	};
}

impl_method!();
impl_method!(A1);
impl_method!(A1, A2);
impl_method!(A1, A2, A3);
impl_method!(A1, A2, A3, A4);
impl_method!(A1, A2, A3, A4, A5);
impl_method!(A1, A2, A3, A4, A5, A6);

/// Configuration for an actor's worker thread.
///
/// Mailboxes are always unbounded, so there is no capacity setting.
#[derive(Debug, Clone)]
pub struct ActorConfig {
	/// Actor name, also used as the worker thread name.
	///
	/// Default: "actor"
	pub name: String,

	/// Worker thread stack size in bytes. `None` uses the platform default.
	///
	/// Default: None
	pub stack_size: Option<usize>,
}

impl Default for ActorConfig {
	fn default() -> Self {
		Self {
			name: "actor".to_string(),
			stack_size: None,
		}
	}
}

impl ActorConfig {
	/// Create a new config with default values.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the actor name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Set the worker thread stack size.
	pub fn stack_size(mut self, bytes: usize) -> Self {
		self.stack_size = Some(bytes);
		self
	}
}
