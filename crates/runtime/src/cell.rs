// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Result cells for values computed on an actor's thread.
//!
//! A [`ResultCell`] is a shared slot: the caller keeps one handle, the queued
//! call keeps another, and the actor writes the handler's return value into
//! it. Readers park until the value is written.
//!
//! # Liveness
//!
//! [`ResultCell::read`] never times out. A cell whose call was dropped
//! (enqueued behind the stop marker, or after the actor stopped) is never
//! written, and reading it blocks forever. A handler that reads a cell
//! produced by another actor which is itself waiting on the first actor
//! deadlocks both workers. Use [`ResultCell::read_timeout`] where either can
//! happen.

use std::{fmt, sync::Arc, time::Duration};

use parking_lot::{Condvar, Mutex};

/// Destination for the return value of a deferred call.
pub trait Reply<V>: Send + 'static {
	/// Consumes the slot, delivering `value`.
	fn fulfill(self, value: V);
}

/// The no-value reply: no storage, no lock, no waiting.
///
/// Used for fire-and-forget calls; the handler's return value is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detached;

impl<V> Reply<V> for Detached {
	#[inline]
	fn fulfill(self, _value: V) {}
}

struct Shared<V> {
	value: Mutex<Option<V>>,
	written: Condvar,
}

/// A shared, reference-counted slot holding the result of an asynchronous
/// call.
///
/// Cloning copies the handle, not the value. The storage is released when the
/// last handle is dropped.
pub struct ResultCell<V> {
	shared: Arc<Shared<V>>,
}

impl<V> ResultCell<V> {
	/// Creates an empty cell.
	pub fn new() -> Self {
		Self {
			shared: Arc::new(Shared {
				value: Mutex::new(None),
				written: Condvar::new(),
			}),
		}
	}

	/// Creates a cell that already holds `value`.
	pub fn with_value(value: V) -> Self {
		let cell = Self::new();
		cell.write(value);
		cell
	}

	/// Stores `value` and wakes every reader.
	///
	/// A second write replaces the first.
	pub fn write(&self, value: V) {
		let mut slot = self.shared.value.lock();
		*slot = Some(value);
		drop(slot);
		self.shared.written.notify_all();
	}

	/// Whether a value has been written.
	pub fn is_written(&self) -> bool {
		self.shared.value.lock().is_some()
	}

	/// Number of live handles to this cell.
	pub fn handle_count(&self) -> usize {
		Arc::strong_count(&self.shared)
	}

	/// Takes the value out if this is the only handle and it is written.
	///
	/// Otherwise the handle is returned unchanged.
	pub fn into_value(self) -> Result<V, Self> {
		match Arc::try_unwrap(self.shared) {
			Ok(shared) => shared.value.into_inner().ok_or_else(Self::new),
			Err(shared) => Err(Self {
				shared,
			}),
		}
	}
}

impl<V: Clone> ResultCell<V> {
	/// Blocks until the value is written, then returns a copy of it.
	pub fn read(&self) -> V {
		let mut slot = self.shared.value.lock();
		loop {
			if let Some(value) = slot.as_ref() {
				return value.clone();
			}
			self.shared.written.wait(&mut slot);
		}
	}

	/// Returns a copy of the value if it has been written.
	pub fn try_read(&self) -> Option<V> {
		self.shared.value.lock().clone()
	}

	/// Like [`read`](Self::read), but gives up after `timeout`.
	pub fn read_timeout(&self, timeout: Duration) -> Option<V> {
		let mut slot = self.shared.value.lock();
		if slot.is_none() {
			let _ = self.shared.written.wait_while_for(&mut slot, |value| value.is_none(), timeout);
		}
		slot.clone()
	}
}

impl<V> Clone for ResultCell<V> {
	fn clone(&self) -> Self {
		Self {
			shared: Arc::clone(&self.shared),
		}
	}
}

impl<V> Default for ResultCell<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> From<V> for ResultCell<V> {
	fn from(value: V) -> Self {
		Self::with_value(value)
	}
}

impl<V: fmt::Debug> fmt::Debug for ResultCell<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResultCell")
			.field("value", &*self.shared.value.lock())
			.field("handles", &self.handle_count())
			.finish()
	}
}

impl<V: Send + 'static> Reply<V> for ResultCell<V> {
	#[inline]
	fn fulfill(self, value: V) {
		self.write(value);
	}
}

#[cfg(test)]
mod tests {
	use std::{
		thread,
		time::{Duration, Instant},
	};

	use super::*;

	#[test]
	fn test_read_after_write_returns_immediately() {
		let cell = ResultCell::new();
		cell.write(7);
		assert!(cell.is_written());
		assert_eq!(cell.read(), 7);
		assert_eq!(cell.read(), 7);
	}

	#[test]
	fn test_second_write_overwrites() {
		let cell = ResultCell::new();
		cell.write("first");
		cell.write("second");
		assert_eq!(cell.read(), "second");
	}

	#[test]
	fn test_read_blocks_until_written() {
		let cell = ResultCell::new();
		let writer = cell.clone();

		let start = Instant::now();
		let handle = thread::spawn(move || {
			thread::sleep(Duration::from_millis(30));
			writer.write(42u64);
		});

		assert_eq!(cell.read(), 42);
		assert!(start.elapsed() >= Duration::from_millis(30));
		handle.join().unwrap();
	}

	#[test]
	fn test_try_read_and_timeout_on_unwritten() {
		let cell: ResultCell<i32> = ResultCell::new();
		assert_eq!(cell.try_read(), None);
		assert_eq!(cell.read_timeout(Duration::from_millis(10)), None);
		assert!(!cell.is_written());
	}

	#[test]
	fn test_read_timeout_sees_late_write() {
		let cell = ResultCell::new();
		let writer = cell.clone();
		let handle = thread::spawn(move || {
			thread::sleep(Duration::from_millis(10));
			writer.write(3);
		});

		assert_eq!(cell.read_timeout(Duration::from_secs(5)), Some(3));
		handle.join().unwrap();
	}

	#[test]
	fn test_every_waiter_is_woken() {
		let cell = ResultCell::new();
		let readers: Vec<_> = (0..4)
			.map(|_| {
				let cell = cell.clone();
				thread::spawn(move || cell.read())
			})
			.collect();

		thread::sleep(Duration::from_millis(10));
		cell.write(11);

		for reader in readers {
			assert_eq!(reader.join().unwrap(), 11);
		}
	}

	#[test]
	fn test_handle_count_tracks_clones() {
		let cell: ResultCell<i32> = ResultCell::new();
		assert_eq!(cell.handle_count(), 1);

		let copies: Vec<_> = (0..3).map(|_| cell.clone()).collect();
		assert_eq!(cell.handle_count(), 4);

		drop(copies);
		assert_eq!(cell.handle_count(), 1);
	}

	#[test]
	fn test_with_value_and_from() {
		assert_eq!(ResultCell::with_value(5).read(), 5);
		let cell: ResultCell<&str> = "ready".into();
		assert!(cell.is_written());
	}

	#[test]
	fn test_into_value() {
		let cell = ResultCell::with_value(String::from("owned"));
		let other = cell.clone();

		let cell = cell.into_value().unwrap_err();
		drop(other);
		assert_eq!(cell.into_value().unwrap(), "owned");
	}

	#[test]
	fn test_reply_impls() {
		let cell = ResultCell::new();
		cell.clone().fulfill(9);
		assert_eq!(cell.read(), 9);

		Detached.fulfill(9);
		assert_eq!(std::mem::size_of::<Detached>(), 0);
	}
}
