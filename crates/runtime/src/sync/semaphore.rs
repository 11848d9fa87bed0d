// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Counting semaphore.
//!
//! The count is the number of permits that have been posted and not yet
//! consumed. `wait` parks the calling thread while the count is zero and
//! consumes exactly one permit when it returns.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// A counting semaphore built on a mutex-guarded counter and a condition
/// variable.
#[derive(Debug, Default)]
pub struct Semaphore {
	count: Mutex<usize>,
	available: Condvar,
}

impl Semaphore {
	/// Creates a semaphore holding `permits` permits.
	pub fn new(permits: usize) -> Self {
		Self {
			count: Mutex::new(permits),
			available: Condvar::new(),
		}
	}

	/// Adds one permit and wakes one waiter.
	pub fn post(&self) {
		let mut count = self.count.lock();
		*count += 1;
		drop(count);
		self.available.notify_one();
	}

	/// Blocks until a permit is available, then consumes it.
	pub fn wait(&self) {
		let mut count = self.count.lock();
		while *count == 0 {
			self.available.wait(&mut count);
		}
		*count -= 1;
	}

	/// Consumes a permit if one is available without blocking.
	pub fn try_wait(&self) -> bool {
		let mut count = self.count.lock();
		if *count == 0 {
			return false;
		}
		*count -= 1;
		true
	}

	/// Blocks until a permit is available or `timeout` elapses.
	///
	/// Returns `true` if a permit was consumed.
	pub fn wait_for(&self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		let mut count = self.count.lock();
		while *count == 0 {
			if self.available.wait_until(&mut count, deadline).timed_out() {
				if *count == 0 {
					return false;
				}
				break;
			}
		}
		*count -= 1;
		true
	}

	/// Current number of permits.
	pub fn count(&self) -> usize {
		*self.count.lock()
	}
}
