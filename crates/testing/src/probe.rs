// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Instrumented values that count their own construction and destruction.

use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

/// Shared tally of live and dropped [`DropProbe`]s.
#[derive(Debug, Clone, Default)]
pub struct DropCounter {
	created: Arc<AtomicUsize>,
	dropped: Arc<AtomicUsize>,
}

impl DropCounter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a probe tracked by this counter.
	pub fn probe(&self, id: u64) -> DropProbe {
		self.created.fetch_add(1, Ordering::SeqCst);
		DropProbe {
			id,
			counter: self.clone(),
		}
	}

	pub fn created(&self) -> usize {
		self.created.load(Ordering::SeqCst)
	}

	pub fn dropped(&self) -> usize {
		self.dropped.load(Ordering::SeqCst)
	}

	/// Probes created and not yet dropped.
	pub fn live(&self) -> usize {
		self.created() - self.dropped()
	}
}

/// A value whose clones and drops are recorded in a [`DropCounter`].
#[derive(Debug)]
pub struct DropProbe {
	id: u64,
	counter: DropCounter,
}

impl DropProbe {
	pub fn id(&self) -> u64 {
		self.id
	}
}

impl Clone for DropProbe {
	fn clone(&self) -> Self {
		self.counter.probe(self.id)
	}
}

impl PartialEq for DropProbe {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Drop for DropProbe {
	fn drop(&mut self) {
		self.counter.dropped.fetch_add(1, Ordering::SeqCst);
	}
}
