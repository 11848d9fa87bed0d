// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory `io::Write` sink that can be inspected from another thread.

use std::{io, sync::Arc};

use parking_lot::Mutex;

/// A cloneable writer; every clone appends to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedWriter {
	buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedWriter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything written so far, lossily decoded as UTF-8.
	pub fn contents(&self) -> String {
		String::from_utf8_lossy(&self.buffer.lock()).into_owned()
	}

	/// Complete lines written so far.
	pub fn lines(&self) -> Vec<String> {
		self.contents().lines().map(str::to_string).collect()
	}
}

impl io::Write for SharedWriter {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.buffer.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
