// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Integer actor: a single `i64` read and written through its mailbox.

use actorlib_runtime::{Actor, ActorRef, Result, ResultCell};

/// State owned by the integer worker.
#[derive(Debug, Default)]
pub struct Register {
	value: i64,
}

impl Register {
	pub fn new(value: i64) -> Self {
		Self {
			value,
		}
	}

	fn get(&mut self) -> i64 {
		self.value
	}

	fn set(&mut self, value: i64) {
		self.value = value;
	}
}

/// Address of an integer actor.
#[derive(Debug, Clone)]
pub struct Integer {
	actor: ActorRef<Register>,
}

impl Integer {
	pub fn spawn(initial: i64) -> Result<(Actor<Register>, Self)> {
		let actor = Actor::spawn("integer", Register::new(initial))?;
		let integer = Self::from(actor.handle());
		Ok((actor, integer))
	}

	/// Cell holding the value as of when this call reaches the front of the
	/// mailbox.
	pub fn get(&self) -> ResultCell<i64> {
		self.actor.call(Register::get, ())
	}

	pub fn set(&self, value: i64) {
		self.actor.post(Register::set, (value,));
	}
}

impl From<ActorRef<Register>> for Integer {
	fn from(actor: ActorRef<Register>) -> Self {
		Self {
			actor,
		}
	}
}
