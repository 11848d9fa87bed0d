// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Player actors: each hit reads the shared counter, announces it,
//! decrements it and hands the turn to the peer.

use actorlib_runtime::{Actor, ActorRef, Result, ResultCell};
use tracing::{debug, warn};

use crate::{console::Console, integer::Integer};

/// State owned by a player worker.
pub struct Side {
	call: &'static str,
	console: Console,
	value: Integer,
	peer: Option<Player>,
	finished: ResultCell<()>,
}

impl Side {
	/// A player that announces `call` on each hit.
	///
	/// `finished` is written once the counter is observed at zero.
	pub fn new(call: &'static str, console: Console, value: Integer, finished: ResultCell<()>) -> Self {
		Self {
			call,
			console,
			value,
			peer: None,
			finished,
		}
	}

	fn connect(&mut self, peer: Player) {
		self.peer = Some(peer);
	}

	fn hit(&mut self) {
		let remaining = self.value.get().read();
		if remaining <= 0 {
			debug!(call = self.call, "counter exhausted, rally over");
			self.finished.write(());
			return;
		}

		self.console.print(format!("{remaining}: {}\n", self.call));
		self.value.set(remaining - 1);

		match &self.peer {
			Some(peer) => peer.hit(),
			None => warn!(call = self.call, "no peer connected, rally dropped"),
		}
	}
}

/// Address of a player actor.
#[derive(Debug, Clone)]
pub struct Player {
	actor: ActorRef<Side>,
}

impl Player {
	pub fn spawn(name: &str, side: Side) -> Result<(Actor<Side>, Self)> {
		let actor = Actor::spawn(name, side)?;
		let player = Self::from(actor.handle());
		Ok((actor, player))
	}

	/// Sets the player the turn is handed to after each hit.
	pub fn connect(&self, peer: Player) {
		self.actor.post(Side::connect, (peer,));
	}

	pub fn hit(&self) {
		self.actor.post(Side::hit, ());
	}
}

impl From<ActorRef<Side>> for Player {
	fn from(actor: ActorRef<Side>) -> Self {
		Self {
			actor,
		}
	}
}
