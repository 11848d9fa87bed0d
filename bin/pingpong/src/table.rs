// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Wiring of the console, counter and the two players.

use std::io::Write;

use actorlib_runtime::{Actor, Result, ResultCell};
use tracing::{debug, info};

use crate::{
	console::{Console, Terminal},
	integer::{Integer, Register},
	player::{Player, Side},
};

/// Owns every actor of one ping/pong rally.
///
/// Actors are spawned in dependency order: console and counter first, then
/// the players that hold their addresses. They are stopped in the reverse
/// order, so no player is left blocked on a counter that has already stopped.
pub struct Table {
	// field order is drop order
	ping: Actor<Side>,
	pong: Actor<Side>,
	value: Actor<Register>,
	console: Actor<Terminal>,
	finished: ResultCell<()>,
}

impl Table {
	/// Spawns a rally of `count` hits printing to `out`. Nothing is printed
	/// until [`Table::serve`].
	pub fn open(out: impl Write + Send + 'static, count: i64) -> Result<Self> {
		let (console, console_addr) = Console::spawn(Terminal::new(out))?;
		let (value, value_addr) = Integer::spawn(count)?;
		let finished = ResultCell::new();

		let (ping, ping_addr) = Player::spawn(
			"ping",
			Side::new("pong", console_addr.clone(), value_addr.clone(), finished.clone()),
		)?;
		let (pong, pong_addr) =
			Player::spawn("pong", Side::new("ping", console_addr, value_addr, finished.clone()))?;

		ping_addr.connect(pong_addr.clone());
		pong_addr.connect(ping_addr);
		debug!(count, "table wired");

		Ok(Self {
			ping,
			pong,
			value,
			console,
			finished,
		})
	}

	/// First hit goes to `pong`, which announces "ping".
	pub fn serve(&self) {
		info!("rally served");
		Player::from(self.pong.handle()).hit();
	}

	pub fn console(&self) -> Console {
		Console::from(self.console.handle())
	}

	pub fn value(&self) -> Integer {
		Integer::from(self.value.handle())
	}

	/// Blocks until a player observes the counter at zero.
	pub fn wait(&self) {
		self.finished.read();
		info!("rally finished");
	}

	/// Stops and joins every actor, reporting the first failure.
	pub fn close(self) -> Result<()> {
		let Self {
			ping,
			pong,
			value,
			console,
			..
		} = self;

		let results = [ping.join(), pong.join(), value.join(), console.join()];
		results.into_iter().collect()
	}
}
