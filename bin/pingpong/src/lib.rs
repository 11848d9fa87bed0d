// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Ping/pong demonstration built on the actor runtime.
//!
//! Two players take turns decrementing a shared integer actor and announce
//! each value through a console actor until the value reaches zero.

pub mod console;
pub mod integer;
pub mod player;
pub mod table;

pub use console::{Console, Terminal};
pub use integer::{Integer, Register};
pub use player::{Player, Side};
pub use table::Table;
