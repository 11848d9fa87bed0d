// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A minimal actor runtime: one dedicated thread and one unbounded mailbox per
//! actor, with results returned through blocking [`ResultCell`]s.

pub mod actor;
pub mod cell;
pub mod error;
pub mod sync;

pub use actor::{Actor, ActorConfig, ActorRef, ActorState, Method};
pub use cell::{Detached, Reply, ResultCell};
pub use error::{ActorError, Result};
