// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Thread-per-actor runtime.
//!
//! Every [`Actor`] owns one OS thread and one mailbox. Callers never touch
//! an actor's state; they enqueue bound handler calls through an
//! [`ActorRef`], and the actor's own thread executes them in FIFO order.
//!
//! A concrete actor is a state type with private handler methods plus a thin
//! typed API that enqueues them:
//!
//! ```ignore
//! struct Value(i64);
//!
//! impl Value {
//!     fn get(&mut self) -> i64 {
//!         self.0
//!     }
//!
//!     fn set(&mut self, value: i64) {
//!         self.0 = value;
//!     }
//! }
//!
//! let value = Actor::spawn("value", Value(0))?;
//! value.post(Value::set, (7,));
//! assert_eq!(value.call(Value::get, ()).read(), 7);
//! ```

mod call;
pub mod mailbox;
mod runner;
pub mod thread;
pub mod traits;

pub use mailbox::{ActorRef, ActorState};
pub use thread::Actor;
pub use traits::{ActorConfig, Method};
