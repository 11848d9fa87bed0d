// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test helpers shared by the actorlib crates.

pub mod probe;
pub mod util;
pub mod writer;

pub use probe::{DropCounter, DropProbe};
pub use util::{
	tracing::init_tracing,
	wait::{wait_for, wait_for_condition},
};
pub use writer::SharedWriter;
