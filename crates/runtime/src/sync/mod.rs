// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Synchronization primitives used by the actor runtime.

pub mod semaphore;

pub use semaphore::Semaphore;
