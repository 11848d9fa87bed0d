// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{any::Any, io};

/// Errors surfaced by the actor runtime.
///
/// Lost calls are not errors: a call enqueued after an actor stopped is
/// dropped without notice.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
	/// The worker thread could not be created.
	#[error("failed to spawn worker thread for actor `{name}`")]
	Spawn {
		name: String,
		#[source]
		source: io::Error,
	},

	/// A handler panicked and took the worker thread down.
	#[error("actor `{name}` panicked: {message}")]
	Panicked {
		name: String,
		message: String,
	},
}

impl ActorError {
	pub(crate) fn panicked(name: &str, payload: Box<dyn Any + Send>) -> Self {
		let message = if let Some(message) = payload.downcast_ref::<&str>() {
			(*message).to_string()
		} else if let Some(message) = payload.downcast_ref::<String>() {
			message.clone()
		} else {
			"non-string panic payload".to_string()
		};

		ActorError::Panicked {
			name: name.to_string(),
			message,
		}
	}
}

pub type Result<T> = std::result::Result<T, ActorError>;
