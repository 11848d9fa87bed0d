// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Concrete deferred calls.

use std::marker::PhantomData;

use crate::{
	actor::traits::{Deferred, Flow, Method},
	cell::Reply,
};

/// A handler bound to a snapshot of its arguments and a reply slot.
pub(crate) struct BoundCall<S, M, Args, P> {
	method: M,
	args: Args,
	reply: P,
	_state: PhantomData<fn(&mut S)>,
}

impl<S, M, Args, P> BoundCall<S, M, Args, P>
where
	M: Method<S, Args>,
	P: Reply<M::Output>,
{
	pub(crate) fn new(method: M, args: Args, reply: P) -> Self {
		Self {
			method,
			args,
			reply,
			_state: PhantomData,
		}
	}
}

impl<S, M, Args, P> Deferred<S> for BoundCall<S, M, Args, P>
where
	M: Method<S, Args>,
	Args: Send + 'static,
	P: Reply<M::Output>,
{
	fn execute(self: Box<Self>, state: &mut S) -> Flow {
		let BoundCall {
			method,
			args,
			reply,
			..
		} = *self;
		reply.fulfill(method.invoke(state, args));
		Flow::Continue
	}
}

/// The reserved stop marker.
pub(crate) struct StopCall;

impl<S> Deferred<S> for StopCall {
	fn execute(self: Box<Self>, _state: &mut S) -> Flow {
		Flow::Stop
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cell::{Detached, ResultCell};

	fn boxed<S>(call: impl Deferred<S> + 'static) -> Box<dyn Deferred<S>> {
		Box::new(call)
	}

	#[test]
	fn test_bound_call_writes_result() {
		let mut state = vec![1, 2, 3];
		let cell = ResultCell::new();
		let call = boxed(BoundCall::new(|v: &mut Vec<i32>| v.len(), (), cell.clone()));

		assert_eq!(call.execute(&mut state), Flow::Continue);
		assert_eq!(cell.read(), 3);
	}

	#[test]
	fn test_bound_call_with_arguments() {
		let mut state = String::from("a");
		let cell = ResultCell::new();
		let call = boxed(BoundCall::new(
			|s: &mut String, tail: String, times: usize| {
				s.push_str(&tail.repeat(times));
				s.clone()
			},
			("b".to_string(), 2),
			cell.clone(),
		));

		call.execute(&mut state);
		assert_eq!(cell.read(), "abb");
		assert_eq!(state, "abb");
	}

	#[test]
	fn test_detached_call_runs_handler() {
		let mut state = 0;
		let call = boxed(BoundCall::new(|n: &mut i32, by: i32| *n += by, (4,), Detached));

		assert_eq!(call.execute(&mut state), Flow::Continue);
		assert_eq!(state, 4);
	}

	#[test]
	fn test_stop_call() {
		let mut state = ();
		assert_eq!(boxed(StopCall).execute(&mut state), Flow::Stop);
	}

	#[test]
	fn test_dropped_call_releases_cell_handle() {
		let cell: ResultCell<usize> = ResultCell::new();
		let call = boxed::<Vec<i32>>(BoundCall::new(|v: &mut Vec<i32>| v.len(), (), cell.clone()));
		assert_eq!(cell.handle_count(), 2);

		drop(call);
		assert_eq!(cell.handle_count(), 1);
		assert!(!cell.is_written());
	}
}
