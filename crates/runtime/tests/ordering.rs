// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Per-actor FIFO delivery.

use std::thread;

use actorlib_runtime::{Actor, Result};
use crossbeam_channel::{Sender, unbounded};

struct Recorder {
	log: Vec<usize>,
}

impl Recorder {
	fn record(&mut self, index: usize) {
		self.log.push(index);
	}

	fn snapshot(&mut self) -> Vec<usize> {
		self.log.clone()
	}
}

#[test]
fn test_single_producer_calls_run_in_order() -> Result<()> {
	let recorder = Actor::spawn(
		"recorder",
		Recorder {
			log: Vec::new(),
		},
	)?;

	for i in 0..1000 {
		recorder.post(Recorder::record, (i,));
	}

	assert_eq!(recorder.call(Recorder::snapshot, ()).read(), (0..1000).collect::<Vec<_>>());
	recorder.join()
}

#[test]
fn test_each_producer_keeps_its_own_order() -> Result<()> {
	let recorder = Actor::spawn(
		"recorder",
		Recorder {
			log: Vec::new(),
		},
	)?;

	let producers: Vec<_> = (0..4usize)
		.map(|p| {
			let recorder = recorder.handle();
			thread::spawn(move || {
				for i in 0..250usize {
					recorder.post(Recorder::record, (p * 1000 + i,));
				}
			})
		})
		.collect();
	for producer in producers {
		producer.join().unwrap();
	}

	let log = recorder.call(Recorder::snapshot, ()).read();
	assert_eq!(log.len(), 1000);
	for p in 0..4usize {
		let from_producer: Vec<usize> = log.iter().copied().filter(|v| v / 1000 == p).collect();
		assert_eq!(from_producer, (0..250).map(|i| p * 1000 + i).collect::<Vec<_>>());
	}

	recorder.join()
}

#[test]
fn test_handlers_run_on_the_actor_thread() -> Result<()> {
	struct Witness {
		seen: Sender<thread::ThreadId>,
	}

	impl Witness {
		fn observe(&mut self) {
			self.seen.send(thread::current().id()).unwrap();
		}
	}

	let (tx, rx) = unbounded();
	let witness = Actor::spawn(
		"witness",
		Witness {
			seen: tx,
		},
	)?;

	let callers: Vec<_> = (0..3)
		.map(|_| {
			let witness = witness.handle();
			thread::spawn(move || {
				for _ in 0..10 {
					witness.post(Witness::observe, ());
				}
			})
		})
		.collect();
	for caller in callers {
		caller.join().unwrap();
	}
	witness.join()?;

	let ids: Vec<_> = rx.try_iter().collect();
	assert_eq!(ids.len(), 30);
	assert!(ids.iter().all(|id| *id == ids[0]));
	assert_ne!(ids[0], thread::current().id());
	Ok(())
}
