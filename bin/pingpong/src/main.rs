// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io;

use actorlib_pingpong::Table;
use actorlib_runtime::ActorError;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Two actors rally a counter down to zero through a console actor.
#[derive(Parser, Debug)]
#[command(name = "pingpong")]
struct Args {
	/// Starting value of the shared counter
	#[arg(short, long, default_value_t = 100)]
	count: i64,

	/// Exit once the rally finishes instead of waiting for enter
	#[arg(long)]
	no_wait: bool,
}

fn main() -> Result<(), ActorError> {
	let args = Args::parse();
	setup_tracing();

	let table = Table::open(io::stdout(), args.count)?;
	info!(count = args.count, "table open");

	if args.no_wait {
		table.serve();
		table.wait();
	} else {
		table.console().print("press enter to exit...\n");
		table.serve();
		let _ = io::stdin().read_line(&mut String::new());
	}

	table.close()
}

fn setup_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
