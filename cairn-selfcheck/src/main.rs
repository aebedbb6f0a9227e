//! Replays the reference scenarios against `cairn-collections`.
//!
//! Each suite prints `✅ success` when it passes. The first failed
//! verification prints its source location and exits with status 1.

#![warn(missing_docs)]

mod scenarios;

use anyhow::{Result, ensure};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Smallest ring capacity the ring scenario can run with
const MIN_RING_CAPACITY: u16 = 3;

/// Self-check CLI arguments
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Suite to run
    #[arg(long, value_enum, default_value_t = Suite::All)]
    suite: Suite,

    /// Initial capacity of the array under test
    /// Small values exercise growth during the scenario
    #[arg(long, default_value_t = 2)]
    array_capacity: usize,

    /// Fixed capacity of the ring buffer under test
    /// Every slot is filled with its own index, so the range is bounded
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16))]
    ring_capacity: u16,

    /// Log container internals at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Suite {
    All,
    Array,
    List,
    Ring,
    Search,
    Sort,
}

impl Suite {
    fn includes(self, other: Suite) -> bool {
        self == Suite::All || self == other
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_tracing(args.verbose);

    ensure!(
        args.ring_capacity >= MIN_RING_CAPACITY,
        "ring capacity must be at least {MIN_RING_CAPACITY}, got {}",
        args.ring_capacity
    );
    debug!(?args, "starting self-check");

    let suites: [(Suite, &dyn Fn()); 5] = [
        (Suite::Array, &|| scenarios::array(args.array_capacity)),
        (Suite::List, &scenarios::list),
        (Suite::Ring, &|| scenarios::ring(args.ring_capacity)),
        (Suite::Search, &scenarios::search),
        (Suite::Sort, &scenarios::sort),
    ];

    for (suite, run) in suites {
        if !args.suite.includes(suite) {
            continue;
        }
        run();
        info!(?suite, "suite passed");
        println!("✅ success");
    }

    Ok(())
}

/// `RUST_LOG` wins over the `--verbose` default
fn initialize_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}
