// ============================================================================
// radix-mul
// Reads a batch of base-B multiplications from stdin, writes the products
// ============================================================================

use radix_karatsuba::batch::{self, BatchError};
use radix_karatsuba::prelude::*;
use std::io::{self, BufWriter, Read, Write};
use std::process;
use std::sync::Arc;
use std::thread;

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    if let Err(e) = run() {
        eprintln!("radix-mul: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), BatchError> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let multiplier =
        RadixMultiplier::new(Box::new(Karatsuba::default()), Arc::new(LoggingEventHandler));
    let workers = thread::available_parallelism().map_or(1, |n| n.get());

    let output = batch::run(&input, &multiplier, workers)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`)
#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
