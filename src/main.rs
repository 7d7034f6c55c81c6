//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! cal          // Current month
//! cal 2026     // Year 2026
//! cal 2 2026   // February 2026
//! ```

use std::io;

use tracing_subscriber::EnvFilter;

use cal_pt::args::{Args, SystemClock};
use cal_pt::router::{EXIT_FAILURE, Outcome, Router};

fn main() {
    init_logging();

    let args = Args::parse();
    std::process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    let outcome = match args.columns_mode() {
        Ok(columns) => Router::new(SystemClock)
            .with_columns(columns)
            .dispatch(&args.positionals),
        Err(e) => Outcome::failure(&e),
    };

    let (mut out, mut err) = (io::stdout().lock(), io::stderr().lock());
    match outcome.write_to(&mut out, &mut err) {
        Ok(()) => outcome.exit_code,
        Err(e) => {
            tracing::debug!(%e, "failed to write output");
            EXIT_FAILURE
        }
    }
}

/// Logging is off unless `CAL_LOG` holds a filter such as `debug`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("CAL_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}
