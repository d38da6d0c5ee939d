//! Month calendar CLI application.
//!
//! # Usage
//! ```ignore
//! datedreamer               // Current month
//! datedreamer 2024-02-01    // February 2024
//! datedreamer -s 1          // Next month
//! datedreamer -f html       // HTML markup
//! datedreamer -i            // Interactive navigation
//! ```

use std::io::IsTerminal;

use datedreamer::args::{Args, get_display_date};
use datedreamer::error::CalendarError;
use datedreamer::formatter::{print_month, run_interactive};
use datedreamer::types::CalContext;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("datedreamer: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) -> Result<(), CalendarError> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CalendarError::Logging(format!("invalid log filter: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| CalendarError::Logging(e.to_string()))?;

    Ok(())
}

fn run(args: &Args) -> Result<(), CalendarError> {
    init_tracing(args.verbose)?;

    let ctx = CalContext::new(args)?;
    let reference = get_display_date(args, &ctx)?;

    if ctx.interactive {
        let stdin = std::io::stdin();
        run_interactive(&ctx, reference, stdin.lock(), std::io::stdout().lock())?;
    } else {
        print_month(&ctx, reference);
    }

    Ok(())
}
