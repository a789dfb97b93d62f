//! Book club demonstration binary.
//!
//! Runs the fixed demo sequence once and prints the report to stdout.
//! Tracing output goes to stderr and is quiet unless `RUST_LOG` or
//! `--log-level` asks for more.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use book_club::{BookClub, demo, error::DemoError, observers::SessionAnnouncer};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for the book club demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print the banner without colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if args.no_color {
        colored::control::set_override(false);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            drop(write_diagnostic(&mut io::stderr().lock(), &err));
            ExitCode::FAILURE
        }
    }
}

/// Print the banner around one demo run
fn run() -> Result<(), DemoError> {
    println!("{}", "Book Club Demonstration".green().bold());
    println!("=======================\n");

    let mut club = BookClub::new();
    club.register_observer(Box::new(SessionAnnouncer::new(io::stdout())));
    demo::run_demo(&mut club, &mut io::stdout().lock())?;

    println!("\n{}", "Demonstration complete!".green().bold());
    Ok(())
}

/// Write the one-line failure message for `err`
fn write_diagnostic(out: &mut impl Write, err: &DemoError) -> io::Result<()> {
    writeln!(out, "Error: {err}")
}

/// Install the global subscriber, preferring `RUST_LOG` over `log_level`
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();
}

#[cfg(test)]
mod tests {
    use book_club::{ClubError, error::MISSING_BOOK};

    use super::*;

    #[test]
    fn diagnostic_uses_display_text() {
        let err = DemoError::from(ClubError::InvalidArgument { reason: MISSING_BOOK });
        let mut out = Vec::new();

        assert!(write_diagnostic(&mut out, &err).is_ok());
        assert_eq!(String::from_utf8_lossy(&out), "Error: invalid argument: book must be present\n");
    }
}
