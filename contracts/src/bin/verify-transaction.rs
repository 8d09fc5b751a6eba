//! Verifies a ledger transaction stored as JSON.
//!
//! ```text
//! verify-transaction <path>
//! ```
//!
//! Prints `accepted` and exits with status 0, or prints one rejection per line and exits
//! with status 1. Unreadable input exits with status 2. Contract identifiers and the
//! cancellation marker are taken from the `TICKET_LEDGER_*` environment variables.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use ticket_ledger_contracts::{ContractConfig, LedgerTransaction, verifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ACCEPTED: u8 = 0;
const REJECTED: u8 = 1;
const UNREADABLE: u8 = 2;

fn main() -> ExitCode {
    init_tracing();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: verify-transaction <path>");
        return ExitCode::from(UNREADABLE);
    };

    let outcome = verify_file(&path, &mut io::stdout().lock());
    ExitCode::from(exit_status(outcome, &mut io::stderr().lock()))
}

fn verify_file(path: &Path, out: &mut impl Write) -> Result<bool, Box<dyn Error>> {
    let config = ContractConfig::from_env()?;
    let file = File::open(path)?;
    tracing::info!(path = %path.display(), "Verifying transaction");
    verify_transaction(&config, BufReader::new(file), out)
}

/// Reads one JSON transaction from `input` and writes the verdict to `out`.
///
/// Returns whether the transaction was accepted.
fn verify_transaction<R: Read, W: Write>(
    config: &ContractConfig,
    input: R,
    out: &mut W,
) -> Result<bool, Box<dyn Error>> {
    let tx: LedgerTransaction = serde_json::from_reader(input)?;

    match verifier(config).verify(&tx) {
        Ok(()) => {
            writeln!(out, "accepted")?;
            Ok(true)
        }
        Err(rejections) => {
            for rejection in &rejections {
                writeln!(out, "{rejection}")?;
            }
            Ok(false)
        }
    }
}

fn exit_status(outcome: Result<bool, Box<dyn Error>>, err: &mut impl Write) -> u8 {
    match outcome {
        Ok(true) => ACCEPTED,
        Ok(false) => REJECTED,
        Err(error) => {
            let _ = writeln!(err, "error: {error}");
            UNREADABLE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticket_ledger=info,verify_transaction=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}
