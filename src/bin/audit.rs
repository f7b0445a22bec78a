//! FlashKV Log Audit
//!
//! Replays one or more record logs and checks that they hold the same state.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use flashkv::log::{LogRecovery, RecoveryResult};
use flashkv::memtable::MemTable;
use flashkv::ParseMode;
use tracing_subscriber::{fmt, EnvFilter};

/// FlashKV log audit
#[derive(Parser, Debug)]
#[command(name = "flashkv-audit")]
#[command(about = "Replay FlashKV record logs and compare their logical state")]
#[command(version)]
struct Args {
    /// Log files to audit; each one after the first is compared to the first
    #[arg(required = true)]
    logs: Vec<PathBuf>,

    /// Fail on lines without a separator instead of skipping them
    #[arg(long)]
    strict: bool,
}

fn report(path: &Path, table: &MemTable, result: &RecoveryResult) {
    println!(
        "{:<24} | keys: {:<6} | records: {:<8} | skipped: {:<4} | size: {:<10} bytes | crc32: {:08x}{}",
        path.display(),
        table.len(),
        result.records_recovered,
        result.lines_skipped,
        result.bytes_read,
        table.digest(),
        if result.unterminated_tail { " | torn tail" } else { "" },
    );
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,flashkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mode = if args.strict { ParseMode::Strict } else { ParseMode::Tolerant };

    tracing::info!("FlashKV audit v{}", flashkv::VERSION);

    let mut first: Option<(PathBuf, MemTable)> = None;
    let mut healthy = true;

    for path in &args.logs {
        let (table, result) = match LogRecovery::recover_existing(path, mode) {
            Ok(recovered) => recovered,
            Err(e) => {
                tracing::error!("Failed to replay {}: {}", path.display(), e);
                healthy = false;
                continue;
            }
        };

        report(path, &table, &result);

        match &first {
            None => first = Some((path.clone(), table)),
            Some((first_path, first_table)) => {
                if first_table == &table {
                    println!("   LOGICAL MATCH with {}", first_path.display());
                } else {
                    println!("   LOGICAL DIVERGENCE from {}", first_path.display());
                    println!("      differing keys: {:?}", first_table.differing_keys(&table));
                    healthy = false;
                }
            }
        }
    }

    if healthy {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
