use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use mps7_ledger::report::{write_records, write_statistics, write_summary};
use mps7_ledger::types::UserId;
use mps7_ledger::{Decoder, TransactionLog};

/// The user whose balance is reported when none is given.
const DEFAULT_USER_ID: UserId = 2456938384156277127;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: mps7-ledger [input].dat [log_level:optional] [user_id:optional] > [report].txt");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        eprintln!("Default user_id: {DEFAULT_USER_ID}");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);
    let user_id = match args.get(3) {
        Some(value) => parse_user_id(value),
        None => DEFAULT_USER_ID
    };

    setup_logging(log_level);

    let bytes = std::fs::read(path)
        .with_context(|| format!("Unable to read transaction log at [{path}]"))?;

    let timer = Instant::now();
    let log = match Decoder::new().decode(&bytes) {
        Ok(log) => log,
        Err(decode_error) => {
            error!("Decoding stopped at byte offset [{}]", decode_error.offset());
            return Err(decode_error).with_context(|| format!("Unable to decode transaction log at [{path}]"));
        }
    };
    let duration = timer.elapsed();

    info!("Decoded [{}] records in: {duration:?}", log.len());

    write_report_to_stdout(&log, user_id)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn parse_user_id(value: &str) -> UserId {
    match value.trim().parse() {
        Ok(user_id) => user_id,
        Err(parse_error) => {
            eprintln!("Invalid user_id '{}': {parse_error}", value);
            exit(1);
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report goes to stdout, so logging stays on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(log: &TransactionLog, user_id: UserId) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    write_summary(&mut output, log, user_id)?;
    writeln!(output)?;
    write_statistics(&mut output, log)?;
    writeln!(output)?;
    write_records(&mut output, log)?;

    output.flush()?;

    Ok(())
}
