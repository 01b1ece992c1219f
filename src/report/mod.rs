#[cfg(test)]
mod tests;

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::ledger::TransactionLog;
use crate::models::{Record, RecordKind};
use crate::types::{Timestamp, UserId};

/// A row of the record table. Autopay rows leave `amount` empty.
#[derive(Debug, Serialize)]
struct RecordRow {
    record_type: RecordKind,
    timestamp: Timestamp,
    user_id: UserId,
    amount: Option<f64>
}

impl From<&Record> for RecordRow {
    fn from(record: &Record) -> Self {
        Self {
            record_type: record.kind(),
            timestamp: record.timestamp(),
            user_id: record.user_id(),
            amount: record.amount()
        }
    }
}

#[derive(Debug, Serialize)]
struct UserRow {
    user_id: UserId,
    records: usize,
    max: Option<f64>,
    min: Option<f64>
}

/// Writes the header and the answers to the fixed ledger questions.
pub fn write_summary<W: Write>(mut writer: W, log: &TransactionLog, user_id: UserId) -> Result<()> {
    let header = log.header();

    writeln!(writer, "Log Format: {}", header.magic_text())?;
    writeln!(writer, "Version: {}", header.version)?;
    writeln!(writer, "Record Count: {}", header.record_count)?;
    writeln!(writer, "Total amount of debits = {:.2}", log.total_amount(RecordKind::Debit, None)?)?;
    writeln!(writer, "Total amount of credits = {:.2}", log.total_amount(RecordKind::Credit, None)?)?;
    writeln!(writer, "Number of Autopays started = {}", log.count_by_kind(RecordKind::AutopayStart))?;
    writeln!(writer, "Number of Autopays ended = {}", log.count_by_kind(RecordKind::AutopayEnd))?;
    writeln!(writer, "Balance of user {} = {:.2}", user_id, log.balance(user_id)?)?;

    Ok(())
}

/// Writes the overall amount range followed by a per-user CSV block.
pub fn write_statistics<W: Write>(mut writer: W, log: &TransactionLog) -> Result<()> {
    match log.amount_range() {
        Some(range) => {
            writeln!(writer, "Max Dollar: {:.2}", range.max)?;
            writeln!(writer, "Min Dollar: {:.2}", range.min)?;
        }
        None => {
            writeln!(writer, "Max Dollar: n/a")?;
            writeln!(writer, "Min Dollar: n/a")?;
        }
    }

    let mut table = csv::Writer::from_writer(&mut writer);

    for (user_id, summary) in log.user_summaries() {
        table.serialize(UserRow {
            user_id,
            records: summary.record_count,
            max: summary.max_amount(),
            min: summary.min_amount()
        })?;
    }

    table.flush()?;

    Ok(())
}

/// Writes every record as CSV, ordered by user then timestamp.
pub fn write_records<W: Write>(writer: W, log: &TransactionLog) -> Result<()> {
    let mut table = csv::Writer::from_writer(writer);

    for record in log.sorted_records() {
        table.serialize(RecordRow::from(record))?;
    }

    table.flush()?;

    Ok(())
}
