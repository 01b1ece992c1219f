use super::{write_records, write_statistics, write_summary};

use anyhow::Result;

use crate::ledger::TransactionLog;
use crate::models::{Header, Record};
use crate::types::{Timestamp, UserId, MPS7_MAGIC};

const USER_ID: UserId = 61122968712918070;
const OTHER_USER_ID: UserId = 2456938384156277127;

fn create_log() -> TransactionLog {
    let timestamp = Timestamp::from_unix(1404993157);

    TransactionLog::new(Header::new(MPS7_MAGIC, 1, 4), vec![
        Record::Credit { timestamp: Timestamp::from_unix(1404993160), user_id: OTHER_USER_ID, amount: 10.5 },
        Record::Debit { timestamp, user_id: USER_ID, amount: -272.89 },
        Record::Credit { timestamp, user_id: USER_ID, amount: 272.89 },
        Record::AutopayStart { timestamp, user_id: OTHER_USER_ID },
    ])
}

fn render<F>(write: F) -> Result<String>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let mut buffer = Vec::new();
    write(&mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[test]
fn test_summary_answers_the_ledger_questions() -> Result<()> {
    let log = create_log();
    let output = render(|buffer| write_summary(buffer, &log, USER_ID))?;

    assert_eq!(output.lines().collect::<Vec<_>>(), vec![
        "Log Format: MPS7",
        "Version: 1",
        "Record Count: 4",
        "Total amount of debits = -272.89",
        "Total amount of credits = 283.39",
        "Number of Autopays started = 1",
        "Number of Autopays ended = 0",
        "Balance of user 61122968712918070 = 0.00",
    ]);

    Ok(())
}

#[test]
fn test_records_table_is_sorted_csv() -> Result<()> {
    let log = create_log();
    let output = render(|buffer| write_records(buffer, &log))?;

    assert_eq!(output.lines().collect::<Vec<_>>(), vec![
        "record_type,timestamp,user_id,amount",
        "Debit,2014-07-10 11:52:37,61122968712918070,-272.89",
        "Credit,2014-07-10 11:52:37,61122968712918070,272.89",
        "StartAutopay,2014-07-10 11:52:37,2456938384156277127,",
        "Credit,2014-07-10 11:52:40,2456938384156277127,10.5",
    ]);

    Ok(())
}

#[test]
fn test_statistics_report_amount_extremes() -> Result<()> {
    let log = create_log();
    let output = render(|buffer| write_statistics(buffer, &log))?;

    assert_eq!(output.lines().collect::<Vec<_>>(), vec![
        "Max Dollar: 272.89",
        "Min Dollar: -272.89",
        "user_id,records,max,min",
        "61122968712918070,2,272.89,-272.89",
        "2456938384156277127,2,10.5,10.5",
    ]);

    Ok(())
}

#[test]
fn test_statistics_without_amounts() -> Result<()> {
    let log = TransactionLog::new(Header::new(MPS7_MAGIC, 1, 1), vec![
        Record::AutopayEnd { timestamp: Timestamp::from_unix(0), user_id: 7 },
    ]);
    let output = render(|buffer| write_statistics(buffer, &log))?;

    assert_eq!(output.lines().collect::<Vec<_>>(), vec![
        "Max Dollar: n/a",
        "Min Dollar: n/a",
        "user_id,records,max,min",
        "7,1,,",
    ]);

    Ok(())
}

#[test]
fn test_summary_for_user_without_records_prints_unsigned_zero() -> Result<()> {
    let log = TransactionLog::new(Header::new(MPS7_MAGIC, 1, 1), vec![
        Record::AutopayStart { timestamp: Timestamp::from_unix(0), user_id: USER_ID },
    ]);
    let output = render(|buffer| write_summary(buffer, &log, OTHER_USER_ID))?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[3], "Total amount of debits = 0.00");
    assert_eq!(lines[4], "Total amount of credits = 0.00");
    assert_eq!(lines[7], "Balance of user 2456938384156277127 = 0.00");

    Ok(())
}
