use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

use crate::ledger::{AmountRange, UserSummary};
use crate::models::{Header, QueryError, Record, RecordKind};
use crate::types::UserId;

/// Totals are reported in cents.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// A fully decoded log: the header and its records in file order.
///
/// Nothing mutates a log once it is built, so every query borrows it and the
/// log can be shared freely between readers.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionLog {
    header: Header,
    records: Vec<Record>
}

impl TransactionLog {
    pub fn new(header: Header, records: Vec<Record>) -> Self {
        Self { header, records }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of the signed amounts of every `kind` record, optionally restricted
    /// to one user, rounded to two decimal places.
    ///
    /// Autopay kinds carry no amount and always total zero.
    pub fn total_amount(&self, kind: RecordKind, user_id: Option<UserId>) -> Result<Decimal, QueryError> {
        let total: f64 = self.records.iter()
            .filter(|record| record.kind() == kind)
            .filter(|record| user_id.is_none_or(|user_id| record.user_id() == user_id))
            .filter_map(Record::amount)
            .sum();

        round_amount(total)
    }

    pub fn count_by_kind(&self, kind: RecordKind) -> usize {
        self.records.iter()
            .filter(|record| record.kind() == kind)
            .count()
    }

    /// Credits minus debits for one user. Debits are stored negative, so the
    /// two totals are simply added.
    pub fn balance(&self, user_id: UserId) -> Result<Decimal, QueryError> {
        let credits = self.total_amount(RecordKind::Credit, Some(user_id))?;
        let debits = self.total_amount(RecordKind::Debit, Some(user_id))?;

        credits.checked_add(debits)
            .map(unsigned_zero)
            .ok_or(QueryError::Overflow)
    }

    /// Range of amounts over every debit and credit, `None` if there are none.
    pub fn amount_range(&self) -> Option<AmountRange> {
        self.records.iter()
            .filter_map(Record::amount)
            .fold(None, |range: Option<AmountRange>, amount| match range {
                Some(mut range) => {
                    range.include(amount);
                    Some(range)
                }
                None => Some(AmountRange::new(amount))
            })
    }

    pub fn user_summaries(&self) -> BTreeMap<UserId, UserSummary> {
        let mut summaries = BTreeMap::<UserId, UserSummary>::new();

        for record in &self.records {
            summaries.entry(record.user_id()).or_default().observe(record);
        }

        summaries
    }

    /// Records ordered by user, then timestamp. Ties keep file order.
    pub fn sorted_records(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        sorted.sort_by_key(|record| (record.user_id(), record.timestamp()));
        sorted
    }
}

/// Rounds the exact binary value of the float, half to even, so totals that
/// print as `x.xx5` round the way the stored double dictates. Zero is never
/// signed.
fn round_amount(value: f64) -> Result<Decimal, QueryError> {
    Decimal::from_f64_retain(value)
        .map(|decimal| decimal.round_dp_with_strategy(AMOUNT_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven))
        .map(unsigned_zero)
        .ok_or(QueryError::UnrepresentableAmount(value))
}

fn unsigned_zero(value: Decimal) -> Decimal {
    if value.is_zero() { Decimal::ZERO } else { value }
}
