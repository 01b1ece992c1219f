//! Decoder and ledger queries for MPS7 binary transaction logs.
//!
//! A log is a 9 byte header followed by records whose length depends on their
//! leading tag byte. [`Decoder`] turns a complete buffer into a
//! [`TransactionLog`], which answers the totals, counts and balance queries.

pub mod decoder;
pub mod ledger;
pub mod models;
pub mod report;
pub mod types;

pub use decoder::{Decoder, DecoderConfig, TrailingBytesPolicy};
pub use ledger::TransactionLog;
pub use models::{DecodeError, Header, QueryError, Record, RecordKind};
