use std::io;

mod errors;
mod header;
mod record;

pub use errors::{DecodeError, QueryError};
pub use header::Header;
pub use record::{Record, RecordKind};

/// `magic (4) | version (1) | record_count (4)`
pub const HEADER_LENGTH: usize = 9;
/// `tag (1) | timestamp (4) | user_id (8)`, shared by every record.
pub const BASE_RECORD_LENGTH: usize = 13;
/// Trailing `f64` carried by debits and credits.
pub const AMOUNT_LENGTH: usize = 8;

/// Serializes a header followed by its records into a complete log.
pub fn encode_log(header: &Header, records: &[Record]) -> io::Result<Vec<u8>> {
    let body: usize = records.iter().map(Record::encoded_len).sum();
    let mut buffer = Vec::with_capacity(HEADER_LENGTH + body);

    header.encode_into(&mut buffer)?;

    for record in records {
        record.encode_into(&mut buffer)?;
    }

    Ok(buffer)
}
