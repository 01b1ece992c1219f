use tracing::{debug, trace};

use crate::decoder::Cursor;
use crate::models::{DecodeError, Header, Record, RecordKind, BASE_RECORD_LENGTH, HEADER_LENGTH};
use crate::types::{RecordCount, Timestamp};

/// Reads the 9 byte preamble.
pub fn decode_header(cursor: &mut Cursor<'_>) -> Result<Header, DecodeError> {
    cursor.ensure(HEADER_LENGTH)?;

    let magic = cursor.read_array()?;
    let version = cursor.read_u8()?;
    let record_count = cursor.read_u32()?;

    Ok(Header::new(magic, version, record_count))
}

/// Reads a single record and returns it together with the number of bytes it
/// occupied (13, or 21 for debits and credits).
pub fn decode_record(cursor: &mut Cursor<'_>) -> Result<(Record, usize), DecodeError> {
    let start = cursor.offset();
    cursor.ensure(BASE_RECORD_LENGTH)?;

    let tag = cursor.read_u8()?;
    let timestamp = Timestamp::from_unix(cursor.read_u32()?);
    let user_id = cursor.read_u64()?;

    let kind = RecordKind::from_tag(tag)
        .ok_or_else(|| DecodeError::unknown_record_type(tag, start))?;

    let record = match kind {
        RecordKind::Debit => Record::Debit {
            timestamp,
            user_id,
            amount: kind.signed_amount(cursor.read_f64()?)
        },
        RecordKind::Credit => Record::Credit {
            timestamp,
            user_id,
            amount: kind.signed_amount(cursor.read_f64()?)
        },
        RecordKind::AutopayStart => Record::AutopayStart { timestamp, user_id },
        RecordKind::AutopayEnd => Record::AutopayEnd { timestamp, user_id }
    };

    Ok((record, cursor.offset() - start))
}

/// Walks exactly `count` records from the cursor, stopping at the first error.
pub fn decode_records(cursor: &mut Cursor<'_>, count: RecordCount) -> Result<Vec<Record>, DecodeError> {
    //NOTE: The count comes straight from the file, so never reserve more than the buffer could hold
    let capacity = usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(cursor.remaining() / BASE_RECORD_LENGTH);
    let mut records = Vec::with_capacity(capacity);

    for index in 0..count {
        let (record, consumed) = decode_record(cursor)?;
        trace!("Record [{index}]:[{}] for user [{}] consumed [{consumed}] bytes", record.kind(), record.user_id());
        records.push(record);
    }

    debug!("Decoded [{}] records ending at byte offset [{}]", records.len(), cursor.offset());

    Ok(records)
}
