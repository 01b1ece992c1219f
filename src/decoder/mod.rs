mod config;
mod cursor;
mod record_decoder;

use tracing::{info, warn};

use crate::ledger::TransactionLog;
use crate::models::DecodeError;
use crate::types::{Magic, MPS7_MAGIC};

pub use config::{DecoderConfig, TrailingBytesPolicy};
pub use cursor::Cursor;
pub use record_decoder::{decode_header, decode_record, decode_records};

/// Turns a complete MPS7 log held in memory into a [`TransactionLog`].
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn with_expected_magic(mut self, magic: Magic) -> Self {
        self.config.expected_magic = Some(magic);
        self
    }

    pub fn with_trailing_bytes(mut self, policy: TrailingBytesPolicy) -> Self {
        self.config.trailing_bytes = policy;
        self
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes the header and then every declared record.
    ///
    /// # Errors
    /// Returns the first `DecodeError` met:
    /// - `TruncatedInput` when the buffer ends inside the header or a record.
    /// - `UnknownRecordType` when a tag byte is not one of the four known kinds.
    /// - `FormatMismatch` when an expected magic is configured and differs.
    /// - `TrailingBytes` when bytes follow the last record and the policy rejects them.
    pub fn decode(&self, bytes: &[u8]) -> Result<TransactionLog, DecodeError> {
        let mut cursor = Cursor::new(bytes);
        let header = decode_header(&mut cursor)?;

        info!("Log format [{}] version [{}] declaring [{}] records", header.magic_text(), header.version, header.record_count);

        match self.config.expected_magic {
            Some(expected) if expected != header.magic => {
                return Err(DecodeError::format_mismatch(&expected, &header.magic))
            }
            None if header.magic != MPS7_MAGIC => {
                warn!("Unexpected log format [{}], decoding anyway", header.magic_text());
            }
            _ => {}
        }

        let records = decode_records(&mut cursor, header.record_count)?;

        if !cursor.is_exhausted() {
            let error = DecodeError::trailing_bytes(cursor.offset(), cursor.remaining());

            match self.config.trailing_bytes {
                TrailingBytesPolicy::Reject => return Err(error),
                TrailingBytesPolicy::Warn => warn!("{error}")
            }
        }

        Ok(TransactionLog::new(header, records))
    }
}
