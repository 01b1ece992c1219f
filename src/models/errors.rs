use crate::types::Magic;
use thiserror::Error;

/// Every way a log can fail to decode. None of these are retriable: the format
/// has no delimiters, so once an offset is wrong every later record is too.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Truncated input at byte offset [{offset}]: needed [{needed}] bytes but only [{available}] remain")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize
    },
    #[error("Unknown record type [{tag:#04x}] at byte offset [{offset}]")]
    UnknownRecordType {
        tag: u8,
        offset: usize
    },
    #[error("Format mismatch: expected magic [{expected}] but found [{found}]")]
    FormatMismatch {
        expected: String,
        found: String
    },
    #[error("Found [{remaining}] trailing bytes after the last declared record at byte offset [{offset}]")]
    TrailingBytes {
        offset: usize,
        remaining: usize
    }
}

impl DecodeError {
    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Self::TruncatedInput { offset, needed, available }
    }

    pub fn unknown_record_type(tag: u8, offset: usize) -> Self {
        Self::UnknownRecordType { tag, offset }
    }

    pub fn format_mismatch(expected: &Magic, found: &Magic) -> Self {
        Self::FormatMismatch {
            expected: String::from_utf8_lossy(expected).into_owned(),
            found: String::from_utf8_lossy(found).into_owned(),
        }
    }

    pub fn trailing_bytes(offset: usize, remaining: usize) -> Self {
        Self::TrailingBytes { offset, remaining }
    }

    /// Byte offset in the input where decoding stopped.
    pub fn offset(&self) -> usize {
        match self {
            Self::TruncatedInput { offset, .. } => *offset,
            Self::UnknownRecordType { offset, .. } => *offset,
            Self::FormatMismatch { .. } => 0,
            Self::TrailingBytes { offset, .. } => *offset
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("Amount total [{0}] cannot be represented as a decimal")]
    UnrepresentableAmount(f64),
    #[error("Numeric overflow while combining totals")]
    Overflow
}
